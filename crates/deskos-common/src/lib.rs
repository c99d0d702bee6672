pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod toast;
pub mod types;

pub use actions::Action;
pub use errors::{AiError, ConfigError, DeskosError};
pub use events::{Event, EventBus};
pub use id::{new_request_id, AppId, WindowId};
pub use toast::{Toast, ToastLevel, ToastQueue};
pub use types::{Color, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, DeskosError>;
