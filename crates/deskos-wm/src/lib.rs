pub mod drag;
pub mod manager;
pub mod registry;
pub mod taskbar;
pub mod window;

pub use drag::DragController;
pub use manager::WindowManager;
pub use registry::{AppManifest, AppRegistry};
pub use window::WindowRecord;
