//! The hosted applications: opaque content surfaces behind a factory.
//!
//! The window manager never inspects application behavior. Each app is a
//! state model implementing [`ContentSurface`]; the shell creates one per
//! window through the [`ContentFactory`] and keeps it in a
//! [`ContentRegistry`] keyed by window id.

pub mod browser;
pub mod calculator;
pub mod editor;
pub mod manifests;
pub mod notepad;
pub mod paint;
pub mod surface;
pub mod terminal;
mod textbuf;
pub mod video;

pub use manifests::builtin_manifests;
pub use surface::{ContentFactory, ContentRegistry, ContentSurface};
