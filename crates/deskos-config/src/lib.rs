//! DeskOS configuration system.
//!
//! TOML-based configuration with serde defaults on every section, so a
//! partial (or absent) config file works out of the box.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DeskosConfig;

use deskos_common::ConfigError;

/// Load config from the platform default path
/// (`~/.config/deskos/config.toml` on Linux).
///
/// A missing file is not an error: a default config is written there and
/// defaults are returned.
pub fn load_config() -> Result<DeskosConfig, ConfigError> {
    loader::load_default()
}
