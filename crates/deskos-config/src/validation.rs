//! Sanity checks over a parsed config. Validation failures are warnings at
//! load time, not fatal errors: the shell keeps the parsed values.

use deskos_common::{Color, ConfigError};

use crate::schema::DeskosConfig;

pub fn validate(config: &DeskosConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("theme.background", &config.theme.background),
        ("theme.taskbar", &config.theme.taskbar),
        ("theme.window_border", &config.theme.window_border),
        ("theme.focused_border", &config.theme.focused_border),
        ("theme.text", &config.theme.text),
    ] {
        if Color::from_hex(value).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "{name}: '{value}' is not a #rrggbb color"
            )));
        }
    }

    if config.desktop.icon_rows == 0 {
        return Err(ConfigError::ValidationError(
            "desktop.icon_rows must be at least 1".into(),
        ));
    }

    if config.desktop.cascade_step_x < 0 || config.desktop.cascade_step_y < 0 {
        return Err(ConfigError::ValidationError(
            "desktop.cascade_step must not be negative".into(),
        ));
    }

    if config.taskbar.clock_format.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "taskbar.clock_format must not be empty".into(),
        ));
    }

    if !(0.0..=2.0).contains(&config.ai.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "ai.temperature {} outside valid range 0.0-2.0",
            config.ai.temperature
        )));
    }

    if config.ai.max_output_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "ai.max_output_tokens must be at least 1".into(),
        ));
    }

    Ok(())
}
