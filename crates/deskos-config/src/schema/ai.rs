//! Settings for the remote text-generation service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Master switch; `--no-ai` on the command line also disables it.
    pub enabled: bool,
    pub model: String,
    pub max_output_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-2.0-flash".into(),
            max_output_tokens: 1024,
            temperature: 0.2,
        }
    }
}
