//! Gemini API client configuration.

use deskos_common::AiError;

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
            max_output_tokens: 1024,
            temperature: 0.2,
        }
    }

    /// Read the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AiError::MissingApiKey),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = GeminiConfig::new("secret")
            .with_model("gemini-2.5-flash")
            .with_max_output_tokens(256)
            .with_temperature(0.7);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.max_output_tokens, 256);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("super-secret-key");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("[REDACTED]"));
    }
}
