use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("ai request failed: {0}")]
    Request(String),

    #[error("ai response parse error: {0}")]
    ParseError(String),

    #[error("ai bridge is not running")]
    BridgeClosed,
}

#[derive(Debug, thiserror::Error)]
pub enum DeskosError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("cascade step is zero".into());
        assert_eq!(
            err.to_string(),
            "config validation error: cascade step is zero"
        );
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(
            AiError::MissingApiKey.to_string(),
            "GEMINI_API_KEY is not set"
        );
        assert_eq!(
            AiError::Request("timeout".into()).to_string(),
            "ai request failed: timeout"
        );
        assert_eq!(
            AiError::BridgeClosed.to_string(),
            "ai bridge is not running"
        );
    }

    #[test]
    fn deskos_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DeskosError = config_err.into();
        assert!(matches!(err, DeskosError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn deskos_error_from_ai() {
        let ai_err = AiError::ParseError("no candidates".into());
        let err: DeskosError = ai_err.into();
        assert!(matches!(err, DeskosError::Ai(_)));
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn deskos_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DeskosError = io_err.into();
        assert!(matches!(err, DeskosError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn deskos_error_other_variants() {
        let err = DeskosError::Terminal("raw mode failed".into());
        assert_eq!(err.to_string(), "terminal error: raw mode failed");

        let err = DeskosError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
