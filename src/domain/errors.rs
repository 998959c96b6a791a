//! Error types for the outer surfaces (configuration, I/O, command line)
//!
//! The dialog engine itself never fails: unresolved names and malformed
//! commands degrade to no-ops. Only loading configuration, writing reports and
//! parsing process arguments can produce a `ShowboxError`.

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum ShowboxError {
    /// IO error (config file, report stream)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command line
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, ShowboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShowboxError::Usage("unknown flag --foo".to_string());
        assert_eq!(err.to_string(), "Usage error: unknown flag --foo");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ShowboxError = io.into();
        assert!(matches!(err, ShowboxError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
