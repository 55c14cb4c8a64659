use thiserror::Error;

/// Unified error type for gitversion-gen operations
#[derive(Error, Debug)]
pub enum VersionGenError {
    #[error("Shell execution failed: {0}")]
    Shell(String),

    #[error("Version info parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template formatting error: {0}")]
    Format(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitversion-gen
pub type Result<T> = std::result::Result<T, VersionGenError>;

impl VersionGenError {
    /// Create a shell execution error with context
    pub fn shell(msg: impl Into<String>) -> Self {
        VersionGenError::Shell(msg.into())
    }

    /// Create a template formatting error with context
    pub fn format(msg: impl Into<String>) -> Self {
        VersionGenError::Format(msg.into())
    }

    /// Create an artifact error with context
    pub fn artifact(msg: impl Into<String>) -> Self {
        VersionGenError::Artifact(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGenError::Config(msg.into())
    }
}
