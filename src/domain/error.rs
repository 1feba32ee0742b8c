use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Source error: {0}")]
    Source(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Cannot write workbook to {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Lookup(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Config(s.to_string())
    }
}
