use thiserror::Error;

/// Top-level error type for the Foreman system.
///
/// Subsystem crates define their own error types and implement
/// `From<ForemanError>` so that `?` works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ForemanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ForemanError {
    fn from(err: toml::de::Error) -> Self {
        ForemanError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ForemanError {
    fn from(err: toml::ser::Error) -> Self {
        ForemanError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ForemanError {
    fn from(err: serde_json::Error) -> Self {
        ForemanError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Foreman operations.
pub type Result<T> = std::result::Result<T, ForemanError>;
