//! Error types for banking API client operations.
//!
//! Query encoding itself never fails; these errors cover the surrounding
//! concerns: parsing wire enumerations, configuration and URL assembly.

use thiserror::Error;

/// Main error type for client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A wire literal did not match any variant of an API enumeration
    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnumValue {
        /// Name of the enumeration being parsed
        kind: &'static str,
        /// The rejected literal
        value: String,
    },

    /// Invalid endpoint or request URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
