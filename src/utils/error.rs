use crate::domain::model::CloudType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LbError {
    #[error("{operation} failed: {message}")]
    ApiError {
        operation: &'static str,
        code: Option<String>,
        message: String,
        status: Option<u16>,
    },

    #[error("Could not resolve cloud credentials: {message}")]
    CredentialsError { message: String },

    #[error("Cloud type '{cloud}' is not supported")]
    UnsupportedProvider { cloud: CloudType },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LbError {
    /// Provider error code, when the error came back from the provider API.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            LbError::ApiError { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LbError>;

/// Reports whether `err` is a provider API error carrying error code `code`.
pub fn is_api_error(err: Option<&LbError>, code: &str) -> bool {
    match err {
        Some(err) => err.api_code() == Some(code),
        None => false,
    }
}
