use crate::error_code::FailureClass;
use thiserror::Error;

/// Why a set of credentials was rejected at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("EdgeTTS {0} must not be empty")]
    MissingField(&'static str),

    #[error("invalid API base_url '{0}': must start with http:// or https://")]
    InvalidUrlFormat(String),

    #[error("EdgeTTS API returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("EdgeTTS API key is invalid or expired")]
    Unauthorized,

    #[error("EdgeTTS API key lacks permission")]
    Forbidden,

    #[error("EdgeTTS API endpoint not found, check the base_url setting")]
    EndpointNotFound,

    #[error("EdgeTTS API connection timed out, check the network connection")]
    Timeout,

    #[error("EdgeTTS API connection test failed: {0}")]
    Unknown(String),
}

impl CredentialError {
    /// Map a probe failure to a credential error; classes without a dedicated
    /// reason keep the raw detail.
    pub fn from_probe_failure(class: FailureClass, detail: impl Into<String>) -> Self {
        match class {
            FailureClass::Unauthorized => Self::Unauthorized,
            FailureClass::Forbidden => Self::Forbidden,
            FailureClass::NotFound => Self::EndpointNotFound,
            FailureClass::Timeout => Self::Timeout,
            FailureClass::RateLimited | FailureClass::ServerError | FailureClass::Unknown => {
                Self::Unknown(detail.into())
            }
        }
    }
}
