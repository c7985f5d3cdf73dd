//! 失败分类：把适配器错误归类为用户可理解的原因。
//!
//! Failure classification for adapter errors.
//!
//! Both the credential probe and the text-to-speech tool need to tell the user
//! *why* a synthesis call failed. The classification prefers a structured HTTP
//! status when the transport produced one and only falls back to scanning the
//! lowercased error text for well-known tokens when it did not.
//!
//! | Class          | Status      | Text markers                       |
//! |----------------|-------------|------------------------------------|
//! | `Unauthorized` | 401         | `401`, `unauthorized`              |
//! | `Forbidden`    | 403         | `403`, `forbidden`                 |
//! | `NotFound`     | 404         | `404`, `not found`                 |
//! | `RateLimited`  | 429         | `429`, `rate limit`                |
//! | `ServerError`  | 5xx         | `500`, `internal server error`     |
//! | `Timeout`      | 408, 504    | `timeout`                          |
//! | `Unknown`      | other       | none of the above                  |
//!
//! The credential probe uses a shorter text chain ([`FailureClass::for_credentials`]):
//! only the 401, 403, 404 and timeout markers are recognised, so a rate-limit or
//! server message that mentions a timeout still counts as a timeout.
//!
//! ## Example
//!
//! ```rust
//! use edgetts_plugin::error_code::FailureClass;
//!
//! assert_eq!(FailureClass::from_message("HTTP 401: Unauthorized"), FailureClass::Unauthorized);
//! assert_eq!(FailureClass::from_http_status(429), FailureClass::RateLimited);
//! ```

use crate::Error;
use std::fmt;

/// Why an outbound synthesis call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Invalid, expired, or missing API key
    Unauthorized,
    /// Valid key without permission for the endpoint
    Forbidden,
    /// The endpoint does not exist (usually a wrong `base_url`)
    NotFound,
    /// Request rate limit exceeded
    RateLimited,
    /// Internal server error on the provider side
    ServerError,
    /// Request timed out before a response arrived
    Timeout,
    /// Could not be classified
    Unknown,
}

impl FailureClass {
    /// Returns the standard name (e.g., `"unauthorized"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Maps an HTTP status code to a failure class.
    ///
    /// Statuses without a dedicated class return `FailureClass::Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Classifies free-form error text by the tokens it contains.
    ///
    /// The first matching rule wins, in table order. This is a heuristic: any
    /// message mentioning e.g. "404" is treated as a missing endpoint.
    pub fn from_message(message: &str) -> Self {
        let msg = message.to_lowercase();
        let has = |tokens: &[&str]| tokens.iter().any(|t| msg.contains(t));
        if has(&["401", "unauthorized"]) {
            Self::Unauthorized
        } else if has(&["403", "forbidden"]) {
            Self::Forbidden
        } else if has(&["404", "not found"]) {
            Self::NotFound
        } else if has(&["429", "rate limit"]) {
            Self::RateLimited
        } else if has(&["500", "internal server error"]) {
            Self::ServerError
        } else if has(&["timeout", "timed out"]) {
            Self::Timeout
        } else {
            Self::Unknown
        }
    }

    /// Text chain used for credential probes: 401, 403, 404, then timeout.
    pub fn from_credential_message(message: &str) -> Self {
        let msg = message.to_lowercase();
        let has = |tokens: &[&str]| tokens.iter().any(|t| msg.contains(t));
        if has(&["401", "unauthorized"]) {
            Self::Unauthorized
        } else if has(&["403", "forbidden"]) {
            Self::Forbidden
        } else if has(&["404", "not found"]) {
            Self::NotFound
        } else if has(&["timeout", "timed out"]) {
            Self::Timeout
        } else {
            Self::Unknown
        }
    }

    /// Classifies an adapter error.
    ///
    /// A structured status or timeout flag from the transport decides first;
    /// the error text is only consulted when those say nothing.
    pub fn of(error: &Error) -> Self {
        Self::structured(error).unwrap_or_else(|| Self::from_message(&error.to_string()))
    }

    /// Classifies a failed credential probe, falling back to
    /// [`from_credential_message`](Self::from_credential_message).
    pub fn for_credentials(error: &Error) -> Self {
        Self::structured(error).unwrap_or_else(|| Self::from_credential_message(&error.to_string()))
    }

    fn structured(error: &Error) -> Option<Self> {
        if error.is_timeout() {
            return Some(Self::Timeout);
        }
        match error.status().map(Self::from_http_status) {
            Some(Self::Unknown) | None => None,
            class => class,
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
