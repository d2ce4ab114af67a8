//! Error types for the ldaudit CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ldaudit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Unknown action '{0}'. Valid actions: clear, list")]
    UnknownCacheAction(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Remediation line shown under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Api(err) => err.hint(),
            _ => None,
        }
    }
}

/// Errors talking to the LaunchDarkly API.
///
/// HTTP-level failures carry the response status; connection-level failures
/// (timeout, DNS, refused) carry only a message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },
}

impl ApiError {
    /// HTTP status code, `None` for network failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network { .. } => None,
        }
    }

    /// User-facing guidance for the statuses we can say something useful about.
    pub fn hint(&self) -> Option<&'static str> {
        match self.status() {
            Some(401) => Some("Check your LD_API_KEY - it may be invalid or expired"),
            Some(404) => Some("Verify the project name is correct"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let detail = with_causes(&err);
        let message = if err.is_timeout() {
            format!("Request timed out: {}", detail)
        } else if err.is_connect() {
            format!("Failed to connect to API: {}", detail)
        } else {
            detail
        };
        ApiError::Network { message }
    }
}

/// `err` followed by each distinct message in its `source()` chain.
///
/// reqwest keeps the actual failure (connection refused, DNS, TLS) in the
/// chain rather than in its own `Display`.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "LD_API_KEY not found in environment variables. \
         Set it in your .env file or export it: export LD_API_KEY=your-key"
    )]
    MissingApiKey,
}

/// Cache write/clear errors. Reads never produce these.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoCacheDir,

    #[error("Cannot cache flags for an empty project name")]
    EmptyProject,

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Cache serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let err = ApiError::Http {
            status: 500,
            message: "Internal error".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("Internal error"));
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network {
            message: "Connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("Connection refused"));
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_unauthorized_hint() {
        let err = ApiError::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(err.hint().unwrap().contains("LD_API_KEY"));
    }

    #[test]
    fn test_not_found_hint() {
        let err = ApiError::Http {
            status: 404,
            message: "Unknown project".to_string(),
        };
        assert!(err.hint().unwrap().contains("project name"));
    }

    #[test]
    fn test_error_hint_passes_through_api_error() {
        let err: Error = ApiError::Http {
            status: 401,
            message: "nope".to_string(),
        }
        .into();
        assert!(err.hint().is_some());

        let err = Error::UnknownCacheAction("purge".to_string());
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = ConfigError::MissingApiKey;
        let msg = err.to_string();
        assert!(msg.contains("LD_API_KEY"));
        assert!(msg.contains("export"));
    }

    #[test]
    fn test_unknown_cache_action_lists_choices() {
        let err = Error::UnknownCacheAction("purge".to_string());
        let msg = err.to_string();
        assert!(msg.contains("purge"));
        assert!(msg.contains("clear, list"));
    }

    #[test]
    fn test_directory_not_found_message() {
        let err = Error::DirectoryNotFound(PathBuf::from("/nonexistent/directory"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_error_from_api_error() {
        let api_err = ApiError::Network {
            message: "dns".to_string(),
        };
        let err: Error = api_err.into();

        match err {
            Error::Api(ApiError::Network { .. }) => (),
            _ => panic!("Expected Error::Api(ApiError::Network)"),
        }
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_with_causes_appends_source_chain() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));

        assert_eq!(with_causes(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_with_causes_without_source() {
        let err = std::io::Error::other("plain failure");
        assert_eq!(with_causes(&err), "plain failure");
    }
}
