//! Error types for the IRIS gateway

use iris_http_client::HttpError;
use thiserror::Error;

/// Result type for IRIS operations
pub type Result<T> = std::result::Result<T, Error>;

/// IRIS Error
#[derive(Debug, Error)]
pub enum Error {
    /// The API could not be reached or its response could not be read
    #[error(transparent)]
    Transport(#[from] HttpError),
    /// Request body could not be encoded
    #[error("Could not encode request: {0}")]
    Serialization(#[source] serde_json::Error),
    /// The API answered, and rejected the request
    #[error("{0}")]
    Domain(String),
}

impl Error {
    /// Whether the API itself rejected the request
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_display_is_verbatim() {
        let error = Error::Domain("duplicate alias".to_string());
        assert_eq!(error.to_string(), "duplicate alias");
        assert!(error.is_domain());
    }

    #[test]
    fn test_transport_display_is_transparent() {
        let error: Error = HttpError::Timeout.into();
        assert_eq!(error.to_string(), "Request timeout");
        assert!(!error.is_domain());
    }

    #[test]
    fn test_serialization_keeps_source() {
        let cause = serde_json::from_str::<u8>("x").expect_err("not a number");
        let error = Error::Serialization(cause);

        assert!(error.to_string().starts_with("Could not encode request: "));
        assert!(std::error::Error::source(&error).is_some());
    }
}
