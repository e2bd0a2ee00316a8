//! Error Types
//!
//! Failures a request to the transaction endpoint can end in.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection, DNS or CORS failure before any response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived with a non-2xx status
    #[error("Unexpected status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request body could not be serialised
    #[error("Encode error: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        assert_eq!(
            ApiError::Encode("bad body".to_string()).to_string(),
            "Encode error: bad body"
        );
        assert_eq!(ApiError::Decode("eof".to_string()).to_string(), "Parse error: eof");
        assert_eq!(ApiError::Status { status: 502 }.to_string(), "Unexpected status 502");
    }
}
