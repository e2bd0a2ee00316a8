//! Client Configuration
//!
//! The backend location is fixed when the frontend is built:
//! `SERVER_URL=http://internal-alb/api trunk build`.

/// Backend origin used when `SERVER_URL` is not set at build time
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

/// Resource path appended to the base URL
pub const TRANSACTION_PATH: &str = "/transaction";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    /// Read `SERVER_URL` captured by the compiler
    pub fn from_build_env() -> Self {
        Self::from_server_url(option_env!("SERVER_URL"))
    }

    pub fn from_server_url(server_url: Option<&str>) -> Self {
        let base = server_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SERVER_URL);
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/transaction`
    pub fn transaction_url(&self) -> String {
        format!("{}{}", self.base_url, TRANSACTION_PATH)
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_url_trims_trailing_slash() {
        let config = ClientConfig::new("http://test-server.com/");
        assert_eq!(config.base_url(), "http://test-server.com");
        assert_eq!(config.transaction_url(), "http://test-server.com/transaction");
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ClientConfig::from_server_url(None).base_url(), DEFAULT_SERVER_URL);
        assert_eq!(ClientConfig::from_server_url(Some("  ")).base_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_server_url_from_build_env() {
        let config = ClientConfig::from_server_url(Some("http://alb.internal/api//"));
        assert_eq!(config.transaction_url(), "http://alb.internal/api/transaction");
    }
}
