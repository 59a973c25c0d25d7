use {
    crate::constants::{DEFAULT_BASE_URL, DEFAULT_IDENTIFIER},
    derive_builder::Builder,
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

/// Configuration for the signing client: the shared secret, the client
/// identifier sent in the `X-Hmac-Authorization` header, and the base URL of
/// the streaming endpoint.
///
/// ClientConfig structs are immutable. Use [`ClientConfigBuilder`] to
/// programmatically construct one.
#[derive(Builder, Clone)]
#[non_exhaustive]
pub struct ClientConfig {
    /// The secret shared with the verifying server, used as the HMAC key.
    #[builder(setter(into))]
    shared_secret: Vec<u8>,

    /// The identifier naming this client in the authorization header.
    #[builder(setter(into), default = "DEFAULT_IDENTIFIER.to_string()")]
    identifier: String,

    /// Base URL of the streaming endpoint, without a trailing slash.
    #[builder(setter(into), default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl ClientConfig {
    /// Create a [ClientConfigBuilder] to construct a [ClientConfig].
    #[inline]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Retrieve the shared secret bytes.
    #[inline]
    pub fn shared_secret(&self) -> &[u8] {
        &self.shared_secret
    }

    /// Retrieve the client identifier.
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Retrieve the endpoint base URL.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for ClientConfig {
    // The shared secret must never end up in logs.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ClientConfig")
            .field("shared_secret", &"<redacted>")
            .field("identifier", &self.identifier)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;

    #[test_log::test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder().shared_secret(b"rubbish".to_vec()).build().unwrap();
        assert_eq!(config.shared_secret(), b"rubbish");
        assert_eq!(config.identifier(), "testscript");
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    #[test_log::test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .shared_secret(b"s3cret".to_vec())
            .identifier("deployment-7")
            .base_url("https://media.example.com")
            .build()
            .unwrap();
        assert_eq!(config.identifier(), "deployment-7");
        assert_eq!(config.base_url(), "https://media.example.com");
    }

    #[test_log::test]
    fn test_secret_missing_is_an_error() {
        assert!(ClientConfig::builder().build().is_err());
    }

    #[test_log::test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::builder().shared_secret(b"rubbish".to_vec()).build().unwrap();
        let printed = format!("{:?}", config);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("rubbish"));
    }
}
