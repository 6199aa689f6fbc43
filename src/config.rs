//! Client configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for one Team Password Manager instance.
///
/// `auth_token` is the already base64-encoded `user:password` pair that is
/// sent verbatim in the `Authorization: Basic` header; the client never
/// encodes credentials itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the instance, without a trailing slash.
    pub base_url: String,
    /// Pre-encoded HTTP Basic credential.
    pub auth_token: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Resolve a config from explicit values with environment fallback
    /// (flag > `TPM_BASE_URL` / `TPM_AUTH_TOKEN`). Returns `None` when
    /// either setting is missing from both sources.
    pub fn resolve(base_url: Option<String>, auth_token: Option<String>) -> Option<Self> {
        let base_url = base_url.or_else(|| std::env::var("TPM_BASE_URL").ok())?;
        let auth_token = auth_token.or_else(|| std::env::var("TPM_AUTH_TOKEN").ok())?;
        Some(Self {
            base_url,
            auth_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_win() {
        let config = ClientConfig::resolve(
            Some("http://vault.internal".to_string()),
            Some("dG9rZW4=".to_string()),
        )
        .expect("both values supplied");
        assert_eq!(config.base_url, "http://vault.internal");
        assert_eq!(config.auth_token, "dG9rZW4=");
    }
}
