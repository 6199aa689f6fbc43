//! Team Password Manager client.
//!
//! Combines the HTTP transport with the configured API root and credential.
//! The typed password operations live in [`crate::passwords`].

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpTransport;

/// Path suffix of the v4 JSON API, appended verbatim to the base URL.
const API_PATH: &str = "/index.php/api/v4/";

/// Client for one Team Password Manager instance.
///
/// Holds no mutable state after construction and is cheap to clone, so a
/// single value can serve any number of concurrent callers. Each call opens
/// its own request; there is no session state between calls.
#[derive(Clone)]
pub struct Client {
    http: HttpTransport,
    api_url: String,
    auth_token: String,
}

impl Client {
    /// Create a client from connection settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpTransport::new()?,
            api_url: format!("{}{}", config.base_url, API_PATH),
            auth_token: config.auth_token.clone(),
        })
    }

    /// API root this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Authenticated GET against an endpoint under the API root.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.api_url, endpoint);
        self.http.get(&url, &self.auth_token).await
    }
}
