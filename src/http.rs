//! HTTP transport for Team Password Manager API calls.

use crate::error::{Error, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

/// HTTP client wrapper that performs one authenticated GET per call.
///
/// Connection reuse is whatever [`reqwest::Client`] provides by default;
/// there are no retries and no timeout beyond the default.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tpman/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Init)?;

        Ok(Self { client })
    }

    /// Perform an authenticated GET and return the raw response body.
    ///
    /// Exactly status 200 counts as success. Send failures and non-200
    /// statuses are logged here and propagated; the response body of a
    /// failed request is never read or logged (it may echo credentials).
    pub async fn get(&self, url: &str, auth_token: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .header(AUTHORIZATION, format!("Basic {auth_token}"))
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("GET {url} returned {status}");
            return Err(Error::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparsable_url() {
        let transport = HttpTransport::new().expect("client builds");
        let err = tokio_test::block_on(transport.get("not a url", "dG9rZW4="))
            .expect_err("parse should fail");
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(err.is_transport());
    }
}
