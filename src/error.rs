//! Error types for the Team Password Manager client.

use thiserror::Error;

/// Errors returned by [`Client`](crate::client::Client) operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    #[error("invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no password named {name:?} in project {project:?}")]
    PasswordNotFound { name: String, project: String },

    #[error("no custom field with label {label:?}")]
    CustomFieldNotFound { label: String },
}

impl Error {
    /// True for failures of the request itself (bad URL, send failure,
    /// non-200 status), as opposed to decode or lookup failures. The
    /// status class of an HTTP failure is not distinguished any further.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Init(_)
                | Error::InvalidUrl { .. }
                | Error::Transport { .. }
                | Error::UnexpectedStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
