//! Read-only client for the Team Password Manager HTTP API.
//!
//! Authenticates with a pre-encoded HTTP Basic token and exposes the v4
//! password endpoints: list all entries, fetch one by id, find one by
//! (name, project), and look up the ten per-entry custom fields by label.
//! There is no write surface, no caching, and no retry policy.
//!
//! # Example
//!
//! ```ignore
//! use tpman::{Client, ClientConfig};
//!
//! async fn example() -> tpman::Result<()> {
//!     let config = ClientConfig::new("http://localhost/teampasswordmanager", "a2F0OnBhc3N3b3Jk");
//!     let client = Client::new(&config)?;
//!     let password = client.get_password_by_name("postgres", "stage.devops").await?;
//!     println!("{}", password.custom_field("service_username")?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod passwords;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use passwords::{CustomField, Password, PasswordList, Project, CUSTOM_FIELD_SLOTS};
