//! Password resources and the typed operations over them.
//!
//! Field names mirror the v4 JSON API; entries are plain value objects,
//! decoded fresh on every fetch and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::client::Client;
use crate::error::{Error, Result};

/// Number of custom field slots on every password entry.
pub const CUSTOM_FIELD_SLOTS: usize = 10;

/// Project a password entry belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u32,
    pub name: String,
}

/// One label/data pair from a password's fixed set of custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub label: String,
    pub data: String,
}

/// One credential record in the vault.
///
/// List payloads omit some of the fields the single-entry payload carries,
/// so every field defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Password {
    pub id: u32,
    pub name: String,
    pub project: Project,
    pub notes_snippet: String,
    /// Comma-separated, exactly as the service returns it.
    pub tags: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub expiry_date: String,
    pub expiry_status: i32,
    pub archived: bool,
    /// Deployed servers have been seen emitting this key with a stray `§`
    /// appended; accept both spellings on decode, emit the clean one.
    #[serde(alias = "favourite§")]
    pub favourite: bool,
    pub num_files: u32,
    pub locked: bool,
    pub external_sharing: bool,
    pub updated_on: String,

    pub custom_field1: CustomField,
    pub custom_field2: CustomField,
    pub custom_field3: CustomField,
    pub custom_field4: CustomField,
    pub custom_field5: CustomField,
    pub custom_field6: CustomField,
    pub custom_field7: CustomField,
    pub custom_field8: CustomField,
    pub custom_field9: CustomField,
    pub custom_field10: CustomField,
}

/// Entries in the order the service returned them; no sort key is implied.
pub type PasswordList = Vec<Password>;

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

impl Password {
    /// All ten custom field slots in slot order, including empty ones.
    pub fn custom_fields(&self) -> [&CustomField; CUSTOM_FIELD_SLOTS] {
        [
            &self.custom_field1,
            &self.custom_field2,
            &self.custom_field3,
            &self.custom_field4,
            &self.custom_field5,
            &self.custom_field6,
            &self.custom_field7,
            &self.custom_field8,
            &self.custom_field9,
            &self.custom_field10,
        ]
    }

    /// Data of the first slot (in slot order) whose label equals `label`,
    /// compared case-sensitively.
    pub fn custom_field(&self, label: &str) -> Result<&str> {
        self.custom_fields()
            .into_iter()
            .find(|field| field.label == label)
            .map(|field| field.data.as_str())
            .ok_or_else(|| Error::CustomFieldNotFound {
                label: label.to_string(),
            })
    }
}

impl Client {
    /// Fetch every password entry visible to the credential.
    pub async fn list_passwords(&self) -> Result<PasswordList> {
        let body = self.get("passwords.json").await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a single password entry by id.
    pub async fn get_password(&self, id: u32) -> Result<Password> {
        let body = self.get(&format!("passwords/{id}.json")).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Find an entry by exact name and project name, then fetch its full
    /// record by id (the list payload is not complete enough to return).
    ///
    /// When several entries share the same (name, project) pair the scan
    /// keeps the *last* one in list order. Existing deployments rely on
    /// that tie-break, so it is kept deliberately.
    pub async fn get_password_by_name(&self, name: &str, project: &str) -> Result<Password> {
        let entries = self.list_passwords().await?;

        let mut found = None;
        for entry in &entries {
            if entry.name == name && entry.project.name == project {
                found = Some(entry.id);
            }
        }

        match found {
            Some(id) => self.get_password(id).await,
            None => Err(Error::PasswordNotFound {
                name: name.to_string(),
                project: project.to_string(),
            }),
        }
    }
}
