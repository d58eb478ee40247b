//! Contact record definition
//!
//! JSON shape:
//! `{"ID": 1, "Name": "", "Phone": "", "Address": "", "Email": "", "Website": "", "Notes": ""}`
//!
//! All text fields are optional on input. Missing keys and `null` both
//! decode as the empty string. The `ID` key is accepted but never trusted:
//! the store assigns and owns identifiers.

use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned contact identifier
pub type ContactId = u64;

/// A contact record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "ID")]
    pub id: ContactId,

    #[serde(rename = "Name", deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(rename = "Phone", deserialize_with = "null_as_empty")]
    pub phone: String,

    #[serde(rename = "Address", deserialize_with = "null_as_empty")]
    pub address: String,

    #[serde(rename = "Email", deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(rename = "Website", deserialize_with = "null_as_empty")]
    pub website: String,

    #[serde(rename = "Notes", deserialize_with = "null_as_empty")]
    pub notes: String,
}

impl Contact {
    /// Returns a copy of this contact carrying the given identifier
    pub fn with_id(&self, id: ContactId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    /// Overwrite every text field from `patch`.
    ///
    /// The identifier is left untouched; `patch.id` is ignored.
    pub fn overwrite_from(&mut self, patch: &Contact) {
        self.name = patch.name.clone();
        self.phone = patch.phone.clone();
        self.address = patch.address.clone();
        self.email = patch.email.clone();
        self.website = patch.website.clone();
        self.notes = patch.notes.clone();
    }

    /// True when every text field equals the corresponding field of `other`
    pub fn same_fields(&self, other: &Contact) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.address == other.address
            && self.email == other.email
            && self.website == other.website
            && self.notes == other.notes
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
