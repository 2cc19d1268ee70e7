//! Contact records owned by the remote service.

use serde::{Deserialize, Deserializer, Serialize};

/// Service-assigned contact identifier.
pub type ContactId = i64;

/// A contact as returned by `/api/contacts`.
///
/// Older service builds name the identifier `contactId`; both spellings are
/// accepted. Text fields sent as `null` decode to empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(alias = "contactId")]
    pub id: ContactId,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
