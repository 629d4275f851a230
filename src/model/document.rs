//! Document identity shared by every record.

use std::borrow::Borrow;

use serde::{Deserialize, Deserializer, Serialize};

/// Wire name of the identifier field.
pub const ID_FIELD: &str = "_id";

/// Opaque document identifier, unique within its collection.
///
/// Decodes from a plain string or from an extended-JSON ObjectId
/// (`{"$oid": "..."}`); always encodes as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(v: &str) -> Self { Self(v.to_owned()) }
}

impl From<String> for DocumentId {
    fn from(v: String) -> Self { Self(v) }
}

impl From<&DocumentId> for DocumentId {
    fn from(v: &DocumentId) -> Self { v.clone() }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Plain(String),
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawId::deserialize(deserializer)? {
            RawId::Plain(id) | RawId::ObjectId { oid: id } => Ok(Self(id)),
        }
    }
}

/// The Reference form of any record: the identifier and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: DocumentId,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self { id: id.into() }
    }
}
