//! A slot holding either a Reference or a Resolved record.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Document, DocumentId};
use crate::classify::{self, RecordKind};
use crate::resolve::{Bounded, Expand};
use crate::{Error, Result};

/// A record kind that can appear behind a [`Link`].
///
/// `KIND` selects the signature used to recognize a resolved payload and the
/// collection the resolver fetches from.
pub trait Linkable:
    Serialize + DeserializeOwned + Expand + Bounded + Send + Sync + 'static
{
    const KIND: RecordKind;

    fn id(&self) -> &DocumentId;
}

/// Reference-or-Resolved slot.
///
/// On the wire both forms are untagged objects. Decoding goes through the
/// classifier: a bare `{_id}` is a Reference, a payload matching `K`'s
/// signature is Resolved, anything else is a signature mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Link<K> {
    Reference(Document),
    Resolved(Box<K>),
}

impl<K: Linkable> Link<K> {
    pub fn reference(id: impl Into<DocumentId>) -> Self {
        Link::Reference(Document::new(id))
    }

    pub fn resolved(record: K) -> Self {
        Link::Resolved(Box::new(record))
    }

    /// Identifier of the linked record, identical in both forms.
    pub fn id(&self) -> &DocumentId {
        match self {
            Link::Reference(doc) => &doc.id,
            Link::Resolved(record) => record.id(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Link::Resolved(_))
    }

    pub fn as_resolved(&self) -> Option<&K> {
        match self {
            Link::Resolved(record) => Some(record),
            Link::Reference(_) => None,
        }
    }

    pub fn into_resolved(self) -> Option<K> {
        match self {
            Link::Resolved(record) => Some(*record),
            Link::Reference(_) => None,
        }
    }

    /// Reduce to a Reference, keeping the identifier.
    pub fn collapse(&mut self) {
        if let Link::Resolved(record) = self {
            *self = Link::Reference(Document::new(record.id()));
        }
    }

    /// Decode an untyped payload into a Reference or a Resolved `K`.
    pub fn from_value(value: Value) -> Result<Self> {
        if classify::is_unresolved(&value) {
            return Ok(Link::Reference(serde_json::from_value(value)?));
        }
        K::KIND.check(&value)?;
        Ok(Link::Resolved(Box::new(serde_json::from_value(value)?)))
    }
}

impl<K: Linkable> From<K> for Link<K> {
    fn from(record: K) -> Self {
        Link::resolved(record)
    }
}

impl<K: Serialize> Serialize for Link<K> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Link::Reference(doc) => doc.serialize(serializer),
            Link::Resolved(record) => record.serialize(serializer),
        }
    }
}

impl<'de, K: Linkable> Deserialize<'de> for Link<K> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Link::from_value(value).map_err(|err: Error| D::Error::custom(err))
    }
}
