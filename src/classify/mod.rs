//! # Runtime Type Discriminator
//!
//! Payloads reach this crate untyped and untagged. The predicates here decide,
//! from key presence alone, whether a payload is a bare Reference and which
//! record kind it is. They are total: any input, including non-objects,
//! yields `false` rather than an error.
//!
//! `classify` turns the predicates into an explicit [`RecordKind`] so callers
//! branch on a tag instead of re-deriving signatures.
//!
//! ## Check order
//!
//! Narrow signatures are tried before broad ones. Digital and physical
//! entities sit behind the metadata-entity signature; `Tag` (a lone `value`
//! key) goes last because nearly anything could carry it.

pub mod signature;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::ID_FIELD;
use crate::{Error, Result};
use signature::Signature;

// ============================================================================
// Record kinds
// ============================================================================

/// Explicit tag for every classifiable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Annotation,
    Compilation,
    Entity,
    Group,
    DigitalEntity,
    PhysicalEntity,
    Person,
    Institution,
    Address,
    Contact,
    Tag,
}

impl RecordKind {
    /// Kinds in classification order.
    pub const CLASSIFY_ORDER: [RecordKind; 11] = [
        RecordKind::Annotation,
        RecordKind::Compilation,
        RecordKind::Entity,
        RecordKind::Group,
        RecordKind::DigitalEntity,
        RecordKind::PhysicalEntity,
        RecordKind::Person,
        RecordKind::Institution,
        RecordKind::Address,
        RecordKind::Contact,
        RecordKind::Tag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Annotation => "annotation",
            RecordKind::Compilation => "compilation",
            RecordKind::Entity => "entity",
            RecordKind::Group => "group",
            RecordKind::DigitalEntity => "digitalentity",
            RecordKind::PhysicalEntity => "physicalentity",
            RecordKind::Person => "person",
            RecordKind::Institution => "institution",
            RecordKind::Address => "address",
            RecordKind::Contact => "contact",
            RecordKind::Tag => "tag",
        }
    }

    pub fn signature(self) -> &'static Signature {
        match self {
            RecordKind::Annotation => &signature::ANNOTATION,
            RecordKind::Compilation => &signature::COMPILATION,
            RecordKind::Entity => &signature::ENTITY,
            RecordKind::Group => &signature::GROUP,
            RecordKind::DigitalEntity => &signature::DIGITAL_ENTITY,
            RecordKind::PhysicalEntity => &signature::PHYSICAL_ENTITY,
            RecordKind::Person => &signature::PERSON,
            RecordKind::Institution => &signature::INSTITUTION,
            RecordKind::Address => &signature::ADDRESS,
            RecordKind::Contact => &signature::CONTACT,
            RecordKind::Tag => &signature::TAG,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        self.signature().matches(value)
    }

    /// Like [`RecordKind::matches`], but reports the missing keys.
    pub fn check(self, value: &Value) -> Result<()> {
        let missing = self.signature().missing(value);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::SignatureMismatch { kind: self, missing })
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "kind", rename_all = "camelCase")]
pub enum Shape {
    Reference,
    Resolved(RecordKind),
}

// ============================================================================
// Classification
// ============================================================================

/// Tag a payload as a Reference or as a Resolved record of one kind.
///
/// # Errors
/// `Error::Unclassified` when the payload is neither a bare reference nor
/// matches any record signature.
pub fn classify(value: &Value) -> Result<Shape> {
    if is_unresolved(value) {
        return Ok(Shape::Reference);
    }
    if let Some(kind) = RecordKind::CLASSIFY_ORDER.into_iter().find(|k| k.matches(value)) {
        return Ok(Shape::Resolved(kind));
    }

    let keys = match value.as_object() {
        Some(obj) => obj.keys().map(String::as_str).collect::<Vec<_>>().join(", "),
        None => format!("<{}>", json_type(value)),
    };
    tracing::debug!(keys = %keys, "payload matched no record signature");
    Err(Error::Unclassified { keys })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// True iff the payload's only key is `_id`.
pub fn is_unresolved(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.len() == 1 && obj.contains_key(ID_FIELD))
}

pub fn is_group(value: &Value) -> bool { signature::GROUP.matches(value) }

pub fn is_tag(value: &Value) -> bool { signature::TAG.matches(value) }

/// Shared precondition of [`is_digital_entity`] and [`is_physical_entity`].
pub fn is_metadata_entity(value: &Value) -> bool { signature::METADATA_ENTITY.matches(value) }

pub fn is_compilation(value: &Value) -> bool { signature::COMPILATION.matches(value) }

pub fn is_entity(value: &Value) -> bool { signature::ENTITY.matches(value) }

/// True iff the entity's `relatedDigitalEntity` carries a `description`,
/// i.e. the digital entity arrived resolved. References yield `false`.
pub fn is_resolved_entity(value: &Value) -> bool {
    value
        .get("relatedDigitalEntity")
        .and_then(|digital| digital.as_object())
        .is_some_and(|digital| digital.contains_key("description"))
}

pub fn is_annotation(value: &Value) -> bool { signature::ANNOTATION.matches(value) }

pub fn is_digital_entity(value: &Value) -> bool { signature::DIGITAL_ENTITY.matches(value) }

pub fn is_physical_entity(value: &Value) -> bool { signature::PHYSICAL_ENTITY.matches(value) }

pub fn is_person(value: &Value) -> bool { signature::PERSON.matches(value) }

pub fn is_institution(value: &Value) -> bool { signature::INSTITUTION.matches(value) }

pub fn is_address(value: &Value) -> bool { signature::ADDRESS.matches(value) }

pub fn is_contact(value: &Value) -> bool { signature::CONTACT.matches(value) }

/// True iff both payloads carry the same `_id`. Plain and ObjectId-shaped
/// identifiers compare by their string value.
pub fn are_documents_equal(a: &Value, b: &Value) -> bool {
    match (document_id(a), document_id(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn document_id(value: &Value) -> Option<&str> {
    match value.get(ID_FIELD)? {
        Value::String(id) => Some(id.as_str()),
        other => other.get("$oid")?.as_str(),
    }
}
