//! A classified payload as one explicitly tagged value.

use serde::Serialize;
use serde_json::Value;

use crate::classify::{classify, RecordKind, Shape};
use crate::model::*;
use crate::Result;

/// Any payload the discriminator recognizes, decoded into its typed form.
///
/// Encodes untagged, exactly as the payload arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Reference(Document),
    Annotation(Box<Annotation>),
    Compilation(Box<Compilation>),
    Entity(Box<Entity>),
    Group(Group),
    DigitalEntity(Box<DigitalEntity>),
    PhysicalEntity(Box<PhysicalEntity>),
    Person(Person),
    Institution(Institution),
    Address(Address),
    Contact(Contact),
    Tag(Tag),
}

impl Record {
    /// Classify `value`, then decode it as the matching kind.
    ///
    /// # Errors
    /// `Error::Unclassified` for unrecognized shapes; `Error::Json` when the
    /// signature matched but a field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        let record = match classify(&value)? {
            Shape::Reference => Record::Reference(serde_json::from_value(value)?),
            Shape::Resolved(kind) => match kind {
                RecordKind::Annotation => Record::Annotation(serde_json::from_value(value)?),
                RecordKind::Compilation => Record::Compilation(serde_json::from_value(value)?),
                RecordKind::Entity => Record::Entity(serde_json::from_value(value)?),
                RecordKind::Group => Record::Group(serde_json::from_value(value)?),
                RecordKind::DigitalEntity => Record::DigitalEntity(serde_json::from_value(value)?),
                RecordKind::PhysicalEntity => {
                    Record::PhysicalEntity(serde_json::from_value(value)?)
                }
                RecordKind::Person => Record::Person(serde_json::from_value(value)?),
                RecordKind::Institution => Record::Institution(serde_json::from_value(value)?),
                RecordKind::Address => Record::Address(serde_json::from_value(value)?),
                RecordKind::Contact => Record::Contact(serde_json::from_value(value)?),
                RecordKind::Tag => Record::Tag(serde_json::from_value(value)?),
            },
        };
        Ok(record)
    }

    /// `None` for a bare reference.
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Record::Reference(_) => None,
            Record::Annotation(_) => Some(RecordKind::Annotation),
            Record::Compilation(_) => Some(RecordKind::Compilation),
            Record::Entity(_) => Some(RecordKind::Entity),
            Record::Group(_) => Some(RecordKind::Group),
            Record::DigitalEntity(_) => Some(RecordKind::DigitalEntity),
            Record::PhysicalEntity(_) => Some(RecordKind::PhysicalEntity),
            Record::Person(_) => Some(RecordKind::Person),
            Record::Institution(_) => Some(RecordKind::Institution),
            Record::Address(_) => Some(RecordKind::Address),
            Record::Contact(_) => Some(RecordKind::Contact),
            Record::Tag(_) => Some(RecordKind::Tag),
        }
    }

    pub fn shape(&self) -> Shape {
        self.kind().map_or(Shape::Reference, Shape::Resolved)
    }

    pub fn id(&self) -> &DocumentId {
        match self {
            Record::Reference(doc) => &doc.id,
            Record::Annotation(r) => &r.id,
            Record::Compilation(r) => &r.id,
            Record::Entity(r) => &r.id,
            Record::Group(r) => &r.id,
            Record::DigitalEntity(r) => &r.base.id,
            Record::PhysicalEntity(r) => &r.base.id,
            Record::Person(r) => &r.id,
            Record::Institution(r) => &r.id,
            Record::Address(r) => &r.id,
            Record::Contact(r) => &r.id,
            Record::Tag(r) => &r.id,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Record::Reference(_))
    }
}

impl TryFrom<Value> for Record {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        Record::from_value(value)
    }
}
