//! Persons and institutions.
//!
//! Both carry their relationships as [`RelatedMap`]s keyed by the id of the
//! digital or physical entity the relationship was recorded for.

use serde::{Deserialize, Serialize};

use super::{Address, Contact, DocumentId, Link, Linkable, RelatedMap};
use crate::classify::RecordKind;

/// A person involved with one or more digital/physical entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub prename: String,
    pub name: String,
    #[serde(default)]
    pub roles: RelatedMap<Vec<String>>,
    #[serde(default)]
    pub institutions: RelatedMap<Vec<Link<Institution>>>,
    #[serde(default)]
    pub contact_references: RelatedMap<Link<Contact>>,
}

impl Person {
    pub fn new(id: impl Into<DocumentId>, prename: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prename: prename.into(),
            name: name.into(),
            roles: RelatedMap::new(),
            institutions: RelatedMap::new(),
            contact_references: RelatedMap::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.prename, self.name).trim().to_owned()
    }

    /// Roles recorded for `entity`; empty when no relation was recorded.
    pub fn roles_for(&self, entity: &str) -> &[String] {
        self.roles.get(entity).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn institutions_for(&self, entity: &str) -> &[Link<Institution>] {
        self.institutions.get(entity).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contact_for(&self, entity: &str) -> Option<&Link<Contact>> {
        self.contact_references.get(entity)
    }
}

impl Linkable for Person {
    const KIND: RecordKind = RecordKind::Person;

    fn id(&self) -> &DocumentId { &self.id }
}

/// An institution (museum, archive, university, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub roles: RelatedMap<Vec<String>>,
    #[serde(default)]
    pub notes: RelatedMap<String>,
    pub addresses: RelatedMap<Link<Address>>,
}

impl Institution {
    pub fn new(id: impl Into<DocumentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            university: String::new(),
            roles: RelatedMap::new(),
            notes: RelatedMap::new(),
            addresses: RelatedMap::new(),
        }
    }

    pub fn roles_for(&self, entity: &str) -> &[String] {
        self.roles.get(entity).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn note_for(&self, entity: &str) -> Option<&str> {
        self.notes.get(entity).map(String::as_str)
    }

    pub fn address_for(&self, entity: &str) -> Option<&Link<Address>> {
        self.addresses.get(entity)
    }
}

impl Linkable for Institution {
    const KIND: RecordKind = RecordKind::Institution;

    fn id(&self) -> &DocumentId { &self.id }
}
