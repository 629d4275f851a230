//! Metadata entities: the digital and physical objects being described.

use serde::{Deserialize, Serialize};

use super::{Address, DocumentId, Institution, Link, Linkable, Person};
use crate::classify::RecordKind;

/// Free-form external identifier, e.g. `{type: "doi", value: "10.1000/182"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeValueTuple {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTuple {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub name: String,
}

/// How a digital object was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationTuple {
    pub technique: String,
    pub program: String,
    pub equipment: String,
    pub date: String,
}

/// Link, citation or other annotated value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionValueTuple {
    pub description: String,
    pub value: String,
}

/// Where a physical object is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceTuple {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub geopolarea: String,
    pub address: Link<Address>,
}

/// Uploaded file descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub file_name: String,
    pub file_link: String,
    /// Bytes, as a JSON number; may arrive as `1024.0`.
    pub file_size: f64,
    pub file_format: String,
}

/// Tag attached to digital entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub value: String,
}

impl Linkable for Tag {
    const KIND: RecordKind = RecordKind::Tag;

    fn id(&self) -> &DocumentId { &self.id }
}

/// Fields shared by digital and physical entities. Never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEntity {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    #[serde(rename = "externalId", default)]
    pub external_id: Vec<TypeValueTuple>,
    #[serde(rename = "externalLink", default)]
    pub external_link: Vec<DescriptionValueTuple>,
    #[serde(rename = "biblioRefs", default)]
    pub biblio_refs: Vec<DescriptionValueTuple>,
    #[serde(default)]
    pub other: Vec<DescriptionValueTuple>,
    pub persons: Vec<Link<Person>>,
    pub institutions: Vec<Link<Institution>>,
    #[serde(default)]
    pub metadata_files: Vec<FileDescriptor>,
}

impl BaseEntity {
    pub fn new(id: impl Into<DocumentId>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            external_id: Vec::new(),
            external_link: Vec::new(),
            biblio_refs: Vec::new(),
            other: Vec::new(),
            persons: Vec::new(),
            institutions: Vec::new(),
            metadata_files: Vec::new(),
        }
    }

    /// Resolved persons holding `role` for this entity.
    pub fn persons_with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Person> + 'a {
        self.persons
            .iter()
            .filter_map(Link::as_resolved)
            .filter(move |p| p.roles_for(self.id.as_str()).iter().any(|r| r == role))
    }
}

/// A physical object held in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalEntity {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub place: PlaceTuple,
    pub collection: String,
}

impl Linkable for PhysicalEntity {
    const KIND: RecordKind = RecordKind::PhysicalEntity;

    fn id(&self) -> &DocumentId { &self.base.id }
}

/// A digital object (model, image, audio, ...) and its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalEntity {
    #[serde(flatten)]
    pub base: BaseEntity,
    #[serde(rename = "type")]
    pub kind: String,
    pub licence: String,
    #[serde(default)]
    pub discipline: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Link<Tag>>,
    #[serde(default)]
    pub dimensions: Vec<DimensionTuple>,
    #[serde(default)]
    pub creation: Vec<CreationTuple>,
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub objecttype: String,
    #[serde(rename = "phyObjs", default)]
    pub phy_objs: Vec<Link<PhysicalEntity>>,
}

impl Linkable for DigitalEntity {
    const KIND: RecordKind = RecordKind::DigitalEntity;

    fn id(&self) -> &DocumentId { &self.base.id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn digital_payload() -> serde_json::Value {
        json!({
            "_id": "d1",
            "title": "Amphora",
            "description": "Scan of an attic amphora",
            "externalId": [{ "type": "inventory", "value": "A-113" }],
            "persons": [{ "_id": "p1", "prename": "Ada", "name": "Lovelace", "roles": { "d1": ["CREATOR"] } }],
            "institutions": [{ "_id": "i1" }],
            "type": "object",
            "licence": "CC-BY-4.0",
            "tags": [{ "_id": "t1" }, { "_id": "t2", "value": "ceramics" }],
            "phyObjs": [{ "_id": "ph1" }]
        })
    }

    #[test]
    fn test_digital_entity_flattens_base() {
        let digital: DigitalEntity = serde_json::from_value(digital_payload()).unwrap();
        assert_eq!(digital.base.title, "Amphora");
        assert_eq!(digital.kind, "object");
        assert_eq!(digital.base.external_id[0].value, "A-113");
        assert_eq!(digital.tags.iter().filter(|t| t.is_resolved()).count(), 1);
        assert_eq!(digital.phy_objs[0].id().as_str(), "ph1");

        let back = serde_json::to_value(&digital).unwrap();
        assert_eq!(back["_id"], "d1");
        assert_eq!(back["phyObjs"][0], json!({ "_id": "ph1" }));
    }

    #[test]
    fn test_file_size_accepts_any_json_number() {
        let file: FileDescriptor = serde_json::from_value(json!({
            "file_name": "amphora.glb", "file_link": "models/amphora.glb",
            "file_size": 1024.0, "file_format": "glb"
        }))
        .unwrap();
        assert_eq!(file.file_size, 1024.0);

        let file: FileDescriptor = serde_json::from_value(json!({
            "file_name": "a", "file_link": "a", "file_size": 7, "file_format": "obj"
        }))
        .unwrap();
        assert_eq!(file.file_size, 7.0);
    }

    #[test]
    fn test_persons_with_role() {
        let digital: DigitalEntity = serde_json::from_value(digital_payload()).unwrap();
        let creators: Vec<_> = digital.base.persons_with_role("CREATOR").collect();
        assert_eq!(creators.len(), 1);
        assert_eq!(digital.base.persons_with_role("EDITOR").count(), 0);
    }
}
