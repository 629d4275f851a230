//! Entities (uploaded objects) and compilations (curated sets of entities).

use serde::{Deserialize, Serialize};

use super::{
    Annotation, DigitalEntity, DocumentId, FileDescriptor, Group, Link, Linkable, RelatedMap,
    StrippedUserData, Vector3,
};
use crate::classify::RecordKind;

/// Allow-list guarding an entity or compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Whitelist {
    pub enabled: bool,
    pub persons: Vec<StrippedUserData>,
    pub groups: Vec<Group>,
}

impl Whitelist {
    /// A disabled whitelist admits everyone.
    pub fn allows(&self, user: &DocumentId) -> bool {
        !self.enabled
            || self.persons.iter().any(|p| p.id == *user)
            || self.groups.iter().any(|g| g.includes(user))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityLight {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vector3,
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPositionInitial {
    pub position: Vector3,
    pub target: Vector3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub color: Color,
    pub effect: bool,
}

/// Viewer settings stored with an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntitySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector3>,
    pub preview: String,
    pub camera_position_initial: CameraPositionInitial,
    pub background: Background,
    pub lights: Vec<EntityLight>,
    pub rotation: Vector3,
    pub scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<Vector3>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSource {
    pub is_external: bool,
    pub service: String,
}

/// Processed file variants by quality level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Processed {
    pub low: String,
    pub medium: String,
    pub high: String,
    pub raw: String,
}

/// An uploaded object and the digital entity that describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_file: Option<String>,
    pub related_digital_entity: Link<DigitalEntity>,
    #[serde(default)]
    pub creator: StrippedUserData,
    pub online: bool,
    pub finished: bool,
    pub media_type: String,
    #[serde(default)]
    pub data_source: DataSource,
    #[serde(default)]
    pub processed: Processed,
    #[serde(default)]
    pub settings: EntitySettings,
    #[serde(default)]
    pub whitelist: Whitelist,
    #[serde(default)]
    pub annotations: RelatedMap<Link<Annotation>>,
}

impl Entity {
    /// True once the related digital entity is present in Resolved form.
    pub fn is_fully_resolved(&self) -> bool {
        self.related_digital_entity.is_resolved()
    }
}

impl Linkable for Entity {
    const KIND: RecordKind = RecordKind::Entity;

    fn id(&self) -> &DocumentId { &self.id }
}

/// Compilation password: either a flag or the password itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompilationPassword {
    Flag(bool),
    Secret(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compilation {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub creator: StrippedUserData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<CompilationPassword>,
    pub entities: RelatedMap<Link<Entity>>,
    #[serde(default)]
    pub whitelist: Whitelist,
    #[serde(default)]
    pub annotations: RelatedMap<Link<Annotation>>,
}

impl Compilation {
    pub fn is_password_protected(&self) -> bool {
        match &self.password {
            Some(CompilationPassword::Flag(flag)) => *flag,
            Some(CompilationPassword::Secret(secret)) => !secret.is_empty(),
            None => false,
        }
    }
}

impl Linkable for Compilation {
    const KIND: RecordKind = RecordKind::Compilation;

    fn id(&self) -> &DocumentId { &self.id }
}
