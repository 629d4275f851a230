//! Annotations placed on entities in the 3D viewer.
//!
//! Every point in an annotation (camera position/target, selector point and
//! normal) is a [`Vector3`] and is normalized on decode. The camera
//! perspective itself is optional.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DocumentId, Linkable, Vector3};
use crate::classify::RecordKind;

/// Creator, generator or last editor of an annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPerspective {
    #[serde(default)]
    pub camera_type: String,
    pub position: Vector3,
    pub target: Vector3,
    #[serde(default)]
    pub preview: String,
}

/// Annotation content. Keys beyond the known ones are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_perspective: Option<CameraPerspective>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub related_entity: DocumentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_compilation: Option<DocumentId>,
}

/// Surface point the annotation is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub reference_point: Vector3,
    pub reference_normal: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub source: Source,
    pub selector: Selector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub identifier: String,
    /// Ordering among an entity's annotations. Stored as a JSON number,
    /// which older clients wrote with a fractional part.
    #[serde(default)]
    pub ranking: f64,
    #[serde(default)]
    pub creator: Agent,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub generator: Agent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
    #[serde(default)]
    pub motivation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modification_date: Option<String>,
    #[serde(default)]
    pub last_modified_by: Agent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_x_on_view: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_y_on_view: Option<f64>,
    pub body: Body,
    pub target: Target,
}

impl Annotation {
    /// `created` parsed as RFC 3339; `None` when absent or unparseable.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created).ok()
    }

    /// Camera the annotation was placed from, if one was recorded.
    pub fn perspective(&self) -> Option<&CameraPerspective> {
        self.body.content.related_perspective.as_ref()
    }

    pub fn related_entity(&self) -> &DocumentId {
        &self.target.source.related_entity
    }
}

impl Linkable for Annotation {
    const KIND: RecordKind = RecordKind::Annotation;

    fn id(&self) -> &DocumentId { &self.id }
}
