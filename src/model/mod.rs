//! # Record Model
//!
//! Typed records for every collection of the platform. Any slot that may hold
//! either a bare identifier or a full record is a [`Link`].
//!
//! Design rule: wire names stay exactly as the document store writes them
//! (`_id`, `mediaType`, `contact_references`, `phyObjs`, ...).
//! This module is pure data: no I/O and no async.

pub mod document;
pub mod link;
pub mod related;
pub mod vector;
pub mod address;
pub mod person;
pub mod metadata;
pub mod user;
pub mod annotation;
pub mod entity;

pub use document::{Document, DocumentId, ID_FIELD};
pub use link::{Link, Linkable};
pub use related::RelatedMap;
pub use vector::{normalize_vector, Vector3};
pub use address::{Address, Contact};
pub use person::{Institution, Person};
pub use metadata::{
    BaseEntity, CreationTuple, DescriptionValueTuple, DigitalEntity, DimensionTuple,
    FileDescriptor, PhysicalEntity, PlaceTuple, Tag, TypeValueTuple,
};
pub use user::{Group, StrippedUserData, UserData};
pub use annotation::{
    Agent, Annotation, Body, CameraPerspective, Content, Selector, Source, Target,
};
pub use entity::{
    Background, CameraPositionInitial, Color, Compilation, CompilationPassword, DataSource,
    Entity, EntityLight, EntitySettings, Processed, Whitelist,
};
