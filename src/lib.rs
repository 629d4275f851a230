//! # heritage-model: Shared Records for Heritage Digitization
//!
//! Typed records for digital and physical objects, persons, institutions,
//! annotations, entities and compilations, plus the machinery that makes
//! them usable at an API boundary where nothing is tagged.
//!
//! ## Design Principles
//!
//! 1. **One link type**: every reference-or-record slot is a `Link<K>`
//! 2. **Classify once**: untyped payloads get an explicit `RecordKind` at the boundary
//! 3. **Bounded expansion**: resolution depth is a clamped integer, never a type ladder
//! 4. **Canonical vectors**: legacy `_x/_y/_z` points are normalized on decode
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heritage_model::{classify, Depth, MemorySource, Person, Resolver, Shape};
//! use serde_json::json;
//!
//! # async fn example() -> heritage_model::Result<()> {
//! let payload = json!({ "_id": "p1", "prename": "Ada", "name": "Lovelace" });
//! assert!(matches!(classify(&payload)?, Shape::Resolved(_)));
//!
//! let source = MemorySource::new();
//! source.insert(payload)?;
//!
//! let resolver = Resolver::new(source);
//! let person: Person = resolver.resolve("p1", Depth::new(2)).await?;
//! println!("{}", person.full_name());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod classify;
pub mod record;
pub mod resolve;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Address, Annotation, BaseEntity, Compilation, Contact, DigitalEntity, Document, DocumentId,
    Entity, Group, Institution, Link, Linkable, Person, PhysicalEntity, RelatedMap,
    StrippedUserData, Tag, UserData, Vector3, Whitelist,
};

// ============================================================================
// Re-exports: Classification
// ============================================================================

pub use classify::{
    are_documents_equal, classify, is_address, is_annotation, is_compilation, is_contact,
    is_digital_entity, is_entity, is_group, is_institution, is_metadata_entity, is_person,
    is_physical_entity, is_resolved_entity, is_tag, is_unresolved, RecordKind, Shape,
};
pub use record::Record;

// ============================================================================
// Re-exports: Resolution
// ============================================================================

pub use resolve::{
    Bounded, Depth, Expand, MemorySource, MissingPolicy, RecordSource, Resolver,
    ResolverConfig, MAX_DEPTH,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unclassified payload: no record signature matches keys [{keys}]")]
    Unclassified { keys: String },

    #[error("Signature mismatch: payload is not a {kind}, missing {missing:?}")]
    SignatureMismatch {
        kind: RecordKind,
        missing: smallvec::SmallVec<[&'static str; 8]>,
    },

    #[error("Malformed vector: {0}")]
    MalformedVector(String),

    #[error("Identity mismatch: requested {requested}, received {received}")]
    IdentityMismatch {
        requested: DocumentId,
        received: DocumentId,
    },

    #[error("Not found: {kind} {id}")]
    NotFound { kind: RecordKind, id: DocumentId },

    #[error("Source error: {0}")]
    SourceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
