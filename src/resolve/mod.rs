//! # Depth-Bounded Resolution
//!
//! Records form a graph: digital entities point at physical entities and
//! persons, persons at institutions and contacts, institutions at addresses.
//! Resolution walks that graph from one root, turning References into
//! Resolved records, with an explicit remaining [`Depth`] threaded through
//! every step.
//!
//! ```text
//! Resolved(K, D)
//!   └─ nested link ──► D > 0 ? Resolved(K', D - 1) : Reference(K')
//! ```
//!
//! Depth is clamped to [`MAX_DEPTH`] and to the resolver's configured maximum,
//! so expansion terminates on cyclic data without tracking visited ids.

mod depth;
mod links;
mod source;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::classify::RecordKind;
use crate::model::{DocumentId, Linkable};
use crate::{Error, Result};

pub use depth::{Depth, MAX_DEPTH};
pub use source::{MemorySource, RecordSource};

// ============================================================================
// Expansion traits
// ============================================================================

/// Expand nested links by fetching References from a source.
///
/// `depth` is the depth of the value being expanded: a record at depth `D`
/// resolves its nested links to depth `D - 1`, or collapses them to
/// References when `D` is zero.
#[async_trait]
pub trait Expand: Send {
    async fn expand<S: RecordSource>(&mut self, resolver: &Resolver<S>, depth: Depth) -> Result<()>;
}

/// Depth bookkeeping on already-decoded values; never fetches.
pub trait Bounded {
    /// Collapse every link nested deeper than `depth` allows.
    fn truncate(&mut self, depth: Depth);

    /// Length of the longest chain of Resolved links below this value.
    fn resolved_depth(&self) -> usize;
}

// ============================================================================
// Configuration
// ============================================================================

/// What to do when a Reference points at a record the source doesn't have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Leave the link as a Reference and log a warning.
    #[default]
    KeepReference,
    /// Abort the resolution with `Error::NotFound`.
    Fail,
}

/// Resolver settings.
///
/// ```json
/// { "max_depth": 3, "missing": "fail" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Upper bound applied on top of every requested depth.
    pub max_depth: Depth,
    pub missing: MissingPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: Depth::MAX,
            missing: MissingPolicy::KeepReference,
        }
    }
}

impl ResolverConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| Error::ConfigError(err.to_string()))
    }

    pub fn with_max_depth(mut self, depth: Depth) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_missing(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Drives depth-bounded resolution against a [`RecordSource`].
pub struct Resolver<S: RecordSource> {
    source: S,
    config: ResolverConfig,
}

impl<S: RecordSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ResolverConfig::default())
    }

    pub fn with_config(source: S, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Fetch the root record `id` and expand it to `depth`.
    ///
    /// # Errors
    /// `Error::NotFound` when the root is missing, whatever the policy.
    pub async fn resolve<K: Linkable>(&self, id: impl Into<DocumentId>, depth: Depth) -> Result<K> {
        let id = id.into();
        let depth = depth.min(self.config.max_depth);
        let mut record = self
            .fetch::<K>(&id)
            .await?
            .ok_or_else(|| Error::NotFound { kind: K::KIND, id: id.clone() })?;
        record.expand(self, depth).await?;
        tracing::debug!(kind = %K::KIND, %id, %depth, "resolved record");
        Ok(record)
    }

    /// Expand the nested links of a record that is already in hand.
    pub async fn expand<T: Expand>(&self, value: &mut T, depth: Depth) -> Result<()> {
        value.expand(self, depth.min(self.config.max_depth)).await
    }

    /// Fetch and decode one record without expanding it.
    ///
    /// # Errors
    /// `Error::SignatureMismatch` when the stored payload doesn't carry `K`'s
    /// signature; `Error::IdentityMismatch` when its `_id` differs from `id`.
    pub async fn fetch<K: Linkable>(&self, id: &DocumentId) -> Result<Option<K>> {
        tracing::debug!(kind = %K::KIND, %id, "fetching record");
        let Some(value) = self.source.fetch(K::KIND, id).await? else {
            return Ok(None);
        };
        K::KIND.check(&value)?;
        let record: K = serde_json::from_value(value)?;
        if record.id() != id {
            return Err(Error::IdentityMismatch {
                requested: id.clone(),
                received: record.id().clone(),
            });
        }
        Ok(Some(record))
    }

    /// Apply the missing-record policy.
    fn missing(&self, kind: RecordKind, id: &DocumentId) -> Result<()> {
        match self.config.missing {
            MissingPolicy::KeepReference => {
                tracing::warn!(%kind, %id, "dangling reference kept unresolved");
                Ok(())
            }
            MissingPolicy::Fail => Err(Error::NotFound { kind, id: id.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ResolverConfig::from_json("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.max_depth, Depth::MAX);
        assert_eq!(config.missing, MissingPolicy::KeepReference);
    }

    #[test]
    fn test_config_from_json_clamps_depth() {
        let config = ResolverConfig::from_json(r#"{ "max_depth": 99, "missing": "fail" }"#).unwrap();
        assert_eq!(config.max_depth, Depth::MAX);
        assert_eq!(config.missing, MissingPolicy::Fail);
    }

    #[test]
    fn test_config_rejects_bad_policy() {
        let err = ResolverConfig::from_json(r#"{ "missing": "guess" }"#).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
