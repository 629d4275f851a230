//! Record sources: the lookup service the resolver expands References with.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::classify::{classify, RecordKind, Shape};
use crate::model::{DocumentId, Linkable, ID_FIELD};
use crate::{Error, Result};

/// Identifier-to-record lookup.
///
/// Returns the raw payload of the record with `id` in `kind`'s collection,
/// or `None` when no such record exists. Transport failures should surface
/// as `Error::SourceError`.
#[async_trait]
pub trait RecordSource: Send + Sync + 'static {
    async fn fetch(&self, kind: RecordKind, id: &DocumentId) -> Result<Option<Value>>;
}

#[async_trait]
impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    async fn fetch(&self, kind: RecordKind, id: &DocumentId) -> Result<Option<Value>> {
        (**self).fetch(kind, id).await
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// In-memory record source for tests and embedding.
///
/// Payloads are stored as given, keyed by kind and id. Nested links inside a
/// stored payload are kept in whatever form they were inserted.
pub struct MemorySource {
    records: RwLock<HashMap<(RecordKind, DocumentId), Value>>,
    fetches: AtomicU64,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            fetches: AtomicU64::new(0),
        }
    }

    /// Store a payload under the kind the classifier assigns it.
    ///
    /// # Errors
    /// Rejects bare references and unclassifiable payloads.
    pub fn insert(&self, value: Value) -> Result<(RecordKind, DocumentId)> {
        match classify(&value)? {
            Shape::Resolved(kind) => {
                let id = self.insert_as(kind, value)?;
                Ok((kind, id))
            }
            Shape::Reference => Err(Error::SourceError(
                "cannot store a bare reference as a record".into(),
            )),
        }
    }

    /// Store a payload under an explicit kind, bypassing classification.
    pub fn insert_as(&self, kind: RecordKind, value: Value) -> Result<DocumentId> {
        let id: DocumentId = value
            .get(ID_FIELD)
            .cloned()
            .map(serde_json::from_value)
            .transpose()?
            .ok_or_else(|| Error::SourceError(format!("{kind} payload has no `{ID_FIELD}`")))?;
        tracing::trace!(%kind, %id, "storing record");
        self.records.write().insert((kind, id.clone()), value);
        Ok(id)
    }

    /// Store a typed record.
    pub fn insert_record<K: Linkable + Serialize>(&self, record: &K) -> Result<DocumentId> {
        self.insert_as(K::KIND, serde_json::to_value(record)?)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Number of `fetch` calls served so far, hits and misses alike.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn fetch(&self, kind: RecordKind, id: &DocumentId) -> Result<Option<Value>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().get(&(kind, id.clone())).cloned())
    }
}
