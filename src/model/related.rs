//! Per-relationship data keyed by the related entity's id.

use std::borrow::Borrow;

use hashbrown::HashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DocumentId;

/// Association from a digital/physical entity id to whatever data connects
/// the owning record to that entity (roles, notes, nested links).
///
/// An absent key means no relation was recorded. It is never an error, and
/// the map is not expected to cover every entity known elsewhere. A `null`
/// value on the wire decodes as an absent key.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedMap<T>(HashMap<DocumentId, T>);

impl<T> RelatedMap<T> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get<Q>(&self, entity: &Q) -> Option<&T>
    where
        DocumentId: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.get(entity)
    }

    pub fn get_mut<Q>(&mut self, entity: &Q) -> Option<&mut T>
    where
        DocumentId: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.get_mut(entity)
    }

    pub fn contains<Q>(&self, entity: &Q) -> bool
    where
        DocumentId: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.contains_key(entity)
    }

    pub fn insert(&mut self, entity: impl Into<DocumentId>, value: T) -> Option<T> {
        self.0.insert(entity.into(), value)
    }

    pub fn remove<Q>(&mut self, entity: &Q) -> Option<T>
    where
        DocumentId: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.remove(entity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &DocumentId> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.0.values_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &T)> {
        self.0.iter()
    }
}

impl<T> Default for RelatedMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<DocumentId>, T> FromIterator<(K, T)> for RelatedMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<T: Serialize> Serialize for RelatedMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RelatedMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<DocumentId, Option<T>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_key_is_no_relation() {
        let roles: RelatedMap<Vec<String>> =
            serde_json::from_value(json!({ "d1": ["CREATOR", "EDITOR"] })).unwrap();
        assert_eq!(roles.get("d1").map(Vec::len), Some(2));
        assert!(roles.get("d2").is_none());
    }

    #[test]
    fn test_null_values_are_dropped() {
        let notes: RelatedMap<String> =
            serde_json::from_value(json!({ "d1": "on loan", "d2": null })).unwrap();
        assert_eq!(notes.len(), 1);
        assert!(!notes.contains("d2"));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a: RelatedMap<&str> = [("d1", "x"), ("d2", "y")].into_iter().collect();
        let b: RelatedMap<&str> = [("d2", "y"), ("d1", "x")].into_iter().collect();
        assert_eq!(a, b);
    }
}
