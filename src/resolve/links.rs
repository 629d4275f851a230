//! `Expand` and `Bounded` for links, containers and every record type.

use async_trait::async_trait;

use super::{Bounded, Depth, Expand, RecordSource, Resolver};
use crate::model::*;
use crate::Result;

// ============================================================================
// Link: where depth is actually spent
// ============================================================================

#[async_trait]
impl<K: Linkable> Expand for Link<K> {
    async fn expand<S: RecordSource>(&mut self, resolver: &Resolver<S>, depth: Depth) -> Result<()> {
        if depth.is_exhausted() {
            if self.is_resolved() {
                tracing::trace!(kind = %K::KIND, id = %self.id(), "depth exhausted, collapsing");
            }
            self.collapse();
            return Ok(());
        }

        if let Link::Reference(doc) = self {
            let id = doc.id.clone();
            match resolver.fetch::<K>(&id).await? {
                Some(record) => *self = Link::Resolved(Box::new(record)),
                None => return resolver.missing(K::KIND, &id),
            }
        }

        if let Link::Resolved(record) = self {
            record.expand(resolver, depth.next()).await?;
        }
        Ok(())
    }
}

impl<K: Linkable> Bounded for Link<K> {
    fn truncate(&mut self, depth: Depth) {
        if depth.is_exhausted() {
            self.collapse();
        } else if let Link::Resolved(record) = self {
            record.truncate(depth.next());
        }
    }

    fn resolved_depth(&self) -> usize {
        match self {
            Link::Reference(_) => 0,
            Link::Resolved(record) => 1 + record.resolved_depth(),
        }
    }
}

// ============================================================================
// Containers
// ============================================================================

#[async_trait]
impl<T: Expand> Expand for Vec<T> {
    async fn expand<S: RecordSource>(&mut self, resolver: &Resolver<S>, depth: Depth) -> Result<()> {
        for item in self.iter_mut() {
            item.expand(resolver, depth).await?;
        }
        Ok(())
    }
}

impl<T: Bounded> Bounded for Vec<T> {
    fn truncate(&mut self, depth: Depth) {
        self.iter_mut().for_each(|item| item.truncate(depth));
    }

    fn resolved_depth(&self) -> usize {
        self.iter().map(Bounded::resolved_depth).max().unwrap_or(0)
    }
}

#[async_trait]
impl<T: Expand> Expand for RelatedMap<T> {
    async fn expand<S: RecordSource>(&mut self, resolver: &Resolver<S>, depth: Depth) -> Result<()> {
        for value in self.values_mut() {
            value.expand(resolver, depth).await?;
        }
        Ok(())
    }
}

impl<T: Bounded> Bounded for RelatedMap<T> {
    fn truncate(&mut self, depth: Depth) {
        self.values_mut().for_each(|value| value.truncate(depth));
    }

    fn resolved_depth(&self) -> usize {
        self.values().map(Bounded::resolved_depth).max().unwrap_or(0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// Implements `Expand` and `Bounded` for a struct by visiting the listed
/// fields, each of which must itself implement both traits.
///
/// Calls go through the trait paths: several fields are `Vec`s, whose
/// inherent `truncate(usize)` would otherwise win method resolution.
macro_rules! nested_links {
    ($($ty:ty { $($field:ident),* $(,)? })*) => {$(
        #[async_trait]
        #[allow(unused_variables)]
        impl Expand for $ty {
            async fn expand<S: RecordSource>(
                &mut self,
                resolver: &Resolver<S>,
                depth: Depth,
            ) -> Result<()> {
                $( Expand::expand(&mut self.$field, resolver, depth).await?; )*
                Ok(())
            }
        }

        #[allow(unused_variables)]
        impl Bounded for $ty {
            fn truncate(&mut self, depth: Depth) {
                $( Bounded::truncate(&mut self.$field, depth); )*
            }

            fn resolved_depth(&self) -> usize {
                let deepest = 0usize;
                $( let deepest = deepest.max(Bounded::resolved_depth(&self.$field)); )*
                deepest
            }
        }
    )*};
}

nested_links! {
    Person { institutions, contact_references }
    Institution { addresses }
    Address {}
    Contact {}
    Tag {}
    PlaceTuple { address }
    BaseEntity { persons, institutions }
    PhysicalEntity { base, place }
    DigitalEntity { base, tags, phy_objs }
    Annotation {}
    Entity { related_digital_entity, annotations }
    Compilation { entities, annotations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person_with_resolved_chain() -> Person {
        serde_json::from_value(json!({
            "_id": "p1",
            "prename": "Ada",
            "name": "Lovelace",
            "institutions": {
                "d1": [{
                    "_id": "i1",
                    "name": "Archive",
                    "addresses": {
                        "d1": {
                            "_id": "a1", "building": "", "number": "1", "street": "Main",
                            "postcode": "1000", "city": "Köln", "country": "DE"
                        }
                    }
                }]
            },
            "contact_references": { "d1": { "_id": "c1" } }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolved_depth_counts_longest_chain() {
        assert_eq!(person_with_resolved_chain().resolved_depth(), 2);
        assert_eq!(Person::new("p2", "Grace", "Hopper").resolved_depth(), 0);
    }

    #[test]
    fn test_truncate_collapses_below_depth() {
        let mut person = person_with_resolved_chain();
        person.truncate(Depth::new(1));
        assert_eq!(person.resolved_depth(), 1);

        let institution = person.institutions_for("d1")[0].as_resolved().unwrap();
        assert_eq!(institution.address_for("d1"), Some(&Link::reference("a1")));

        person.truncate(Depth::ZERO);
        assert_eq!(person.resolved_depth(), 0);
        assert_eq!(person.institutions_for("d1")[0].id().as_str(), "i1");
    }

    #[test]
    fn test_truncate_reaches_through_vec_fields() {
        let mut digital: DigitalEntity = serde_json::from_value(json!({
            "_id": "d1", "title": "Amphora scan", "description": "",
            "persons": [{ "_id": "p1", "prename": "Ada", "name": "Lovelace" }],
            "institutions": [{ "_id": "i1", "name": "Archive", "addresses": {} }],
            "type": "object", "licence": "CC0",
            "tags": [{ "_id": "t1", "value": "ceramics" }]
        }))
        .unwrap();
        assert_eq!(digital.resolved_depth(), 1);
        assert_eq!(digital.base.persons.len(), 1);

        digital.truncate(Depth::ZERO);
        assert_eq!(digital.resolved_depth(), 0);
        assert_eq!(digital.base.persons, vec![Link::reference("p1")]);
        assert_eq!(digital.base.institutions.len(), 1);
        assert_eq!(digital.tags, vec![Link::reference("t1")]);
    }

    #[test]
    fn test_truncate_is_noop_within_depth() {
        let mut person = person_with_resolved_chain();
        let before = person.clone();
        person.truncate(Depth::MAX);
        assert_eq!(person, before);
    }
}
