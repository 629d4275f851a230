//! End-to-end tests for payload classification.
//!
//! Each test takes an untyped payload as it would arrive from the document
//! store, runs the discriminator, and decodes it into a typed `Record`.

use heritage_model::{
    classify, is_address, is_annotation, is_compilation, is_contact, is_digital_entity,
    is_entity, is_group, is_institution, is_metadata_entity, is_person, is_physical_entity,
    is_resolved_entity, is_tag, is_unresolved, Error, Record, RecordKind, Shape,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// ============================================================================
// Helper: one realistic payload per record kind.
// ============================================================================

fn payloads() -> Vec<(RecordKind, Value)> {
    vec![
        (RecordKind::Tag, json!({ "_id": "t1", "value": "ceramics" })),
        (
            RecordKind::Address,
            json!({
                "_id": "a1", "building": "Main", "number": "1", "street": "Albertus-Magnus-Platz",
                "postcode": "50923", "city": "Köln", "country": "DE", "creation_date": 1_700_000_000_000_i64
            }),
        ),
        (
            RecordKind::Contact,
            json!({ "_id": "c1", "mail": "ada@example.org", "phonenumber": "+49 221 0", "note": "" }),
        ),
        (
            RecordKind::Person,
            json!({
                "_id": "p1", "prename": "Ada", "name": "Lovelace",
                "roles": { "d1": ["CREATOR"] },
                "institutions": { "d1": [{ "_id": "i1" }] },
                "contact_references": { "d1": { "_id": "c1" } }
            }),
        ),
        (
            RecordKind::Institution,
            json!({
                "_id": "i1", "name": "Archaeological Archive", "university": "",
                "roles": { "d1": ["RIGHTS_OWNER"] }, "notes": { "d1": "on loan" },
                "addresses": { "d1": { "_id": "a1" } }
            }),
        ),
        (
            RecordKind::Group,
            json!({
                "_id": "g1", "name": "Restorers",
                "creator": { "_id": "u1", "fullname": "Ada Lovelace", "username": "ada" },
                "owners": [], "members": [{ "_id": "u2", "fullname": "Grace Hopper", "username": "grace" }]
            }),
        ),
        (
            RecordKind::PhysicalEntity,
            json!({
                "_id": "ph1", "title": "Amphora", "description": "Attic amphora",
                "persons": [], "institutions": [{ "_id": "i1" }],
                "place": { "name": "Depot", "geopolarea": "Rhineland", "address": { "_id": "a1" } },
                "collection": "Antiquities"
            }),
        ),
        (
            RecordKind::DigitalEntity,
            json!({
                "_id": "d1", "title": "Amphora scan", "description": "Photogrammetry model",
                "persons": [{ "_id": "p1" }], "institutions": [],
                "type": "object", "licence": "CC-BY-4.0",
                "tags": [{ "_id": "t1" }], "phyObjs": [{ "_id": "ph1" }]
            }),
        ),
        (
            RecordKind::Entity,
            json!({
                "_id": "e1", "name": "Amphora", "mediaType": "model",
                "online": true, "finished": true,
                "relatedDigitalEntity": { "_id": "d1" },
                "annotations": {}
            }),
        ),
        (
            RecordKind::Compilation,
            json!({
                "_id": "co1", "name": "Greek pottery", "description": "A tour",
                "entities": { "e1": { "_id": "e1" } }, "password": false
            }),
        ),
        (
            RecordKind::Annotation,
            json!({
                "_id": "an1",
                "body": {
                    "type": "AnnotationBody",
                    "content": {
                        "type": "text", "title": "Handle", "description": "Repaired handle",
                        "relatedPerspective": {
                            "cameraType": "arcRotateCam",
                            "position": { "x": 0, "y": 1, "z": 5 },
                            "target": { "x": 0, "y": 0, "z": 0 },
                            "preview": ""
                        }
                    }
                },
                "target": {
                    "source": { "relatedEntity": "e1" },
                    "selector": {
                        "referencePoint": { "x": 0.1, "y": 0.2, "z": 0.3 },
                        "referenceNormal": { "x": 0, "y": 1, "z": 0 }
                    }
                }
            }),
        ),
    ]
}

// ============================================================================
// 1. Every realistic payload classifies as its own kind and decodes
// ============================================================================

#[test]
fn test_every_kind_classifies_and_decodes() {
    for (kind, payload) in payloads() {
        assert_eq!(classify(&payload).unwrap(), Shape::Resolved(kind), "classify {kind}");

        let record = Record::from_value(payload.clone()).unwrap();
        assert_eq!(record.kind(), Some(kind));
        assert_eq!(record.id().as_str(), payload["_id"].as_str().unwrap());
        assert!(!record.is_reference());
    }
}

// ============================================================================
// 2. References never satisfy a variant signature
// ============================================================================

#[test]
fn test_reference_excludes_every_variant() {
    let reference = json!({ "_id": "abc" });
    let predicates: [fn(&Value) -> bool; 13] = [
        is_group, is_tag, is_metadata_entity, is_compilation, is_entity, is_resolved_entity,
        is_annotation, is_digital_entity, is_physical_entity, is_person, is_institution,
        is_address, is_contact,
    ];

    assert!(is_unresolved(&reference));
    assert!(predicates.iter().all(|p| !p(&reference)));

    let record = Record::from_value(reference).unwrap();
    assert!(record.is_reference());
    assert_eq!(record.shape(), Shape::Reference);
}

#[test]
fn test_resolved_payloads_are_never_unresolved() {
    for (_, payload) in payloads() {
        assert!(!is_unresolved(&payload));
    }
}

// ============================================================================
// 3. Layered metadata signatures
// ============================================================================

#[test]
fn test_physical_is_metadata_but_not_digital() {
    let value = json!({
        "title": "Bust", "description": "", "persons": [], "institutions": [],
        "place": { "address": { "_id": "a1" } }, "collection": "Sculpture"
    });
    assert!(is_metadata_entity(&value));
    assert!(is_physical_entity(&value));
    assert!(!is_digital_entity(&value));
}

#[test]
fn test_digital_without_metadata_base_is_not_digital() {
    let value = json!({ "_id": "d9", "type": "object", "licence": "CC0" });
    assert!(!is_metadata_entity(&value));
    assert!(!is_digital_entity(&value));
}

// ============================================================================
// 4. Entity resolution check
// ============================================================================

#[test]
fn test_entity_resolution_check_follows_related_digital_entity() {
    let (_, mut entity) = payloads().into_iter().find(|(k, _)| *k == RecordKind::Entity).unwrap();
    assert!(!is_resolved_entity(&entity));
    match Record::from_value(entity.clone()).unwrap() {
        Record::Entity(e) => assert!(!e.is_fully_resolved()),
        other => panic!("expected entity, got {other:?}"),
    }

    let (_, digital) = payloads()
        .into_iter()
        .find(|(k, _)| *k == RecordKind::DigitalEntity)
        .unwrap();
    entity["relatedDigitalEntity"] = digital;
    assert!(is_resolved_entity(&entity));
    match Record::from_value(entity).unwrap() {
        Record::Entity(e) => {
            assert!(e.is_fully_resolved());
            let digital = e.related_digital_entity.as_resolved().unwrap();
            assert_eq!(digital.base.title, "Amphora scan");
        }
        other => panic!("expected entity, got {other:?}"),
    }
}

// ============================================================================
// 5. Failure modes
// ============================================================================

#[test]
fn test_unknown_shape_is_unclassified() {
    let err = Record::from_value(json!({ "_id": "x", "colour": "red" })).unwrap_err();
    assert!(matches!(err, Error::Unclassified { .. }), "got {err}");
}

#[test]
fn test_wrong_field_type_surfaces_as_json_error() {
    let err = Record::from_value(json!({ "_id": "t1", "value": 42 })).unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {err}");
}

#[test]
fn test_nested_partial_record_is_rejected() {
    let err = Record::from_value(json!({
        "_id": "p1", "prename": "Ada", "name": "Lovelace",
        "institutions": { "d1": [{ "_id": "i1", "name": "Archive" }] }
    }))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("addresses"), "unexpected error: {message}");
}

// ============================================================================
// 6. Records re-encode in their wire shape
// ============================================================================

#[test]
fn test_record_encodes_untagged() {
    let payload = json!({ "_id": "t1", "value": "ceramics" });
    let record = Record::from_value(payload.clone()).unwrap();
    assert_eq!(serde_json::to_value(&record).unwrap(), payload);

    let reference = Record::from_value(json!({ "_id": "abc" })).unwrap();
    assert_eq!(serde_json::to_value(&reference).unwrap(), json!({ "_id": "abc" }));
}
