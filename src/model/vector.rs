//! Canonical 3D points, tolerant of the legacy `_x/_y/_z` encoding.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

const CANONICAL_KEYS: [&str; 3] = ["x", "y", "z"];
const LEGACY_KEYS: [&str; 3] = ["_x", "_y", "_z"];

/// 3D point in canonical `{x, y, z}` form.
///
/// Decodes from either encoding; always encodes canonically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self { Self { x, y, z } }
}

/// Normalize an untyped point into canonical form.
///
/// When `_x` is present the legacy keys are read and canonical keys are
/// ignored. A point missing any key of its encoding is malformed.
pub fn normalize_vector(value: &Value) -> Result<Vector3> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::MalformedVector(format!("expected an object, got {value}")))?;

    let keys = if obj.contains_key(LEGACY_KEYS[0]) { LEGACY_KEYS } else { CANONICAL_KEYS };
    Ok(Vector3 {
        x: component(obj, keys[0])?,
        y: component(obj, keys[1])?,
        z: component(obj, keys[2])?,
    })
}

fn component(obj: &Map<String, Value>, key: &str) -> Result<f64> {
    match obj.get(key) {
        Some(v) => v
            .as_f64()
            .ok_or_else(|| Error::MalformedVector(format!("`{key}` is not a number: {v}"))),
        None => Err(Error::MalformedVector(format!("missing `{key}`"))),
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        normalize_vector(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_canonical_passes_through() {
        let v = normalize_vector(&json!({ "x": 1.5, "y": -2, "z": 0 })).unwrap();
        assert_eq!(v, Vector3::new(1.5, -2.0, 0.0));
    }

    #[test]
    fn test_legacy_is_renamed() {
        let v = normalize_vector(&json!({ "_x": 1, "_y": 2, "_z": 3 })).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(serde_json::to_value(v).unwrap(), json!({ "x": 1.0, "y": 2.0, "z": 3.0 }));
    }

    #[test]
    fn test_legacy_wins_over_canonical() {
        let v = normalize_vector(&json!({ "_x": 1, "_y": 2, "_z": 3, "x": 9, "y": 9, "z": 9 }))
            .unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_partial_legacy_is_malformed() {
        let err = normalize_vector(&json!({ "_x": 1, "y": 2, "z": 3 })).unwrap_err();
        assert!(matches!(err, Error::MalformedVector(msg) if msg.contains("_y")));
    }

    #[test]
    fn test_non_object_is_malformed() {
        assert!(normalize_vector(&json!([1, 2, 3])).is_err());
        assert!(serde_json::from_value::<Vector3>(json!("0,0,0")).is_err());
    }

    proptest! {
        #[test]
        fn prop_encodings_agree(x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e6f64..1e6) {
            let legacy = normalize_vector(&json!({ "_x": x, "_y": y, "_z": z })).unwrap();
            let canonical = normalize_vector(&json!({ "x": x, "y": y, "z": z })).unwrap();
            prop_assert_eq!(legacy, canonical);
            prop_assert_eq!(canonical, Vector3::new(x, y, z));
        }
    }
}
