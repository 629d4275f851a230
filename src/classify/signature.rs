//! Structural signatures: required key sets that identify untagged records.
//!
//! A key is present when it exists on the object, whatever its value
//! (`null` included). Signatures only test presence; a record that happens
//! to carry a superset of another kind's keys matches both.

use serde_json::Value;
use smallvec::SmallVec;

/// Required key set, optionally layered on a broader signature.
#[derive(Debug)]
pub struct Signature {
    pub base: Option<&'static Signature>,
    pub fields: &'static [&'static str],
}

impl Signature {
    /// True iff `value` is an object carrying every required key, including
    /// the base signature's keys.
    pub fn matches(&self, value: &Value) -> bool {
        let Some(obj) = value.as_object() else { return false };
        self.base.is_none_or(|base| base.matches(value))
            && self.fields.iter().all(|f| obj.contains_key(*f))
    }

    /// Required keys absent from `value`, base signature first.
    /// A non-object payload misses all of them.
    pub fn missing(&self, value: &Value) -> SmallVec<[&'static str; 8]> {
        let mut missing = self.base.map(|base| base.missing(value)).unwrap_or_default();
        let obj = value.as_object();
        missing.extend(
            self.fields
                .iter()
                .copied()
                .filter(|f| !obj.is_some_and(|o| o.contains_key(*f))),
        );
        missing
    }
}

pub static TAG: Signature = Signature { base: None, fields: &["value"] };

pub static GROUP: Signature = Signature {
    base: None,
    fields: &["name", "creator", "owners", "members"],
};

/// Shared by digital and physical entities; never classified on its own.
pub static METADATA_ENTITY: Signature = Signature {
    base: None,
    fields: &["title", "description", "persons", "institutions"],
};

pub static DIGITAL_ENTITY: Signature = Signature {
    base: Some(&METADATA_ENTITY),
    fields: &["type", "licence"],
};

pub static PHYSICAL_ENTITY: Signature = Signature {
    base: Some(&METADATA_ENTITY),
    fields: &["place", "collection"],
};

pub static COMPILATION: Signature = Signature {
    base: None,
    fields: &["entities", "name", "description"],
};

pub static ENTITY: Signature = Signature {
    base: None,
    fields: &["name", "mediaType", "online", "finished"],
};

pub static ANNOTATION: Signature = Signature { base: None, fields: &["body", "target"] };

pub static PERSON: Signature = Signature { base: None, fields: &["prename", "name"] };

pub static INSTITUTION: Signature = Signature { base: None, fields: &["name", "addresses"] };

pub static ADDRESS: Signature = Signature {
    base: None,
    fields: &["building", "number", "street", "postcode", "city", "country"],
};

pub static CONTACT: Signature = Signature {
    base: None,
    fields: &["mail", "phonenumber", "note"],
};
