//! Address and contact records referenced by persons, institutions and places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DocumentId, Linkable};
use crate::classify::RecordKind;

/// Postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub building: String,
    pub number: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    /// Epoch milliseconds; only used to order addresses.
    #[serde(default)]
    pub creation_date: i64,
}

impl Address {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.creation_date)
    }
}

impl Linkable for Address {
    const KIND: RecordKind = RecordKind::Address;

    fn id(&self) -> &DocumentId { &self.id }
}

/// Contact reference (mail, phone, free-form note).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub mail: String,
    pub phonenumber: String,
    pub note: String,
    /// Epoch milliseconds; only used to order contacts.
    #[serde(default)]
    pub creation_date: i64,
}

impl Contact {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.creation_date)
    }
}

impl Linkable for Contact {
    const KIND: RecordKind = RecordKind::Contact;

    fn id(&self) -> &DocumentId { &self.id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_creation_date_converts_to_utc() {
        let address: Address = serde_json::from_value(json!({
            "_id": "a1",
            "building": "Main",
            "number": "1",
            "street": "Albertus-Magnus-Platz",
            "postcode": "50923",
            "city": "Köln",
            "country": "DE",
            "creation_date": 1_700_000_000_000_i64,
        }))
        .unwrap();
        let created = address.created_at().unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);
    }
}
