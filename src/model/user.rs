//! Users and groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DocumentId;

/// Public projection of a user: id, full name and user name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrippedUserData {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub fullname: String,
    pub username: String,
}

/// Full user record. Holds the session id, so it must never be exposed
/// publicly; hand out [`UserData::strip`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub username: String,
    #[serde(rename = "sessionID", default)]
    pub session_id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub prename: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub mail: String,
    /// Rank value from the external enumeration, kept opaque.
    #[serde(default)]
    pub role: String,
    /// Collection name → ids of the records this user owns.
    #[serde(default)]
    pub data: BTreeMap<String, Vec<Value>>,
}

impl UserData {
    pub fn strip(&self) -> StrippedUserData {
        StrippedUserData {
            id: self.id.clone(),
            fullname: self.fullname.clone(),
            username: self.username.clone(),
        }
    }

    /// Ids owned in `collection`, skipping nulls and non-id entries.
    pub fn owned_ids(&self, collection: &str) -> Vec<DocumentId> {
        self.data
            .get(collection)
            .into_iter()
            .flatten()
            .filter_map(|v| serde_json::from_value::<DocumentId>(v.clone()).ok())
            .collect()
    }
}

/// A named set of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub creator: StrippedUserData,
    pub owners: Vec<StrippedUserData>,
    pub members: Vec<StrippedUserData>,
}

impl Group {
    /// True when `user` created, owns or belongs to this group.
    pub fn includes(&self, user: &DocumentId) -> bool {
        self.creator.id == *user
            || self.owners.iter().any(|u| u.id == *user)
            || self.members.iter().any(|u| u.id == *user)
    }
}
