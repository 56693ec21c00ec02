use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author entity - the single editorial identity of a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    /// Platform name to handle. Platforms without a handle map to `None`.
    pub social: BTreeMap<String, Option<String>>,
}
