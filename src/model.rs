// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Wire models for the Clockify endpoints used by the sync run (users, time entries, memberships)
// role: model/types
// outputs: Serializable request bodies and deserializable response items
// invariants: Request field names are camelCase as Clockify expects; unknown user fields survive a round trip
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

/// A workspace member as returned by `GET /users`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
  pub id: String,
  #[serde(default)]
  pub email: String,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
impl User {
  pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      email: email.into(),
      extra: serde_json::Map::new(),
    }
  }
}

/// An entry already present for a user; only the owner is inspected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExistingEntry {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRequest {
  pub billable: bool,
  pub custom_attributes: Vec<serde_json::Value>,
  pub custom_fields: Vec<serde_json::Value>,
  pub description: String,
  pub start: String,
  pub end: String,
  pub project_id: String,
  pub tag_ids: Vec<String>,
  pub task_id: Option<String>,
  #[serde(rename = "type")]
  pub entry_type: String,
}

impl TimeEntryRequest {
  /// Billable `REGULAR` entry with no tags, task or custom data.
  pub fn regular(description: &str, project_id: &str, start: String, end: String) -> Self {
    Self {
      billable: true,
      custom_attributes: Vec::new(),
      custom_fields: Vec::new(),
      description: description.to_string(),
      start,
      end,
      project_id: project_id.to_string(),
      tag_ids: Vec::new(),
      task_id: None,
      entry_type: "REGULAR".into(),
    }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipChangeRequest {
  pub remove: bool,
  pub user_ids: Vec<String>,
}
