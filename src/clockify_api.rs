// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Clockify REST calls used by the sync run (users, time entries, project memberships)
// role: clockify/api
// inputs: workspace id and API key from RunParameters
// outputs: Typed users and entries; unit results for mutations
// side_effects: Network calls to api.clockify.me
// invariants:
// - Every request carries x-api-key and content-type: application/json
// - Non-2xx responses become ApiError::Status with the body kept verbatim
// - No retries, no timeouts beyond the agent defaults
// errors: Returned to the caller; the orchestrator decides which ones are fatal
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::error::ApiError;
use crate::model::{ExistingEntry, MembershipChangeRequest, TimeEntryRequest, User};
use serde::de::DeserializeOwned;
use ureq::http::Response;
use ureq::Body;

pub const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";
pub const USERS_PAGE_SIZE: u32 = 5000;

// 5000 users with all their settings easily exceed ureq's 10 MiB default.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

// --- Trait seam for the Clockify API ---
pub trait ClockifyApi: Sync {
  fn list_users(&self, page_size: u32) -> Result<Vec<User>, ApiError>;
  fn list_time_entries(&self, user_id: &str, start: &str, end: &str) -> Result<Vec<ExistingEntry>, ApiError>;
  fn create_time_entry(&self, user_id: &str, entry: &TimeEntryRequest) -> Result<(), ApiError>;
  fn update_memberships(&self, project_id: &str, change: &MembershipChangeRequest) -> Result<(), ApiError>;
}

pub struct ClockifyHttpApi {
  agent: ureq::Agent,
  workspace_url: String,
  api_key: String,
}

impl ClockifyHttpApi {
  pub fn new(workspace_id: &str, api_key: &str) -> Self {
    Self::with_base_url(DEFAULT_BASE_URL, workspace_id, api_key)
  }

  pub fn with_base_url(base_url: &str, workspace_id: &str, api_key: &str) -> Self {
    // Status codes are inspected by hand so error bodies can be reported.
    let agent: ureq::Agent = ureq::Agent::config_builder().http_status_as_error(false).build().into();

    Self {
      agent,
      workspace_url: format!("{}/workspaces/{}", base_url.trim_end_matches('/'), workspace_id),
      api_key: api_key.to_string(),
    }
  }

  fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
    tracing::debug!(%url, "GET");

    let resp = self
      .agent
      .get(url)
      .header("x-api-key", self.api_key.as_str())
      .header("content-type", "application/json")
      .call();

    let resp = check_status("GET", url, resp)?;
    decode(url, resp)
  }

  fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
    tracing::debug!(%url, "POST");

    let resp = self
      .agent
      .post(url)
      .header("x-api-key", self.api_key.as_str())
      .header("content-type", "application/json")
      .send_json(body);

    check_status("POST", url, resp).map(|_| ())
  }
}

fn check_status(
  method: &'static str,
  url: &str,
  resp: Result<Response<Body>, ureq::Error>,
) -> Result<Response<Body>, ApiError> {
  let mut resp = resp.map_err(|source| ApiError::Transport {
    method,
    url: url.to_string(),
    source,
  })?;

  let status = resp.status();

  if status.is_success() {
    return Ok(resp);
  }

  let body = resp.body_mut().read_to_string().unwrap_or_default();

  Err(ApiError::Status {
    method,
    url: url.to_string(),
    status: status.as_u16(),
    body,
  })
}

fn decode<T: DeserializeOwned>(url: &str, mut resp: Response<Body>) -> Result<T, ApiError> {
  resp
    .body_mut()
    .with_config()
    .limit(MAX_BODY_BYTES)
    .read_json::<T>()
    .map_err(|e| ApiError::Decode {
      url: url.to_string(),
      message: e.to_string(),
    })
}

impl ClockifyApi for ClockifyHttpApi {
  fn list_users(&self, page_size: u32) -> Result<Vec<User>, ApiError> {
    let url = format!("{}/users?page-size={}", self.workspace_url, page_size);
    self.get_json(&url)
  }

  fn list_time_entries(&self, user_id: &str, start: &str, end: &str) -> Result<Vec<ExistingEntry>, ApiError> {
    let url = format!(
      "{}/user/{}/time-entries?start={}&end={}",
      self.workspace_url, user_id, start, end
    );
    self.get_json(&url)
  }

  fn create_time_entry(&self, user_id: &str, entry: &TimeEntryRequest) -> Result<(), ApiError> {
    let url = format!("{}/user/{}/time-entries", self.workspace_url, user_id);
    self.post_json(&url, entry)
  }

  fn update_memberships(&self, project_id: &str, change: &MembershipChangeRequest) -> Result<(), ApiError> {
    let url = format!("{}/projects/{}/memberships", self.workspace_url, project_id);
    self.post_json(&url, change)
  }
}
