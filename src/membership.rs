// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Grant and revoke project membership around the insert step
// role: membership/scope
// inputs: project id and the user ids that reached the insert stage
// outputs: Result of each membership call for the run summary
// side_effects: POST /projects/{id}/memberships (add, then remove)
// invariants:
// - The ids revoked are exactly the ids held by the scope when it is released
// - An empty scope sends nothing; a non-empty scope always sends the remove, even on unwind
// errors: Logged and handed back; never fatal to the run
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::clockify_api::ClockifyApi;
use crate::error::ApiError;
use crate::model::MembershipChangeRequest;

pub struct MembershipManager<'a> {
  api: &'a dyn ClockifyApi,
  project_id: &'a str,
}

impl<'a> MembershipManager<'a> {
  pub fn new(api: &'a dyn ClockifyApi, project_id: &'a str) -> Self {
    Self { api, project_id }
  }

  pub fn assign(&self, user_ids: &[String]) -> Result<(), ApiError> {
    let res = self.change(false, user_ids);
    println!("assign project membership done");
    res
  }

  pub fn remove(&self, user_ids: &[String]) -> Result<(), ApiError> {
    let res = self.change(true, user_ids);
    println!("remove project membership done");
    res
  }

  fn change(&self, remove: bool, user_ids: &[String]) -> Result<(), ApiError> {
    let body = MembershipChangeRequest {
      remove,
      user_ids: user_ids.to_vec(),
    };

    let res = self.api.update_memberships(self.project_id, &body);

    if let Err(e) = &res {
      tracing::warn!(project = self.project_id, remove, error = %e, "membership change failed");
    }
    res
  }

  /// Open a scope over `user_ids`; the remove call is owed once this returns.
  pub fn scope(&'a self, user_ids: Vec<String>) -> MembershipScope<'a> {
    MembershipScope {
      manager: self,
      user_ids,
      released: false,
    }
  }
}

/// Membership held for a set of users until `release` (or drop).
pub struct MembershipScope<'a> {
  manager: &'a MembershipManager<'a>,
  user_ids: Vec<String>,
  released: bool,
}

impl MembershipScope<'_> {
  pub fn user_ids(&self) -> &[String] {
    &self.user_ids
  }

  /// Narrow the scope to the ids that are still going ahead.
  pub fn retain(&mut self, keep: &[String]) {
    self.user_ids.retain(|id| keep.contains(id));
  }

  /// Send the assign call. Returns `None` when there is nobody to assign.
  pub fn grant(&self) -> Option<Result<(), ApiError>> {
    if self.user_ids.is_empty() {
      return None;
    }
    Some(self.manager.assign(&self.user_ids))
  }

  /// Send the remove call for whoever the scope still holds.
  pub fn release(mut self) -> Option<Result<(), ApiError>> {
    self.released = true;

    if self.user_ids.is_empty() {
      return None;
    }
    Some(self.manager.remove(&self.user_ids))
  }
}

impl Drop for MembershipScope<'_> {
  fn drop(&mut self) {
    if self.released || self.user_ids.is_empty() {
      return;
    }
    tracing::warn!(users = self.user_ids().len(), "membership scope dropped without release; revoking");
    let _ = self.manager.remove(&self.user_ids);
  }
}
