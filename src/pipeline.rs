// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Run one sync: resolve users, skip conflicts, grant membership, insert entries, revoke membership
// role: orchestration
// inputs: ClockifyApi backend, validated RunParameters, allow-list
// outputs: RunSummary describing what happened to every user
// side_effects: Console progress on stdout; all remote effects go through ClockifyApi
// invariants:
// - Membership is revoked whenever a non-empty resolved-user list existed, fatal errors included
// - The revoked set equals the set held by the scope at release time
// errors: Resolution and conflict-check failures end the run early (recorded as fatal); the rest are collected
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::clockify_api::ClockifyApi;
use crate::conflicts::filter_conflicts;
use crate::error::{ApiError, InsertFailure};
use crate::inserter::insert_all;
use crate::membership::{MembershipManager, MembershipScope};
use crate::params::RunParameters;
use crate::resolver::resolve_users;

#[derive(Debug, Default)]
pub struct RunSummary {
  pub not_found: Vec<String>,
  pub conflicted: Vec<String>,
  pub inserted: Vec<String>,
  pub insert_failures: Vec<InsertFailure>,
  pub assign_error: Option<ApiError>,
  pub remove_error: Option<ApiError>,
  pub fatal: Option<ApiError>,
}

pub fn run(api: &dyn ClockifyApi, params: &RunParameters, allow_list: &[String]) -> RunSummary {
  let manager = MembershipManager::new(api, &params.project_id);
  let mut summary = RunSummary::default();
  let mut scope: Option<MembershipScope<'_>> = None;

  if let Err(e) = reconcile(api, params, allow_list, &manager, &mut scope, &mut summary) {
    tracing::error!(error = %e, "sync run aborted");
    println!("{}", e);
    summary.fatal = Some(e);
  }

  if let Some(scope) = scope {
    if let Some(Err(e)) = scope.release() {
      summary.remove_error = Some(e);
    }
  }

  summary
}

fn reconcile<'a>(
  api: &dyn ClockifyApi,
  params: &RunParameters,
  allow_list: &[String],
  manager: &'a MembershipManager<'a>,
  scope: &mut Option<MembershipScope<'a>>,
  summary: &mut RunSummary,
) -> Result<(), ApiError> {
  // Phase 1: allow-list → workspace users
  let resolution = resolve_users(api, allow_list)?;
  summary.not_found = resolution.not_found;

  if resolution.users.is_empty() {
    println!("Inserting time entry for 0 users: []");
    return Ok(());
  }

  // From here on, cleanup is owed for whoever the scope holds.
  let held = scope.insert(manager.scope(resolution.users.iter().map(|u| u.id.clone()).collect()));

  // Phase 2: drop users who already logged time in the window
  let check = filter_conflicts(api, resolution.users, &params.conflict_window())?;
  summary.conflicted = check.conflicted;
  let users = check.free;

  let remaining: Vec<String> = users.iter().map(|u| u.id.clone()).collect();
  held.retain(&remaining);

  let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
  println!("Inserting time entry for {} users: {:?}", users.len(), emails);

  if users.is_empty() {
    return Ok(());
  }

  // Phase 3: grant, insert (parallel); revoke happens in `run`
  if let Some(Err(e)) = held.grant() {
    summary.assign_error = Some(e);
  }

  let report = insert_all(api, &users, params);
  summary.inserted = report.inserted;
  summary.insert_failures = report.failures;

  Ok(())
}
