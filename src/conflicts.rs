use rayon::prelude::*;

use crate::clockify_api::ClockifyApi;
use crate::error::ApiError;
use crate::model::{ExistingEntry, User};
use crate::params::Window;

#[derive(Debug, Default)]
pub struct ConflictCheck {
  /// Users with no entry in the window, input order preserved.
  pub free: Vec<User>,
  pub conflicted: Vec<String>,
}

/// Drop users that already have an entry inside `window`.
///
/// All lookups are in flight together. A transport or decode failure fails the whole
/// check; an error status from the server is logged and read as "no entries".
pub fn filter_conflicts(api: &dyn ClockifyApi, users: Vec<User>, window: &Window) -> Result<ConflictCheck, ApiError> {
  let lookups: Vec<Vec<ExistingEntry>> = users
    .par_iter()
    .map(|user| match api.list_time_entries(&user.id, &window.start, &window.end) {
      // A refused lookup carries no entries, so the user counts as free.
      Err(ApiError::Status { status, body, .. }) => {
        tracing::warn!(user = %user.email, status, %body, "entry lookup refused; treating as no conflict");
        Ok(Vec::new())
      }
      other => other,
    })
    .collect::<Result<_, _>>()?;

  let mut owners: Vec<String> = Vec::new();
  let mut out = ConflictCheck::default();

  for (user, entries) in users.iter().zip(&lookups) {
    let Some(first) = entries.first() else { continue };

    // The first entry's owner identifies who to drop; the query is already per user.
    let owner = first.user_id.clone().unwrap_or_else(|| user.id.clone());
    let email = users
      .iter()
      .find(|u| u.id == owner)
      .map(|u| u.email.clone())
      .unwrap_or_else(|| user.email.clone());

    tracing::debug!(entry = ?first.id, user = %owner, "existing entry in window");
    println!("User {} already has time entry", email);
    out.conflicted.push(email);
    owners.push(owner);
  }

  out.free = users.into_iter().filter(|u| !owners.contains(&u.id)).collect();

  Ok(out)
}
