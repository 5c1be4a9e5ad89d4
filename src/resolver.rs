use crate::clockify_api::{ClockifyApi, USERS_PAGE_SIZE};
use crate::error::ApiError;
use crate::model::User;

#[derive(Debug, Default)]
pub struct Resolution {
  /// Matched users in allow-list order.
  pub users: Vec<User>,
  pub not_found: Vec<String>,
}

/// Match allow-listed emails against the workspace's users (exact, case-sensitive).
///
/// Duplicate emails resolve to the same user twice; nothing is deduplicated.
pub fn resolve_users(api: &dyn ClockifyApi, allow_list: &[String]) -> Result<Resolution, ApiError> {
  let workspace_users = api.list_users(USERS_PAGE_SIZE)?;
  let mut out = Resolution::default();

  for email in allow_list {
    match workspace_users.iter().find(|u| &u.email == email) {
      Some(user) => out.users.push(user.clone()),
      None => {
        println!("User not found: {}", email);
        out.not_found.push(email.clone());
      }
    }
  }

  tracing::info!(resolved = out.users.len(), missing = out.not_found.len(), "resolved allow-list");

  Ok(out)
}
