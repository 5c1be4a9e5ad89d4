use rayon::prelude::*;

use crate::clockify_api::ClockifyApi;
use crate::error::InsertFailure;
use crate::model::{TimeEntryRequest, User};
use crate::params::RunParameters;

#[derive(Debug, Default)]
pub struct InsertReport {
  pub inserted: Vec<String>,
  pub failures: Vec<InsertFailure>,
}

pub fn build_entry(params: &RunParameters) -> TimeEntryRequest {
  let window = params.entry_window();
  TimeEntryRequest::regular(&params.description, &params.project_id, window.start, window.end)
}

/// Create one entry for `user`; a failure is handed back, never raised.
pub fn insert_one(api: &dyn ClockifyApi, user: &User, entry: &TimeEntryRequest) -> Result<(), InsertFailure> {
  match api.create_time_entry(&user.id, entry) {
    Ok(()) => {
      println!("Inserted time entry for user {}", user.email);
      Ok(())
    }
    Err(source) => Err(InsertFailure {
      email: user.email.clone(),
      source,
    }),
  }
}

/// Insert for every user concurrently and wait for all of them to settle.
pub fn insert_all(api: &dyn ClockifyApi, users: &[User], params: &RunParameters) -> InsertReport {
  let entry = build_entry(params);

  let outcomes: Vec<(String, Result<(), InsertFailure>)> = users
    .par_iter()
    .map(|user| (user.email.clone(), insert_one(api, user, &entry)))
    .collect();

  let mut report = InsertReport::default();

  for (email, outcome) in outcomes {
    match outcome {
      Ok(()) => report.inserted.push(email),
      Err(failure) => report.failures.push(failure),
    }
  }

  if !report.failures.is_empty() {
    let reasons: Vec<String> = report.failures.iter().map(|f| f.to_string()).collect();
    tracing::warn!(failed = reasons.len(), "some time entries were not inserted");
    println!("{:#?}", reasons);
  }

  report
}
