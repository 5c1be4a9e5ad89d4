// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn the parsed field map into typed run parameters and derive the timestamps sent to Clockify
// role: config/validation
// inputs: field map from cli::parse_tokens
// outputs: RunParameters or the ordered list of validation errors
// invariants:
// - At most one error per field (missing takes precedence over format)
// - Conflict window uses the raw instants; inserted entries are shifted by ENTRY_OFFSET_HOURS
// errors: Collected, never short-circuited; caller prints and exits 1
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{Duration, NaiveDateTime};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const ENTRY_OFFSET_HOURS: i64 = 3;

static RE_INPUT_DATE: Lazy<regex::Regex> =
  Lazy::new(|| regex::Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
  pub start_date: NaiveDateTime,
  pub end_date: NaiveDateTime,
  pub project_id: String,
  pub description: String,
  pub api_key: String,
  pub workspace_id: String,
}

/// Start/end pair already rendered for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
  pub start: String,
  pub end: String,
}

impl RunParameters {
  /// Bounds used when looking for entries the user already has.
  pub fn conflict_window(&self) -> Window {
    Window {
      start: clockify_timestamp(self.start_date),
      end: clockify_timestamp(self.end_date),
    }
  }

  /// Bounds written on the inserted entry, shifted forward by `ENTRY_OFFSET_HOURS`.
  pub fn entry_window(&self) -> Window {
    let offset = Duration::hours(ENTRY_OFFSET_HOURS);
    Window {
      start: clockify_timestamp(self.start_date + offset),
      end: clockify_timestamp(self.end_date + offset),
    }
  }
}

pub fn clockify_timestamp(dt: NaiveDateTime) -> String {
  format!("{}Z", dt.format(INPUT_DATE_FORMAT))
}

fn parse_input_date(raw: &str) -> Option<NaiveDateTime> {
  if !RE_INPUT_DATE.is_match(raw) {
    return None;
  }
  NaiveDateTime::parse_from_str(raw, INPUT_DATE_FORMAT).ok()
}

fn required<'a>(fields: &'a BTreeMap<String, String>, key: &str, errors: &mut Vec<String>) -> Option<&'a str> {
  match fields.get(key).map(String::as_str) {
    Some(v) if !v.is_empty() => Some(v),
    _ => {
      errors.push(format!("Missing required parameter: {}", key));
      None
    }
  }
}

fn required_date(
  fields: &BTreeMap<String, String>,
  key: &str,
  label: &str,
  errors: &mut Vec<String>,
) -> Option<NaiveDateTime> {
  let raw = required(fields, key, errors)?;
  let parsed = parse_input_date(raw);

  if parsed.is_none() {
    errors.push(format!("{} must be in the format YYYY-MM-DDTHH:MM:SS", label));
  }
  parsed
}

/// Check every required field and collect all violations before giving up.
pub fn validate(fields: &BTreeMap<String, String>) -> Result<RunParameters, Vec<String>> {
  let mut errors = Vec::new();

  let start_date = required_date(fields, "startDate", "StartDate", &mut errors);
  let end_date = required_date(fields, "endDate", "EndDate", &mut errors);
  let project_id = required(fields, "projectId", &mut errors);
  let description = required(fields, "description", &mut errors);
  let api_key = required(fields, "apiKey", &mut errors);
  let workspace_id = required(fields, "workspaceId", &mut errors);

  match (start_date, end_date, project_id, description, api_key, workspace_id) {
    (Some(start_date), Some(end_date), Some(project_id), Some(description), Some(api_key), Some(workspace_id))
      if errors.is_empty() =>
    {
      Ok(RunParameters {
        start_date,
        end_date,
        project_id: project_id.to_string(),
        description: description.to_string(),
        api_key: api_key.to_string(),
        workspace_id: workspace_id.to_string(),
      })
    }
    _ => Err(errors),
  }
}

/// Lines printed when validation fails, header first.
pub fn render_validation_errors(errors: &[String]) -> Vec<String> {
  let mut lines = Vec::with_capacity(errors.len() + 1);
  lines.push("Validation errors:".to_string());
  lines.extend(errors.iter().map(|e| format!("- {}", e)));
  lines
}
