use predicates::prelude::*;
use test_support::{BIN, cmd_bin, init_tracing, tokens_without};

// Every case here fails validation, so no request ever leaves the process.

#[test]
fn no_arguments_lists_every_missing_field() {
  init_tracing();
  let out = cmd_bin(BIN).output().unwrap();

  assert_eq!(out.status.code(), Some(1));
  let stdout = String::from_utf8_lossy(&out.stdout);
  let lines: Vec<&str> = stdout.lines().collect();
  assert_eq!(
    lines,
    vec![
      "Validation errors:",
      "- Missing required parameter: startDate",
      "- Missing required parameter: endDate",
      "- Missing required parameter: projectId",
      "- Missing required parameter: description",
      "- Missing required parameter: apiKey",
      "- Missing required parameter: workspaceId",
    ]
  );
}

#[test]
fn single_missing_field_is_the_only_error() {
  init_tracing();
  cmd_bin(BIN)
    .args(tokens_without(&["apiKey"]))
    .assert()
    .code(1)
    .stdout("Validation errors:\n- Missing required parameter: apiKey\n");
}

#[test]
fn malformed_token_is_reported_on_stderr_and_ignored() {
  init_tracing();
  let mut args = tokens_without(&["workspaceId"]);
  args.push("workspaceId".into());

  cmd_bin(BIN)
    .args(args)
    .assert()
    .code(1)
    .stderr(predicate::str::contains(
      "Invalid argument format: workspaceId. Expected format: field=value",
    ))
    .stdout(predicate::str::contains("- Missing required parameter: workspaceId"));
}

#[test]
fn dates_with_timezone_suffix_are_rejected() {
  init_tracing();
  let mut args = tokens_without(&["startDate", "endDate"]);
  args.push("startDate=2024-01-01T09:00:00Z".into());
  args.push("endDate=2024-01-01".into());

  cmd_bin(BIN)
    .args(args)
    .assert()
    .code(1)
    .stdout(
      "Validation errors:\n- StartDate must be in the format YYYY-MM-DDTHH:MM:SS\n- EndDate must be in the format YYYY-MM-DDTHH:MM:SS\n",
    );
}

#[test]
fn later_duplicate_overrides_earlier_value() {
  init_tracing();
  // The valid startDate comes first; the broken one wins and stops the run before the network.
  let mut args = tokens_without(&[]);
  args.push("startDate=not-a-date".into());

  cmd_bin(BIN)
    .args(args)
    .assert()
    .code(1)
    .stdout("Validation errors:\n- StartDate must be in the format YYYY-MM-DDTHH:MM:SS\n");
}

#[test]
fn hyphenated_first_token_is_reported_not_rejected_by_clap() {
  init_tracing();
  let mut args = vec!["-bogus".to_string()];
  args.extend(tokens_without(&["workspaceId"]));

  cmd_bin(BIN)
    .args(args)
    .assert()
    .code(1)
    .stderr(predicate::str::contains(
      "Invalid argument format: -bogus. Expected format: field=value",
    ))
    .stdout("Validation errors:\n- Missing required parameter: workspaceId\n");
}
