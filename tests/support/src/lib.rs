//! Helpers shared by the binary-level tests under `tests/`.

use once_cell::sync::OnceCell;

pub const BIN: &str = "clockify-entry-sync";

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
  TRACING.get_or_init(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
      .with_test_writer()
      .try_init();
  });
}

/// `assert_cmd` handle on a binary built by this package.
pub fn cmd_bin(name: &str) -> assert_cmd::Command {
  assert_cmd::Command::cargo_bin(name).unwrap_or_else(|e| panic!("binary {name} not built: {e}"))
}

/// A complete, valid token set; tests drop or override fields from here.
pub fn valid_tokens() -> Vec<(&'static str, &'static str)> {
  vec![
    ("startDate", "2024-01-01T09:00:00"),
    ("endDate", "2024-01-01T17:00:00"),
    ("projectId", "p1"),
    ("description", "Company holiday"),
    ("apiKey", "test-key"),
    ("workspaceId", "w1"),
  ]
}

/// Render the valid set as `field=value` tokens, skipping the fields in `without`.
pub fn tokens_without(without: &[&str]) -> Vec<String> {
  valid_tokens()
    .into_iter()
    .filter(|(k, _)| !without.contains(k))
    .map(|(k, v)| format!("{k}={v}"))
    .collect()
}
