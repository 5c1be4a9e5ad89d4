use anyhow::{Context, Result};
use once_cell::sync::Lazy;

const BUNDLED_EMAILS: &str = include_str!("../assets/emails.json");

static ALLOW_LIST: Lazy<Result<Vec<String>, String>> =
  Lazy::new(|| parse_allow_list(BUNDLED_EMAILS).map_err(|e| format!("{:#}", e)));

/// Parse a JSON array of email strings, keeping file order and duplicates.
pub fn parse_allow_list(json: &str) -> Result<Vec<String>> {
  serde_json::from_str::<Vec<String>>(json).context("parsing allow-list (expected a JSON array of strings)")
}

/// The allow-list compiled into the binary from `assets/emails.json`.
pub fn bundled() -> Result<&'static [String]> {
  match &*ALLOW_LIST {
    Ok(emails) => Ok(emails.as_slice()),
    Err(msg) => anyhow::bail!("bundled assets/emails.json is invalid: {}", msg),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_list_parses() {
    let emails = bundled().unwrap();
    assert!(!emails.is_empty());
    assert!(emails.iter().all(|e| e.contains('@')));
  }

  #[test]
  fn keeps_order_and_duplicates() {
    let emails = parse_allow_list(r#"["b@x.com", "a@x.com", "b@x.com"]"#).unwrap();
    assert_eq!(emails, vec!["b@x.com", "a@x.com", "b@x.com"]);
  }

  #[test]
  fn malformed_json_error_names_the_allow_list() {
    let err = parse_allow_list("not json").unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.starts_with("parsing allow-list"), "chain was: {}", chain);
  }

  #[test]
  fn rejects_non_string_entries() {
    let err = parse_allow_list(r#"[1, 2]"#).unwrap_err();
    assert!(format!("{:#}", err).contains("allow-list"));
  }
}
