use clap::Parser;
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[command(
    name = "clockify-entry-sync",
    version,
    about = "Insert a Clockify time entry for every allow-listed user in a workspace",
    long_about = None
)]
pub struct Cli {
  /// Run parameters as field=value tokens:
  /// startDate, endDate (YYYY-MM-DDTHH:MM:SS), projectId, description, apiKey, workspaceId
  #[arg(value_name = "FIELD=VALUE", trailing_var_arg = true, allow_hyphen_values = true)]
  pub tokens: Vec<String>,

  /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

/// Raw `field=value` tokens split into a map plus the tokens that did not fit the shape.
#[derive(Debug, Default)]
pub struct ParsedTokens {
  pub fields: BTreeMap<String, String>,
  pub rejected: Vec<String>,
}

/// Split each token on its first `=`. Later duplicates overwrite earlier ones.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> ParsedTokens {
  let mut parsed = ParsedTokens::default();

  for token in tokens {
    let token = token.as_ref();

    match token.split_once('=') {
      Some((key, value)) if !key.is_empty() && !value.is_empty() => {
        parsed.fields.insert(key.to_string(), value.to_string());
      }
      _ => parsed.rejected.push(token.to_string()),
    }
  }

  parsed
}

pub fn rejected_token_message(token: &str) -> String {
  format!("Invalid argument format: {}. Expected format: field=value", token)
}
