use anyhow::{Context, Result};
use clap::Parser;

mod allow_list;
mod cli;
mod clockify_api;
mod conflicts;
mod error;
mod inserter;
mod membership;
mod model;
mod params;
mod pipeline;
mod resolver;
mod util;

use crate::cli::{Cli, parse_tokens, rejected_token_message};
use crate::clockify_api::ClockifyHttpApi;

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>().context("rendering man page")?;
    print!("{}", page);
    return Ok(());
  }

  util::init_tracing(cli.verbose);

  // Phase 1: tokens → field map
  let parsed = parse_tokens(&cli.tokens);
  for token in &parsed.rejected {
    eprintln!("{}", rejected_token_message(token));
  }

  // Phase 2: the only fatal gate before any network call
  let params = match params::validate(&parsed.fields) {
    Ok(p) => p,
    Err(errors) => {
      for line in params::render_validation_errors(&errors) {
        println!("{}", line);
      }
      std::process::exit(1);
    }
  };

  let emails = allow_list::bundled().context("loading bundled allow-list")?;

  // Phase 3: sync against Clockify
  let api = ClockifyHttpApi::new(&params.workspace_id, &params.api_key);
  let summary = pipeline::run(&api, &params, emails);

  tracing::info!(
    inserted = summary.inserted.len(),
    failed = summary.insert_failures.len(),
    skipped = summary.conflicted.len(),
    missing = summary.not_found.len(),
    assign_failed = summary.assign_error.is_some(),
    revoke_failed = summary.remove_error.is_some(),
    aborted = summary.fatal.is_some(),
    "sync finished"
  );

  Ok(())
}
