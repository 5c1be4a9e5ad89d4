use clap::CommandFactory;
use tracing::level_filters::LevelFilter;

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
  match verbose {
    0 => LevelFilter::WARN,
    1 => LevelFilter::INFO,
    2 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  }
}

/// Diagnostics go to stderr so stdout only carries the run's progress lines.
pub fn init_tracing(verbose: u8) {
  let _ = tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(level_for_verbosity(verbose))
    .with_target(false)
    .try_init();
}
