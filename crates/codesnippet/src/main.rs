// crates/codesnippet/src/main.rs

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codesnippet::config::{command, AppConfig};
use codesnippet::run;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let matches = command().get_matches();
    let config = AppConfig::from_matches(&matches)?;
    init_logging(config.verbose);
    log::debug!("configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run(&config, &mut out)?;
    out.flush().context("Failed to flush output")?;

    if config.fail_on_error && summary.errors > 0 {
        eprintln!("{} error(s) reported", summary.errors);
        std::process::exit(1);
    }
    Ok(())
}
