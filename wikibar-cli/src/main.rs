use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod config;

fn main() -> Result<()> {
    let matches = cmd::generate::make_command().get_matches();

    init_logging(matches.get_flag("verbose"))?;

    cmd::generate::execute(&matches)
}

/// Logs go to stderr; `--verbose` forces debug, otherwise `RUST_LOG` or info.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
