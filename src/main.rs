use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pawnfall_cli::{Session, SessionConfig};

fn main() -> Result<()> {
    // stdout belongs to the game; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("pawnfall starting");

    let session = Session::new(io::stdin().lock(), io::stdout().lock(), SessionConfig::default());
    let state = session.run()?;
    info!(outcome = ?state.outcome(), "pawnfall exiting");
    Ok(())
}
