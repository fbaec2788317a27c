use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use anecdota::config::Config;
use anecdota::route::Route;
use anecdota::trace::init_tracing;
use anecdota::ui;

/// Browse, vote on and collect software anecdotes in the terminal.
#[derive(Parser, Debug)]
#[command(name = "anecdota", version, about)]
struct Cli {
    /// Path of the view to open first, e.g. /anecdotes/2 or /about.
    #[arg(default_value_t = Route::Anecdotes)]
    path: Route,

    /// Read configuration from this file instead of the default
    /// location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path).context("loading configuration")?,
        None => Config::load().context("loading configuration")?,
    };

    tracing::info!(start = %cli.path, "starting");
    ui::run(config, cli.path).context("running the terminal interface")?;
    Ok(())
}
