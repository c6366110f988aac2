use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{filter::FilterFn, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;
mod script;

use config::resolve_line_config;
use console::MetroConsole;
use script::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "circle-line",
    author,
    version,
    about = "Simulate a train running on a circular metro line",
    long_about = "Reads commands (board, remove, move, state, reset, quit), one per line, \
                  from a script file or stdin and narrates the train's journey.\n\n\
                  Passengers board at the current station with a destination on the \
                  line and get off when the train reaches it. After the last station \
                  the train returns to the first."
)]
struct Args {
    /// Comma-separated station list, in travel order
    #[arg(short, long, value_delimiter = ',', conflicts_with = "config")]
    stations: Vec<String>,

    /// JSON line config file: {"stations": ["A", "B", ...]}
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Also print `state` snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = FilterFn::new(move |meta| {
        meta.level() <= &level && meta.module_path().unwrap_or_default().starts_with("circle_line")
    });
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(io::stderr);

    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let line = resolve_line_config(args.config.as_deref(), &args.stations)?;
    let metro = line.build().context("Failed to build metro line")?;
    tracing::info!(
        stations = %metro.stations().iter().map(|s| s.as_str()).collect::<Vec<_>>().join(","),
        "line ready"
    );

    let mut console = MetroConsole::new(metro, io::stdout().lock());
    let options = RunOptions { json_state: args.json };

    let summary = match &args.script {
        Some(path) => {
            tracing::info!("Script: {}", path.display());
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            script::run(&mut console, BufReader::new(file), options)?
        }
        None => script::run(&mut console, io::stdin().lock(), options)?,
    };

    if summary.rejected > 0 {
        tracing::warn!("{} command(s) could not be parsed", summary.rejected);
    }

    Ok(())
}
