//! Headless simulation entry point.
mod cli;
mod opponent;
mod sim;
mod world;

use anyhow::{Context, Result};
use arena_content::ContentBundle;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::Cli;
use sim::{SimSettings, Simulation};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_dir.as_deref())?;

    let bundle = ContentBundle::load(cli.config.as_deref(), &cli.arena)?;
    let settings = SimSettings {
        tick_rate: cli.tick_rate,
        seed: cli.seed,
        disabled: cli.disabled,
    };
    let mut sim = Simulation::new(bundle.config, &bundle.layout, &settings)
        .with_context(|| format!("Failed to set up arena {}", cli.arena.display()))?;

    tracing::info!(
        arena = %cli.arena.display(),
        duration = cli.duration,
        seed = cli.seed,
        "Simulation started"
    );
    let summary = sim.run(cli.duration)?;
    tracing::info!(
        ticks = summary.ticks,
        goal_switches = summary.goal_switches,
        shots = summary.shots_fired,
        hits = summary.hits,
        kills = summary.kills,
        deaths = summary.deaths,
        pickups = summary.pickups,
        "Simulation finished"
    );
    Ok(())
}

/// Logs to stderr, and to `<log_dir>/arena-sim.log` when a directory is given.
///
/// The returned guard flushes the file writer on drop.
fn setup_logging(log_dir: Option<&std::path::Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, "arena-sim.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/arena-sim.log", dir.display());
    }
    Ok(guard)
}
