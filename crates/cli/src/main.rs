use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{prelude::*, EnvFilter};

use simscope_core::{
    carrier::{CarrierApi, ProfileSource, StaticProfiles},
    config::{self, AppConfig},
    report,
    snapshot::DeviceSnapshot,
};

#[derive(Parser, Debug)]
#[command(name = "simscope", version, about = "SIM-card and roaming status reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe the SIM card and the network it is attached to.
    Card {
        /// Path to the device snapshot JSON document.
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Classify national and international roaming using carrier data.
    Roaming {
        /// Path to the device snapshot JSON document.
        #[arg(long)]
        snapshot: PathBuf,
        /// Use a local profile document instead of the carrier API.
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    tracing::debug!("using carrier API at {}", config.api_base_url);

    let cli = Cli::parse();
    match cli.command {
        Commands::Card { snapshot } => {
            let snapshot = DeviceSnapshot::load(snapshot)?;
            print_lines(report::describe_current_card(
                &snapshot.card,
                &snapshot.network,
            ));
        }
        Commands::Roaming { snapshot, profile } => {
            let snapshot = DeviceSnapshot::load(snapshot)?;
            let source: Box<dyn ProfileSource> = match profile {
                Some(path) => Box::new(StaticProfiles::load(path)?),
                None => Box::new(CarrierApi::new(&config)?),
            };
            let lines =
                report::describe_roaming(&snapshot.card, &snapshot.network, source.as_ref()).await;
            print_lines(lines);
        }
    }

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("simscope.log");

    let env_filter = EnvFilter::from_default_env();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
