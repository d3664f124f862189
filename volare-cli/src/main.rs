use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volare_cli::{Shell, Terminal};
use volare_core::FlightCatalog;
use volare_store::{Config, FlatFileCredentialStore, FlatFileFlightRepository};

#[derive(Parser)]
#[command(name = "volare")]
#[command(about = "Flight seat inventory and reservations")]
#[command(version)]
struct Cli {
    /// Directory holding default.toml, {RUN_MODE}.toml and local.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Flight catalog file (overrides storage.flights_file)
    #[arg(long)]
    flights: Option<PathBuf>,

    /// Credential file (overrides storage.users_file)
    #[arg(long)]
    users: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the prompts on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "volare=info,volare_cli=info,volare_core=info,volare_order=info,volare_store=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config_dir).context("Failed to load config")?;

    let flights_file = cli.flights.unwrap_or(config.storage.flights_file);
    let users_file = cli.users.unwrap_or(config.storage.users_file);
    tracing::info!(flights = %flights_file.display(), users = %users_file.display(), "Starting Volare");

    let flights = FlatFileFlightRepository::new(flights_file);
    let credentials = FlatFileCredentialStore::new(users_file);
    let mut catalog = FlightCatalog::load(&flights, config.refunds);

    let terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let outcome = Shell::new(&mut catalog, &credentials, terminal).run();
    match &outcome {
        Ok(reason) => tracing::info!(?reason, "Session ended"),
        Err(e) => tracing::error!("Session ended on a terminal error: {}", e),
    }

    // Bookings made before a terminal failure are still written out.
    if let Err(e) = catalog.save(&flights) {
        tracing::error!("Error saving flights data: {}", e);
    }

    outcome.context("Terminal I/O failed")?;
    Ok(())
}
