use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use volare_catalog::RefundPolicy;

use crate::error::PersistenceError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub refunds: RefundPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub flights_file: PathBuf,
    pub users_file: PathBuf,
}

impl Config {
    /// Layered load from `config_dir`, the run mode named by `RUN_MODE` and
    /// `VOLARE_*` environment variables.
    pub fn load(config_dir: &Path) -> Result<Self, PersistenceError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_with_mode(config_dir, &run_mode)
    }

    pub fn load_with_mode(config_dir: &Path, run_mode: &str) -> Result<Self, PersistenceError> {
        let file = |name: &str| config::File::with_name(&config_dir.join(name).to_string_lossy()).required(false);

        let s = config::Config::builder()
            .set_default("storage.flights_file", "flights.csv")?
            .set_default("storage.users_file", "users.csv")?
            // Shipped defaults, then the run mode, then an uncommitted local file
            .add_source(file("default"))
            .add_source(file(run_mode))
            .add_source(file("local"))
            // e.g. `VOLARE_STORAGE__FLIGHTS_FILE=/data/flights.csv`
            .add_source(
                config::Environment::with_prefix("VOLARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
