use crate::error::PersistenceError;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;
use volare_core::{CredentialRepository, RepositoryError};

/// `username,password` pairs, one per line, compared verbatim.
pub struct FlatFileCredentialStore {
    path: PathBuf,
}

impl FlatFileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// First line whose two fields equal the given pair wins. Lines with any
    /// other number of fields never match.
    pub fn check(&self, username: &str, password: &str) -> Result<bool, PersistenceError> {
        let file = File::open(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        for result in reader.records() {
            let record = result?;
            if record.len() == 2 && &record[0] == username && &record[1] == password {
                debug!(username, "Credentials accepted");
                return Ok(true);
            }
        }

        debug!(username, "Credentials rejected");
        Ok(false)
    }
}

impl CredentialRepository for FlatFileCredentialStore {
    fn verify(&self, username: &str, password: &str) -> Result<bool, RepositoryError> {
        Ok(self.check(username, password)?)
    }
}
