use crate::flight::Flight;
use std::error::Error;

pub type RepositoryError = Box<dyn Error + Send + Sync>;

/// Storage for the flight catalog: read once at startup, written once at
/// shutdown.
pub trait FlightRepository {
    fn load_flights(&self) -> Result<Vec<Flight>, RepositoryError>;

    fn save_flights(&self, flights: &[Flight]) -> Result<(), RepositoryError>;
}

/// Username/password check backing the interactive login.
pub trait CredentialRepository {
    fn verify(&self, username: &str, password: &str) -> Result<bool, RepositoryError>;
}
