pub mod app_config;
pub mod error;
pub mod flight_repo;
pub mod credentials;

pub use app_config::Config;
pub use credentials::FlatFileCredentialStore;
pub use error::PersistenceError;
pub use flight_repo::FlatFileFlightRepository;
