pub mod error;
pub mod flight;
pub mod catalog;
pub mod search;
pub mod repository;

pub use catalog::{Cancellation, FlightCatalog};
pub use error::{BookingError, BookingResult};
pub use flight::Flight;
pub use repository::{CredentialRepository, FlightRepository, RepositoryError};
pub use search::{FlightOption, FlightQuery};

pub use volare_catalog::{CabinInventory, RefundPolicy, SeatClass};
pub use volare_order::{Passenger, Reservation, ReservationStatus};
