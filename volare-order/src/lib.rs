pub mod models;
pub mod ledger;

pub use models::{Passenger, Reservation, ReservationStatus};
pub use ledger::{LedgerError, ReservationLedger};
