use uuid::Uuid;
use volare_catalog::{SeatClass, SeatClassError};

/// Failures of catalog operations. Every variant is recoverable and carries
/// enough context for a message the user can act on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error(transparent)]
    InvalidSeatClass(#[from] SeatClassError),

    #[error("No {class} seats available on flight {flight}")]
    ClassUnavailable { flight: String, class: SeatClass },

    #[error("Seat {seat} is not available in {class} on flight {flight}")]
    SeatUnavailable {
        flight: String,
        class: SeatClass,
        seat: String,
    },

    #[error("No active reservation found for passenger: {0}")]
    PassengerNotFound(String),

    #[error("No active reservation with id {0}")]
    ReservationNotFound(Uuid),

    #[error("Reservation {0} is already cancelled")]
    ReservationAlreadyCancelled(Uuid),

    #[error("Flight {0} is already in the catalog")]
    DuplicateFlight(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
