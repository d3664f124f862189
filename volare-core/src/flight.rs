use crate::error::{BookingError, BookingResult};
use chrono::NaiveDateTime;
use uuid::Uuid;
use volare_catalog::{CabinInventory, InventoryError, SeatClass};
use volare_order::{LedgerError, Passenger, Reservation, ReservationLedger};

/// A scheduled flight together with its seat pools and reservation history.
///
/// The cabin inventory and the ledger are private so that a seat can only be
/// taken or returned together with the matching ledger entry.
#[derive(Debug, Clone)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    /// Base fare, identical across seat classes.
    pub ticket_price: f64,
    cabin: CabinInventory,
    ledger: ReservationLedger,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_time: NaiveDateTime,
        ticket_price: f64,
        cabin: CabinInventory,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_time,
            ticket_price,
            cabin,
            ledger: ReservationLedger::new(),
        }
    }

    pub fn matches_number(&self, flight_number: &str) -> bool {
        self.flight_number.eq_ignore_ascii_case(flight_number.trim())
    }

    pub fn cabin(&self) -> &CabinInventory {
        &self.cabin
    }

    pub fn reservations(&self) -> &ReservationLedger {
        &self.ledger
    }

    pub fn has_available(&self, class: SeatClass) -> bool {
        self.cabin.has_available(class)
    }

    pub fn available_seats(&self, class: SeatClass) -> Vec<String> {
        self.cabin.list(class)
    }

    pub fn remaining(&self, class: SeatClass) -> u32 {
        self.cabin.remaining(class)
    }

    pub fn is_full(&self) -> bool {
        self.cabin.is_full()
    }

    /// Take the seat and record the reservation in one step.
    pub(crate) fn book(
        &mut self,
        class: SeatClass,
        seat: &str,
        passenger: Passenger,
    ) -> BookingResult<&Reservation> {
        self.cabin.reserve(class, seat).map_err(|e| match e {
            InventoryError::ClassSoldOut(class) => BookingError::ClassUnavailable {
                flight: self.flight_number.clone(),
                class,
            },
            InventoryError::SeatNotAvailable { class, seat } => BookingError::SeatUnavailable {
                flight: self.flight_number.clone(),
                class,
                seat,
            },
        })?;

        Ok(self.ledger.create(passenger, &self.flight_number, class, seat))
    }

    pub(crate) fn cancel_by_passenger(&mut self, name: &str) -> Option<&Reservation> {
        self.ledger.cancel_by_passenger(&mut self.cabin, name)
    }

    pub(crate) fn cancel_by_id(&mut self, id: &Uuid) -> Result<&Reservation, LedgerError> {
        self.ledger.cancel_by_id(&mut self.cabin, id)
    }
}
