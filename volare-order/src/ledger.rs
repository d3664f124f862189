use crate::models::{Passenger, Reservation};
use tracing::{info, warn};
use uuid::Uuid;
use volare_catalog::{CabinInventory, SeatClass};

/// Every reservation ever made on one flight, in booking order.
///
/// Entries are never removed; cancellation only flips their status and hands
/// the seat back to the flight's cabin inventory.
#[derive(Debug, Clone, Default)]
pub struct ReservationLedger {
    reservations: Vec<Reservation>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a booking whose seat has already been taken out of the pool.
    pub fn create(
        &mut self,
        passenger: Passenger,
        flight_number: &str,
        seat_class: SeatClass,
        seat_number: &str,
    ) -> &Reservation {
        let reservation = Reservation::new(
            passenger,
            flight_number.to_string(),
            seat_class,
            seat_number.to_string(),
        );
        info!(
            reservation_id = %reservation.id,
            flight = flight_number,
            class = %seat_class,
            seat = seat_number,
            "Reservation recorded"
        );
        self.reservations.push(reservation);
        &self.reservations[self.reservations.len() - 1]
    }

    /// Cancel the first active reservation matching `predicate` and release
    /// its seat into `cabin`. Cancelled entries are never matched again.
    pub fn cancel_first<P>(&mut self, cabin: &mut CabinInventory, mut predicate: P) -> Option<&Reservation>
    where
        P: FnMut(&Reservation) -> bool,
    {
        let idx = self
            .reservations
            .iter()
            .position(|r| r.is_active() && predicate(r))?;

        let reservation = &mut self.reservations[idx];
        if reservation.cancel() && !cabin.release(reservation.seat_class, &reservation.seat_number) {
            warn!(
                reservation_id = %reservation.id,
                seat = %reservation.seat_number,
                "Cancelled reservation held a seat the inventory did not consider booked"
            );
        }
        info!(reservation_id = %reservation.id, flight = %reservation.flight_number, "Reservation cancelled");

        Some(&self.reservations[idx])
    }

    pub fn cancel_by_passenger(&mut self, cabin: &mut CabinInventory, name: &str) -> Option<&Reservation> {
        self.cancel_first(cabin, |r| r.passenger.has_name(name))
    }

    pub fn cancel_by_id(&mut self, cabin: &mut CabinInventory, id: &Uuid) -> Result<&Reservation, LedgerError> {
        match self.find(id).map(Reservation::is_cancelled) {
            None => Err(LedgerError::NotFound(*id)),
            Some(true) => Err(LedgerError::AlreadyCancelled(*id)),
            Some(false) => self
                .cancel_first(cabin, |r| r.id == *id)
                .ok_or(LedgerError::NotFound(*id)),
        }
    }

    pub fn find(&self, id: &Uuid) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == *id)
    }

    /// All reservations in booking order, cancelled ones included.
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn active(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter().filter(|r| r.is_active())
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Reservation not found: {0}")]
    NotFound(Uuid),

    #[error("Reservation already cancelled: {0}")]
    AlreadyCancelled(Uuid),
}
