use crate::error::{BookingError, BookingResult};
use crate::flight::Flight;
use crate::repository::FlightRepository;
use crate::search::{FlightOption, FlightQuery};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;
use volare_catalog::{RefundPolicy, SeatClass};
use volare_order::{LedgerError, Passenger, Reservation};

/// Outcome of a successful cancellation.
#[derive(Debug, Clone, Serialize)]
pub struct Cancellation {
    pub reservation: Reservation,
    pub ticket_price: f64,
    pub refund_amount: f64,
}

impl Cancellation {
    fn new(reservation: &Reservation, refunds: &RefundPolicy, ticket_price: f64) -> Self {
        Self {
            refund_amount: reservation.refund_amount(refunds, ticket_price),
            reservation: reservation.clone(),
            ticket_price,
        }
    }
}

/// All known flights, in load order. The single entry point for searching,
/// booking and cancelling.
#[derive(Debug, Default)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
    refunds: RefundPolicy,
}

impl FlightCatalog {
    pub fn new(refunds: RefundPolicy) -> Self {
        Self {
            flights: Vec::new(),
            refunds,
        }
    }

    /// Populate a catalog from `repo`. A repository failure is logged and
    /// yields an empty catalog; duplicate flight numbers are skipped.
    pub fn load<R: FlightRepository + ?Sized>(repo: &R, refunds: RefundPolicy) -> Self {
        let mut catalog = Self::new(refunds);

        match repo.load_flights() {
            Ok(flights) => {
                for flight in flights {
                    if let Err(e) = catalog.add_flight(flight) {
                        warn!("Skipping flight record: {}", e);
                    }
                }
                info!("Loaded {} flights", catalog.len());
            }
            Err(e) => warn!("Error loading flights data, starting with an empty catalog: {}", e),
        }

        catalog
    }

    pub fn save<R: FlightRepository + ?Sized>(&self, repo: &R) -> Result<(), crate::RepositoryError> {
        repo.save_flights(&self.flights)?;
        info!("Saved {} flights", self.flights.len());
        Ok(())
    }

    pub fn add_flight(&mut self, flight: Flight) -> BookingResult<()> {
        if self.find_by_number(&flight.flight_number).is_some() {
            return Err(BookingError::DuplicateFlight(flight.flight_number));
        }
        self.flights.push(flight);
        Ok(())
    }

    pub fn all_flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn refund_policy(&self) -> &RefundPolicy {
        &self.refunds
    }

    /// Case-insensitive match on the flight number; first hit wins.
    pub fn find_by_number(&self, flight_number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.matches_number(flight_number))
    }

    fn find_by_number_mut(&mut self, flight_number: &str) -> BookingResult<&mut Flight> {
        self.flights
            .iter_mut()
            .find(|f| f.matches_number(flight_number))
            .ok_or_else(|| BookingError::FlightNotFound(flight_number.trim().to_string()))
    }

    pub fn search(&self, query: &FlightQuery) -> Vec<FlightOption> {
        let options: Vec<FlightOption> = self
            .flights
            .iter()
            .filter(|f| query.matches(f))
            .map(FlightOption::from)
            .collect();
        debug!(?query, results = options.len(), "Flight search");
        options
    }

    /// Lookup, availability check, seat booking and ledger entry, in that
    /// order; the first failing stage decides the error.
    pub fn book_seat(
        &mut self,
        flight_number: &str,
        class: SeatClass,
        seat: &str,
        passenger: Passenger,
    ) -> BookingResult<Reservation> {
        let flight = self.find_by_number_mut(flight_number)?;
        let reservation = flight.book(class, seat.trim(), passenger)?.clone();

        info!(
            reservation_id = %reservation.id,
            flight = %reservation.flight_number,
            class = %class,
            seat = %reservation.seat_number,
            "Seat booked"
        );
        Ok(reservation)
    }

    /// [`book_seat`](Self::book_seat) with the class given as user input.
    pub fn book_seat_by_name(
        &mut self,
        flight_number: &str,
        raw_class: &str,
        seat: &str,
        passenger: Passenger,
    ) -> BookingResult<Reservation> {
        self.find_by_number_mut(flight_number)?;
        let class: SeatClass = raw_class.parse()?;
        self.book_seat(flight_number, class, seat, passenger)
    }

    /// Cancel the first active reservation held under `passenger_name`,
    /// scanning flights in catalog order.
    pub fn cancel_reservation(&mut self, passenger_name: &str) -> BookingResult<Cancellation> {
        let refunds = &self.refunds;
        self.flights
            .iter_mut()
            .find_map(|flight| {
                let ticket_price = flight.ticket_price;
                flight
                    .cancel_by_passenger(passenger_name)
                    .map(|reservation| Cancellation::new(reservation, refunds, ticket_price))
            })
            .ok_or_else(|| BookingError::PassengerNotFound(passenger_name.trim().to_string()))
    }

    /// Cancel one reservation by id. A reservation that was already cancelled
    /// is reported as such rather than as missing.
    pub fn cancel_reservation_by_id(&mut self, id: &Uuid) -> BookingResult<Cancellation> {
        let flight = self
            .flights
            .iter_mut()
            .find(|f| f.reservations().find(id).is_some())
            .ok_or(BookingError::ReservationNotFound(*id))?;

        let ticket_price = flight.ticket_price;
        let reservation = flight.cancel_by_id(id).map_err(|e| match e {
            LedgerError::NotFound(id) => BookingError::ReservationNotFound(id),
            LedgerError::AlreadyCancelled(id) => BookingError::ReservationAlreadyCancelled(id),
        })?;
        Ok(Cancellation::new(reservation, &self.refunds, ticket_price))
    }
}
