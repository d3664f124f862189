use crate::session::Session;
use crate::terminal::Terminal;
use chrono::{NaiveDate, Utc};
use std::io::{self, BufRead, Write};
use tracing::info;
use uuid::Uuid;
use volare_core::{
    BookingError, CredentialRepository, Flight, FlightCatalog, FlightQuery, Passenger, SeatClass,
};
use volare_shared::Masked;

/// Why the menu loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Exit,
    EndOfInput,
}

enum Flow {
    Continue,
    Stop(ExitReason),
}

// Bail out of the current action when the input runs dry.
macro_rules! ask {
    ($term:expr, $msg:expr) => {
        match $term.prompt($msg)? {
            Some(answer) => answer,
            None => return Ok(Flow::Stop(ExitReason::EndOfInput)),
        }
    };
}

/// The interactive menu: login, then search / book / list / cancel until the
/// operator exits.
pub struct Shell<'a, R, W> {
    catalog: &'a mut FlightCatalog,
    credentials: &'a dyn CredentialRepository,
    terminal: Terminal<R, W>,
    session: Option<Session>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        catalog: &'a mut FlightCatalog,
        credentials: &'a dyn CredentialRepository,
        terminal: Terminal<R, W>,
    ) -> Self {
        Self {
            catalog,
            credentials,
            terminal,
            session: None,
        }
    }

    pub fn run(&mut self) -> io::Result<ExitReason> {
        loop {
            if let Flow::Stop(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    fn step(&mut self) -> io::Result<Flow> {
        if self.session.is_none() {
            return self.login();
        }

        let t = &mut self.terminal;
        t.blank()?;
        t.say("Welcome to Volare Flight Reservations")?;
        t.say("1. Search Flights")?;
        t.say("2. Make Reservation")?;
        t.say("3. Display Reservations")?;
        t.say("4. Cancel Reservation")?;
        t.say("5. Logout")?;
        t.say("6. Exit")?;
        let choice = ask!(t, "Enter your choice: ");

        match choice.trim() {
            "1" => self.search_flights(),
            "2" => self.make_reservation(),
            "3" => self.display_reservations(),
            "4" => self.cancel_reservation(),
            "5" => {
                if let Some(session) = self.session.take() {
                    let minutes = (Utc::now() - session.started_at).num_minutes();
                    info!(username = %session.username, minutes, "Logout");
                }
                self.terminal.say("Logout successful!")?;
                Ok(Flow::Continue)
            }
            "6" => {
                self.terminal.say("Thank you for using Volare. Goodbye!")?;
                Ok(Flow::Stop(ExitReason::Exit))
            }
            _ => {
                self.terminal.say("Invalid choice. Please enter a valid option.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn login(&mut self) -> io::Result<Flow> {
        let username = ask!(self.terminal, "Enter username: ");
        let password = Masked(ask!(self.terminal, "Enter password: "));

        match Session::authenticate(self.credentials, username.trim(), &password) {
            Some(session) => {
                self.session = Some(session);
                self.terminal.say("Login successful!")?;
            }
            None => self.terminal.say("Invalid username or password. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn search_flights(&mut self) -> io::Result<Flow> {
        let origin = ask!(self.terminal, "Filter by origin (blank for any): ");
        let destination = ask!(self.terminal, "Filter by destination (blank for any): ");
        let date = match non_blank(ask!(self.terminal, "Filter by departure date YYYY-MM-DD (blank for any): ")) {
            None => None,
            Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    self.terminal.say(format!("Invalid date: {}", raw))?;
                    return Ok(Flow::Continue);
                }
            },
        };
        let query = FlightQuery {
            origin: non_blank(origin),
            destination: non_blank(destination),
            date,
        };

        let options = self.catalog.search(&query);
        if options.is_empty() {
            self.terminal.say("No flights match.")?;
        }
        for option in options {
            self.terminal.say(format!(
                "{} - {} to {} Departure: {} | Economy {}, Business {}, FirstClass {} | Price {}{}",
                option.flight_number,
                option.origin,
                option.destination,
                option.departure_time,
                option.economy_remaining,
                option.business_remaining,
                option.first_class_remaining,
                money(option.ticket_price),
                if option.is_full { " (full)" } else { "" },
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn make_reservation(&mut self) -> io::Result<Flow> {
        self.terminal.say("Available Flights:")?;
        for flight in self.catalog.all_flights() {
            self.terminal.say(flight_line(flight))?;
        }

        let flight_number = ask!(self.terminal, "Enter the flight number you want to book: ");
        if self.catalog.find_by_number(&flight_number).is_none() {
            self.terminal.say("Flight not found. Please enter a valid flight number.")?;
            return Ok(Flow::Continue);
        }

        let name = ask!(self.terminal, "Enter passenger name: ");
        let email = ask!(self.terminal, "Enter passenger email: ");
        let phone = ask!(self.terminal, "Enter passenger phone number: ");
        let special_request = ask!(self.terminal, "Enter any special request (optional): ");
        let passenger = Passenger::new(name.trim(), email.trim(), phone.trim(), Some(special_request));

        let raw_class = ask!(self.terminal, "Enter seat class (Economy/Business/FirstClass): ");
        let class: SeatClass = match raw_class.parse() {
            Ok(class) => class,
            Err(e) => {
                self.terminal.say(BookingError::from(e))?;
                return Ok(Flow::Continue);
            }
        };

        let seats = match self.catalog.find_by_number(&flight_number) {
            Some(flight) if flight.has_available(class) => flight.available_seats(class),
            _ => {
                self.terminal.say(format!("Sorry, no available seats in {} class.", class))?;
                return Ok(Flow::Continue);
            }
        };
        self.terminal.say(format!("Available seats in {} class:", class))?;
        self.terminal.say(seats.join(" "))?;

        let seat = ask!(self.terminal, "Enter the seat number you want to book: ");
        match self.catalog.book_seat(&flight_number, class, &seat, passenger) {
            Ok(reservation) => {
                let t = &mut self.terminal;
                t.say("Reservation successful! Your reservation details:")?;
                t.say(format!("Reservation: {}", reservation.id))?;
                if let Some(flight) = self.catalog.find_by_number(&reservation.flight_number) {
                    t.say(format!(
                        "Flight: {} - {} to {}",
                        flight.flight_number, flight.origin, flight.destination
                    ))?;
                    t.say(format!("Departure Date: {}", flight.departure_time))?;
                }
                t.say(format!("Passenger: {}", reservation.passenger.name))?;
                t.say(format!("Seat Class: {}", reservation.seat_class))?;
                t.say(format!("Seat Number: {}", reservation.seat_number))?;
            }
            Err(e) => self.terminal.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_reservations(&mut self) -> io::Result<Flow> {
        let policy = self.catalog.refund_policy();
        let t = &mut self.terminal;

        for flight in self.catalog.all_flights() {
            t.say(format!(
                "Flight: {} - {} to {}",
                flight.flight_number, flight.origin, flight.destination
            ))?;

            let ledger = flight.reservations();
            if ledger.is_empty() {
                t.say("No reservations for this flight.")?;
            }
            for reservation in ledger.list() {
                t.say(format!("Reservation: {}", reservation.id))?;
                t.say(format!("Passenger: {}", reservation.passenger.name))?;
                t.say(format!("Seat Class: {}", reservation.seat_class))?;
                t.say(format!("Seat Number: {}", reservation.seat_number))?;
                t.say(format!("Ticket Price: {}", money(flight.ticket_price)))?;
                t.say(format!(
                    "Refund Amount: {}",
                    money(reservation.refund_amount(policy, flight.ticket_price))
                ))?;
                t.say(format!(
                    "Cancelled: {}",
                    if reservation.is_cancelled() { "Yes" } else { "No" }
                ))?;
                t.blank()?;
            }
            t.blank()?;
        }
        Ok(Flow::Continue)
    }

    fn cancel_reservation(&mut self) -> io::Result<Flow> {
        let answer = ask!(self.terminal, "Enter passenger name or reservation id: ");
        let answer = answer.trim();

        let result = match Uuid::parse_str(answer) {
            Ok(id) => self.catalog.cancel_reservation_by_id(&id),
            Err(_) => self.catalog.cancel_reservation(answer),
        };

        match result {
            Ok(cancellation) => {
                self.terminal.say(format!(
                    "Reservation cancelled for passenger: {}",
                    cancellation.reservation.passenger.name
                ))?;
                self.terminal
                    .say(format!("Refund amount: {}", money(cancellation.refund_amount)))?;
            }
            Err(e) => self.terminal.say(e)?,
        }
        Ok(Flow::Continue)
    }
}

fn flight_line(flight: &Flight) -> String {
    format!(
        "{} - {} to {} Departure: {}",
        flight.flight_number, flight.origin, flight.destination, flight.departure_time
    )
}

// Amounts keep full precision internally; two decimals only on screen.
fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
