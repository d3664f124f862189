use chrono::NaiveDate;
use std::io::Cursor;
use volare_cli::{ExitReason, Shell, Terminal};
use volare_core::{
    CabinInventory, CredentialRepository, Flight, FlightCatalog, RefundPolicy, RepositoryError, SeatClass,
};

struct StaticCredentials;

impl CredentialRepository for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<bool, RepositoryError> {
        Ok(username == "agent" && password == "s3cret")
    }
}

fn catalog() -> FlightCatalog {
    let departure = NaiveDate::from_ymd_opt(2024, 12, 25)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let mut catalog = FlightCatalog::new(RefundPolicy::default());
    catalog
        .add_flight(Flight::new("AA100", "JFK", "LAX", departure, 500.0, CabinInventory::new(2, 0, 0)))
        .unwrap();
    catalog
}

fn run_script(catalog: &mut FlightCatalog, script: &str) -> (ExitReason, String) {
    run_bytes(catalog, script.as_bytes())
}

fn run_bytes(catalog: &mut FlightCatalog, input: &[u8]) -> (ExitReason, String) {
    let mut out = Vec::new();
    let terminal = Terminal::new(Cursor::new(input.to_vec()), &mut out);
    let reason = Shell::new(catalog, &StaticCredentials, terminal).run().unwrap();
    (reason, String::from_utf8(out).unwrap())
}

#[test]
fn test_book_rebook_cancel_through_menu() {
    let mut catalog = catalog();
    let script = "agent\ns3cret\n\
                  2\nAA100\nAlice\nalice@example.com\n555-0100\n\neconomy\n1\n\
                  2\naa100\nBob\nbob@example.com\n555-0101\nAisle please\nEconomy\n1\n\
                  4\nalice\n\
                  3\n\
                  6\n";

    let (reason, output) = run_script(&mut catalog, script);

    assert_eq!(reason, ExitReason::Exit);
    assert!(output.contains("Login successful!"));
    assert!(output.contains("Reservation successful!"));
    assert!(output.contains("Seat 1 is not available in Economy on flight AA100"));
    assert!(output.contains("Reservation cancelled for passenger: Alice"));
    assert!(output.contains("Refund amount: 50.00"));
    assert!(output.contains("Cancelled: Yes"));
    assert!(output.contains("Goodbye!"));

    let flight = catalog.find_by_number("AA100").unwrap();
    assert_eq!(flight.available_seats(SeatClass::Economy), vec!["1", "2"]);
    assert_eq!(flight.reservations().len(), 1);
}

#[test]
fn test_failures_are_reported_distinctly() {
    let mut catalog = catalog();
    let script = "agent\nwrong\n\
                  agent\ns3cret\n\
                  2\nZZ999\n\
                  2\nAA100\nCarol\nc@example.com\n1\n\npremium\n\
                  2\nAA100\nCarol\nc@example.com\n1\n\nbusiness\n\
                  4\nNobody\n\
                  9\n";

    let (reason, output) = run_script(&mut catalog, script);

    assert_eq!(reason, ExitReason::EndOfInput);
    assert!(output.contains("Invalid username or password. Please try again."));
    assert!(output.contains("Flight not found. Please enter a valid flight number."));
    assert!(output.contains("Unknown seat class: premium"));
    assert!(output.contains("Sorry, no available seats in Business class."));
    assert!(output.contains("No active reservation found for passenger: Nobody"));
    assert!(output.contains("Invalid choice. Please enter a valid option."));
    assert!(catalog.find_by_number("AA100").unwrap().reservations().is_empty());
}

#[test]
fn test_logout_requires_new_login() {
    let mut catalog = catalog();
    let script = "agent\ns3cret\n5\nagent\ns3cret\n1\n\n\n\n6\n";

    let (reason, output) = run_script(&mut catalog, script);

    assert_eq!(reason, ExitReason::Exit);
    assert!(output.contains("Logout successful!"));
    assert_eq!(output.matches("Enter username: ").count(), 2);
    assert!(output.contains("AA100 - JFK to LAX Departure: 2024-12-25 09:30:00 | Economy 2, Business 0, FirstClass 0 | Price 500.00"));
}

#[test]
fn test_cancel_by_reservation_id() {
    let mut catalog = catalog();
    let (_, output) = run_script(
        &mut catalog,
        "agent\ns3cret\n2\nAA100\nDana\nd@example.com\n1\n\nEconomy\n2\n6\n",
    );
    let id = output
        .lines()
        .find_map(|line| line.strip_prefix("Reservation: "))
        .unwrap()
        .to_string();

    let (_, output) = run_script(&mut catalog, &format!("agent\ns3cret\n4\n{id}\n6\n"));
    assert!(output.contains("Reservation cancelled for passenger: Dana"));

    let (_, output) = run_script(&mut catalog, &format!("agent\ns3cret\n4\n{id}\n6\n"));
    assert!(output.contains(&format!("Reservation {id} is already cancelled")));
}

#[test]
fn test_search_by_departure_date() {
    let mut catalog = catalog();
    let script = "agent\ns3cret\n\
                  1\n\n\n2024-12-26\n\
                  1\nJFK\n\n2024-12-25\n\
                  1\n\n\nChristmas\n\
                  6\n";

    let (_, output) = run_script(&mut catalog, script);

    assert_eq!(output.matches("No flights match.").count(), 1);
    assert_eq!(output.matches("AA100 - JFK to LAX Departure: 2024-12-25 09:30:00 |").count(), 1);
    assert!(output.contains("Invalid date: Christmas"));
}

#[test]
fn test_invalid_utf8_input_keeps_session_alive() {
    let mut catalog = catalog();
    let mut input = b"agent\ns3cret\n2\nAA100\nAlice\na@example.com\n1\n\nEconomy\n1\n".to_vec();
    input.extend_from_slice(b"4\nJos\xe9\n");
    input.extend_from_slice(b"6\n");

    let (reason, output) = run_bytes(&mut catalog, &input);

    assert_eq!(reason, ExitReason::Exit);
    assert!(output.contains("No active reservation found for passenger: Jos\u{FFFD}"));
    let flight = catalog.find_by_number("AA100").unwrap();
    assert!(flight.reservations().list()[0].is_active());
    assert_eq!(flight.available_seats(SeatClass::Economy), vec!["2"]);
}
