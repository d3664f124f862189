use crate::error::PersistenceError;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, warn};
use volare_catalog::{CabinInventory, SeatClass};
use volare_core::{Flight, FlightRepository, RepositoryError};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// number, origin, destination, departure, economy, business, first class, price
const FIELD_COUNT: usize = 8;

/// Largest seat count accepted for one class; pools are allocated per seat.
pub const MAX_SEATS_PER_CLASS: u32 = 1_000;

/// Flights stored one per line in a comma-separated file.
///
/// Seat counts are the *remaining* seats at save time, so a reload rebuilds
/// smaller pools numbered from 1 and forgets which seats were taken.
pub struct FlatFileFlightRepository {
    path: PathBuf,
}

impl FlatFileFlightRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every well-formed record. Malformed lines are logged and skipped;
    /// only a failure to open the file is an error.
    pub fn read_flights(&self) -> Result<Vec<Flight>, PersistenceError> {
        let file = File::open(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut flights = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let parsed = result.map_err(PersistenceError::from).and_then(|record| {
                let line = record.position().map_or(idx as u64 + 1, |p| p.line());
                parse_flight(&record, line)
            });

            match parsed {
                Ok(flight) => flights.push(flight),
                Err(e) => warn!(path = %self.path.display(), "Skipping flight record: {}", e),
            }
        }

        debug!(path = %self.path.display(), count = flights.len(), "Flight records read");
        Ok(flights)
    }

    pub fn write_flights(&self, flights: &[Flight]) -> Result<(), PersistenceError> {
        let file = File::create(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        for flight in flights {
            writer.write_record(&to_record(flight))?;
        }
        writer.flush().map_err(|e| PersistenceError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = flights.len(), "Flight records written");
        Ok(())
    }
}

impl FlightRepository for FlatFileFlightRepository {
    fn load_flights(&self) -> Result<Vec<Flight>, RepositoryError> {
        Ok(self.read_flights()?)
    }

    fn save_flights(&self, flights: &[Flight]) -> Result<(), RepositoryError> {
        Ok(self.write_flights(flights)?)
    }
}

pub fn parse_flight(record: &StringRecord, line: u64) -> Result<Flight, PersistenceError> {
    let malformed = |reason: String| PersistenceError::MalformedRecord { line, reason };

    if record.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        )));
    }
    if record[0].is_empty() {
        return Err(malformed("empty flight number".to_string()));
    }

    let departure_time = NaiveDateTime::parse_from_str(&record[3], TIMESTAMP_FORMAT).map_err(|_| {
        PersistenceError::InvalidTimestamp {
            line,
            value: record[3].to_string(),
        }
    })?;

    let mut counts = [0u32; 3];
    for (slot, class) in SeatClass::ALL.iter().enumerate() {
        let raw = &record[4 + slot];
        counts[slot] = raw
            .parse()
            .ok()
            .filter(|count: &u32| *count <= MAX_SEATS_PER_CLASS)
            .ok_or_else(|| malformed(format!("invalid {} seat count {:?}", class, raw)))?;
    }

    let ticket_price: f64 = record[7]
        .parse()
        .ok()
        .filter(|price: &f64| price.is_finite() && *price >= 0.0)
        .ok_or_else(|| malformed(format!("invalid ticket price {:?}", &record[7])))?;

    Ok(Flight::new(
        &record[0],
        &record[1],
        &record[2],
        departure_time,
        ticket_price,
        CabinInventory::new(counts[0], counts[1], counts[2]),
    ))
}

fn to_record(flight: &Flight) -> [String; FIELD_COUNT] {
    [
        flight.flight_number.clone(),
        flight.origin.clone(),
        flight.destination.clone(),
        flight.departure_time.format(TIMESTAMP_FORMAT).to_string(),
        flight.remaining(SeatClass::Economy).to_string(),
        flight.remaining(SeatClass::Business).to_string(),
        flight.remaining(SeatClass::FirstClass).to_string(),
        flight.ticket_price.to_string(),
    ]
}
