use crate::flight::Flight;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use volare_catalog::SeatClass;

/// Optional filters; an empty query matches every flight.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>, // Departure day only, time is ignored
}

impl FlightQuery {
    pub fn matches(&self, flight: &Flight) -> bool {
        let origin_ok = self
            .origin
            .as_deref()
            .map_or(true, |o| flight.origin.eq_ignore_ascii_case(o.trim()));
        let destination_ok = self
            .destination
            .as_deref()
            .map_or(true, |d| flight.destination.eq_ignore_ascii_case(d.trim()));
        let date_ok = self
            .date
            .map_or(true, |d| flight.departure_time.date() == d);

        origin_ok && destination_ok && date_ok
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightOption {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub ticket_price: f64,
    pub economy_remaining: u32,
    pub business_remaining: u32,
    pub first_class_remaining: u32,
    pub is_full: bool,
}

impl From<&Flight> for FlightOption {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            departure_time: flight.departure_time,
            ticket_price: flight.ticket_price,
            economy_remaining: flight.remaining(SeatClass::Economy),
            business_remaining: flight.remaining(SeatClass::Business),
            first_class_remaining: flight.remaining(SeatClass::FirstClass),
            is_full: flight.is_full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volare_catalog::CabinInventory;

    fn flight(number: &str, origin: &str, destination: &str, day: u32) -> Flight {
        let departure = NaiveDate::from_ymd_opt(2024, 12, day)
            .unwrap()
            .and_hms_opt(14, 45, 0)
            .unwrap();
        Flight::new(number, origin, destination, departure, 250.0, CabinInventory::new(3, 2, 0))
    }

    #[test]
    fn test_query_deserialization() {
        let json = r#"
            {
                "origin": "JFK",
                "date": "2024-12-25"
            }
        "#;
        let query: FlightQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.origin.as_deref(), Some("JFK"));
        assert!(query.destination.is_none());
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 12, 25));
    }

    #[test]
    fn test_query_filters() {
        let jfk_lhr = flight("BA1", "JFK", "LHR", 25);
        let jfk_cdg = flight("AF2", "JFK", "CDG", 26);

        let query = FlightQuery {
            origin: Some("jfk".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&jfk_lhr));
        assert!(query.matches(&jfk_cdg));

        let query = FlightQuery {
            destination: Some("LHR".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 12, 25),
            ..Default::default()
        };
        assert!(query.matches(&jfk_lhr));
        assert!(!query.matches(&jfk_cdg));
    }

    #[test]
    fn test_option_reports_remaining_seats() {
        let option = FlightOption::from(&flight("BA1", "JFK", "LHR", 25));
        assert_eq!(option.economy_remaining, 3);
        assert_eq!(option.business_remaining, 2);
        assert_eq!(option.first_class_remaining, 0);
        assert!(!option.is_full);
    }
}
