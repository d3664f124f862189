use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use volare_catalog::{RefundPolicy, SeatClass};
use volare_shared::Masked;

/// Reservation status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

/// Traveller details captured at booking time.
///
/// Names are not unique; two passengers may share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub special_request: Option<String>,
}

impl Passenger {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        special_request: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: Masked(email.into()),
            phone: Masked(phone.into()),
            special_request: special_request.filter(|r| !r.trim().is_empty()),
        }
    }

    /// Case-insensitive name comparison used for cancellation lookups.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// One passenger holding one seat on one flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub passenger: Passenger,
    pub flight_number: String,
    pub seat_class: SeatClass,
    pub seat_number: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn new(passenger: Passenger, flight_number: String, seat_class: SeatClass, seat_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            passenger,
            flight_number,
            seat_class,
            seat_number,
            status: ReservationStatus::Active,
            created_at: Utc::now(),
            cancelled_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    /// Active → Cancelled. Returns false if it was already cancelled.
    pub(crate) fn cancel(&mut self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        self.status = ReservationStatus::Cancelled;
        self.cancelled_at = Some(Utc::now());
        true
    }

    /// Refund owed for this seat; computed on demand, never stored.
    pub fn refund_amount(&self, policy: &RefundPolicy, ticket_price: f64) -> f64 {
        policy.refund_amount(self.seat_class, ticket_price)
    }
}
