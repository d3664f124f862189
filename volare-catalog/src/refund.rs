use crate::seat_class::SeatClass;
use serde::{Deserialize, Serialize};

/// Share of the ticket price returned on cancellation, per seat class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundPolicy {
    pub economy: f64,
    pub business: f64,
    pub first_class: f64,
}

impl Default for RefundPolicy {
    fn default() -> Self {
        Self {
            economy: 0.10,
            business: 0.15,
            first_class: 0.20,
        }
    }
}

impl RefundPolicy {
    pub fn refund_fraction(&self, class: SeatClass) -> f64 {
        match class {
            SeatClass::Economy => self.economy,
            SeatClass::Business => self.business,
            SeatClass::FirstClass => self.first_class,
        }
    }

    /// Like [`refund_fraction`](Self::refund_fraction) for a raw class name;
    /// anything unrecognized refunds nothing.
    pub fn refund_fraction_for(&self, raw_class: &str) -> f64 {
        raw_class
            .parse::<SeatClass>()
            .map(|class| self.refund_fraction(class))
            .unwrap_or(0.0)
    }

    /// Unrounded; currency rounding happens at display time.
    pub fn refund_amount(&self, class: SeatClass, ticket_price: f64) -> f64 {
        self.refund_fraction(class) * ticket_price
    }
}
