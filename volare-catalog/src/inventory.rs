use crate::seat_class::SeatClass;

/// Bookable seats of one class on one flight.
///
/// Seats are numbered "1".."N" with N fixed at construction. Each seat has a
/// single availability slot, so a released seat can never appear twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInventory {
    slots: Vec<bool>,
}

impl SeatInventory {
    /// A fully available pool of `capacity` seats.
    pub fn new(capacity: u32) -> Self {
        Self {
            slots: vec![true; capacity as usize],
        }
    }

    pub fn has_available(&self) -> bool {
        self.slots.iter().any(|available| *available)
    }

    pub fn available_count(&self) -> u32 {
        self.slots.iter().filter(|available| **available).count() as u32
    }

    pub fn is_available(&self, seat: &str) -> bool {
        self.slot(seat).map(|idx| self.slots[idx]).unwrap_or(false)
    }

    /// Take `seat` out of the pool. Returns false, leaving the pool untouched,
    /// when the seat is already booked or is not a seat of this pool.
    pub fn book(&mut self, seat: &str) -> bool {
        match self.slot(seat) {
            Some(idx) if self.slots[idx] => {
                self.slots[idx] = false;
                true
            }
            _ => false,
        }
    }

    /// Put `seat` back into the pool. Returns false when the seat was already
    /// available or is unknown.
    pub fn release(&mut self, seat: &str) -> bool {
        match self.slot(seat) {
            Some(idx) if !self.slots[idx] => {
                self.slots[idx] = true;
                true
            }
            Some(_) => {
                tracing::warn!(seat, "Release of a seat that is already available");
                false
            }
            None => false,
        }
    }

    /// Snapshot of the available seat ids in ascending order.
    pub fn list(&self) -> Vec<String> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, available)| **available)
            .map(|(idx, _)| (idx + 1).to_string())
            .collect()
    }

    // Only canonical ids map to a slot: "01", "+1" and "0" do not.
    fn slot(&self, seat: &str) -> Option<usize> {
        let number: usize = seat.parse().ok()?;
        if number == 0 || number > self.slots.len() || number.to_string() != seat {
            return None;
        }
        Some(number - 1)
    }
}

/// The three seat pools of one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinInventory {
    economy: SeatInventory,
    business: SeatInventory,
    first_class: SeatInventory,
}

impl CabinInventory {
    pub fn new(economy: u32, business: u32, first_class: u32) -> Self {
        Self {
            economy: SeatInventory::new(economy),
            business: SeatInventory::new(business),
            first_class: SeatInventory::new(first_class),
        }
    }

    pub fn pool(&self, class: SeatClass) -> &SeatInventory {
        match class {
            SeatClass::Economy => &self.economy,
            SeatClass::Business => &self.business,
            SeatClass::FirstClass => &self.first_class,
        }
    }

    fn pool_mut(&mut self, class: SeatClass) -> &mut SeatInventory {
        match class {
            SeatClass::Economy => &mut self.economy,
            SeatClass::Business => &mut self.business,
            SeatClass::FirstClass => &mut self.first_class,
        }
    }

    pub fn has_available(&self, class: SeatClass) -> bool {
        self.pool(class).has_available()
    }

    pub fn list(&self, class: SeatClass) -> Vec<String> {
        self.pool(class).list()
    }

    pub fn remaining(&self, class: SeatClass) -> u32 {
        self.pool(class).available_count()
    }

    pub fn book(&mut self, class: SeatClass, seat: &str) -> bool {
        self.pool_mut(class).book(seat)
    }

    pub fn release(&mut self, class: SeatClass, seat: &str) -> bool {
        self.pool_mut(class).release(seat)
    }

    /// Availability check followed by the booking itself, reporting which of
    /// the two failed.
    pub fn reserve(&mut self, class: SeatClass, seat: &str) -> Result<(), InventoryError> {
        if !self.has_available(class) {
            return Err(InventoryError::ClassSoldOut(class));
        }
        if !self.book(class, seat) {
            return Err(InventoryError::SeatNotAvailable {
                class,
                seat: seat.to_string(),
            });
        }
        Ok(())
    }

    /// A flight is full once every pool is empty.
    pub fn is_full(&self) -> bool {
        SeatClass::ALL.iter().all(|class| !self.has_available(*class))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("No {0} seats left")]
    ClassSoldOut(SeatClass),

    #[error("{class} seat {seat} is not available")]
    SeatNotAvailable { class: SeatClass, seat: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_inventory_lifecycle() {
        let mut pool = SeatInventory::new(10);
        assert_eq!(pool.available_count(), 10);

        for seat in ["1", "4", "10"] {
            assert!(pool.book(seat));
        }
        assert_eq!(pool.available_count(), 7);
        assert!(!pool.is_available("4"));

        assert!(pool.release("4"));
        assert!(pool.is_available("4"));
        assert_eq!(pool.available_count(), 8);
        assert_eq!(pool.list(), vec!["2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_booking_unknown_seat_leaves_pool_unchanged() {
        let mut pool = SeatInventory::new(3);
        let before = pool.clone();

        for seat in ["0", "4", "01", "+1", "A", ""] {
            assert!(!pool.book(seat), "seat {seat:?} should not be bookable");
        }
        assert_eq!(pool, before);

        assert!(pool.book("2"));
        let after_first = pool.clone();
        assert!(!pool.book("2"));
        assert_eq!(pool, after_first);
    }

    #[test]
    fn test_release_never_duplicates() {
        let mut pool = SeatInventory::new(2);
        assert!(pool.book("1"));
        assert!(pool.release("1"));
        assert!(!pool.release("1"));
        assert_eq!(pool.list(), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_available_and_booked_partition_capacity() {
        let mut pool = SeatInventory::new(6);
        let mut booked = BTreeSet::new();
        for seat in ["2", "3", "6"] {
            assert!(pool.book(seat));
            booked.insert(seat.to_string());
        }

        let available: BTreeSet<String> = pool.list().into_iter().collect();
        assert!(available.is_disjoint(&booked));

        let union: BTreeSet<String> = available.union(&booked).cloned().collect();
        let all: BTreeSet<String> = (1..=6).map(|n| n.to_string()).collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_empty_pool() {
        let pool = SeatInventory::new(0);
        assert!(!pool.has_available());
        assert!(pool.list().is_empty());
        assert_eq!(pool.available_count(), 0);
    }

    #[test]
    fn test_cabin_reserve_reports_failure_stage() {
        let mut cabin = CabinInventory::new(1, 2, 0);

        assert_eq!(
            cabin.reserve(SeatClass::FirstClass, "1"),
            Err(InventoryError::ClassSoldOut(SeatClass::FirstClass))
        );
        assert_eq!(
            cabin.reserve(SeatClass::Business, "7"),
            Err(InventoryError::SeatNotAvailable {
                class: SeatClass::Business,
                seat: "7".to_string(),
            })
        );

        cabin.reserve(SeatClass::Economy, "1").unwrap();
        assert_eq!(cabin.remaining(SeatClass::Economy), 0);
        assert_eq!(cabin.remaining(SeatClass::Business), 2);
    }

    #[test]
    fn test_full_is_derived_from_all_pools() {
        let mut cabin = CabinInventory::new(1, 1, 1);
        assert!(!cabin.is_full());

        cabin.book(SeatClass::Economy, "1");
        assert!(!cabin.is_full());
        cabin.book(SeatClass::Business, "1");
        cabin.book(SeatClass::FirstClass, "1");
        assert!(cabin.is_full());

        cabin.release(SeatClass::Business, "1");
        assert!(!cabin.is_full());
    }
}
