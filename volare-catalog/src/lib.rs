pub mod seat_class;
pub mod refund;
pub mod inventory;

pub use seat_class::{SeatClass, SeatClassError};
pub use refund::RefundPolicy;
pub use inventory::{CabinInventory, InventoryError, SeatInventory};
