pub mod aggregate;

pub use aggregate::{MovementType, StockMovement};
