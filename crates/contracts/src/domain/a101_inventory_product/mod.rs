pub mod aggregate;

pub use aggregate::{InventoryProduct, StockStatus};
