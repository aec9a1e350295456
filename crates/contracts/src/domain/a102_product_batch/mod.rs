pub mod aggregate;

pub use aggregate::{BatchStatus, ProductBatch};
