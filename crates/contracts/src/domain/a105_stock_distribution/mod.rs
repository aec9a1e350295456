pub mod aggregate;

pub use aggregate::StockDistribution;
