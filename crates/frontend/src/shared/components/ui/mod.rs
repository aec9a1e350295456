pub mod badge;

pub use badge::{status_variant, Badge, StockStatusBadge};
