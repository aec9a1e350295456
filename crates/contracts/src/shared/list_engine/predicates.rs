//! Predicates and derived scalars for inventory records.
//!
//! Everything here is pure: no clock reads, no global data. Callers pass
//! `now` and the batch index explicitly.

use crate::domain::a101_inventory_product::{InventoryProduct, StockStatus};
use crate::domain::a102_product_batch::{BatchStatus, ProductBatch};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Classify a stock level against its reorder point.
///
/// `0` is out of stock, `1..=reorder_point` is low, anything above is in
/// stock. With `reorder_point == 0` only out/in are reachable.
pub fn classify_stock(total_stock: i64, reorder_point: i64) -> StockStatus {
    if total_stock == 0 {
        StockStatus::OutOfStock
    } else if total_stock > 0 && total_stock <= reorder_point {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Batches grouped by product id. Shared, read-only.
#[derive(Debug, Clone, Default)]
pub struct BatchIndex(Arc<HashMap<String, Vec<ProductBatch>>>);

impl BatchIndex {
    pub fn new(batches: HashMap<String, Vec<ProductBatch>>) -> Self {
        Self(Arc::new(batches))
    }

    /// Batches of a product; unknown id gives an empty slice.
    pub fn batches_for(&self, product_id: &str) -> &[ProductBatch] {
        self.0.get(product_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// True iff any batch of the product is near expiry.
pub fn is_expiring_soon(product_id: &str, batches: &BatchIndex) -> bool {
    batches
        .batches_for(product_id)
        .iter()
        .any(|b| b.status == BatchStatus::NearExpiry)
}

/// Coarse "time ago" label for a timestamp.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
/// Each unit is truncated, not rounded. Timestamps in the future read as
/// "Just now". Unparseable input is returned unchanged.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use contracts::shared::list_engine::predicates::time_ago;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
/// assert_eq!(time_ago("2024-03-15T10:30:00Z", now), "1h ago");
/// ```
pub fn time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };

    let diff = now.signed_duration_since(then);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days == 1 {
        "1d ago".to_string()
    } else {
        format!("{}d ago", days)
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Number of records satisfying `predicate`.
pub fn count_by_predicate<R, F>(collection: &[R], predicate: F) -> usize
where
    F: Fn(&R) -> bool,
{
    collection.iter().filter(|r| predicate(r)).count()
}

pub fn low_stock_count(products: &[InventoryProduct]) -> usize {
    count_by_predicate(products, |p| p.stock_status() == StockStatus::LowStock)
}

pub fn expiring_soon_count(products: &[InventoryProduct], batches: &BatchIndex) -> usize {
    count_by_predicate(products, |p| is_expiring_soon(&p.id, batches))
}

/// Markup over cost in whole percent; 0 when cost is unknown.
pub fn margin_percent(unit_price: i64, cost_price: i64) -> i64 {
    if cost_price == 0 {
        return 0;
    }
    let ratio = (unit_price - cost_price) as f64 / cost_price as f64 * 100.0;
    // половина округляется вверх
    (ratio + 0.5).floor() as i64
}

/// Fill level of the stock bar, clamped to `0.0..=100.0`.
pub fn stock_fill_percent(current: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (current as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

/// Sum of `current_stock` over the given batches.
pub fn batch_stock_total(batches: &[ProductBatch]) -> i64 {
    batches.iter().map(|b| b.current_stock).sum()
}

/// Rounded share of one location in the grand total; 0 for an empty total.
pub fn distribution_share_percent(row_total: i64, grand_total: i64) -> i64 {
    if grand_total <= 0 {
        return 0;
    }
    (row_total as f64 / grand_total as f64 * 100.0 + 0.5).floor() as i64
}
