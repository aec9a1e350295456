//! Демонстрационный набор данных склада.
//!
//! JSON встроен в бинарник; `lastUpdated` вычисляется от переданного `now`,
//! чтобы подписи «2h ago» в списке были стабильными.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a101_inventory_product::InventoryProduct;
use contracts::domain::a102_product_batch::ProductBatch;
use contracts::domain::a103_stock_movement::StockMovement;
use contracts::domain::a104_linked_invoice::LinkedInvoice;
use contracts::domain::a105_stock_distribution::StockDistribution;
use contracts::shared::data_source::InMemoryInventory;
use serde::Deserialize;
use std::collections::HashMap;

const MOCK_INVENTORY_JSON: &str = include_str!("mock_inventory.json");

#[derive(Debug, Deserialize)]
struct ProductSeed {
    #[serde(flatten)]
    product: InventoryProduct,

    #[serde(rename = "updatedMinutesAgo", default)]
    updated_minutes_ago: i64,
}

#[derive(Debug, Deserialize)]
struct MockDataset {
    products: Vec<ProductSeed>,
    #[serde(default)]
    batches: HashMap<String, Vec<ProductBatch>>,
    #[serde(default)]
    distribution: HashMap<String, Vec<StockDistribution>>,
    #[serde(default)]
    movements: HashMap<String, Vec<StockMovement>>,
    #[serde(default)]
    invoices: HashMap<String, Vec<LinkedInvoice>>,
}

fn parse_dataset(json: &str, now: DateTime<Utc>) -> Result<InMemoryInventory, serde_json::Error> {
    let dataset: MockDataset = serde_json::from_str(json)?;

    let products = dataset
        .products
        .into_iter()
        .map(|seed| {
            let mut product = seed.product;
            product.last_updated = (now - Duration::minutes(seed.updated_minutes_ago)).to_rfc3339();
            product
        })
        .collect();

    Ok(InMemoryInventory::new(products)
        .with_batches(dataset.batches)
        .with_distribution(dataset.distribution)
        .with_movements(dataset.movements)
        .with_invoices(dataset.invoices))
}

/// Демо-склад; при повреждённом JSON — пустой склад с записью в лог
pub fn mock_inventory(now: DateTime<Utc>) -> InMemoryInventory {
    match parse_dataset(MOCK_INVENTORY_JSON, now) {
        Ok(inventory) => inventory,
        Err(e) => {
            log::error!("Failed to parse mock inventory: {}", e);
            InMemoryInventory::default()
        }
    }
}
