use crate::shared::list_engine::predicates::{classify_stock, margin_percent, stock_fill_percent};
use crate::shared::list_engine::record::{ListRecord, Searchable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Stock status
// ============================================================================

/// Статус остатка товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Код статуса (совпадает с ключом вкладки)
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in-stock" => Some(StockStatus::InStock),
            "low-stock" => Some(StockStatus::LowStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryProduct {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(rename = "totalStock")]
    pub total_stock: i64,

    #[serde(rename = "maxStock", default)]
    pub max_stock: i64,

    /// Точка дозаказа; без неё остаётся только деление на «есть» / «нет»
    #[serde(rename = "reorderPoint", default)]
    pub reorder_point: i64,

    #[serde(rename = "unitPrice", default)]
    pub unit_price: i64,

    #[serde(rename = "costPrice", default)]
    pub cost_price: i64,

    #[serde(rename = "activeBatches", default)]
    pub active_batches: i64,

    /// ISO-8601, UTC
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
}

impl InventoryProduct {
    pub fn stock_status(&self) -> StockStatus {
        classify_stock(self.total_stock, self.reorder_point)
    }

    /// Наценка к себестоимости, %
    pub fn margin_percent(&self) -> i64 {
        margin_percent(self.unit_price, self.cost_price)
    }

    /// Заполненность склада для полосы остатка, 0..=100
    pub fn stock_fill_percent(&self) -> f64 {
        stock_fill_percent(self.total_stock, self.max_stock)
    }
}

impl ListRecord for InventoryProduct {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for InventoryProduct {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.category.as_str()]
    }
}
