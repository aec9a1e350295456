use serde::{Deserialize, Serialize};

/// Состояние партии по сроку годности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchStatus {
    Fresh,
    NearExpiry,
    Expired,
}

impl BatchStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BatchStatus::Fresh => "fresh",
            BatchStatus::NearExpiry => "near-expiry",
            BatchStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BatchStatus::Fresh => "Fresh",
            BatchStatus::NearExpiry => "Near Expiry",
            BatchStatus::Expired => "Expired",
        }
    }
}

/// Партия товара (строка отчёта по партиям)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBatch {
    pub id: String,

    #[serde(rename = "batchNumber")]
    pub batch_number: String,

    pub vendor: String,

    #[serde(rename = "entryDate")]
    pub entry_date: String,

    #[serde(rename = "expiryDate")]
    pub expiry_date: String,

    #[serde(rename = "costPrice")]
    pub cost_price: i64,

    #[serde(rename = "currentStock")]
    pub current_stock: i64,

    pub status: BatchStatus,
}
