use serde::{Deserialize, Serialize};

/// Остаток товара на одной складской локации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDistribution {
    pub location: String,
    pub primary: i64,
    pub buffer: i64,
    pub total: i64,
}
