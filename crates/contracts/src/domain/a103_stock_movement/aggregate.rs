use crate::shared::list_engine::record::{ListRecord, Searchable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Sale,
    Restock,
    Audit,
    Return,
}

impl MovementType {
    pub fn code(&self) -> &'static str {
        match self {
            MovementType::Sale => "sale",
            MovementType::Restock => "restock",
            MovementType::Audit => "audit",
            MovementType::Return => "return",
        }
    }
}

/// Движение остатка по товару
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: String,
    pub date: String,

    #[serde(rename = "type")]
    pub movement_type: MovementType,

    pub reference: String,

    #[serde(rename = "qtyChange")]
    pub qty_change: i64,
}

impl StockMovement {
    /// "+50" / "-2"
    pub fn qty_change_label(&self) -> String {
        if self.qty_change > 0 {
            format!("+{}", self.qty_change)
        } else {
            self.qty_change.to_string()
        }
    }
}

impl ListRecord for StockMovement {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for StockMovement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.reference.as_str(), self.movement_type.code()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qty_change_label() {
        let json = r#"{"id":"mv-002","date":"2023-10-20","type":"restock","reference":"PO-550","qtyChange":50}"#;
        let mut mv: StockMovement = serde_json::from_str(json).unwrap();
        assert_eq!(mv.movement_type, MovementType::Restock);
        assert_eq!(mv.qty_change_label(), "+50");
        mv.qty_change = -3;
        assert_eq!(mv.qty_change_label(), "-3");
    }
}
