//! Источник данных для страниц остатков.
//!
//! Только чтение; поиск по неизвестному id даёт пустой результат, а не
//! ошибку. Удаление вынесено в отдельный trait `RecordStore`.

use crate::domain::a101_inventory_product::InventoryProduct;
use crate::domain::a102_product_batch::ProductBatch;
use crate::domain::a103_stock_movement::StockMovement;
use crate::domain::a104_linked_invoice::LinkedInvoice;
use crate::domain::a105_stock_distribution::StockDistribution;
use crate::shared::list_engine::predicates::BatchIndex;
use crate::shared::list_engine::record::{without_record, ListRecord};
use std::collections::HashMap;

pub trait InventoryDataSource {
    /// Товары в порядке отображения
    fn products(&self) -> Vec<InventoryProduct>;

    fn batch_index(&self) -> BatchIndex;

    fn stock_movements(&self, product_id: &str) -> Vec<StockMovement>;

    fn linked_invoices(&self, product_id: &str) -> Vec<LinkedInvoice>;

    fn stock_distribution(&self, product_id: &str) -> Vec<StockDistribution>;

    fn batches(&self, product_id: &str) -> Vec<ProductBatch> {
        self.batch_index().batches_for(product_id).to_vec()
    }

    fn find_product(&self, product_id: &str) -> Option<InventoryProduct> {
        self.products().into_iter().find(|p| p.id == product_id)
    }
}

/// Внешнее хранилище, умеющее удалять записи.
///
/// Возвращает новую коллекцию; контроллер списка получает её через
/// `mutate_collection`, не зная, как удаление сохранено.
pub trait RecordStore<R: ListRecord> {
    fn delete(&mut self, id: &str) -> Vec<R>;
}

/// Данные в памяти процесса
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    products: Vec<InventoryProduct>,
    batches: BatchIndex,
    movements: HashMap<String, Vec<StockMovement>>,
    invoices: HashMap<String, Vec<LinkedInvoice>>,
    distribution: HashMap<String, Vec<StockDistribution>>,
}

impl InMemoryInventory {
    pub fn new(products: Vec<InventoryProduct>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn with_batches(mut self, batches: HashMap<String, Vec<ProductBatch>>) -> Self {
        self.batches = BatchIndex::new(batches);
        self
    }

    pub fn with_movements(mut self, movements: HashMap<String, Vec<StockMovement>>) -> Self {
        self.movements = movements;
        self
    }

    pub fn with_invoices(mut self, invoices: HashMap<String, Vec<LinkedInvoice>>) -> Self {
        self.invoices = invoices;
        self
    }

    pub fn with_distribution(mut self, distribution: HashMap<String, Vec<StockDistribution>>) -> Self {
        self.distribution = distribution;
        self
    }
}

fn lookup<T: Clone>(map: &HashMap<String, Vec<T>>, id: &str) -> Vec<T> {
    map.get(id).cloned().unwrap_or_default()
}

impl InventoryDataSource for InMemoryInventory {
    fn products(&self) -> Vec<InventoryProduct> {
        self.products.clone()
    }

    fn batch_index(&self) -> BatchIndex {
        self.batches.clone()
    }

    fn stock_movements(&self, product_id: &str) -> Vec<StockMovement> {
        lookup(&self.movements, product_id)
    }

    fn linked_invoices(&self, product_id: &str) -> Vec<LinkedInvoice> {
        lookup(&self.invoices, product_id)
    }

    fn stock_distribution(&self, product_id: &str) -> Vec<StockDistribution> {
        lookup(&self.distribution, product_id)
    }
}

impl RecordStore<InventoryProduct> for InMemoryInventory {
    fn delete(&mut self, id: &str) -> Vec<InventoryProduct> {
        self.products = without_record(&self.products, id);
        log::info!("product {} deleted, {} left", id, self.products.len());
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a103_stock_movement::MovementType;

    fn product(id: &str) -> InventoryProduct {
        InventoryProduct {
            id: id.to_string(),
            name: format!("Product {}", id),
            sku: format!("SKU-{}", id),
            category: "Misc".to_string(),
            image: String::new(),
            images: Vec::new(),
            total_stock: 10,
            max_stock: 20,
            reorder_point: 5,
            unit_price: 10,
            cost_price: 5,
            active_batches: 0,
            last_updated: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_unknown_ids_give_empty_results() {
        let source = InMemoryInventory::new(vec![product("p1")]);
        assert!(source.batches("p404").is_empty());
        assert!(source.stock_movements("p404").is_empty());
        assert!(source.linked_invoices("p404").is_empty());
        assert!(source.stock_distribution("p404").is_empty());
        assert!(source.find_product("p404").is_none());
    }

    #[test]
    fn test_lookups_by_id() {
        let mut movements = HashMap::new();
        movements.insert(
            "p1".to_string(),
            vec![StockMovement {
                id: "mv-1".to_string(),
                date: "2023-10-24".to_string(),
                movement_type: MovementType::Sale,
                reference: "INV-1024".to_string(),
                qty_change: -1,
            }],
        );
        let source = InMemoryInventory::new(vec![product("p1"), product("p2")]).with_movements(movements);
        assert_eq!(source.stock_movements("p1").len(), 1);
        assert!(source.stock_movements("p2").is_empty());
        assert_eq!(source.find_product("p2").map(|p| p.id), Some("p2".to_string()));
    }

    #[test]
    fn test_delete_returns_new_collection() {
        let mut source = InMemoryInventory::new(vec![product("p1"), product("p2"), product("p3")]);
        let snapshot = source.products();
        let after = source.delete("p2");
        assert_eq!(after.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["p1", "p3"]);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(source.products(), after);
    }
}
