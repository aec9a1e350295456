//! Фильтрация списка: вкладка, затем поиск по подстроке.
//!
//! Оба шага только сужают выборку; порядок записей сохраняется.

use crate::shared::list_engine::record::{matches_query, normalize_query, Searchable};
use crate::shared::list_engine::tabs::TabSet;

/// Фильтрует список по вкладке `tab_key` и поисковому запросу
pub fn filter_records<R>(collection: &[R], tabs: &TabSet<R>, tab_key: &str, search: &str) -> Vec<R>
where
    R: Searchable + Clone,
{
    let tab = tabs.resolve(tab_key);
    let query = normalize_query(search);

    collection
        .iter()
        .filter(|r| tab.matches(r))
        .filter(|r| query.as_deref().map_or(true, |q| matches_query(*r, q)))
        .cloned()
        .collect()
}

/// Фильтрует список только по поисковому запросу
pub fn filter_by_search<R>(items: Vec<R>, search: &str) -> Vec<R>
where
    R: Searchable,
{
    let Some(query) = normalize_query(search) else {
        return items;
    };

    items
        .into_iter()
        .filter(|item| matches_query(item, &query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_inventory_product::InventoryProduct;
    use crate::domain::a102_product_batch::{BatchStatus, ProductBatch};
    use crate::shared::list_engine::predicates::BatchIndex;
    use crate::shared::list_engine::tabs::inventory_tabs;
    use std::collections::HashMap;

    fn product(id: &str, name: &str, sku: &str, category: &str, stock: i64, reorder: i64) -> InventoryProduct {
        InventoryProduct {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            image: String::new(),
            images: Vec::new(),
            total_stock: stock,
            max_stock: 100,
            reorder_point: reorder,
            unit_price: 100,
            cost_price: 50,
            active_batches: 1,
            last_updated: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn products() -> Vec<InventoryProduct> {
        vec![
            product("prod-001", "Office Chair", "OFF-CHR-001", "Furniture", 12, 20),
            product("prod-002", "Smart LED Desk Lamp", "LMP-WRK-402", "Electronics", 84, 15),
            product("prod-003", "Standing Desk", "DSK-MOT-009", "Furniture", 3, 10),
            product("prod-007", "Mouse Pad XL", "ACC-MPD-015", "Accessories", 0, 30),
            product("prod-010", "Webcam HD", "CAM-HD-080", "Electronics", 8, 10),
        ]
    }

    fn batches() -> BatchIndex {
        let near = ProductBatch {
            id: "bat-006".to_string(),
            batch_number: "BAT-2023-045".to_string(),
            vendor: "DeskPro Mfg.".to_string(),
            entry_date: "2023-06-10".to_string(),
            expiry_date: "2025-06-10".to_string(),
            cost_price: 17500,
            current_stock: 2,
            status: BatchStatus::NearExpiry,
        };
        let mut map = HashMap::new();
        map.insert("prod-003".to_string(), vec![near.clone()]);
        map.insert("prod-010".to_string(), vec![near]);
        BatchIndex::new(map)
    }

    fn ids(items: &[InventoryProduct]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_tab_filters() {
        let tabs = inventory_tabs(batches());
        let all = products();
        assert_eq!(filter_records(&all, &tabs, "all", ""), all);
        assert_eq!(ids(&filter_records(&all, &tabs, "in-stock", "")), vec!["prod-002"]);
        assert_eq!(
            ids(&filter_records(&all, &tabs, "low-stock", "")),
            vec!["prod-001", "prod-003", "prod-010"]
        );
        assert_eq!(ids(&filter_records(&all, &tabs, "out-of-stock", "")), vec!["prod-007"]);
        assert_eq!(
            ids(&filter_records(&all, &tabs, "expiring", "")),
            vec!["prod-003", "prod-010"]
        );
    }

    #[test]
    fn test_unknown_tab_is_identity() {
        let tabs = inventory_tabs(batches());
        let all = products();
        assert_eq!(filter_records(&all, &tabs, "discontinued", ""), all);
    }

    #[test]
    fn test_search_matches_any_field() {
        let tabs = inventory_tabs(batches());
        let all = products();
        assert_eq!(ids(&filter_records(&all, &tabs, "all", "desk")), vec!["prod-002", "prod-003"]);
        assert_eq!(ids(&filter_records(&all, &tabs, "all", "acc-mpd")), vec!["prod-007"]);
        assert_eq!(
            ids(&filter_records(&all, &tabs, "all", "ELECTRONICS")),
            vec!["prod-002", "prod-010"]
        );
        assert!(filter_records(&all, &tabs, "all", "sofa").is_empty());
    }

    #[test]
    fn test_tab_and_search_compose_with_and() {
        let tabs = inventory_tabs(batches());
        let all = products();
        assert_eq!(
            ids(&filter_records(&all, &tabs, "low-stock", "furniture")),
            vec!["prod-001", "prod-003"]
        );
        assert_eq!(ids(&filter_records(&all, &tabs, "expiring", "webcam")), vec!["prod-010"]);
    }

    #[test]
    fn test_trailing_space_is_searched_literally() {
        let tabs = inventory_tabs(batches());
        let all = products();
        assert!(filter_records(&all, &tabs, "all", "lamp ").is_empty());
        assert_eq!(ids(&filter_records(&all, &tabs, "all", "desk ")), vec!["prod-002"]);
        assert_eq!(ids(&filter_by_search(all.clone(), "led ")), vec!["prod-002"]);
        for p in filter_records(&all, &tabs, "all", "Desk ") {
            let fields = [&p.name, &p.sku, &p.category];
            assert!(fields.iter().any(|f| f.to_lowercase().contains("desk ")), "{}", p.name);
        }
    }

    #[test]
    fn test_whitespace_search_is_ignored() {
        let tabs = inventory_tabs(batches());
        let all = products();
        assert_eq!(filter_records(&all, &tabs, "all", "   "), all);
        assert_eq!(filter_by_search(all.clone(), "\t "), all);
    }

    #[test]
    fn test_empty_collection() {
        let tabs = inventory_tabs(batches());
        assert!(filter_records(&[], &tabs, "low-stock", "chair").is_empty());
    }
}
