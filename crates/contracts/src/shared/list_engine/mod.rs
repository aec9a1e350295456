//! Client-side list derivation: tab filter, search, tab counts, pagination
//! and the view-state controller that ties them together.

pub mod error;
pub mod filter;
pub mod paginator;
pub mod predicates;
pub mod record;
pub mod tab_counts;
pub mod tabs;
pub mod view_state;

pub use error::ListError;
pub use filter::{filter_by_search, filter_records};
pub use paginator::{page_numbers, paginate, total_pages, Page, PageMarker};
pub use predicates::{
    classify_stock, count_by_predicate, expiring_soon_count, is_expiring_soon, low_stock_count,
    time_ago, BatchIndex,
};
pub use record::{without_record, ListRecord, Searchable};
pub use tab_counts::{count_if_nonzero, counts_for_tabs, tab_badges, TabBadge};
pub use tabs::{inventory_tabs, RecordPredicate, TabDefinition, TabSet, TAB_ALL};
pub use view_state::{ListController, ListEvent, ListView, ListViewState};

#[cfg(test)]
mod tests {
    //! Свойства движка на сгенерированных каталогах разного размера
    use super::*;
    use crate::domain::a101_inventory_product::InventoryProduct;
    use crate::domain::a102_product_batch::{BatchStatus, ProductBatch};
    use crate::shared::data_source::{InMemoryInventory, InventoryDataSource, RecordStore};
    use std::collections::HashMap;

    const NAMES: [&str; 6] = [
        "Office Chair",
        "Desk Lamp",
        "Standing Desk",
        "Mouse Pad",
        "Copy Paper",
        "Webcam HD",
    ];
    const CATEGORIES: [&str; 3] = ["Furniture", "Electronics", "Stationery"];

    fn catalog(n: usize) -> Vec<InventoryProduct> {
        (0..n)
            .map(|i| InventoryProduct {
                id: format!("prod-{:03}", i + 1),
                name: format!("{} {}", NAMES[i % NAMES.len()], i),
                sku: format!("SKU-{:04}", i * 7),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                image: String::new(),
                images: Vec::new(),
                total_stock: ((i * 13) % 40) as i64,
                max_stock: 100,
                reorder_point: 10,
                unit_price: 1000,
                cost_price: 600,
                active_batches: 1,
                last_updated: "2024-01-01T00:00:00Z".to_string(),
            })
            .collect()
    }

    fn source(n: usize) -> InMemoryInventory {
        let mut batches = HashMap::new();
        for i in (0..n).step_by(4) {
            batches.insert(
                format!("prod-{:03}", i + 1),
                vec![ProductBatch {
                    id: format!("bat-{:03}", i),
                    batch_number: format!("BAT-2024-{:03}", i),
                    vendor: "Furniture Direct".to_string(),
                    entry_date: "2024-01-01".to_string(),
                    expiry_date: "2025-01-01".to_string(),
                    cost_price: 600,
                    current_stock: 5,
                    status: if i % 8 == 0 { BatchStatus::NearExpiry } else { BatchStatus::Fresh },
                }],
            );
        }
        InMemoryInventory::new(catalog(n)).with_batches(batches)
    }

    #[test]
    fn pages_partition_the_collection() {
        for len in 0..45 {
            let items = catalog(len);
            for page_size in 1..=12 {
                let pages = total_pages(len, page_size);
                let mut seen = Vec::new();
                for page in 1..=pages {
                    let slice = paginate(&items, page_size, page).unwrap();
                    seen.extend(slice.items.into_iter().map(|p| p.id));
                }
                let expected: Vec<String> = items.iter().map(|p| p.id.clone()).collect();
                assert_eq!(seen, expected, "len={} page_size={}", len, page_size);
            }
        }
    }

    #[test]
    fn all_tab_with_empty_search_is_identity() {
        let data = source(30);
        let tabs = inventory_tabs(data.batch_index());
        let products = data.products();
        assert_eq!(filter_records(&products, &tabs, "all", ""), products);
    }

    #[test]
    fn search_results_match_and_filtering_is_idempotent() {
        let data = source(40);
        let tabs = inventory_tabs(data.batch_index());
        let products = data.products();

        for tab in ["all", "in-stock", "low-stock", "out-of-stock", "expiring", "bogus"] {
            for query in ["desk", "ELECTRONICS", "sku-00", "pad ", "lamp ", "zzz"] {
                let once = filter_records(&products, &tabs, tab, query);
                let needle = query.to_lowercase();
                for p in &once {
                    let fields = [&p.name, &p.sku, &p.category];
                    assert!(
                        fields.iter().any(|f| f.to_lowercase().contains(&needle)),
                        "{} does not contain '{}'",
                        p.name,
                        query
                    );
                }
                let twice = filter_records(&once, &tabs, tab, query);
                assert_eq!(once, twice, "tab={} query={}", tab, query);
            }
        }
    }

    #[test]
    fn page_numbers_keep_first_and_last() {
        for total in 1..40 {
            for current in 1..=total {
                let markers = page_numbers(current, total);
                assert_eq!(markers.first(), Some(&PageMarker::Page(1)));
                assert_eq!(markers.last(), Some(&PageMarker::Page(total)));
                if total > 5 {
                    assert!(markers.len() <= 7);
                } else {
                    assert_eq!(markers.len(), total);
                }
            }
        }
    }

    #[test]
    fn documented_examples() {
        let items = catalog(23);
        let page = paginate(&items, 10, 3).unwrap();
        assert_eq!((page.total_pages, page.start_item, page.end_item), (3, 21, 23));
        assert_eq!(
            page.page_numbers,
            vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)]
        );

        assert_eq!(
            page_numbers(7, 12),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(6),
                PageMarker::Page(7),
                PageMarker::Page(8),
                PageMarker::Ellipsis,
                PageMarker::Page(12),
            ]
        );
    }

    #[test]
    fn deleting_last_item_on_last_page_clamps_page() {
        let mut data = source(31);
        let mut controller =
            ListController::new(data.products(), inventory_tabs(data.batch_index()), 10).unwrap();
        controller.set_page(4);
        assert_eq!(controller.state().current_page, 4);
        assert_eq!(controller.view().items.len(), 1);

        let remaining = data.delete("prod-031");
        controller.mutate_collection(remaining);

        assert_eq!(controller.total_pages(), 3);
        assert_eq!(controller.state().current_page, 3);
        let view = controller.view();
        assert_eq!((view.start_item, view.end_item, view.total_items), (21, 30, 30));
    }

    #[test]
    fn switching_tabs_resets_page() {
        let data = source(45);
        let mut controller =
            ListController::new(data.products(), inventory_tabs(data.batch_index()), 10).unwrap();
        for tab in ["in-stock", "low-stock", "expiring", "all"] {
            controller.set_page(controller.total_pages());
            controller.set_tab(tab);
            assert_eq!(controller.state().current_page, 1, "tab {}", tab);
        }
    }

    #[test]
    fn tab_badges_come_from_the_unfiltered_collection() {
        let data = source(40);
        let tabs = inventory_tabs(data.batch_index());
        let products = data.products();
        let low = filter_records(&products, &tabs, "low-stock", "").len();
        let expiring = filter_records(&products, &tabs, "expiring", "").len();

        let mut controller = ListController::new(products, tabs, 10).unwrap();
        controller.set_tab("in-stock");
        controller.set_search("chair");

        let badges = controller.view().tab_badges;
        let count = |key: &str| badges.iter().find(|b| b.key == key).and_then(|b| b.count);
        assert_eq!(count("low-stock"), Some(low));
        assert_eq!(count("expiring"), Some(expiring));
        assert_eq!(count("all"), None);
        assert!(badges.iter().all(|b| b.key != "out-of-stock"));
    }
}
