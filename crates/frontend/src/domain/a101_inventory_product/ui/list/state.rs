use contracts::domain::a101_inventory_product::InventoryProduct;
use contracts::shared::list_engine::{inventory_tabs, BatchIndex, ListController, ListError};
use leptos::prelude::*;

pub type InventoryListController = ListController<InventoryProduct>;

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state(
    products: Vec<InventoryProduct>,
    batches: BatchIndex,
    page_size: usize,
) -> Result<RwSignal<InventoryListController>, ListError> {
    let controller = ListController::new(products, inventory_tabs(batches), page_size)?;
    Ok(RwSignal::new(controller))
}
