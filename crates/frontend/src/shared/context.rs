use chrono::{DateTime, Utc};
use contracts::shared::data_source::InMemoryInventory;
use contracts::shared::settings::ListSettings;
use leptos::prelude::*;

/// Общие данные страниц склада: хранилище, настройки списков, «сейчас»
#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub store: RwSignal<InMemoryInventory>,
    pub settings: ListSettings,
    /// Момент запуска; от него считаются подписи «Last updated ...»
    pub now: DateTime<Utc>,
}

impl InventoryContext {
    pub fn new(store: InMemoryInventory, settings: ListSettings, now: DateTime<Utc>) -> Self {
        Self {
            store: RwSignal::new(store),
            settings,
            now,
        }
    }
}

pub fn use_inventory() -> InventoryContext {
    use_context::<InventoryContext>().expect("InventoryContext not found")
}
