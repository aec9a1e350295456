use crate::domain::a101_inventory_product::{InventoryProduct, StockStatus};
use crate::shared::list_engine::predicates::{is_expiring_soon, BatchIndex};
use std::fmt;
use std::sync::Arc;

/// Предикат вкладки. `Send + Sync`, чтобы таблица вкладок могла жить в сигналах.
pub type RecordPredicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Ключ вкладки «все записи»
pub const TAB_ALL: &str = "all";

/// Описание вкладки списка
pub struct TabDefinition<R> {
    pub key: String,
    pub label: String,
    /// `None` — вкладка без фильтра (все записи)
    pub predicate: Option<RecordPredicate<R>>,
    /// Показывать бейдж с количеством
    pub show_count: bool,
    /// Рисовать ли вкладку в панели; скрытая вкладка остаётся рабочим фильтром
    pub visible: bool,
}

impl<R> TabDefinition<R> {
    pub fn all(label: impl Into<String>) -> Self {
        Self {
            key: TAB_ALL.to_string(),
            label: label.into(),
            predicate: None,
            show_count: false,
            visible: true,
        }
    }

    pub fn filtered<F>(key: impl Into<String>, label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            label: label.into(),
            predicate: Some(Arc::new(predicate)),
            show_count: false,
            visible: true,
        }
    }

    pub fn with_count(mut self) -> Self {
        self.show_count = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn matches(&self, record: &R) -> bool {
        self.predicate.as_ref().map_or(true, |p| p(record))
    }
}

impl<R> Clone for TabDefinition<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            predicate: self.predicate.clone(),
            show_count: self.show_count,
            visible: self.visible,
        }
    }
}

impl<R> fmt::Debug for TabDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDefinition")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("filtered", &self.predicate.is_some())
            .field("show_count", &self.show_count)
            .field("visible", &self.visible)
            .finish()
    }
}

/// Упорядоченная таблица вкладок
#[derive(Debug)]
pub struct TabSet<R> {
    tabs: Vec<TabDefinition<R>>,
    fallback: TabDefinition<R>,
}

impl<R> TabSet<R> {
    pub fn new(tabs: Vec<TabDefinition<R>>) -> Self {
        Self {
            tabs,
            fallback: TabDefinition::all("All"),
        }
    }

    /// Вкладка по ключу. Неизвестный ключ даёт вкладку без фильтра.
    pub fn resolve(&self, key: &str) -> &TabDefinition<R> {
        match self.tabs.iter().find(|t| t.key == key) {
            Some(tab) => tab,
            None => {
                log::debug!("unknown tab key '{}', falling back to '{}'", key, TAB_ALL);
                self.tabs
                    .iter()
                    .find(|t| t.predicate.is_none())
                    .unwrap_or(&self.fallback)
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tabs.iter().any(|t| t.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabDefinition<R>> {
        self.tabs.iter()
    }
}

impl<R> Clone for TabSet<R> {
    fn clone(&self) -> Self {
        Self {
            tabs: self.tabs.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

/// Вкладки списка остатков: all / in-stock / low-stock / out-of-stock / expiring.
///
/// Бейджи считаются для «Low Stock» и «Expiring Soon». `out-of-stock`
/// в панели не рисуется, но как ключ фильтра работает.
pub fn inventory_tabs(batches: BatchIndex) -> TabSet<InventoryProduct> {
    TabSet::new(vec![
        TabDefinition::all("All Products"),
        TabDefinition::filtered("in-stock", "In Stock", |p: &InventoryProduct| {
            p.stock_status() == StockStatus::InStock
        }),
        TabDefinition::filtered("low-stock", "Low Stock", |p: &InventoryProduct| {
            p.stock_status() == StockStatus::LowStock
        })
        .with_count(),
        TabDefinition::filtered("out-of-stock", "Out of Stock", |p: &InventoryProduct| {
            p.stock_status() == StockStatus::OutOfStock
        })
        .hidden(),
        TabDefinition::filtered("expiring", "Expiring Soon", move |p: &InventoryProduct| {
            is_expiring_soon(&p.id, &batches)
        })
        .with_count(),
    ])
}
