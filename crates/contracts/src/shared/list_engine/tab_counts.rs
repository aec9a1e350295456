use crate::shared::list_engine::predicates::count_by_predicate;
use crate::shared::list_engine::tabs::TabSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Вкладка для отрисовки: подпись, бейдж, признак активности
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBadge {
    pub key: String,
    pub label: String,
    /// `None` — бейдж не рисуется
    pub count: Option<usize>,
    pub active: bool,
}

/// Количества по вкладкам с бейджем. Считаются по полной коллекции,
/// поэтому не зависят от активной вкладки и поиска.
pub fn counts_for_tabs<R>(collection: &[R], tabs: &TabSet<R>) -> BTreeMap<String, usize> {
    tabs.iter()
        .filter(|t| t.show_count)
        .map(|t| (t.key.clone(), count_by_predicate(collection, |r| t.matches(r))))
        .collect()
}

/// Видимые вкладки с бейджами для панели вкладок
pub fn tab_badges<R>(collection: &[R], tabs: &TabSet<R>, active_key: &str) -> Vec<TabBadge> {
    let counts = counts_for_tabs(collection, tabs);
    let active_key = tabs.resolve(active_key).key.as_str();

    tabs.iter()
        .filter(|t| t.visible)
        .map(|t| TabBadge {
            key: t.key.clone(),
            label: t.label.clone(),
            count: counts.get(&t.key).copied(),
            active: t.key == active_key,
        })
        .collect()
}

/// Бейдж только для ненулевого количества (вкладка «Linked Invoices»)
pub fn count_if_nonzero(count: usize) -> Option<usize> {
    (count > 0).then_some(count)
}
