//! Постраничные подтаблицы карточки товара
use contracts::shared::list_engine::{
    ListController, ListError, ListRecord, Searchable, TabDefinition, TabSet,
};
use leptos::prelude::*;

/// Контроллер подтаблицы: одна вкладка без фильтра, без поиска
pub fn create_detail_state<R>(
    records: Vec<R>,
    page_size: usize,
) -> Result<RwSignal<ListController<R>>, ListError>
where
    R: ListRecord + Searchable + Send + Sync + 'static,
{
    let tabs = TabSet::new(vec![TabDefinition::all("All")]);
    let controller = ListController::new(records, tabs, page_size)?;
    Ok(RwSignal::new(controller))
}

#[component]
pub fn DetailListError(error: ListError) -> impl IntoView {
    log::error!("product detail table: {}", error);
    view! {
        <div class="warning-box">
            <span class="warning-box__icon">"⚠"</span>
            <span class="warning-box__text">{error.to_string()}</span>
        </div>
    }
}

#[component]
pub fn EmptyTable(title: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="table-empty">
            <p class="table-empty__title">{title}</p>
            <p class="table-empty__hint">{hint}</p>
        </div>
    }
}
