use contracts::domain::a101_inventory_product::StockStatus;
use contracts::shared::list_engine::classify_stock;
use contracts::shared::list_engine::predicates::stock_fill_percent;
use leptos::prelude::*;

fn fill_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::OutOfStock => "stock-bar__fill stock-bar__fill--out",
        StockStatus::LowStock => "stock-bar__fill stock-bar__fill--low",
        StockStatus::InStock => "stock-bar__fill stock-bar__fill--ok",
    }
}

/// Полоса заполненности склада
#[component]
pub fn StockLevelBar(
    current: i64,
    max: i64,
    #[prop(optional)] reorder_point: i64,
    /// Растянуть на всю ширину (карточка товара)
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let width = format!("width: {:.1}%;", stock_fill_percent(current, max));
    let class = fill_class(classify_stock(current, reorder_point));

    view! {
        <div class=if wide { "stock-bar stock-bar--wide" } else { "stock-bar" }>
            <div class=class style=width></div>
        </div>
    }
}
