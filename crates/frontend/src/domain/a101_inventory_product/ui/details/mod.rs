mod batch_report;
mod detail_list;
mod image_gallery;
mod invoices_table;
mod movements_table;

use self::batch_report::BatchReportPanel;
use self::image_gallery::ProductImageGallery;
use self::invoices_table::LinkedInvoicesTable;
use self::movements_table::StockMovementsTable;
use crate::shared::components::stock_level_bar::StockLevelBar;
use crate::shared::components::tab_bar::TabBar;
use crate::shared::components::ui::{Badge, StockStatusBadge};
use crate::shared::context::{use_inventory, InventoryContext};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a101_inventory_product::InventoryProduct;
use contracts::shared::data_source::InventoryDataSource;
use contracts::shared::format::format_inr;
use contracts::shared::list_engine::{count_if_nonzero, TabBadge};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

const TAB_MOVEMENTS: &str = "movements";
const TAB_INVOICES: &str = "invoices";

/// Вкладки карточки: движения и счета; у счетов бейдж только при ненулевом числе
fn detail_tabs(active: &str, invoice_count: usize) -> Vec<TabBadge> {
    vec![
        TabBadge {
            key: TAB_MOVEMENTS.to_string(),
            label: "Stock Movements".to_string(),
            count: None,
            active: active == TAB_MOVEMENTS,
        },
        TabBadge {
            key: TAB_INVOICES.to_string(),
            label: "Linked Invoices".to_string(),
            count: count_if_nonzero(invoice_count),
            active: active == TAB_INVOICES,
        },
    ]
}

fn margin_label(margin: i64) -> String {
    if margin > 0 {
        format!("+{}% Margin", margin)
    } else {
        format!("{}% Margin", margin)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails() -> impl IntoView {
    let ctx = use_inventory();
    let params = use_params_map();
    let product_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let product = Memo::new(move |_| {
        let id = product_id.get();
        ctx.store.with(|store| store.find_product(&id))
    });

    move || match product.get() {
        Some(product) => view! { <ProductCard product=product ctx=ctx /> }.into_any(),
        None => {
            log::warn!("product '{}' not found", product_id.get_untracked());
            view! {
                <PageFrame page_id="a101_inventory_product--detail" category=PAGE_CAT_DETAIL>
                    <div class="table-empty">
                        {icon("package")}
                        <p class="table-empty__title">"Product not found"</p>
                        <A href="/inventory" attr:class="button button--secondary">"Back to Inventory"</A>
                    </div>
                </PageFrame>
            }
            .into_any()
        }
    }
}

#[component]
fn ProductCard(product: InventoryProduct, ctx: InventoryContext) -> impl IntoView {
    let (movements, invoices, batches, distribution) = ctx.store.with_untracked(|store| {
        (
            store.stock_movements(&product.id),
            store.linked_invoices(&product.id),
            store.batches(&product.id),
            store.stock_distribution(&product.id),
        )
    });
    let page_size = ctx.settings.detail.page_size;
    let invoice_count = invoices.len();

    let detail_tab = RwSignal::new(TAB_MOVEMENTS.to_string());
    let show_report = RwSignal::new(false);
    let tabs = Signal::derive(move || detail_tabs(&detail_tab.get(), invoice_count));
    let on_tab = Callback::new(move |key: String| detail_tab.set(key));

    let margin = product.margin_percent();
    let margin_class = if margin > 0 { "margin margin--positive" } else { "margin margin--negative" };
    let report_product = StoredValue::new(product.clone());
    let batches = StoredValue::new(batches);
    let distribution = StoredValue::new(distribution);
    let movements = StoredValue::new(movements);
    let invoices = StoredValue::new(invoices);
    let category = product.category.clone();
    let sku_label = format!("SKU: {}", product.sku);

    view! {
        <PageFrame page_id="a101_inventory_product--detail" category=PAGE_CAT_DETAIL>
            <nav class="breadcrumb">
                <A href="/inventory">"Inventory"</A>
                {icon("chevron-right")}
                <span>"Products"</span>
                {icon("chevron-right")}
                <span class="breadcrumb__current">{product.name.clone()}</span>
            </nav>

            <div class="page__header">
                <h1 class="page__title">{product.name.clone()}</h1>
            </div>

            <div class="page__content product-card">
                <div class="product-card__gallery">
                    <ProductImageGallery images=product.images.clone() />
                </div>

                <div class="product-card__info">
                    <div class="product-card__badges">
                        <Badge>{category}</Badge>
                        <Badge variant="primary">{sku_label}</Badge>
                    </div>

                    <div class="card">
                        <span class=margin_class>{margin_label(margin)}</span>
                        <div class="card__grid">
                            <div>
                                <p class="card__label">"Sale Price"</p>
                                <p class="card__value">{format_inr(product.unit_price)}</p>
                            </div>
                            <div>
                                <p class="card__label">"Cost"</p>
                                <p class="card__hint">{format_inr(product.cost_price)}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__row">
                            <div>
                                <p class="card__label">"Current Stock"</p>
                                <p class="card__value">
                                    {product.total_stock}
                                    <span class="card__hint">{format!(" / {}", product.max_stock)}</span>
                                </p>
                            </div>
                            <div class="card__aside">
                                <StockStatusBadge status=product.stock_status() />
                                <p class="card__hint">
                                    "Reorder Point: "
                                    <strong>{product.reorder_point}</strong>
                                </p>
                            </div>
                        </div>
                        <StockLevelBar
                            current=product.total_stock
                            max=product.max_stock
                            reorder_point=product.reorder_point
                            wide=true
                        />
                    </div>
                </div>
            </div>

            <div class="page__actions">
                <button class="button button--secondary" on:click=move |_| show_report.update(|v| *v = !*v)>
                    {icon("report")}
                    "View Batch Report"
                </button>
            </div>

            <Show when=move || show_report.get()>
                <BatchReportPanel
                    product=report_product.get_value()
                    batches=batches.get_value()
                    distribution=distribution.get_value()
                    on_close=Callback::new(move |_| show_report.set(false))
                />
            </Show>

            <div class="card card--flush">
                <TabBar tabs=tabs on_change=on_tab />
                {move || {
                    if detail_tab.get() == TAB_INVOICES {
                        view! { <LinkedInvoicesTable invoices=invoices.get_value() page_size=page_size /> }.into_any()
                    } else {
                        view! { <StockMovementsTable movements=movements.get_value() page_size=page_size /> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
