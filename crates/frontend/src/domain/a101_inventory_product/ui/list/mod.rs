pub mod state;

use self::state::{create_state, InventoryListController};
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stock_level_bar::StockLevelBar;
use crate::shared::components::tab_bar::TabBar;
use crate::shared::components::ui::Badge;
use crate::shared::context::use_inventory;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use chrono::{DateTime, Utc};
use contracts::domain::a101_inventory_product::InventoryProduct;
use contracts::shared::data_source::InventoryDataSource;
use contracts::shared::format::format_inr;
use contracts::shared::list_engine::time_ago;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_inventory();
    let (products, batches) = ctx
        .store
        .with_untracked(|store| (store.products(), store.batch_index()));

    match create_state(products, batches, ctx.settings.inventory.page_size) {
        Ok(state) => view! { <InventoryTable state=state now=ctx.now /> }.into_any(),
        Err(e) => {
            log::error!("inventory list: {}", e);
            view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e.to_string()}</span>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn InventoryTable(state: RwSignal<InventoryListController>, now: DateTime<Utc>) -> impl IntoView {
    let list_view = Memo::new(move |_| state.with(|c| c.view()));
    let search_text = Signal::derive(move || state.with(|c| c.state().search_text.clone()));

    let on_tab = Callback::new(move |key: String| state.update(|c| c.set_tab(key)));
    let on_search = Callback::new(move |text: String| state.update(|c| c.set_search(text)));
    let on_page = Callback::new(move |page: usize| state.update(|c| c.set_page(page)));

    view! {
        <PageFrame page_id="a101_inventory_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory"</h1>
                    <p class="page__subtitle">"Manage your products and stock levels."</p>
                </div>
                <div class="page__header-right">
                    <SearchInput value=search_text on_change=on_search />
                </div>
            </div>

            <TabBar tabs=Signal::derive(move || list_view.with(|v| v.tab_badges.clone())) on_change=on_tab />

            <div class="page__content">
                {move || {
                    let view = list_view.get();
                    if view.items.is_empty() {
                        return view! {
                            <div class="table-empty">
                                <p class="table-empty__title">"No items found"</p>
                                <p class="table-empty__hint">"Try adjusting your filters or add a new item."</p>
                            </div>
                        }
                        .into_any();
                    }

                    let start = view.start_item;
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"#"</TableHeaderCell>
                                    <TableHeaderCell>"Thumbnail"</TableHeaderCell>
                                    <TableHeaderCell>"Product Name"</TableHeaderCell>
                                    <TableHeaderCell>"SKU"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Total Stock"</TableHeaderCell>
                                    <TableHeaderCell>"Unit Price"</TableHeaderCell>
                                    <TableHeaderCell>"Active Batches"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {view
                                    .items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, product)| view! { <InventoryRow product=product index=start + idx now=now /> })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any()
                }}

                <ListPagination list_view=list_view on_page_change=on_page />
            </div>
        </PageFrame>
    }
}

#[component]
fn InventoryRow(product: InventoryProduct, index: usize, now: DateTime<Utc>) -> impl IntoView {
    let href = format!("/inventory/{}", product.id);
    let updated = format!("Last updated {}", time_ago(&product.last_updated, now));
    let stock_class = if product.total_stock == 0 {
        "stock-value stock-value--empty"
    } else {
        "stock-value"
    };

    let name = product.name.clone();

    view! {
        <TableRow>
            <TableCell>
                <span class="table__index">{index}</span>
            </TableCell>
            <TableCell>
                <img class="table__thumbnail" src=product.image.clone() alt=product.name.clone() />
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <A href=href attr:class="table__link">{name}</A>
                    <p class="table__hint">{updated}</p>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <span class="table__mono">{product.sku.clone()}</span>
            </TableCell>
            <TableCell>{product.category.clone()}</TableCell>
            <TableCell>
                <div class="stock-cell">
                    <span class=stock_class>{product.total_stock}</span>
                    <StockLevelBar
                        current=product.total_stock
                        max=product.max_stock
                        reorder_point=product.reorder_point
                    />
                </div>
            </TableCell>
            <TableCell>{format_inr(product.unit_price)}</TableCell>
            <TableCell>
                <Badge>{product.active_batches}</Badge>
            </TableCell>
        </TableRow>
    }
}
