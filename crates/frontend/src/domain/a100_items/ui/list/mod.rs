use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::context::{use_inventory, InventoryContext};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a101_inventory_product::InventoryProduct;
use contracts::shared::data_source::{InventoryDataSource, RecordStore};
use contracts::shared::format::{format_grouped, format_inr};
use contracts::shared::list_engine::{ListController, ListError, TabDefinition, TabSet};
use leptos::prelude::*;
use thaw::*;

pub type ItemsListController = ListController<InventoryProduct>;

fn create_state(
    products: Vec<InventoryProduct>,
    page_size: usize,
) -> Result<RwSignal<ItemsListController>, ListError> {
    let tabs = TabSet::new(vec![TabDefinition::all("All Items")]);
    Ok(RwSignal::new(ListController::new(products, tabs, page_size)?))
}

/// Справочник товаров: без поиска, с удалением строк
#[component]
#[allow(non_snake_case)]
pub fn ItemsList() -> impl IntoView {
    let ctx = use_inventory();
    let products = ctx.store.with_untracked(|store| store.products());

    match create_state(products, ctx.settings.items.page_size) {
        Ok(state) => view! { <ItemsTable state=state ctx=ctx /> }.into_any(),
        Err(e) => {
            log::error!("items list: {}", e);
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
fn ItemsTable(state: RwSignal<ItemsListController>, ctx: InventoryContext) -> impl IntoView {
    let list_view = Memo::new(move |_| state.with(|c| c.view()));
    let on_page = Callback::new(move |page: usize| state.update(|c| c.set_page(page)));

    // Хранилище удаляет запись и отдаёт оставшиеся; страница зажимается контроллером
    let delete_item = move |id: String| {
        if let Some(remaining) = ctx.store.try_update(|store| store.delete(&id)) {
            state.update(|c| c.mutate_collection(remaining));
        }
    };

    view! {
        <PageFrame page_id="a100_items--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Items"</h1>
                    <p class="page__subtitle">"Manage your products master details."</p>
                </div>
            </div>

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
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"SKU"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Cost Price"</TableHeaderCell>
                                    <TableHeaderCell>"Stock Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {view
                                    .items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, item)| {
                                        let id = item.id.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <span class="table__index">{start + idx}</span>
                                                </TableCell>
                                                <TableCell>{item.name.clone()}</TableCell>
                                                <TableCell>
                                                    <span class="table__mono">{item.sku.clone()}</span>
                                                </TableCell>
                                                <TableCell>{item.category.clone()}</TableCell>
                                                <TableCell>{format_inr(item.unit_price)}</TableCell>
                                                <TableCell>{format_inr(item.cost_price)}</TableCell>
                                                <TableCell>{format_grouped(item.total_stock)}</TableCell>
                                                <TableCell>
                                                    <button
                                                        class="button button--ghost button--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_item(id.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
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
