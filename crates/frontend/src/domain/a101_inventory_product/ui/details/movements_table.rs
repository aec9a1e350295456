use super::detail_list::{create_detail_state, DetailListError, EmptyTable};
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::components::ui::{status_variant, Badge};
use contracts::domain::a103_stock_movement::StockMovement;
use contracts::shared::format::format_short_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StockMovementsTable(movements: Vec<StockMovement>, page_size: usize) -> impl IntoView {
    if movements.is_empty() {
        return view! {
            <EmptyTable title="No stock movements" hint="Stock movement history will appear here." />
        }
        .into_any();
    }

    let state = match create_detail_state(movements, page_size) {
        Ok(state) => state,
        Err(e) => return view! { <DetailListError error=e /> }.into_any(),
    };
    let list_view = Memo::new(move |_| state.with(|c| c.view()));
    let on_page = Callback::new(move |page: usize| state.update(|c| c.set_page(page)));

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Type"</TableHeaderCell>
                    <TableHeaderCell>"Reference"</TableHeaderCell>
                    <TableHeaderCell>"Qty Change"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    list_view
                        .get()
                        .items
                        .into_iter()
                        .map(|mv| {
                            let qty_class = if mv.qty_change > 0 { "qty qty--in" } else { "qty qty--out" };
                            let code = mv.movement_type.code();
                            let reference = mv.reference.clone();
                            let qty_label = mv.qty_change_label();
                            view! {
                                <TableRow>
                                    <TableCell>{format_short_date(&mv.date)}</TableCell>
                                    <TableCell>
                                        <Badge variant=status_variant(code)>{code}</Badge>
                                    </TableCell>
                                    <TableCell>
                                        <span class="table__mono">{reference}</span>
                                    </TableCell>
                                    <TableCell>
                                        <span class=qty_class>{qty_label}</span>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
        <ListPagination list_view=list_view on_page_change=on_page />
    }
    .into_any()
}
