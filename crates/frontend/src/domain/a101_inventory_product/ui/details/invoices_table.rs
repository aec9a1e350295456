use super::detail_list::{create_detail_state, DetailListError, EmptyTable};
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::components::ui::{status_variant, Badge};
use contracts::domain::a104_linked_invoice::LinkedInvoice;
use contracts::shared::format::{format_grouped, format_inr, format_short_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LinkedInvoicesTable(invoices: Vec<LinkedInvoice>, page_size: usize) -> impl IntoView {
    if invoices.is_empty() {
        return view! {
            <EmptyTable title="No linked invoices" hint="Invoices containing this product will appear here." />
        }
        .into_any();
    }

    let state = match create_detail_state(invoices, page_size) {
        Ok(state) => state,
        Err(e) => return view! { <DetailListError error=e /> }.into_any(),
    };
    let list_view = Memo::new(move |_| state.with(|c| c.view()));
    let on_page = Callback::new(move |page: usize| state.update(|c| c.set_page(page)));

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Invoice #"</TableHeaderCell>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Customer"</TableHeaderCell>
                    <TableHeaderCell>"Qty"</TableHeaderCell>
                    <TableHeaderCell>"Total"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    list_view
                        .get()
                        .items
                        .into_iter()
                        .map(|inv| {
                            let code = inv.status.code();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <span class="table__mono">{inv.invoice_number.clone()}</span>
                                    </TableCell>
                                    <TableCell>{format_short_date(&inv.date)}</TableCell>
                                    <TableCell>{inv.customer.clone()}</TableCell>
                                    <TableCell>{format_grouped(inv.qty)}</TableCell>
                                    <TableCell>{format_inr(inv.total)}</TableCell>
                                    <TableCell>
                                        <Badge variant=status_variant(code)>{code}</Badge>
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
