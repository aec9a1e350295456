use crate::shared::icons::icon;
use contracts::shared::list_engine::{ListView, PageMarker};
use leptos::prelude::*;

/// PaginationControls component - "Showing X–Y of Z" plus page buttons
///
/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,

    /// First and last item shown, 1-based
    #[prop(into)]
    item_range: Signal<(usize, usize)>,

    /// Page buttons with ellipsis markers
    #[prop(into)]
    page_numbers: Signal<Vec<PageMarker>>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    move || {
        let total = total_pages.get();
        if total <= 1 {
            return view! { <></> }.into_any();
        }

        let page = current_page.get();
        let (start_item, end_item) = item_range.get();

        view! {
            <div class="pagination-controls">
                <span class="pagination-info">
                    "Showing "
                    <strong>{format!("{}–{}", start_item, end_item)}</strong>
                    " of "
                    <strong>{total_count.get()}</strong>
                    " items"
                </span>
                <div class="pagination-pages">
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(page.saturating_sub(1))
                        disabled=page == 1
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    {page_numbers
                        .get()
                        .into_iter()
                        .map(|marker| match marker {
                            PageMarker::Ellipsis => view! {
                                <span class="pagination-ellipsis">"…"</span>
                            }
                            .into_any(),
                            PageMarker::Page(n) => view! {
                                <button
                                    class=if n == page {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| on_page_change.run(n)
                                >
                                    {n}
                                </button>
                            }
                            .into_any(),
                        })
                        .collect_view()}
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(page + 1)
                        disabled=page >= total
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}

/// PaginationControls, подключённые к готовому представлению списка
#[component]
pub fn ListPagination<R>(
    list_view: Memo<ListView<R>>,
    on_page_change: Callback<usize>,
) -> impl IntoView
where
    R: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <PaginationControls
            current_page=Signal::derive(move || list_view.with(|v| v.current_page))
            total_pages=Signal::derive(move || list_view.with(|v| v.total_pages))
            total_count=Signal::derive(move || list_view.with(|v| v.total_items))
            item_range=Signal::derive(move || list_view.with(|v| (v.start_item, v.end_item)))
            page_numbers=Signal::derive(move || list_view.with(|v| v.page_numbers.clone()))
            on_page_change=on_page_change
        />
    }
}
