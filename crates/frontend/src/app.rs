use crate::domain::a100_items::ui::list::ItemsList;
use crate::domain::a101_inventory_product::ui::details::ProductDetails;
use crate::domain::a101_inventory_product::ui::list::InventoryList;
use crate::layout::Shell;
use crate::shared::context::InventoryContext;
use crate::shared::data::mock_inventory::mock_inventory;
use crate::shared::storage;
use chrono::Utc;
use contracts::shared::settings::ListSettings;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1 class="page__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let now = Utc::now();
    let settings = ListSettings::load(storage::get_list_settings_override().as_deref());
    provide_context(InventoryContext::new(mock_inventory(now), settings, now));

    view! {
        <ConfigProvider>
            <Router>
                <Shell>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/inventory" /> } />
                        <Route path=path!("/inventory") view=InventoryList />
                        <Route path=path!("/inventory/:id") view=ProductDetails />
                        <Route path=path!("/items") view=ItemsList />
                    </Routes>
                </Shell>
            </Router>
        </ConfigProvider>
    }
}
