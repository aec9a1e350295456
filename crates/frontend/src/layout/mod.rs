pub mod sidebar;

use crate::shared::icons::icon;
use crate::shared::storage;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Каркас приложения
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let collapsed = RwSignal::new(storage::get_sidebar_collapsed());

    let toggle = move |_| {
        collapsed.update(|c| *c = !*c);
        storage::save_sidebar_collapsed(collapsed.get_untracked());
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <button class="app-header__toggle" on:click=toggle title="Toggle sidebar">
                    {icon("menu")}
                </button>
                <span class="app-header__title">"Inventory Admin"</span>
            </header>

            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || collapsed.get()
                >
                    <Sidebar collapsed=collapsed.read_only() />
                </aside>

                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
