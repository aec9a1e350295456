use crate::shared::components::ui::Badge;
use contracts::shared::list_engine::TabBadge;
use leptos::prelude::*;

/// Панель вкладок с бейджами количества
#[component]
pub fn TabBar(
    /// Вкладки в порядке отображения
    #[prop(into)]
    tabs: Signal<Vec<TabBadge>>,
    /// Callback с ключом выбранной вкладки
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {move || {
                tabs.get()
                    .into_iter()
                    .map(|tab| {
                        let key = tab.key.clone();
                        let class = if tab.active { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" };
                        let variant = if tab.active { "primary" } else { "neutral" };
                        view! {
                            <button class=class on:click=move |_| on_change.run(key.clone())>
                                <span class="tab-bar__label">{tab.label.clone()}</span>
                                {tab.count.map(|count| view! { <Badge variant=variant>{count}</Badge> })}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
