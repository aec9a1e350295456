use crate::shared::icons::icon;
use leptos::prelude::*;

/// Компонент поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Quick search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || is_filter_active().then(|| view! {
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
