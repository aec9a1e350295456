//! Боковое меню
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            href: "/inventory",
            label: "Inventory",
            icon: "inventory",
        },
        MenuItem {
            href: "/items",
            label: "Items",
            icon: "package",
        },
    ]
}

/// Активен ли пункт меню для текущего пути (карточка товара — под Inventory)
fn is_active(href: &str, pathname: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
pub fn Sidebar(#[prop(into)] collapsed: Signal<bool>) -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {menu_items()
                .into_iter()
                .map(|item| {
                    let href = item.href;
                    view! {
                        <A href=href attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    location.pathname.with(|p| is_active(href, p))
                                }
                                title=item.label
                            >
                                <span class="app-sidebar__icon">{icon(item.icon)}</span>
                                <Show when=move || !collapsed.get()>
                                    <span class="app-sidebar__label">{item.label}</span>
                                </Show>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
