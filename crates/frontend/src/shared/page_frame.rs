//! PageFrame — корневая обёртка страницы.
//!
//! Ставит на корневой элемент `id` вида `"{entity}--{category}"`
//! (например `"a101_inventory_product--list"`) и `data-page-category`.

use leptos::prelude::*;

/// Список записей: таблица с вкладками, поиском и пагинацией.
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка одной записи.
pub const PAGE_CAT_DETAIL: &str = "detail";

fn page_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// PAGE_CAT_LIST или PAGE_CAT_DETAIL
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL, "product"), "page page--detail product");
    }
}
