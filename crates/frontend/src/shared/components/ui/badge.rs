use contracts::domain::a101_inventory_product::StockStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Вариант бейджа для статуса строки (партии, счета, движения)
pub fn status_variant(code: &str) -> &'static str {
    match code {
        "fresh" | "paid" | "restock" | "in-stock" => "success",
        "near-expiry" | "pending" | "audit" | "low-stock" => "warning",
        "expired" | "overdue" | "out-of-stock" => "error",
        "sale" => "primary",
        _ => "neutral",
    }
}

/// Stock status badge; in-stock rows get no badge
#[component]
pub fn StockStatusBadge(status: StockStatus) -> impl IntoView {
    (status != StockStatus::InStock).then(|| {
        view! {
            <Badge variant=status_variant(status.code())>{status.display_name()}</Badge>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("near-expiry"), "warning");
        assert_eq!(status_variant("overdue"), "error");
        assert_eq!(status_variant("paid"), "success");
        assert_eq!(status_variant("return"), "neutral");
    }
}
