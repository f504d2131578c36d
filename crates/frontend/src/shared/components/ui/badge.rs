use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "success", "warning", "danger", "info", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "danger" => "badge badge--danger",
        "info" => "badge badge--info",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}
