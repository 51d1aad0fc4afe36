use leptos::prelude::*;

/// Rounded content card used across the dashboard grid.
#[component]
pub fn Card(
    /// Optional heading rendered above the body
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("card {}", additional_class())>
            {move || {
                title.get().map(|t| view! { <h3 class="card__title">{t}</h3> })
            }}
            {children()}
        </div>
    }
}
