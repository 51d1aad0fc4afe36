use leptos::prelude::*;

/// Bare checkbox for table rows. No label; the row itself is the context.
#[component]
pub fn RowCheckbox(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            type="checkbox"
            class=move || format!("row-checkbox {}", additional_class())
            prop:checked=move || checked.get()
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_checked(&ev));
                }
            }
        />
    }
}
