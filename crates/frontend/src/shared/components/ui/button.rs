use leptos::prelude::*;

/// Square ghost button wrapping a single icon. The workhorse of the top
/// header and toolbars.
#[component]
pub fn IconButton(
    /// Icon name passed to `shared::icons::icon`
    #[prop(into)]
    icon: String,
    /// Tooltip / accessible label
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let btn_title = move || title.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("icon-btn {}", additional_class())
            title=btn_title
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {crate::shared::icons::icon(&icon)}
        </button>
    }
}
