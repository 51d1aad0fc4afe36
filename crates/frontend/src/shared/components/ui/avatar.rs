use leptos::prelude::*;

/// Initials shown when an avatar image is missing: first letter of up to
/// two name words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Round avatar with an initials fallback when the image fails to load.
#[component]
pub fn Avatar(
    /// Image source
    #[prop(into)]
    src: String,
    /// Person name, used for alt text and the fallback
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let fallback = initials(&name);
    let alt = name.clone();

    view! {
        <span class="avatar">
            <Show
                when=move || !failed.get()
                fallback=move || view! { <span class="avatar__fallback">{fallback.clone()}</span> }
            >
                <img
                    class="avatar__img"
                    src=src.clone()
                    alt=alt.clone()
                    on:error=move |_| failed.set(true)
                />
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Natali Craig"), "NC");
        assert_eq!(initials("Koray Okumus"), "KO");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("Mary Jane Watson"), "MJ");
    }

    #[test]
    fn initials_of_empty_name_are_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }
}
