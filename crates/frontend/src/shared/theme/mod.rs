//! Light and dark palettes applied by swapping the theme stylesheet.
//!
//! The active palette lives in a context signal; the chosen theme is
//! persisted in localStorage and restored on startup.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "app-theme";

/// Color palette selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for the `data-theme` hook and the localStorage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Stylesheet swapped into the `#theme-stylesheet` link.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light/light.css",
            Theme::Dark => "/static/themes/dark/dark.css",
        }
    }

    /// Unknown stored values fall back to the light palette.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Restores the persisted theme, defaulting when storage is empty.
fn restore_theme() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|value| Theme::from_str(&value))
        .unwrap_or_default()
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Points the `#theme-stylesheet` link at the palette's CSS file and sets
/// the `data-theme` attribute on the body. The link itself is static in
/// `index.html`; only its href changes.
fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(link) = document.get_element_by_id("theme-stylesheet") {
        if let Ok(link) = link.dyn_into::<web_sys::HtmlLinkElement>() {
            let _ = link.set_href(theme.css_path());
        }
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Applies, persists and publishes the new theme.
    pub fn set_theme(&self, theme: Theme) {
        apply_theme(theme);
        persist_theme(theme);
        self.theme.set(theme);
    }

    /// Switches between the light and dark palettes.
    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().flipped());
    }
}

/// Provides the theme context and re-applies the persisted theme on mount.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = restore_theme();
    let context = ThemeContext {
        theme: RwSignal::new(initial),
    };
    provide_context(context);

    Effect::new(move |_| {
        apply_theme(initial);
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_falls_back_to_light() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("solarized"), Theme::Light);
        assert_eq!(Theme::from_str(""), Theme::Light);
    }

    #[test]
    fn flipped_is_involutive() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.flipped().flipped(), theme);
        }
    }

    #[test]
    fn css_path_matches_theme_name() {
        for theme in [Theme::Light, Theme::Dark] {
            assert!(theme.css_path().contains(theme.as_str()));
        }
    }
}
