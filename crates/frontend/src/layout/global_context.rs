use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Which top-level view the center slot renders.
///
/// Serialized form is the `?view=` query parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "default")]
    Dashboard,
    #[serde(rename = "order-history")]
    OrderHistory,
}

#[derive(Serialize, Deserialize)]
struct ViewQuery {
    view: ViewMode,
}

/// Duration of the center-column fade when the view switches.
const VIEW_FADE_MS: u32 = 200;

/// App-wide UI state shared through context.
///
/// `set_view` is the only writer of the current view; everything else
/// (top header, sidebar, center slot) just reads. Cheap to copy into any
/// closure.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<ViewMode>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
    view_fading: RwSignal<bool>,
    fade_generation: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewMode::default()),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(true),
            view_fading: RwSignal::new(false),
            fade_generation: StoredValue::new(0),
        }
    }

    /// Switches the center view. No-op when the view is already active.
    pub fn set_view(&self, next: ViewMode) {
        if self.view.get_untracked() == next {
            return;
        }
        leptos::logging::log!("switching view: {:?}", next);
        self.view.set(next);
        self.begin_fade();
    }

    /// The history button flips between the two views.
    pub fn toggle_view(&self) {
        let next = match self.view.get_untracked() {
            ViewMode::OrderHistory => ViewMode::Dashboard,
            ViewMode::Dashboard => ViewMode::OrderHistory,
        };
        self.set_view(next);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|open| *open = !*open);
    }

    /// True while the cross-view fade class should be applied.
    pub fn view_fading(&self) -> ReadSignal<bool> {
        self.view_fading.read_only()
    }

    /// Schedules the fade reset. A switch arriving before the previous timer
    /// fired supersedes it: each switch bumps the generation and only the
    /// latest timer clears the flag.
    fn begin_fade(&self) {
        self.view_fading.set(true);
        let generation = self.fade_generation.with_value(|g| g + 1);
        self.fade_generation.set_value(generation);

        let fading = self.view_fading;
        let generations = self.fade_generation;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(VIEW_FADE_MS).await;
            if generations.get_value() == generation {
                fading.set(false);
            }
        });
    }

    /// Mirrors the active view into the URL query string and restores it on
    /// startup, so a reload lands on the same view. Uses `replace_state` to
    /// keep the browser history clean.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Ok(query) = serde_qs::from_str::<ViewQuery>(search.trim_start_matches('?')) {
            self.view.set(query.view);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&ViewQuery {
                view: this.view.get(),
            })
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the context, wires URL sync, and provides it to the subtree.
pub fn provide_app_context() -> AppGlobalContext {
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);
    ctx
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}
