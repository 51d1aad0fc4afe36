pub mod global_context;
pub mod left;
pub mod right;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |    Content    |  InfoPanel   |
/// |   (Left)  |   (Center)    |   (Right)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    // Left/Right components read AppGlobalContext internally for
    // sidebar/panel visibility control

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                // Main content area
                <div class="app-main">
                    {center()}
                </div>

                // Right panel - uses ctx.right_open for visibility
                <right::Right>
                    {right()}
                </right::Right>
            </div>

        </div>
    }
}
