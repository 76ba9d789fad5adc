pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>

            <div class="app-main">
                <TopHeader />
                <main data-zone="center" class="app-content">
                    {children()}
                </main>
            </div>

            // Mobile overlay closes the sidebar
            <Show when=move || ctx.mobile_menu_open.get()>
                <div class="app-overlay" on:click=move |_| ctx.mobile_menu_open.set(false)></div>
            </Show>
        </div>
    }
}
