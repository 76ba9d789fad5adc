//! Root layout: shell chrome plus the page picked by the current location.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::registry::render_page;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once; follows the URL fragment from here on
    ctx.init_router_integration();

    // Re-render only when the page itself changes, not on every fragment
    let component = Memo::new(move |_| ctx.page().component);

    view! {
        <Shell>
            {move || render_page(component.get())}
        </Shell>
    }
}
