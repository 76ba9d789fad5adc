//! CardAnimated: thaw [`Card`] that fades in and can be clicked.
//!
//! The animation is defined in `layout.css` (`@keyframes card-appear`).
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0 on_click=Callback::new(move |_| open())>
//!     <span>"Kg"</span>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds, for a stagger effect
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes on the wrapper (`card--add`, `card--dictionary` ...)
    #[prop(optional, into)]
    class: String,
    /// Makes the card clickable
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let clickable = on_click.is_some();
    let full_class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    view! {
        <div
            class=full_class
            class:card--clickable=clickable
            style=style
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <Card>
                {children()}
            </Card>
        </div>
    }
}
