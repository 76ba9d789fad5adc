use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog with a title bar, a body and an optional footer.
///
/// Closes on Escape, on overlay click and through the header close button;
/// the parent decides whether it is mounted.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Buttons rendered in the footer
    #[prop(optional, into)]
    footer: ViewFn,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                <div class="modal-footer">{footer.run()}</div>
            </div>
        </div>
    }
}
