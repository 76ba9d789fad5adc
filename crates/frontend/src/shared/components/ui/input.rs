use leptos::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "email", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                class=move || format!("form__input {}", additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
