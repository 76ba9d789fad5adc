use leptos::prelude::*;

/// Labelled select; `options` are `(value, label)` pairs
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options.into_iter().map(|(val, text)| {
                    let val_for_selected = val.clone();
                    let is_selected = move || value.get() == val_for_selected;
                    view! {
                        <option value=val selected=is_selected>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Options from a static `(value, label)` table
pub fn options_from(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect()
}
