use leptos::prelude::*;

/// Row selection checkbox rendered as a `<td>`.
///
/// Clicks do not reach the row (`stop_propagation`).
///
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || selected.get().contains(&id))
///     on_change=Callback::new(move |checked| toggle_select(id.clone(), checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Render as `<th>` for a select-all header
    #[prop(optional)]
    header: bool,
) -> impl IntoView {
    let input = move || view! {
        <input
            type="checkbox"
            class="table__checkbox"
            prop:checked=checked
            on:change=move |ev| on_change.run(event_target_checked(&ev))
        />
    };

    if header {
        view! {
            <th class="table__header-cell table__cell--checkbox">{input()}</th>
        }
        .into_any()
    } else {
        view! {
            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                {input()}
            </td>
        }
        .into_any()
    }
}
