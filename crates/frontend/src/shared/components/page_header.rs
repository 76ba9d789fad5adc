use leptos::prelude::*;

/// Header row of a collection page: title, optional subtitle, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Search box, buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h2 class="page__title">{title}</h2>
                {move || subtitle.get().map(|s| view! {
                    <p class="page__subtitle">{s}</p>
                })}
            </div>
            <div class="page__header-actions">
                {children()}
            </div>
        </div>
    }
}
