use crate::shared::components::ui::select::options_from;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::modal::Modal;
use crate::shared::persistence::use_persistence;
use contracts::domain::a001_dictionary::{DictionaryDraft, DELIVERY_TYPE_OPTIONS};
use contracts::enums::dictionary_kind::{DictionaryKind, FormField};
use leptos::prelude::*;
use thaw::Switch;

/// "New <kind>" dialog. Fields follow [`DictionaryKind::form_fields`].
#[component]
pub fn DictionaryDetails(kind: DictionaryKind, on_close: Callback<()>) -> impl IntoView {
    let persistence = use_persistence();
    let draft = RwSignal::new(DictionaryDraft::new(kind));
    let enabled = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let singular = kind.singular_name();

    let save = Callback::new(move |_: leptos::ev::MouseEvent| {
        let mut record = draft.get_untracked();
        record.enabled = enabled.get_untracked();
        match persistence.dictionary.save(record) {
            Ok(outcome) => {
                log::debug!("{} draft saved: {:?}", kind, outcome);
                on_close.run(());
            }
            Err(e) => {
                log::error!("failed to save {} draft: {}", kind, e);
                error.set(Some(e.to_string()));
            }
        }
    });

    let field_view = move |field: FormField| -> Option<AnyView> {
        match field {
            FormField::Name => Some(view! {
                <Input
                    label="Name"
                    placeholder=format!("Enter {} name", singular)
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                />
            }.into_any()),
            FormField::Code => Some(view! {
                <Input
                    label="Code"
                    placeholder="USD"
                    value=Signal::derive(move || draft.with(|d| d.code.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| draft.update(|d| d.code = Some(v)))
                />
            }.into_any()),
            FormField::DeliveryType => Some(view! {
                <Select
                    label="Type"
                    value=Signal::derive(move || draft.with(|d| d.delivery_type.clone().unwrap_or_default()))
                    on_change=Callback::new(move |v| draft.update(|d| d.delivery_type = Some(v)))
                    options=options_from(DELIVERY_TYPE_OPTIONS)
                />
            }.into_any()),
            FormField::Fee => Some(view! {
                <Input
                    label="Fee"
                    value=Signal::derive(move || draft.with(|d| d.fee.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| draft.update(|d| d.fee = Some(v)))
                />
            }.into_any()),
            // Rendered below the inputs
            FormField::Enabled => None,
        }
    };

    view! {
        <Modal
            title=format!("New {}", singular)
            on_close=on_close
            footer=move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=save>"Save"</Button>
            }
        >
            <div class="form">
                <div class="form__grid">
                    {kind.form_fields().into_iter().filter_map(field_view).collect_view()}
                </div>
                {kind.form_fields().contains(&FormField::Enabled).then(|| view! {
                    <div class="form__switch-row">
                        <span class="form__label">"Enabled"</span>
                        <Switch checked=enabled />
                    </div>
                })}
                {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>
        </Modal>
    }
}
