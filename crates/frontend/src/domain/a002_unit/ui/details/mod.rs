use crate::shared::components::ui::{Button, Input};
use crate::shared::modal::Modal;
use crate::shared::persistence::use_persistence;
use contracts::domain::a002_unit::UnitDraft;
use contracts::enums::unit_category::UnitCategory;
use leptos::prelude::*;
use thaw::Switch;

/// "New Unit" dialog; the draft keeps the category of the section it was opened from
#[component]
pub fn UnitDetails(category: UnitCategory, on_close: Callback<()>) -> impl IntoView {
    let persistence = use_persistence();
    let draft = RwSignal::new(UnitDraft::new(category));
    let enabled = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let save = Callback::new(move |_: leptos::ev::MouseEvent| {
        let mut record = draft.get_untracked();
        record.enabled = enabled.get_untracked();
        match persistence.unit.save(record) {
            Ok(outcome) => {
                log::debug!("unit draft saved: {:?}", outcome);
                on_close.run(());
            }
            Err(e) => {
                log::error!("failed to save unit draft: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <Modal
            title="New Unit"
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
                    <Input
                        label="Name"
                        placeholder="Enter unit name"
                        value=Signal::derive(move || draft.with(|d| d.name.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                    />
                    <Input
                        label="Short Name"
                        placeholder="Pcs"
                        value=Signal::derive(move || draft.with(|d| d.short_name.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.short_name = v))
                    />
                </div>
                <div class="form__switch-row">
                    <span class="form__label">"Enabled"</span>
                    <Switch checked=enabled />
                </div>
                {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>
        </Modal>
    }
}
