use crate::shared::components::ui::select::options_from;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::modal::Modal;
use crate::shared::persistence::use_persistence;
use contracts::domain::a003_customer::{CustomerDraft, GROUP_OPTIONS};
use contracts::enums::customer_type::CustomerType;
use leptos::prelude::*;
use thaw::Switch;

fn type_options() -> Vec<(String, String)> {
    CustomerType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect()
}

/// Groups are stored by label, so the label doubles as the option value
pub fn group_options() -> Vec<(String, String)> {
    options_from(GROUP_OPTIONS)
        .into_iter()
        .map(|(_, label)| (label.clone(), label))
        .collect()
}

/// "New Customer" dialog
#[component]
pub fn CustomerDetails(on_close: Callback<()>) -> impl IntoView {
    let persistence = use_persistence();
    let draft = RwSignal::new(CustomerDraft::new());
    let vat_payer = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let save = Callback::new(move |_: leptos::ev::MouseEvent| {
        let mut record = draft.get_untracked();
        record.vat_payer = vat_payer.get_untracked();
        let customer = record.into_customer();
        let id = customer.id.clone();
        match persistence.customer.save(customer) {
            Ok(outcome) => {
                log::debug!("customer {} saved: {:?}", id, outcome);
                on_close.run(());
            }
            Err(e) => {
                log::error!("failed to save customer {}: {}", id, e);
                error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <Modal
            title="New Customer"
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
                        placeholder="Enter customer name"
                        value=Signal::derive(move || draft.with(|d| d.name.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                    />
                    <Input
                        label="Tax Code"
                        value=Signal::derive(move || draft.with(|d| d.tax_code.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.tax_code = v))
                    />
                    <Select
                        label="Customer Type"
                        value=Signal::derive(move || draft.with(|d| {
                            d.customer_type.map(|t| t.code().to_string()).unwrap_or_default()
                        }))
                        on_change=Callback::new(move |v: String| {
                            draft.update(|d| d.customer_type = CustomerType::from_code(&v))
                        })
                        options=type_options()
                    />
                    <Select
                        label="Group"
                        value=Signal::derive(move || draft.with(|d| d.group.clone()))
                        on_change=Callback::new(move |v| draft.update(|d| d.group = v))
                        options=group_options()
                    />
                    <Input
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || draft.with(|d| d.email.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                    />
                    <Input
                        label="Phone"
                        input_type="tel"
                        placeholder="+995"
                        value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.phone = v))
                    />
                    <Input
                        label="Birthday"
                        input_type="date"
                        value=Signal::derive(move || draft.with(|d| d.birthday.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.birthday = v))
                    />
                    <Input
                        label="Address"
                        value=Signal::derive(move || draft.with(|d| d.address.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.address = v))
                    />
                </div>
                <div class="form__switch-row">
                    <span class="form__label">"VAT Payer"</span>
                    <Switch checked=vat_payer />
                </div>
                {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>
        </Modal>
    }
}
