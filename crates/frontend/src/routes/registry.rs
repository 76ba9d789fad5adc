//! Maps a resolved [`PageComponent`] to the view rendered in the content area.

use super::location::PageComponent;
use crate::domain::a001_dictionary::ui::grid::DictionaryGrid;
use crate::domain::a001_dictionary::ui::landing::SettingsLanding;
use crate::domain::a002_unit::ui::list::UnitsList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PLACEHOLDER;
use leptos::prelude::*;

pub fn render_page(component: PageComponent) -> AnyView {
    match component {
        PageComponent::SettingsLanding => view! { <SettingsLanding /> }.into_any(),
        PageComponent::Units => view! { <UnitsList /> }.into_any(),
        PageComponent::Dictionary(kind) => view! { <DictionaryGrid kind=kind /> }.into_any(),
        PageComponent::Customers => view! { <CustomerList /> }.into_any(),
        PageComponent::UnderConstruction(path) => {
            log::warn!("no page registered for '{}'", path);
            view! { <UnderConstruction path=path /> }.into_any()
        }
    }
}

#[component]
fn UnderConstruction(path: String) -> impl IntoView {
    view! {
        <PageFrame page_id="placeholder--placeholder" category=PAGE_CAT_PLACEHOLDER>
            <div class="placeholder">
                <div class="placeholder__icon">{icon("settings")}</div>
                <p class="placeholder__text">{format!("Page under construction: {}", path)}</p>
            </div>
        </PageFrame>
    }
}
