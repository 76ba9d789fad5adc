use crate::layout::global_context::AppGlobalContext;
use crate::routes::location::{settings_location, CUSTOMERS, UNITS};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LANDING;
use contracts::enums::dictionary_kind::DictionaryKind;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LandingItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub target: String,
}

/// Cards of the settings landing page, in display order
pub fn landing_items() -> Vec<LandingItem> {
    let mut items = vec![LandingItem {
        title: "Units",
        icon: "ruler",
        description: "Name",
        target: UNITS.to_string(),
    }];
    items.extend(DictionaryKind::all().into_iter().map(|kind| LandingItem {
        title: kind.display_name(),
        icon: kind.landing_icon(),
        description: kind.description(),
        target: settings_location(kind),
    }));
    items.push(LandingItem {
        title: "Customers",
        icon: "user",
        description: "Manage client database",
        target: CUSTOMERS.to_string(),
    });
    items
}

#[component]
pub fn SettingsLanding() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="a001_dictionary--landing" category=PAGE_CAT_LANDING>
            <div class="page__header">
                <div class="page__header-text">
                    <h2 class="page__title page__title--large">"Dictionaries"</h2>
                    <p class="page__subtitle">"Manage your system configurations and definitions."</p>
                </div>
            </div>

            <div class="card-grid card-grid--landing">
                {landing_items().into_iter().enumerate().map(|(i, item)| {
                    let target = item.target.clone();
                    view! {
                        <CardAnimated
                            delay_ms={(i as u32) * 30}
                            class="card--landing"
                            on_click=Callback::new(move |_| ctx.navigate(&target))
                        >
                            <div class="landing-card">
                                <div class="landing-card__icon">{icon(item.icon)}</div>
                                <h3 class="landing-card__title">{item.title}</h3>
                                <p class="landing-card__description">{item.description}</p>
                            </div>
                        </CardAnimated>
                    }
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::location::{resolve, PageComponent};

    #[test]
    fn test_landing_order() {
        let titles: Vec<&str> = landing_items().iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            vec![
                "Units",
                "Taxes",
                "Currencies",
                "Languages",
                "Kitchen Stations",
                "Price Types",
                "Discounts",
                "Delivery Types",
                "Action Reasons",
                "Expense Types",
                "Customers",
            ]
        );
    }

    #[test]
    fn test_every_card_leads_to_a_real_page() {
        for item in landing_items() {
            let page = resolve(&item.target);
            assert!(
                !matches!(page.component, PageComponent::UnderConstruction(_)),
                "{}",
                item.target
            );
            assert_eq!(page.title, item.title);
        }
    }
}
