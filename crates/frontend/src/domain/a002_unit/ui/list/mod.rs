use super::details::UnitDetails;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_GRID;
use contracts::domain::a002_unit::{group_by_category, seed_units, Unit};
use contracts::enums::unit_category::UnitCategory;
use leptos::prelude::*;

impl Searchable for Unit {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.short_name, filter)
    }
}

/// Category sections left after applying the search box
pub fn visible_sections(units: &[Unit], query: &str) -> Vec<(UnitCategory, Vec<Unit>)> {
    group_by_category(&filter_list(units, query))
}

#[component]
pub fn UnitsList() -> impl IntoView {
    let units = StoredValue::new(seed_units());
    let search = RwSignal::new(String::new());
    // Category of the open "New Unit" dialog
    let dialog_category = RwSignal::new(None::<UnitCategory>);

    let sections = move || units.with_value(|all| visible_sections(all, &search.get()));

    view! {
        <PageFrame page_id="a002_unit--grid" category=PAGE_CAT_GRID>
            <PageHeader title="Units" subtitle="Manage measurement units".to_string()>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v| search.set(v))
                />
            </PageHeader>

            <For
                each=sections
                key=|(category, bucket)| (*category, bucket.iter().map(|u| u.id.clone()).collect::<Vec<_>>())
                children=move |(category, bucket)| view! {
                    <section class="unit-section">
                        <h3 class="unit-section__title">{category.display_name()}</h3>
                        <div class="card-grid card-grid--compact">
                            {bucket.into_iter().enumerate().map(|(i, unit)| view! {
                                <CardAnimated delay_ms={(i as u32) * 20} class="card--unit">
                                    <span class="unit-card__name">{unit.name}</span>
                                    <span class="unit-card__short">{unit.short_name}</span>
                                </CardAnimated>
                            }).collect_view()}
                            <CardAnimated
                                class="card--add"
                                on_click=Callback::new(move |_| dialog_category.set(Some(category)))
                            >
                                {icon("plus")}
                            </CardAnimated>
                        </div>
                    </section>
                }
            />

            {move || dialog_category.get().map(|category| view! {
                <UnitDetails
                    category=category
                    on_close=Callback::new(move |_| dialog_category.set(None))
                />
            })}
        </PageFrame>
    }
}
