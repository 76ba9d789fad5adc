pub mod card;

use self::card::DictionaryCard;
use super::details::DictionaryDetails;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_GRID;
use contracts::domain::a001_dictionary::{load_entries, DictionaryEntry};
use contracts::enums::dictionary_kind::DictionaryKind;
use leptos::prelude::*;

impl Searchable for DictionaryEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.primary_label, filter)
            || self
                .secondary_label
                .as_deref()
                .is_some_and(|s| contains_ci(s, filter))
    }
}

/// Card grid for one dictionary kind, with a creation dialog.
///
/// Entries are seeded on mount and live only as long as the page.
#[component]
pub fn DictionaryGrid(kind: DictionaryKind) -> impl IntoView {
    let entries = StoredValue::new(load_entries(kind));
    let search = RwSignal::new(String::new());
    let dialog_open = RwSignal::new(false);

    log::debug!("dictionary grid '{}' mounted with {} entries", kind, entries.with_value(Vec::len));

    let visible = move || entries.with_value(|all| filter_list(all, &search.get()));

    view! {
        <PageFrame page_id=format!("a001_dictionary_{}--grid", kind.code()) category=PAGE_CAT_GRID>
            <PageHeader title=kind.display_name()>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v| search.set(v))
                />
            </PageHeader>

            <div class="card-grid">
                <For
                    each=visible
                    key=|entry| entry.id.clone()
                    children=move |entry| view! {
                        <CardAnimated class="card--dictionary">
                            <DictionaryCard entry=entry kind=kind />
                        </CardAnimated>
                    }
                />
                <CardAnimated class="card--add" on_click=Callback::new(move |_| dialog_open.set(true))>
                    {icon("plus")}
                </CardAnimated>
            </div>

            <Show when=move || dialog_open.get()>
                <DictionaryDetails
                    kind=kind
                    on_close=Callback::new(move |_| dialog_open.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_over_both_labels() {
        let currencies = load_entries(DictionaryKind::Currency);
        let hits = filter_list(&currencies, "dollar");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].primary_label, "$");

        let hits = filter_list(&currencies, "€");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].secondary_label.as_deref(), Some("Euro"));
    }

    #[test]
    fn test_search_without_secondary_label() {
        let mut entries = load_entries(DictionaryKind::Reason);
        entries[0].secondary_label = None;
        assert!(filter_list(&entries, "void").is_empty());
        assert_eq!(filter_list(&entries, "removal").len(), 1);
    }
}
