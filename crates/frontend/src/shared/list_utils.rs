//! Search helpers shared by every collection page
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Types that can be narrowed by the page search box
pub trait Searchable {
    /// Checks whether the item matches an already lower-cased query
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, filter_lower: &str) -> bool {
    haystack.to_lowercase().contains(filter_lower)
}

/// Keeps the items matching `filter`; a blank filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&filter))
        .cloned()
        .collect()
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let placeholder = move || placeholder.get().unwrap_or_else(|| "Search".to_string());
    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    #[test]
    fn test_blank_filter_keeps_all() {
        let rows = vec![Row("Euro"), Row("US Dollar")];
        assert_eq!(filter_list(&rows, ""), rows);
        assert_eq!(filter_list(&rows, "   "), rows);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![Row("Euro"), Row("US Dollar"), Row("Georgian Lari")];
        assert_eq!(filter_list(&rows, "DOL"), vec![Row("US Dollar")]);
        assert_eq!(filter_list(&rows, " r "), vec![Row("Euro"), Row("US Dollar"), Row("Georgian Lari")]);
        assert!(filter_list(&rows, "yen").is_empty());
    }
}
