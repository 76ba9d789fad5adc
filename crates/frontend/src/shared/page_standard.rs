//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_unit--grid"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads to `domain/a002_unit/`.

/// Landing page linking to other pages.
pub const PAGE_CAT_LANDING: &str = "landing";

/// Card grid of dictionary entries.
pub const PAGE_CAT_GRID: &str = "grid";

/// Table of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Stand-in for a location without a page yet.
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LANDING,
    PAGE_CAT_GRID,
    PAGE_CAT_LIST,
    PAGE_CAT_PLACEHOLDER,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a002_unit--grid"));
        assert!(is_valid_page_id("a003_customer--list"));
        assert!(!is_valid_page_id("a003_customer"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_customer--detail"));
    }
}
