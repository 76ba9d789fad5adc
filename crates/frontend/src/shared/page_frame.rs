//! PageFrame: root wrapper for every page rendered in the content area.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                 : `"{entity}--{category}"`, e.g. `"a002_unit--grid"`
//!   - `data-page-category` : one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on a page.
///
/// BEM modifier by category:
/// - `landing`     → `page page--landing`
/// - `grid`        → `page page--grid`
/// - `list`        → `page`
/// - `placeholder` → `page page--placeholder`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_LANDING => "page page--landing",
        PAGE_CAT_GRID => "page page--grid",
        PAGE_CAT_PLACEHOLDER => "page page--placeholder",
        _ => "page",
    };

    if !is_valid_page_id(&page_id) {
        log::warn!("page id '{}' does not follow {{entity}}--{{category}}", page_id);
    }

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
