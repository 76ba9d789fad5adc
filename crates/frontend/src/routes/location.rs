//! Location -> page mapping.
//!
//! A location is the URL fragment without its leading `#`. Page selection
//! matches exact paths, while title and breadcrumbs match by substring:
//! any location containing `units` gets the Units crumb, whatever else it
//! contains.

use contracts::enums::dictionary_kind::DictionaryKind;

pub const LOCATION_MARKER: char = '#';
/// Used when the fragment is absent or empty
pub const DEFAULT_LOCATION: &str = "/settings";
pub const SETTINGS_ROOT: &str = "/";
pub const DASHBOARD: &str = "/dashboard";
pub const CUSTOMERS: &str = "/customers";
pub const UNITS: &str = "/settings/units";

// ============================================================================
// Location
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Normalizes a raw fragment (`#/settings/taxes`, `/settings/taxes`, ``).
    pub fn from_fragment(raw: &str) -> Self {
        let path = normalize(raw);
        if path.is_empty() {
            Self(DEFAULT_LOCATION.to_string())
        } else {
            Self(path.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value to write back into the URL fragment
    pub fn to_fragment(&self) -> String {
        format!("{LOCATION_MARKER}{}", self.0)
    }

    pub fn descriptor(&self) -> PageDescriptor {
        resolve(&self.0)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self(DEFAULT_LOCATION.to_string())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> &str {
    raw.strip_prefix(LOCATION_MARKER).unwrap_or(raw)
}

pub fn settings_location(kind: DictionaryKind) -> String {
    format!("/settings/{}", kind.slug())
}

// ============================================================================
// Page descriptor
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageComponent {
    SettingsLanding,
    Units,
    Dictionary(DictionaryKind),
    Customers,
    /// Unrecognized location; carries the path as received
    UnderConstruction(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` for the current (last) crumb
    pub target: Option<String>,
}

impl Breadcrumb {
    fn link(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: Some(target.to_string()),
        }
    }

    fn current(label: &str) -> Self {
        Self {
            label: label.to_string(),
            target: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub component: PageComponent,
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Maps any location string to the page it shows. Total and pure.
pub fn resolve(location: &str) -> PageDescriptor {
    let path = normalize(location);
    PageDescriptor {
        component: component_for(path),
        title: matched_label(path).unwrap_or("Settings").to_string(),
        breadcrumbs: breadcrumbs_for(path),
    }
}

fn is_settings_root(path: &str) -> bool {
    matches!(path, "" | SETTINGS_ROOT | DEFAULT_LOCATION)
}

fn component_for(path: &str) -> PageComponent {
    if is_settings_root(path) {
        return PageComponent::SettingsLanding;
    }
    if path == UNITS {
        return PageComponent::Units;
    }
    if path == CUSTOMERS {
        return PageComponent::Customers;
    }
    if let Some(kind) = path
        .strip_prefix("/settings/")
        .and_then(DictionaryKind::from_slug)
    {
        return PageComponent::Dictionary(kind);
    }
    PageComponent::UnderConstruction(path.to_string())
}

/// Label of the first substring rule matching `path`, in precedence order.
fn matched_label(path: &str) -> Option<&'static str> {
    if path.contains("units") {
        return Some("Units");
    }
    if path.contains("customers") {
        return Some("Customers");
    }
    DictionaryKind::all()
        .into_iter()
        .find(|kind| path.contains(kind.slug()))
        .map(|kind| kind.display_name())
}

fn breadcrumbs_for(path: &str) -> Vec<Breadcrumb> {
    if is_settings_root(path) {
        return vec![];
    }
    match matched_label(path) {
        Some("Customers") => vec![
            Breadcrumb::link("Dashboard", DASHBOARD),
            Breadcrumb::current("Customers"),
        ],
        Some(label) => vec![
            Breadcrumb::link("Settings", SETTINGS_ROOT),
            Breadcrumb::current(label),
        ],
        None => {
            let last = path.rsplit('/').next().filter(|s| !s.is_empty());
            vec![
                Breadcrumb::link("Settings", SETTINGS_ROOT),
                Breadcrumb::current(last.unwrap_or("Page")),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(d: &PageDescriptor) -> Vec<&str> {
        d.breadcrumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_settings_root_aliases() {
        let expected = resolve("");
        assert_eq!(expected.component, PageComponent::SettingsLanding);
        assert!(expected.breadcrumbs.is_empty());
        assert_eq!(expected.title, "Settings");
        assert_eq!(resolve("/"), expected);
        assert_eq!(resolve("/settings"), expected);
        assert_eq!(resolve("#/settings"), expected);
    }

    #[test]
    fn test_dictionary_slugs() {
        for kind in DictionaryKind::all() {
            let d = resolve(&settings_location(kind));
            assert_eq!(d.component, PageComponent::Dictionary(kind));
            assert_eq!(d.title, kind.display_name());
            assert_eq!(
                d.breadcrumbs,
                vec![
                    Breadcrumb::link("Settings", "/"),
                    Breadcrumb::current(kind.display_name()),
                ]
            );
        }
    }

    #[test]
    fn test_units_page() {
        let d = resolve("/settings/units");
        assert_eq!(d.component, PageComponent::Units);
        assert_eq!(d.title, "Units");
        assert_eq!(labels(&d), vec!["Settings", "Units"]);
    }

    // Customers hang off Dashboard rather than Settings; pinned on purpose.
    #[test]
    fn test_customers_use_dashboard_root() {
        let d = resolve("/customers");
        assert_eq!(d.component, PageComponent::Customers);
        assert_eq!(
            d.breadcrumbs,
            vec![
                Breadcrumb::link("Dashboard", "/dashboard"),
                Breadcrumb::current("Customers"),
            ]
        );
    }

    #[test]
    fn test_unknown_location_echoes_path() {
        let d = resolve("/foo/bar");
        assert_eq!(d.component, PageComponent::UnderConstruction("/foo/bar".into()));
        assert_eq!(labels(&d), vec!["Settings", "bar"]);
        assert_eq!(d.title, "Settings");
        assert_eq!(d.breadcrumbs[1].target, None);
    }

    #[test]
    fn test_trailing_slash_crumb_is_page() {
        let d = resolve("/foo/");
        assert_eq!(labels(&d), vec!["Settings", "Page"]);
    }

    #[test]
    fn test_crumbs_match_by_substring() {
        let d = resolve("/reports/units-export");
        assert_eq!(d.component, PageComponent::UnderConstruction("/reports/units-export".into()));
        assert_eq!(labels(&d), vec!["Settings", "Units"]);
        assert_eq!(d.title, "Units");

        // `units` wins over later rules
        let d = resolve("/customers/units");
        assert_eq!(labels(&d), vec!["Settings", "Units"]);
    }

    #[test]
    fn test_exact_match_for_pages() {
        let d = resolve("/settings/taxes/extra");
        assert!(matches!(d.component, PageComponent::UnderConstruction(_)));
        assert_eq!(labels(&d), vec!["Settings", "Taxes"]);
    }

    #[test]
    fn test_last_crumb_is_current() {
        for path in ["/settings/units", "/customers", "/settings/delivery", "/x"] {
            let d = resolve(path);
            let (last, rest) = d.breadcrumbs.split_last().unwrap();
            assert!(last.target.is_none(), "{path}");
            assert!(rest.iter().all(|c| c.target.is_some()), "{path}");
        }
    }

    #[test]
    fn test_location_normalization() {
        assert_eq!(Location::from_fragment("").as_str(), "/settings");
        assert_eq!(Location::from_fragment("#").as_str(), "/settings");
        assert_eq!(Location::from_fragment("#/customers").as_str(), "/customers");
        assert_eq!(Location::from_fragment("/customers").as_str(), "/customers");
        assert_eq!(Location::from_fragment("#/customers").to_fragment(), "#/customers");
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let location = Location::from_fragment("#/settings/kitchen");
        assert_eq!(location.descriptor(), location.descriptor());
    }
}
