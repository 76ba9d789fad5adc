use crate::enums::dictionary_kind::{DictionaryKind, FormField};
use serde::{Deserialize, Serialize};

/// Caption shown on annotated cards when an entry has no secondary label.
pub const PLACEHOLDER_CAPTION: &str =
    "a dummy or placeholder text commonly used in publishing and web development.";

// ============================================================================
// Entry
// ============================================================================

/// One card of a dictionary grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: String,
    #[serde(rename = "primaryLabel")]
    pub primary_label: String,
    #[serde(rename = "secondaryLabel", default)]
    pub secondary_label: Option<String>,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

impl DictionaryEntry {
    fn seed(id: &str, primary: &str, secondary: &str, is_default: bool) -> Self {
        Self {
            id: id.to_string(),
            primary_label: primary.to_string(),
            secondary_label: Some(secondary.to_string()),
            is_default,
        }
    }

    /// Secondary label, or the placeholder caption when absent
    pub fn caption(&self) -> &str {
        self.secondary_label
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_CAPTION)
    }
}

/// Seed entries for a dictionary kind.
///
/// Every call builds a fresh list; pages own their copy for the lifetime of
/// the view.
pub fn load_entries(kind: DictionaryKind) -> Vec<DictionaryEntry> {
    let e = DictionaryEntry::seed;
    match kind {
        DictionaryKind::Tax => vec![e("1", "18%", "VAT", true), e("2", "20%", "VAT", false)],
        DictionaryKind::Currency => vec![
            e("1", "₾", "Georgian Lari", true),
            e("2", "$", "US Dollar", false),
            e("3", "€", "Euro", false),
        ],
        DictionaryKind::Language => vec![
            e("1", "Eng", "English", true),
            e("2", "Geo", "Georgian", false),
        ],
        DictionaryKind::Kitchen => vec![
            e("1", "Kitchen 1", "Main", false),
            e("2", "Kitchen 2", "Bar", false),
        ],
        DictionaryKind::Price => vec![
            e("1", "Price Type", "Retail", true),
            e("2", "Price Type", "Wholesale", false),
        ],
        DictionaryKind::Discount => vec![
            e("1", "20%", "Staff", false),
            e("2", "18%", "Happy Hour", false),
        ],
        DictionaryKind::Delivery => vec![
            e("1", "TakeAway", "Default", true),
            e("2", "Dine In", "Hall", false),
            e("3", "Curbside", "Pickup", false),
        ],
        DictionaryKind::Reason => vec![
            e("1", "Item Removal", "Void", false),
            e("2", "Order Cancellation", "Cancel", false),
        ],
        DictionaryKind::Expense => vec![
            e("1", "Rent", "Monthly", false),
            e("2", "Utilities", "Monthly", false),
        ],
    }
}

/// Same as [`load_entries`] for a raw type tag; unknown tags yield nothing.
pub fn load_entries_by_code(code: &str) -> Vec<DictionaryEntry> {
    DictionaryKind::from_code(code)
        .map(load_entries)
        .unwrap_or_default()
}

/// Number of entries flagged as default.
///
/// At most one is intended per dictionary; nothing enforces it yet.
pub fn default_count(entries: &[DictionaryEntry]) -> usize {
    entries.iter().filter(|e| e.is_default).count()
}

// ============================================================================
// Creation draft
// ============================================================================

pub const DELIVERY_TYPE_OPTIONS: &[(&str, &str)] = &[("d", "Delivery")];

/// Values collected by the creation dialog of a dictionary grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryDraft {
    pub kind: DictionaryKind,
    pub name: String,
    pub code: Option<String>,
    #[serde(rename = "deliveryType")]
    pub delivery_type: Option<String>,
    pub fee: Option<String>,
    pub enabled: bool,
}

impl DictionaryDraft {
    /// Empty draft carrying exactly the optional fields the kind's dialog shows
    pub fn new(kind: DictionaryKind) -> Self {
        let fields = kind.form_fields();
        let offers = |field: FormField| fields.contains(&field);
        Self {
            kind,
            name: kind.default_name().to_string(),
            code: offers(FormField::Code).then(String::new),
            delivery_type: offers(FormField::DeliveryType)
                .then(|| DELIVERY_TYPE_OPTIONS[0].0.to_string()),
            fee: offers(FormField::Fee).then(String::new),
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_entries() {
        let entries = load_entries(DictionaryKind::Currency);
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_default);
        let symbols: Vec<&str> = entries.iter().map(|e| e.primary_label.as_str()).collect();
        assert_eq!(symbols, vec!["₾", "$", "€"]);
    }

    #[test]
    fn test_kitchen_has_no_default() {
        let entries = load_entries(DictionaryKind::Kitchen);
        assert_eq!(entries.len(), 2);
        assert_eq!(default_count(&entries), 0);
    }

    #[test]
    fn test_every_kind_seeds_at_most_one_default() {
        for kind in DictionaryKind::all() {
            let entries = load_entries(kind);
            assert!((2..=3).contains(&entries.len()), "{kind}");
            assert!(default_count(&entries) <= 1, "{kind}");
        }
    }

    #[test]
    fn test_unknown_code_is_empty() {
        assert!(load_entries_by_code("units").is_empty());
        assert!(load_entries_by_code("").is_empty());
        assert_eq!(load_entries_by_code("tax").len(), 2);
    }

    #[test]
    fn test_caption_falls_back_to_placeholder() {
        let mut entry = load_entries(DictionaryKind::Expense).remove(0);
        assert_eq!(entry.caption(), "Monthly");
        entry.secondary_label = None;
        assert_eq!(entry.caption(), PLACEHOLDER_CAPTION);
    }

    #[test]
    fn test_draft_fields_follow_kind() {
        let tax = DictionaryDraft::new(DictionaryKind::Tax);
        assert_eq!(tax.name, "20%");
        assert!(tax.code.is_none() && tax.fee.is_none() && tax.delivery_type.is_none());
        assert!(tax.enabled);

        let currency = DictionaryDraft::new(DictionaryKind::Currency);
        assert_eq!(currency.code.as_deref(), Some(""));

        let delivery = DictionaryDraft::new(DictionaryKind::Delivery);
        assert_eq!(delivery.delivery_type.as_deref(), Some("d"));
        assert_eq!(delivery.fee.as_deref(), Some(""));
        assert!(delivery.code.is_none());
    }
}
