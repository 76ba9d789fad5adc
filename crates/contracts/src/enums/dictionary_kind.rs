use serde::{Deserialize, Serialize};

/// Icon used for kinds without a dedicated one.
pub const DEFAULT_ICON: &str = "price";

/// The nine reference-data dictionaries shown through the generic grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryKind {
    Tax,
    Currency,
    Language,
    Kitchen,
    Price,
    Discount,
    Delivery,
    Reason,
    Expense,
}

/// Card layout a grid entry is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTemplate {
    /// Large primary label, caption, optional "Default" badge in the corner.
    LabelBadge,
    /// Icon, label, toggle and optional "Default" badge.
    Delivery,
    /// Paragraph with the secondary label; `titled` adds an icon-prefixed title.
    Annotated { titled: bool },
    /// Centered icon and label.
    IconLabel,
}

/// Inputs offered by the creation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Code,
    DeliveryType,
    Fee,
    Enabled,
}

impl DictionaryKind {
    /// Tag used in data and logs
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "tax",
            DictionaryKind::Currency => "currency",
            DictionaryKind::Language => "language",
            DictionaryKind::Kitchen => "kitchen",
            DictionaryKind::Price => "price",
            DictionaryKind::Discount => "discount",
            DictionaryKind::Delivery => "delivery",
            DictionaryKind::Reason => "reason",
            DictionaryKind::Expense => "expense",
        }
    }

    /// Last segment of `/settings/<slug>`
    pub fn slug(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "taxes",
            DictionaryKind::Currency => "currencies",
            DictionaryKind::Language => "languages",
            DictionaryKind::Kitchen => "kitchen",
            DictionaryKind::Price => "prices",
            DictionaryKind::Discount => "discounts",
            DictionaryKind::Delivery => "delivery",
            DictionaryKind::Reason => "reasons",
            DictionaryKind::Expense => "expenses",
        }
    }

    /// Page title and breadcrumb label
    pub fn display_name(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "Taxes",
            DictionaryKind::Currency => "Currencies",
            DictionaryKind::Language => "Languages",
            DictionaryKind::Kitchen => "Kitchen Stations",
            DictionaryKind::Price => "Price Types",
            DictionaryKind::Discount => "Discounts",
            DictionaryKind::Delivery => "Delivery Types",
            DictionaryKind::Reason => "Action Reasons",
            DictionaryKind::Expense => "Expense Types",
        }
    }

    /// Used in the dialog title: "New Tax", "New Kitchen Station".
    pub fn singular_name(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "Tax",
            DictionaryKind::Currency => "Currency",
            DictionaryKind::Language => "Language",
            DictionaryKind::Kitchen => "Kitchen Station",
            DictionaryKind::Price => "Price Type",
            DictionaryKind::Discount => "Discount",
            DictionaryKind::Delivery => "Delivery Type",
            DictionaryKind::Reason => "Action Reason",
            DictionaryKind::Expense => "Expense Type",
        }
    }

    /// Short field summary shown on the settings landing card
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "Rate, Set Default, Show In List",
            DictionaryKind::Currency => "Code, Name, Rate, Set Default",
            DictionaryKind::Language => "Set Default, Show In List",
            DictionaryKind::Kitchen => "Name, Autogenerate",
            DictionaryKind::Price => "Name, Order, User Access, Stores",
            DictionaryKind::Discount => "Value, Order, User Access, Stores",
            DictionaryKind::Delivery => "Name, Autogenerate, Dine-in",
            DictionaryKind::Reason => "Void Item, Cancel Order, Clear",
            DictionaryKind::Expense => "Name, Group",
        }
    }

    /// Icon key shown on grid cards
    pub fn icon(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "tax",
            DictionaryKind::Currency => "currency",
            DictionaryKind::Language => "language",
            DictionaryKind::Kitchen => "kitchen",
            DictionaryKind::Delivery => "delivery",
            DictionaryKind::Reason => "action",
            DictionaryKind::Price | DictionaryKind::Discount | DictionaryKind::Expense => {
                DEFAULT_ICON
            }
        }
    }

    /// Icon key shown on the settings landing card.
    ///
    /// Differs from [`Self::icon`] where the landing page has its own artwork.
    pub fn landing_icon(&self) -> &'static str {
        match self {
            DictionaryKind::Discount => "tax",
            DictionaryKind::Expense => "expense",
            DictionaryKind::Price => "price",
            other => other.icon(),
        }
    }

    pub fn template(&self) -> CardTemplate {
        match self {
            DictionaryKind::Tax
            | DictionaryKind::Currency
            | DictionaryKind::Language
            | DictionaryKind::Discount => CardTemplate::LabelBadge,
            DictionaryKind::Delivery => CardTemplate::Delivery,
            DictionaryKind::Reason => CardTemplate::Annotated { titled: true },
            DictionaryKind::Expense => CardTemplate::Annotated { titled: false },
            DictionaryKind::Kitchen | DictionaryKind::Price => CardTemplate::IconLabel,
        }
    }

    /// Fields of the creation dialog, in display order
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Name];
        match self {
            DictionaryKind::Currency => fields.push(FormField::Code),
            DictionaryKind::Delivery => {
                fields.push(FormField::DeliveryType);
                fields.push(FormField::Fee);
            }
            _ => {}
        }
        fields.push(FormField::Enabled);
        fields
    }

    /// Value pre-filled into the name input of a new entry
    pub fn default_name(&self) -> &'static str {
        match self {
            DictionaryKind::Tax => "20%",
            _ => "",
        }
    }

    /// All kinds in landing-page order
    pub fn all() -> Vec<DictionaryKind> {
        vec![
            DictionaryKind::Tax,
            DictionaryKind::Currency,
            DictionaryKind::Language,
            DictionaryKind::Kitchen,
            DictionaryKind::Price,
            DictionaryKind::Discount,
            DictionaryKind::Delivery,
            DictionaryKind::Reason,
            DictionaryKind::Expense,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.code() == code)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.slug() == slug)
    }
}

impl std::fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_slugs_round_trip() {
        for kind in DictionaryKind::all() {
            assert_eq!(DictionaryKind::from_code(kind.code()), Some(kind));
            assert_eq!(DictionaryKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(DictionaryKind::from_code("units"), None);
        assert_eq!(DictionaryKind::from_slug("tax"), None);
    }

    #[test]
    fn test_template_table() {
        use CardTemplate::*;
        let expected = [
            (DictionaryKind::Tax, LabelBadge),
            (DictionaryKind::Currency, LabelBadge),
            (DictionaryKind::Language, LabelBadge),
            (DictionaryKind::Discount, LabelBadge),
            (DictionaryKind::Delivery, Delivery),
            (DictionaryKind::Reason, Annotated { titled: true }),
            (DictionaryKind::Expense, Annotated { titled: false }),
            (DictionaryKind::Kitchen, IconLabel),
            (DictionaryKind::Price, IconLabel),
        ];
        for (kind, template) in expected {
            assert_eq!(kind.template(), template, "{kind}");
        }
    }

    #[test]
    fn test_icons_fall_back_to_default() {
        assert_eq!(DictionaryKind::Tax.icon(), "tax");
        assert_eq!(DictionaryKind::Reason.icon(), "action");
        assert_eq!(DictionaryKind::Price.icon(), DEFAULT_ICON);
        assert_eq!(DictionaryKind::Discount.icon(), DEFAULT_ICON);
        assert_eq!(DictionaryKind::Expense.icon(), DEFAULT_ICON);
    }

    #[test]
    fn test_form_fields_vary_by_kind() {
        use FormField::*;
        assert_eq!(DictionaryKind::Tax.form_fields(), vec![Name, Enabled]);
        assert_eq!(DictionaryKind::Currency.form_fields(), vec![Name, Code, Enabled]);
        assert_eq!(
            DictionaryKind::Delivery.form_fields(),
            vec![Name, DeliveryType, Fee, Enabled]
        );
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&DictionaryKind::Kitchen).unwrap();
        assert_eq!(json, "\"kitchen\"");
    }
}
