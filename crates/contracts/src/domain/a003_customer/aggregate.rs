use crate::enums::customer_type::CustomerType;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Number of placeholder rows shown when the store has nothing to offer.
pub const PLACEHOLDER_COUNT: usize = 8;

// ============================================================================
// Aggregate
// ============================================================================

/// Customer document as stored in the `customers` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub group: String,
    #[serde(rename = "taxCode", default, skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    #[serde(
        rename = "customerType",
        default,
        deserialize_with = "lenient_customer_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_type: Option<CustomerType>,
    #[serde(rename = "vatPayer", default, skip_serializing_if = "Option::is_none")]
    pub vat_payer: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_birthday",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<NaiveDate>,
}

// An unrecognised value in one document must not fail the whole read;
// it becomes `None`.

fn lenient_customer_type<'de, D>(deserializer: D) -> Result<Option<CustomerType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| CustomerType::from_code(&s.trim().to_lowercase())))
}

fn lenient_birthday<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(|s| {
        // `2024-01-31` or a full timestamp starting with it
        let date = s.trim().get(..10)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }))
}

/// Deterministic rows substituted for an empty or failed read
pub fn placeholder_customers() -> Vec<Customer> {
    (0..PLACEHOLDER_COUNT)
        .map(|i| Customer {
            id: format!("0111111111{i}"),
            name: "Name".to_string(),
            group: "Group".to_string(),
            tax_code: None,
            email: None,
            phone: "+995555555555".to_string(),
            address: "Address str, N1 Tbilisi".to_string(),
            customer_type: None,
            vat_payer: None,
            birthday: None,
        })
        .collect()
}

/// Where the rows on screen came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerSource {
    Store,
    /// The store answered with no documents
    PlaceholderEmpty,
    /// The read failed; carries the reason
    PlaceholderFailed(String),
}

/// Picks the rows to display for a finished store read.
///
/// An empty result and a failure both fall back to [`placeholder_customers`].
pub fn customers_or_placeholder(
    read: Result<Vec<Customer>, String>,
) -> (Vec<Customer>, CustomerSource) {
    match read {
        Ok(customers) if !customers.is_empty() => (customers, CustomerSource::Store),
        Ok(_) => (placeholder_customers(), CustomerSource::PlaceholderEmpty),
        Err(e) => (placeholder_customers(), CustomerSource::PlaceholderFailed(e)),
    }
}

/// Distinct groups in first-seen order
pub fn distinct_groups(customers: &[Customer]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for c in customers {
        if !groups.iter().any(|g| g == &c.group) {
            groups.push(c.group.clone());
        }
    }
    groups
}

// ============================================================================
// Creation draft
// ============================================================================

pub const GROUP_OPTIONS: &[(&str, &str)] = &[("group", "Group")];

/// Values collected by the "New Customer" dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerDraft {
    pub name: String,
    pub tax_code: String,
    pub customer_type: Option<CustomerType>,
    pub group: String,
    pub email: String,
    pub phone: String,
    pub vat_payer: bool,
    /// Raw `yyyy-mm-dd` value of the date input
    pub birthday: String,
    pub address: String,
}

impl CustomerDraft {
    pub fn new() -> Self {
        Self {
            customer_type: Some(CustomerType::Company),
            group: GROUP_OPTIONS[0].1.to_string(),
            ..Default::default()
        }
    }

    /// Builds the candidate document with a fresh id.
    ///
    /// Blank optional inputs become `None`; an unparsable birthday is dropped.
    pub fn into_customer(self) -> Customer {
        let non_blank = |s: String| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        let birthday = NaiveDate::parse_from_str(self.birthday.trim(), "%Y-%m-%d").ok();
        Customer {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            group: self.group,
            tax_code: non_blank(self.tax_code),
            email: non_blank(self.email),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            customer_type: self.customer_type,
            vat_payer: Some(self.vat_payer),
            birthday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str, group: &str) -> Customer {
        Customer {
            id: id.to_string(),
            group: group.to_string(),
            ..placeholder_customers().remove(0)
        }
    }

    #[test]
    fn test_failure_falls_back_to_placeholders() {
        let (rows, source) = customers_or_placeholder(Err("HTTP error: 503".into()));
        assert_eq!(rows.len(), 8);
        let ids: Vec<&str> = rows.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"01111111110"));
        assert_eq!(ids.last(), Some(&"01111111117"));
        assert_eq!(source, CustomerSource::PlaceholderFailed("HTTP error: 503".into()));
    }

    #[test]
    fn test_empty_result_matches_failure_rows() {
        let (empty_rows, source) = customers_or_placeholder(Ok(vec![]));
        let (failed_rows, _) = customers_or_placeholder(Err("offline".into()));
        assert_eq!(source, CustomerSource::PlaceholderEmpty);
        assert_eq!(empty_rows, failed_rows);
        for (i, c) in empty_rows.iter().enumerate() {
            assert_eq!(c.id, format!("0111111111{i}"));
        }
    }

    #[test]
    fn test_store_rows_are_kept() {
        let (rows, source) = customers_or_placeholder(Ok(vec![stored("a", "VIP")]));
        assert_eq!(source, CustomerSource::Store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "a");
    }

    #[test]
    fn test_distinct_groups_first_seen() {
        let rows = vec![stored("1", "VIP"), stored("2", "Retail"), stored("3", "VIP")];
        assert_eq!(distinct_groups(&rows), vec!["VIP", "Retail"]);
    }

    #[test]
    fn test_document_with_missing_optionals_parses() {
        let json = r#"{"id":"x1","name":"Nino","group":"VIP","phone":"+995","address":"Tbilisi","taxCode":"123","vatPayer":true}"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.tax_code.as_deref(), Some("123"));
        assert_eq!(c.vat_payer, Some(true));
        assert!(c.email.is_none() && c.customer_type.is_none() && c.birthday.is_none());
    }

    #[test]
    fn test_free_form_customer_type_does_not_fail_the_read() {
        let json = r#"[
            {"id":"c1","name":"Acme","group":"VIP","phone":"1","address":"A","customerType":"company"},
            {"id":"c2","name":"Nino","group":"VIP","phone":"2","address":"B","customerType":"Company"},
            {"id":"c3","name":"Gela","group":"VIP","phone":"3","address":"C","customerType":"business"},
            {"id":"c4","name":"Lika","group":"VIP","phone":"4","address":"D","customerType":7}
        ]"#;
        let parsed: Result<Vec<Customer>, String> =
            serde_json::from_str(json).map_err(|e| e.to_string());
        let (rows, source) = customers_or_placeholder(parsed);

        assert_eq!(source, CustomerSource::Store);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].customer_type, Some(CustomerType::Company));
        assert_eq!(rows[1].customer_type, Some(CustomerType::Company));
        assert_eq!(rows[2].customer_type, None);
        assert_eq!(rows[3].customer_type, None);
    }

    #[test]
    fn test_birthday_accepts_timestamps_and_ignores_junk() {
        let json = r#"[
            {"id":"b1","name":"N","group":"G","phone":"1","address":"A","birthday":"1990-04-12"},
            {"id":"b2","name":"N","group":"G","phone":"1","address":"A","birthday":"1990-04-12T00:00:00Z"},
            {"id":"b3","name":"N","group":"G","phone":"1","address":"A","birthday":"12/04/1990"},
            {"id":"b4","name":"N","group":"G","phone":"1","address":"A","birthday":null}
        ]"#;
        let rows: Vec<Customer> = serde_json::from_str(json).unwrap();
        let expected = NaiveDate::from_ymd_opt(1990, 4, 12);
        assert_eq!(rows[0].birthday, expected);
        assert_eq!(rows[1].birthday, expected);
        assert_eq!(rows[2].birthday, None);
        assert_eq!(rows[3].birthday, None);
    }

    #[test]
    fn test_draft_into_customer() {
        let mut draft = CustomerDraft::new();
        draft.name = "  Nino ".into();
        draft.email = "   ".into();
        draft.birthday = "1990-04-12".into();
        let c = draft.into_customer();
        assert_eq!(c.name, "Nino");
        assert_eq!(c.group, "Group");
        assert!(c.email.is_none());
        assert_eq!(c.customer_type, Some(CustomerType::Company));
        assert_eq!(c.birthday, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert!(Uuid::parse_str(&c.id).is_ok());
    }

    #[test]
    fn test_saved_record_uses_document_keys() {
        let mut draft = CustomerDraft::new();
        draft.name = "Nino".into();
        draft.tax_code = "405123456".into();
        draft.vat_payer = true;
        let doc = serde_json::to_value(draft.into_customer()).unwrap();
        assert_eq!(doc["taxCode"], "405123456");
        assert_eq!(doc["vatPayer"], true);
        assert_eq!(doc["customerType"], "company");
        assert!(doc.get("tax_code").is_none());
    }

    #[test]
    fn test_bad_birthday_is_dropped() {
        let mut draft = CustomerDraft::new();
        draft.birthday = "12/04/1990".into();
        assert!(draft.into_customer().birthday.is_none());
    }
}
