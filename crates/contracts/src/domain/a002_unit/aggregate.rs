use crate::enums::unit_category::UnitCategory;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Measurement unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub category: UnitCategory,
}

static SEED: Lazy<Vec<Unit>> = Lazy::new(|| {
    use UnitCategory::*;
    [
        ("Pcs", "Piece", Count),
        ("Pkg", "Package", Count),
        ("Box", "Box", Count),
        ("Set", "Set", Count),
        ("Unit", "Unit", Count),
        ("Pair", "Pair", Count),
        ("Kg", "Kilogram", Weight),
        ("G", "Gram", Weight),
        ("L", "Liter", Volume),
        ("Ml", "Milliliter", Volume),
        ("Cl", "Centiliter", Volume),
        ("Gl", "Gallon", Volume),
        ("M", "Meter", Length),
        ("Cm", "Centimeter", Length),
        ("Port", "Portion", Custom),
        ("Shot", "Shot", Custom),
        ("Slice", "Slice", Custom),
        ("Serv", "Serving", Custom),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, short_name, category))| Unit {
        id: (i + 1).to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        category,
    })
    .collect()
});

/// The fixed set of units the page starts with
pub fn seed_units() -> Vec<Unit> {
    SEED.clone()
}

/// Units grouped into buckets in [`UnitCategory::all`] order.
///
/// Buckets keep the relative order of `units`; empty buckets are omitted.
pub fn group_by_category(units: &[Unit]) -> Vec<(UnitCategory, Vec<Unit>)> {
    UnitCategory::all()
        .into_iter()
        .map(|category| {
            let bucket: Vec<Unit> = units
                .iter()
                .filter(|u| u.category == category)
                .cloned()
                .collect();
            (category, bucket)
        })
        .filter(|(_, bucket)| !bucket.is_empty())
        .collect()
}

/// Values collected by the "New Unit" dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDraft {
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub category: UnitCategory,
    pub enabled: bool,
}

impl UnitDraft {
    pub fn new(category: UnitCategory) -> Self {
        Self {
            name: String::new(),
            short_name: String::new(),
            category,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_eighteen_units() {
        let units = seed_units();
        assert_eq!(units.len(), 18);
        assert_eq!(units[0].id, "1");
        assert_eq!(units[17].id, "18");
    }

    #[test]
    fn test_weight_bucket() {
        let groups = group_by_category(&seed_units());
        let (_, weight) = groups
            .iter()
            .find(|(c, _)| *c == UnitCategory::Weight)
            .unwrap();
        let names: Vec<&str> = weight.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Kg", "G"]);
    }

    #[test]
    fn test_grouping_ignores_input_order() {
        let mut units = seed_units();
        units.reverse();
        let groups = group_by_category(&units);
        let order: Vec<UnitCategory> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, UnitCategory::all());

        let weight = &groups[1].1;
        let names: Vec<&str> = weight.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["G", "Kg"]);
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let units: Vec<Unit> = seed_units()
            .into_iter()
            .filter(|u| u.category != UnitCategory::Length)
            .collect();
        let groups = group_by_category(&units);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|(c, _)| *c != UnitCategory::Length));
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_category_serde_name() {
        let unit = &seed_units()[0];
        let json = serde_json::to_value(unit).unwrap();
        assert_eq!(json["category"], "Unit/Count");
        assert_eq!(json["shortName"], "Piece");
    }
}
