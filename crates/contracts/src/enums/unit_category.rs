use serde::{Deserialize, Serialize};

/// Bucket a measurement unit is displayed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    #[serde(rename = "Unit/Count")]
    Count,
    Weight,
    Volume,
    Length,
    Custom,
}

impl UnitCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::Count => "Unit/Count",
            UnitCategory::Weight => "Weight",
            UnitCategory::Volume => "Volume",
            UnitCategory::Length => "Length",
            UnitCategory::Custom => "Custom",
        }
    }

    /// All categories in display order
    pub fn all() -> Vec<UnitCategory> {
        vec![
            UnitCategory::Count,
            UnitCategory::Weight,
            UnitCategory::Volume,
            UnitCategory::Length,
            UnitCategory::Custom,
        ]
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
