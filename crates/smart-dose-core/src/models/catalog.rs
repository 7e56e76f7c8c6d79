//! Medicine catalog models.

use serde::{Deserialize, Serialize};

use super::suggestion::MedicationType;

/// Indian drug schedule a medicine is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrugSchedule {
    /// Over the counter
    #[serde(rename = "OTC")]
    Otc,
    H,
    H1,
    X,
}

/// Unit the per-unit incentive is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Strip,
    Sachet,
    Vial,
    Pen,
    Tube,
    Bottle,
    Inhaler,
    Patch,
    Injection,
}

/// A medicine in the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    /// Brand names separated by " / "
    pub brand: String,
    pub dosages: Vec<String>,
    #[serde(rename = "type")]
    pub medication_type: MedicationType,
    pub category: String,
    pub schedule: DrugSchedule,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub interactions: Vec<String>,
    pub usage_notes: String,
    /// Doctor's incentive per unit, in rupees
    pub incentive_per_unit: u32,
    pub unit_type: UnitType,
    pub in_stock: bool,
}

impl Medicine {
    /// Case-insensitive substring match on name, generic name, brand or category.
    ///
    /// `query` must already be lowercase.
    pub fn matches_lowercase(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.generic_name.to_lowercase().contains(query)
            || self.brand.to_lowercase().contains(query)
            || self.category.to_lowercase().contains(query)
    }

    /// The most common strength, used when adding from the catalog.
    pub fn default_dosage(&self) -> Option<&str> {
        self.dosages.first().map(String::as_str)
    }
}

/// One entry of the prescriber's quick-add list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAddOption {
    pub name: String,
    pub dosage: String,
    pub category: String,
}

impl QuickAddOption {
    pub fn new(name: &str, dosage: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            category: category.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_serializes_like_source_labels() {
        assert_eq!(serde_json::to_string(&DrugSchedule::Otc).unwrap(), "\"OTC\"");
        assert_eq!(serde_json::to_string(&DrugSchedule::H1).unwrap(), "\"H1\"");
        assert_eq!(serde_json::to_string(&UnitType::Strip).unwrap(), "\"strip\"");
    }
}
