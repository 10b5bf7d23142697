use super::{error::AppError, power::PowerTypeMapping};
use crate::config::Config;

/// Reference lists populating the region and power type selects.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Lookups {
    pub power_types: Vec<PowerTypeMapping>,
    pub regions: Vec<String>,
}

impl Lookups {
    pub fn new(power_types: Vec<PowerTypeMapping>, regions: Vec<String>) -> Self {
        Self {
            power_types,
            regions,
        }
    }

    pub fn fallback() -> Self {
        Self::new(fallback_power_types(), fallback_regions())
    }

    /// Keeps each list that loaded and substitutes the fallback for each one
    /// that did not. The two lists are resolved independently.
    pub fn from_results(
        power_types: Result<Vec<PowerTypeMapping>, AppError>,
        regions: Result<Vec<String>, AppError>,
    ) -> Self {
        let power_types = power_types.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Error fetching power types, using fallback");
            fallback_power_types()
        });
        let regions = regions.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Error fetching regions, using fallback");
            fallback_regions()
        });

        Self::new(power_types, regions)
    }

    /// Finds the mapping whose id, rendered as a string, equals `selected`.
    pub fn find_power_type(&self, selected: &str) -> Option<&PowerTypeMapping> {
        if selected.is_empty() {
            return None;
        }
        self.power_types
            .iter()
            .find(|t| t.power_type_id.to_string() == selected)
    }

    /// Display name for a power type selection, `"All"` when empty or unknown.
    pub fn power_type_name(&self, selected: &str) -> &str {
        self.find_power_type(selected)
            .map_or(Config::ALL_LABEL, |t| t.power_type_name.as_str())
    }

    /// Display name for a sample's power type id, if it is in the list.
    pub fn name_for_id(&self, id: i64) -> Option<&str> {
        self.power_types
            .iter()
            .find(|t| t.power_type_id == id)
            .map(|t| t.power_type_name.as_str())
    }
}

fn fallback_power_types() -> Vec<PowerTypeMapping> {
    Config::FALLBACK_POWER_TYPES
        .iter()
        .map(|&(id, name)| PowerTypeMapping::new(id, name))
        .collect()
}

fn fallback_regions() -> Vec<String> {
    Config::FALLBACK_REGIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}
