// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::defaults::FUEL_ENTRY_FALLBACK_UNIT;

/// Optional provenance carried next to the `factors` object of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// On-disk shape of one category document: metadata plus `factors`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FactorDocument<F> {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    unit: Option<String>,
    factors: F,
}

impl<F> FactorDocument<F> {
    pub(crate) fn into_parts(self) -> (DocumentMeta, F) {
        (
            DocumentMeta {
                description: self.description,
                source: self.source,
                version: self.version,
                last_updated: self.last_updated,
                unit: self.unit,
            },
            self.factors,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectricityFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_average: Option<f64>,
    #[serde(default)]
    pub countries: BTreeMap<String, CountryGrid>,
}

impl ElectricityFactors {
    #[must_use]
    pub fn country(&self, country: &str) -> Option<&CountryGrid> {
        self.countries.get(country)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountryGrid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_grid: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub regions: BTreeMap<String, f64>,
}

impl CountryGrid {
    #[must_use]
    pub fn region(&self, region: &str) -> Option<f64> {
        self.regions.get(region).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuelFactor {
    pub value: f64,
    #[serde(default = "fuel_entry_fallback_unit")]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn fuel_entry_fallback_unit() -> String {
    FUEL_ENTRY_FALLBACK_UNIT.to_string()
}

/// Keyed by normalized fuel identifier (see `normalize_identifier`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelFactors(pub BTreeMap<String, FuelFactor>);

impl FuelFactors {
    #[must_use]
    pub fn get(&self, normalized_fuel_type: &str) -> Option<&FuelFactor> {
        self.0.get(normalized_fuel_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaterFactor {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Keyed by water-service identifier, matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaterFactors(pub BTreeMap<String, WaterFactor>);

impl WaterFactors {
    #[must_use]
    pub fn get(&self, water_type: &str) -> Option<&WaterFactor> {
        self.0.get(water_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WasteFactors {
    #[serde(default)]
    pub disposal_methods: BTreeMap<String, BTreeMap<String, f64>>,
}

impl WasteFactors {
    /// Both keys must already be normalized. A hit requires both levels.
    #[must_use]
    pub fn get(&self, normalized_method: &str, normalized_waste_type: &str) -> Option<f64> {
        self.disposal_methods
            .get(normalized_method)
            .and_then(|types| types.get(normalized_waste_type))
            .copied()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.disposal_methods.values().map(BTreeMap::len).sum()
    }
}
