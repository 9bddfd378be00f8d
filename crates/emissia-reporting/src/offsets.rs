// SPDX-License-Identifier: Apache-2.0

use emissia_model::{normalize_identifier, EmissionRecord, SourceCategory};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::summary::{stable_sum, totals_by_category};

pub const DEFAULT_OFFSET_PERCENTAGE: f64 = 50.0;
/// USD per tonne for project types without a listed price.
pub const DEFAULT_PRICE_PER_TONNE_USD: f64 = 25.0;

const PROJECT_PRICES_USD: &[(&str, f64)] = &[
    ("renewable_energy", 25.0),
    ("nature_based", 30.0),
    ("industrial", 22.0),
    ("forestry", 28.0),
    ("carbon_capture", 35.0),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetError(pub String);

impl Display for OffsetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for OffsetError {}

/// Listed price for a project type, matched after identifier normalization.
#[must_use]
pub fn price_per_tonne(project_type: &str) -> f64 {
    let key = normalize_identifier(project_type);
    PROJECT_PRICES_USD
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_PRICE_PER_TONNE_USD, |(_, price)| *price)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetEstimate {
    pub total_emissions_kg: f64,
    pub total_emissions_tonnes: f64,
    pub offset_percentage: f64,
    pub credits_needed_tonnes: f64,
    pub project_type: String,
    pub price_per_tonne_usd: f64,
    pub estimated_cost_usd: f64,
    pub emission_sources: BTreeMap<SourceCategory, f64>,
}

pub fn estimate_offsets(
    records: &[EmissionRecord],
    project_type: &str,
    offset_percentage: f64,
) -> Result<OffsetEstimate, OffsetError> {
    if !offset_percentage.is_finite() || !(0.0..=100.0).contains(&offset_percentage) {
        return Err(OffsetError(format!(
            "offset percentage must be within 0..=100 (got {offset_percentage})"
        )));
    }
    if records.is_empty() {
        return Err(OffsetError("no emission records to offset".to_string()));
    }

    let total_emissions_kg = stable_sum(records.iter().map(EmissionRecord::total_co2e).collect());
    let total_emissions_tonnes = total_emissions_kg / 1000.0;
    let credits_needed_tonnes = total_emissions_tonnes * (offset_percentage / 100.0);
    let price_per_tonne_usd = price_per_tonne(project_type);

    Ok(OffsetEstimate {
        total_emissions_kg,
        total_emissions_tonnes,
        offset_percentage,
        credits_needed_tonnes,
        project_type: project_type.to_string(),
        price_per_tonne_usd,
        estimated_cost_usd: credits_needed_tonnes * price_per_tonne_usd,
        emission_sources: totals_by_category(records),
    })
}
