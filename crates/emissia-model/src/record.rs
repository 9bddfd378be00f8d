// SPDX-License-Identifier: Apache-2.0

use emissia_core::canonical;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::category::{Scope, SourceCategory};

const RECORD_FINGERPRINT_KIND: &str = "emission_record";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// One emission factor picked by a fallback chain, with its provenance label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolvedFactor {
    pub value: f64,
    pub unit: String,
    pub source: String,
}

impl ResolvedFactor {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            source: source.into(),
        }
    }
}

/// Result of a single calculation.
///
/// `total_co2e` and `total_co2e_tonnes` are derived from the normalized
/// amount and the factor every time a record is built or decoded; totals
/// present in serialized input are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EmissionRecordWire")]
pub struct EmissionRecord {
    source_category: SourceCategory,
    consumption_amount: f64,
    consumption_unit: String,
    reported_amount: f64,
    reported_unit: String,
    emission_factor: f64,
    emission_factor_unit: String,
    emission_factor_source: String,
    total_co2e: f64,
    total_co2e_tonnes: f64,
    scope_category: Scope,
}

impl EmissionRecord {
    /// Builds a record from an already-normalized consumption. The reported
    /// amount and unit default to the normalized ones.
    #[must_use]
    pub fn new(
        source_category: SourceCategory,
        consumption_amount: f64,
        consumption_unit: impl Into<String>,
        factor: ResolvedFactor,
    ) -> Self {
        let consumption_unit = consumption_unit.into();
        let total_co2e = consumption_amount * factor.value;
        Self {
            source_category,
            consumption_amount,
            reported_amount: consumption_amount,
            reported_unit: consumption_unit.clone(),
            consumption_unit,
            emission_factor: factor.value,
            emission_factor_unit: factor.unit,
            emission_factor_source: factor.source,
            total_co2e,
            total_co2e_tonnes: total_co2e / 1000.0,
            scope_category: source_category.scope(),
        }
    }

    /// Keeps the caller's original figure for audit. Does not touch totals.
    #[must_use]
    pub fn with_reported(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.reported_amount = amount;
        self.reported_unit = unit.into();
        self
    }

    #[must_use]
    pub fn source_category(&self) -> SourceCategory {
        self.source_category
    }

    #[must_use]
    pub fn consumption_amount(&self) -> f64 {
        self.consumption_amount
    }

    #[must_use]
    pub fn consumption_unit(&self) -> &str {
        &self.consumption_unit
    }

    #[must_use]
    pub fn reported_amount(&self) -> f64 {
        self.reported_amount
    }

    #[must_use]
    pub fn reported_unit(&self) -> &str {
        &self.reported_unit
    }

    #[must_use]
    pub fn emission_factor(&self) -> f64 {
        self.emission_factor
    }

    #[must_use]
    pub fn emission_factor_unit(&self) -> &str {
        &self.emission_factor_unit
    }

    #[must_use]
    pub fn emission_factor_source(&self) -> &str {
        &self.emission_factor_source
    }

    #[must_use]
    pub fn total_co2e(&self) -> f64 {
        self.total_co2e
    }

    #[must_use]
    pub fn total_co2e_tonnes(&self) -> f64 {
        self.total_co2e_tonnes
    }

    #[must_use]
    pub fn scope_category(&self) -> Scope {
        self.scope_category
    }

    /// SHA-256 over the canonical JSON form; equal records share a fingerprint.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        canonical::fingerprint_hex(RECORD_FINGERPRINT_KIND, self)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmissionRecordWire {
    source_category: SourceCategory,
    consumption_amount: f64,
    consumption_unit: String,
    #[serde(default)]
    reported_amount: Option<f64>,
    #[serde(default)]
    reported_unit: Option<String>,
    emission_factor: f64,
    emission_factor_unit: String,
    emission_factor_source: String,
    #[serde(default)]
    #[allow(dead_code)]
    total_co2e: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    total_co2e_tonnes: Option<f64>,
    #[serde(default)]
    scope_category: Option<Scope>,
}

impl TryFrom<EmissionRecordWire> for EmissionRecord {
    type Error = ValidationError;

    fn try_from(wire: EmissionRecordWire) -> Result<Self, Self::Error> {
        if !(wire.consumption_amount.is_finite() && wire.consumption_amount > 0.0) {
            return Err(ValidationError(format!(
                "consumption_amount must be finite and > 0 (got {})",
                wire.consumption_amount
            )));
        }
        if !wire.emission_factor.is_finite() || wire.emission_factor < 0.0 {
            return Err(ValidationError(
                "emission_factor must be finite and >= 0".to_string(),
            ));
        }
        let expected_scope = wire.source_category.scope();
        if let Some(scope) = wire.scope_category {
            if scope != expected_scope {
                return Err(ValidationError(format!(
                    "scope_category {scope} does not match {} ({expected_scope})",
                    wire.source_category
                )));
            }
        }
        let reported_amount = wire.reported_amount.unwrap_or(wire.consumption_amount);
        let reported_unit = wire
            .reported_unit
            .unwrap_or_else(|| wire.consumption_unit.clone());
        let record = EmissionRecord::new(
            wire.source_category,
            wire.consumption_amount,
            wire.consumption_unit,
            ResolvedFactor {
                value: wire.emission_factor,
                unit: wire.emission_factor_unit,
                source: wire.emission_factor_source,
            },
        );
        Ok(record.with_reported(reported_amount, reported_unit))
    }
}
