// SPDX-License-Identifier: Apache-2.0

use emissia_model::{EmissionRecord, Scope, SourceCategory};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sum that does not depend on input order: values are added smallest
/// first after a total ordering sort.
pub(crate) fn stable_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

pub(crate) fn totals_by_category(records: &[EmissionRecord]) -> BTreeMap<SourceCategory, f64> {
    let mut grouped: BTreeMap<SourceCategory, Vec<f64>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.source_category())
            .or_default()
            .push(record.total_co2e());
    }
    grouped
        .into_iter()
        .map(|(category, values)| (category, stable_sum(values)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionsSummary {
    pub record_count: usize,
    pub total_co2e_kg: f64,
    pub total_co2e_tonnes: f64,
    /// Always holds all three scopes.
    pub by_scope_kg: BTreeMap<Scope, f64>,
    /// Only categories present in the input.
    pub by_category_kg: BTreeMap<SourceCategory, f64>,
    /// Fraction of the total per scope; all zero when the total is zero.
    pub scope_share: BTreeMap<Scope, f64>,
}

impl EmissionsSummary {
    #[must_use]
    pub fn from_records(records: &[EmissionRecord]) -> Self {
        let total_co2e_kg = stable_sum(records.iter().map(EmissionRecord::total_co2e).collect());

        let mut by_scope_kg = BTreeMap::new();
        let mut scope_share = BTreeMap::new();
        for scope in Scope::ALL {
            let kg = stable_sum(
                records
                    .iter()
                    .filter(|r| r.scope_category() == scope)
                    .map(EmissionRecord::total_co2e)
                    .collect(),
            );
            let share = if total_co2e_kg > 0.0 {
                kg / total_co2e_kg
            } else {
                0.0
            };
            by_scope_kg.insert(scope, kg);
            scope_share.insert(scope, share);
        }

        Self {
            record_count: records.len(),
            total_co2e_kg,
            total_co2e_tonnes: total_co2e_kg / 1000.0,
            by_scope_kg,
            by_category_kg: totals_by_category(records),
            scope_share,
        }
    }

    #[must_use]
    pub fn scope_kg(&self, scope: Scope) -> f64 {
        self.by_scope_kg.get(&scope).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
