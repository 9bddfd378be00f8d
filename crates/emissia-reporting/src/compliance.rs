// SPDX-License-Identifier: Apache-2.0

use emissia_model::{EmissionRecord, Scope};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::summary::stable_sum;

/// Minimum number of validated bills for quarterly completeness.
pub const MIN_VALIDATED_BILLS: u64 = 3;
/// Reporting threshold in tonnes CO2e; totals must stay below it.
pub const REPORTING_THRESHOLD_TONNES: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplianceInputs {
    pub total_co2e_kg: f64,
    pub bills_processed: u64,
    pub validated_bills: u64,
    pub scopes_tracked: BTreeSet<Scope>,
}

impl ComplianceInputs {
    #[must_use]
    pub fn from_records(records: &[EmissionRecord], bills_processed: u64, validated_bills: u64) -> Self {
        Self {
            total_co2e_kg: stable_sum(records.iter().map(EmissionRecord::total_co2e).collect()),
            bills_processed,
            validated_bills,
            scopes_tracked: records.iter().map(EmissionRecord::scope_category).collect(),
        }
    }

    #[must_use]
    pub fn total_co2e_tonnes(&self) -> f64 {
        self.total_co2e_kg / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceCheck {
    pub rule_name: &'static str,
    pub regulation: &'static str,
    pub is_compliant: bool,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceReport {
    pub overall_compliant: bool,
    pub checks: Vec<ComplianceCheck>,
    pub total_checks: usize,
    pub compliant: usize,
    pub non_compliant: usize,
}

#[derive(Debug, Clone, Copy)]
enum RuleKind {
    EmissionsDisclosed,
    ScopeTracked(Scope),
    MinValidatedBills(u64),
    TonnesBelow(f64),
}

#[derive(Debug, Clone, Copy)]
struct RuleSpec {
    rule_name: &'static str,
    regulation: &'static str,
    kind: RuleKind,
}

const COMPLIANCE_RULES: &[RuleSpec] = &[
    RuleSpec {
        rule_name: "GRI 305 - Emissions Disclosure",
        regulation: "GRI Standards",
        kind: RuleKind::EmissionsDisclosed,
    },
    RuleSpec {
        rule_name: "ISO 14064 - GHG Accounting",
        regulation: "ISO 14064",
        kind: RuleKind::ScopeTracked(Scope::Scope2),
    },
    RuleSpec {
        rule_name: "CDP - Data Completeness",
        regulation: "Carbon Disclosure Project",
        kind: RuleKind::MinValidatedBills(MIN_VALIDATED_BILLS),
    },
    RuleSpec {
        rule_name: "UAE - Emissions Reporting Threshold",
        regulation: "UAE Environmental",
        kind: RuleKind::TonnesBelow(REPORTING_THRESHOLD_TONNES),
    },
];

#[must_use]
pub fn evaluate_compliance(inputs: &ComplianceInputs) -> ComplianceReport {
    let checks: Vec<ComplianceCheck> = COMPLIANCE_RULES
        .iter()
        .map(|rule| apply_rule(inputs, *rule))
        .collect();
    let compliant = checks.iter().filter(|c| c.is_compliant).count();
    ComplianceReport {
        overall_compliant: compliant == checks.len(),
        total_checks: checks.len(),
        non_compliant: checks.len() - compliant,
        compliant,
        checks,
    }
}

fn apply_rule(inputs: &ComplianceInputs, rule: RuleSpec) -> ComplianceCheck {
    let (is_compliant, details) = match rule.kind {
        RuleKind::EmissionsDisclosed => (
            inputs.total_co2e_kg > 0.0 && inputs.bills_processed > 0,
            format!(
                "Organization has {} bills processed and {:.2} kg CO2e calculated",
                inputs.bills_processed, inputs.total_co2e_kg
            ),
        ),
        RuleKind::ScopeTracked(scope) => {
            let tracked = inputs.scopes_tracked.contains(&scope);
            let details = if tracked {
                format!("{scope} emissions are being tracked")
            } else {
                format!("Need to track {scope} emissions")
            };
            (tracked, details)
        }
        RuleKind::MinValidatedBills(min) => (
            inputs.validated_bills >= min,
            format!(
                "{} validated bills (minimum {min} required for quarterly reporting)",
                inputs.validated_bills
            ),
        ),
        RuleKind::TonnesBelow(limit) => {
            let tonnes = inputs.total_co2e_tonnes();
            let below = tonnes < limit;
            let relation = if below { "below" } else { "at or above" };
            (
                below,
                format!("Current emissions: {tonnes:.3} tonnes CO2e ({relation} {limit}t threshold)"),
            )
        }
    };
    ComplianceCheck {
        rule_name: rule.rule_name,
        regulation: rule.regulation,
        is_compliant,
        details,
    }
}
