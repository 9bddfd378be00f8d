use std::collections::BTreeSet;

use emissia_model::{EmissionRecord, ResolvedFactor, Scope, SourceCategory};
use emissia_reporting::{evaluate_compliance, ComplianceInputs};

fn inputs(total_kg: f64, bills: u64, validated: u64, scopes: &[Scope]) -> ComplianceInputs {
    ComplianceInputs {
        total_co2e_kg: total_kg,
        bills_processed: bills,
        validated_bills: validated,
        scopes_tracked: scopes.iter().copied().collect::<BTreeSet<_>>(),
    }
}

#[test]
fn complete_small_footprint_is_fully_compliant() {
    let report = evaluate_compliance(&inputs(12_500.0, 6, 4, &[Scope::Scope1, Scope::Scope2]));
    assert!(report.overall_compliant);
    assert_eq!(report.total_checks, 4);
    assert_eq!(report.compliant, 4);
    assert_eq!(report.non_compliant, 0);
    let names: Vec<&str> = report.checks.iter().map(|c| c.rule_name).collect();
    assert_eq!(
        names,
        vec![
            "GRI 305 - Emissions Disclosure",
            "ISO 14064 - GHG Accounting",
            "CDP - Data Completeness",
            "UAE - Emissions Reporting Threshold",
        ]
    );
}

#[test]
fn each_rule_fails_on_its_own_condition() {
    let report = evaluate_compliance(&inputs(0.0, 0, 2, &[Scope::Scope1]));
    let by_name = |name: &str| {
        report
            .checks
            .iter()
            .find(|c| c.rule_name == name)
            .expect("rule present")
            .clone()
    };
    assert!(!by_name("GRI 305 - Emissions Disclosure").is_compliant);
    let iso = by_name("ISO 14064 - GHG Accounting");
    assert!(!iso.is_compliant);
    assert_eq!(iso.details, "Need to track Scope 2 emissions");
    let cdp = by_name("CDP - Data Completeness");
    assert!(!cdp.is_compliant);
    assert_eq!(
        cdp.details,
        "2 validated bills (minimum 3 required for quarterly reporting)"
    );
    assert!(by_name("UAE - Emissions Reporting Threshold").is_compliant);
    assert!(!report.overall_compliant);
    assert_eq!(report.non_compliant, 3);
}

#[test]
fn threshold_is_exclusive_at_one_hundred_tonnes() {
    let at_limit = evaluate_compliance(&inputs(100_000.0, 1, 3, &[Scope::Scope2]));
    let uae = &at_limit.checks[3];
    assert!(!uae.is_compliant);
    assert_eq!(
        uae.details,
        "Current emissions: 100.000 tonnes CO2e (at or above 100t threshold)"
    );

    let below = evaluate_compliance(&inputs(99_999.0, 1, 3, &[Scope::Scope2]));
    assert!(below.checks[3].is_compliant);
    assert!(below.overall_compliant);
}

#[test]
fn disclosure_details_carry_bill_count_and_total() {
    let report = evaluate_compliance(&inputs(1234.567, 5, 5, &[Scope::Scope2]));
    assert_eq!(
        report.checks[0].details,
        "Organization has 5 bills processed and 1234.57 kg CO2e calculated"
    );
}

#[test]
fn inputs_from_records_collect_scopes_and_total() {
    let records = vec![
        EmissionRecord::new(
            SourceCategory::Electricity,
            100.0,
            "kWh",
            ResolvedFactor::new(0.5, "kg CO2e per kWh", "fixture"),
        ),
        EmissionRecord::new(
            SourceCategory::Waste,
            1.0,
            "tonnes",
            ResolvedFactor::new(583.0, "kg CO2e per tonne", "fixture"),
        ),
    ];
    let inputs = ComplianceInputs::from_records(&records, 2, 1);
    assert_eq!(inputs.total_co2e_kg, 633.0);
    assert_eq!(
        inputs.scopes_tracked,
        [Scope::Scope2, Scope::Scope3]
            .into_iter()
            .collect::<BTreeSet<_>>()
    );
    assert_eq!(inputs.bills_processed, 2);
}
