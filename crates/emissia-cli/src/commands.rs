// SPDX-License-Identifier: Apache-2.0

use emissia_core::resolve_factors_dir;
use emissia_engine::EmissionEngine;
use emissia_factors::{load_factor_database, FactorDatabase};
use emissia_model::{EmissionRecord, SourceCategory};
use emissia_reporting::{
    estimate_offsets, evaluate_compliance, ComplianceInputs, EmissionsSummary,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::output::{emit_ok, CliError, OutputMode};

pub(crate) struct CalculateArgs {
    pub(crate) bill_type: String,
    pub(crate) amount: f64,
    pub(crate) unit: String,
    pub(crate) country: String,
    pub(crate) region: Option<String>,
    pub(crate) fuel_type: Option<String>,
    pub(crate) water_type: String,
    pub(crate) waste_type: String,
    pub(crate) disposal_method: String,
}

fn load_factors(explicit: Option<&Path>) -> Result<FactorDatabase, CliError> {
    let dir = resolve_factors_dir(explicit);
    info!(dir = %dir.display(), "resolved factor directory");
    Ok(load_factor_database(&dir)?)
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::internal(e.to_string()))
}

pub(crate) fn read_records(path: &Path) -> Result<Vec<EmissionRecord>, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::validation(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| CliError::validation(format!("invalid records in {}: {e}", path.display())))
}

pub(crate) fn run_calculate(
    factors_dir: Option<&Path>,
    args: &CalculateArgs,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    if !(args.amount.is_finite() && args.amount > 0.0) {
        return Err(CliError::validation(format!(
            "--amount must be a finite number > 0 (got {})",
            args.amount
        )));
    }
    let engine = EmissionEngine::new(load_factors(factors_dir)?);
    let record = engine.calculate_bill(
        &args.bill_type,
        args.amount,
        &args.unit,
        Some(&args.country),
        args.region.as_deref(),
        args.fuel_type.as_deref(),
        Some(&args.water_type),
        Some(&args.waste_type),
        Some(&args.disposal_method),
    )?;
    let fingerprint = record
        .fingerprint()
        .map_err(|e| CliError::internal(e.to_string()))?;
    emit_ok(
        output_mode,
        json!({
            "command": "calculate",
            "status": "ok",
            "record": to_value(&record)?,
            "fingerprint": fingerprint,
        }),
    )
}

pub(crate) fn run_factors_validate(
    dir: Option<&Path>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let resolved = resolve_factors_dir(dir);
    let db = load_factor_database(&resolved)?;
    let entries: BTreeMap<SourceCategory, usize> = SourceCategory::ALL
        .into_iter()
        .map(|category| (category, db.entry_count(category)))
        .collect();
    emit_ok(
        output_mode,
        json!({
            "command": "factors validate",
            "status": "ok",
            "dir": resolved,
            "loaded": db.loaded_categories(),
            "missing": db.missing_categories(),
            "entries": to_value(&entries)?,
        }),
    )
}

pub(crate) fn run_summarize(records: &Path, output_mode: OutputMode) -> Result<(), CliError> {
    let records = read_records(records)?;
    let summary = EmissionsSummary::from_records(&records);
    emit_ok(
        output_mode,
        json!({
            "command": "summarize",
            "status": "ok",
            "summary": to_value(&summary)?,
        }),
    )
}

pub(crate) fn run_compliance(
    records: &Path,
    bills: u64,
    validated_bills: u64,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    if validated_bills > bills {
        return Err(CliError::validation(format!(
            "validated bills ({validated_bills}) cannot exceed processed bills ({bills})"
        )));
    }
    let records = read_records(records)?;
    let report = evaluate_compliance(&ComplianceInputs::from_records(
        &records,
        bills,
        validated_bills,
    ));
    emit_ok(
        output_mode,
        json!({
            "command": "compliance",
            "status": "ok",
            "report": to_value(&report)?,
        }),
    )
}

pub(crate) fn run_offsets(
    records: &Path,
    project_type: &str,
    offset_percentage: f64,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let records = read_records(records)?;
    let estimate = estimate_offsets(&records, project_type, offset_percentage)
        .map_err(|e| CliError::validation(e.to_string()))?;
    emit_ok(
        output_mode,
        json!({
            "command": "offsets",
            "status": "ok",
            "estimate": to_value(&estimate)?,
        }),
    )
}
