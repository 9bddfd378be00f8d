// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Downstream consumers of emission records: period summaries, compliance
//! rule evaluation and carbon offset estimates. Values are never rounded
//! here; rounding belongs to presentation.

mod compliance;
mod offsets;
mod summary;

pub use compliance::{
    evaluate_compliance, ComplianceCheck, ComplianceInputs, ComplianceReport,
    MIN_VALIDATED_BILLS, REPORTING_THRESHOLD_TONNES,
};
pub use offsets::{
    estimate_offsets, price_per_tonne, OffsetError, OffsetEstimate, DEFAULT_OFFSET_PERCENTAGE,
    DEFAULT_PRICE_PER_TONNE_USD,
};
pub use summary::EmissionsSummary;

pub const CRATE_NAME: &str = "emissia-reporting";
