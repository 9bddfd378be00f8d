// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Emissia model SSOT: the closed set of bill types and source categories,
//! their fixed GHG scopes, and the calculation output record.

mod category;
mod identifier;
mod record;

pub use category::{BillType, Scope, SourceCategory, UnsupportedCategoryError};
pub use identifier::normalize_identifier;
pub use record::{EmissionRecord, ResolvedFactor, ValidationError};

pub const CRATE_NAME: &str = "emissia-model";
