// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Emission factor documents for each source category: on-disk schema,
//! value validation and the directory loader.

mod adapters;
mod database;
pub mod defaults;
mod error;
mod schema;
mod validate;

pub use adapters::{category_document_path, load_factor_database};
pub use database::FactorDatabase;
pub use error::ConfigurationError;
pub use schema::{
    CountryGrid, DocumentMeta, ElectricityFactors, FuelFactor, FuelFactors, WasteFactors,
    WaterFactor, WaterFactors,
};

pub const CRATE_NAME: &str = "emissia-factors";
