// SPDX-License-Identifier: Apache-2.0

use emissia_model::{normalize_identifier, SourceCategory};

use crate::error::ConfigurationError;
use crate::schema::{ElectricityFactors, FuelFactors, WasteFactors, WaterFactors};

pub(crate) fn validate_factor_value(
    category: SourceCategory,
    field: &str,
    value: f64,
) -> Result<(), ConfigurationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigurationError::for_category(
            category,
            format!("{field} must be a finite number >= 0 (got {value})"),
        ));
    }
    Ok(())
}

fn validate_key(category: SourceCategory, field: &str, key: &str) -> Result<(), ConfigurationError> {
    if key.trim().is_empty() {
        return Err(ConfigurationError::for_category(
            category,
            format!("{field} keys must be non-empty"),
        ));
    }
    Ok(())
}

fn validate_normalized_key(
    category: SourceCategory,
    field: &str,
    key: &str,
) -> Result<(), ConfigurationError> {
    validate_key(category, field, key)?;
    let normalized = normalize_identifier(key);
    if normalized != key {
        return Err(ConfigurationError::for_category(
            category,
            format!("{field} key `{key}` is not normalized; expected `{normalized}`"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_electricity(factors: &ElectricityFactors) -> Result<(), ConfigurationError> {
    let category = SourceCategory::Electricity;
    if let Some(value) = factors.global_average {
        validate_factor_value(category, "factors.global_average", value)?;
    }
    for (country, grid) in &factors.countries {
        validate_key(category, "factors.countries", country)?;
        if let Some(value) = grid.national_grid {
            validate_factor_value(
                category,
                &format!("factors.countries.{country}.national_grid"),
                value,
            )?;
        }
        for (region, value) in &grid.regions {
            validate_key(category, &format!("factors.countries.{country}.regions"), region)?;
            validate_factor_value(
                category,
                &format!("factors.countries.{country}.regions.{region}"),
                *value,
            )?;
        }
    }
    Ok(())
}

pub(crate) fn validate_fuel(factors: &FuelFactors) -> Result<(), ConfigurationError> {
    let category = SourceCategory::Fuel;
    for (fuel, entry) in &factors.0 {
        validate_normalized_key(category, "factors", fuel)?;
        validate_factor_value(category, &format!("factors.{fuel}.value"), entry.value)?;
        if entry.unit.trim().is_empty() {
            return Err(ConfigurationError::for_category(
                category,
                format!("factors.{fuel}.unit must be non-empty"),
            ));
        }
    }
    Ok(())
}

pub(crate) fn validate_water(factors: &WaterFactors) -> Result<(), ConfigurationError> {
    let category = SourceCategory::Water;
    for (water_type, entry) in &factors.0 {
        validate_key(category, "factors", water_type)?;
        validate_factor_value(category, &format!("factors.{water_type}.value"), entry.value)?;
    }
    Ok(())
}

pub(crate) fn validate_waste(factors: &WasteFactors) -> Result<(), ConfigurationError> {
    let category = SourceCategory::Waste;
    for (method, types) in &factors.disposal_methods {
        validate_normalized_key(category, "factors.disposal_methods", method)?;
        for (waste_type, value) in types {
            validate_normalized_key(
                category,
                &format!("factors.disposal_methods.{method}"),
                waste_type,
            )?;
            validate_factor_value(
                category,
                &format!("factors.disposal_methods.{method}.{waste_type}"),
                *value,
            )?;
        }
    }
    Ok(())
}
