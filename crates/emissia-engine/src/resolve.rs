// SPDX-License-Identifier: Apache-2.0

//! Ordered fallback chains. Each resolver returns exactly one factor; a miss
//! at any step moves to the next and the last step is a constant.

use emissia_factors::defaults::{
    DEFAULT_ELECTRICITY_GLOBAL_AVERAGE, DEFAULT_FUEL_FACTOR, DEFAULT_FUEL_FACTOR_UNIT,
    DEFAULT_FUEL_LABEL, DEFAULT_LANDFILL_MIXED_WASTE_FACTOR, DEFAULT_WATER_SUPPLY_FACTOR,
    DEFAULT_WATER_SUPPLY_LABEL, ELECTRICITY_FACTOR_UNIT, FUEL_SOURCE_PREFIX,
    GLOBAL_AVERAGE_LABEL, LANDFILL_KEY, LANDFILL_MIXED_WASTE_LABEL, MIXED_WASTE_KEY,
    WASTE_FACTOR_UNIT, WATER_FACTOR_UNIT, WATER_SUPPLY_KEY,
};
use emissia_factors::FactorDatabase;
use emissia_model::{normalize_identifier, ResolvedFactor};

/// Region, then national grid, then global average. The region table is
/// only consulted under a known country.
#[must_use]
pub fn resolve_electricity(
    db: &FactorDatabase,
    country: &str,
    region: Option<&str>,
) -> ResolvedFactor {
    let table = db.electricity();
    if let Some(grid) = table.country(country) {
        if let Some((region, value)) =
            region.and_then(|r| grid.region(r).map(|value| (r, value)))
        {
            return ResolvedFactor::new(
                value,
                ELECTRICITY_FACTOR_UNIT,
                format!("{country} - {region} grid"),
            );
        }
        if let Some(value) = grid.national_grid {
            return ResolvedFactor::new(
                value,
                ELECTRICITY_FACTOR_UNIT,
                format!("{country} national grid"),
            );
        }
    }
    ResolvedFactor::new(
        table
            .global_average
            .unwrap_or(DEFAULT_ELECTRICITY_GLOBAL_AVERAGE),
        ELECTRICITY_FACTOR_UNIT,
        GLOBAL_AVERAGE_LABEL,
    )
}

/// Exact match on the normalized fuel identifier; no partial matching.
#[must_use]
pub fn resolve_fuel(db: &FactorDatabase, fuel_type: &str) -> ResolvedFactor {
    match db.fuel().get(&normalize_identifier(fuel_type)) {
        Some(entry) => ResolvedFactor::new(
            entry.value,
            entry.unit.clone(),
            format!("{FUEL_SOURCE_PREFIX} - {fuel_type}"),
        ),
        None => ResolvedFactor::new(DEFAULT_FUEL_FACTOR, DEFAULT_FUEL_FACTOR_UNIT, DEFAULT_FUEL_LABEL),
    }
}

/// Service type, then the `water_supply` entry, then zero.
#[must_use]
pub fn resolve_water(db: &FactorDatabase, water_type: &str) -> ResolvedFactor {
    let table = db.water();
    if let Some(entry) = table.get(water_type) {
        let label = entry.description.as_deref().unwrap_or(water_type);
        return ResolvedFactor::new(entry.value, WATER_FACTOR_UNIT, label);
    }
    match table.get(WATER_SUPPLY_KEY) {
        Some(entry) => ResolvedFactor::new(
            entry.value,
            WATER_FACTOR_UNIT,
            entry
                .description
                .as_deref()
                .unwrap_or(DEFAULT_WATER_SUPPLY_LABEL),
        ),
        None => ResolvedFactor::new(
            DEFAULT_WATER_SUPPLY_FACTOR,
            WATER_FACTOR_UNIT,
            DEFAULT_WATER_SUPPLY_LABEL,
        ),
    }
}

/// Both the disposal method and the waste type must hit; anything less
/// falls back to landfilled mixed waste.
#[must_use]
pub fn resolve_waste(db: &FactorDatabase, waste_type: &str, disposal_method: &str) -> ResolvedFactor {
    let table = db.waste();
    let method = normalize_identifier(disposal_method);
    let kind = normalize_identifier(waste_type);
    if let Some(value) = table.get(&method, &kind) {
        return ResolvedFactor::new(
            value,
            WASTE_FACTOR_UNIT,
            format!("{disposal_method} - {waste_type}"),
        );
    }
    ResolvedFactor::new(
        table
            .get(LANDFILL_KEY, MIXED_WASTE_KEY)
            .unwrap_or(DEFAULT_LANDFILL_MIXED_WASTE_FACTOR),
        WASTE_FACTOR_UNIT,
        LANDFILL_MIXED_WASTE_LABEL,
    )
}
