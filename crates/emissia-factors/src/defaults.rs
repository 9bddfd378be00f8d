// SPDX-License-Identifier: Apache-2.0

pub const DEFAULT_ELECTRICITY_GLOBAL_AVERAGE: f64 = 0.475;
pub const ELECTRICITY_FACTOR_UNIT: &str = "kg CO2e per kWh";
pub const GLOBAL_AVERAGE_LABEL: &str = "Global average";

pub const DEFAULT_FUEL_FACTOR: f64 = 2.5;
pub const DEFAULT_FUEL_FACTOR_UNIT: &str = "kg CO2e per liter";
pub const DEFAULT_FUEL_LABEL: &str = "Default estimate";
/// Provenance prefix for fuel factors found in the table.
pub const FUEL_SOURCE_PREFIX: &str = "EPA/IPCC";
/// Unit assumed for a fuel entry that does not state one.
pub const FUEL_ENTRY_FALLBACK_UNIT: &str = "kg CO2e per unit";

pub const WATER_SUPPLY_KEY: &str = "water_supply";
/// Used only when no `water_supply` entry is loaded, so a missing `water.json`
/// records water at zero emissions. The bundled document carries 0.344.
pub const DEFAULT_WATER_SUPPLY_FACTOR: f64 = 0.0;
pub const DEFAULT_WATER_SUPPLY_LABEL: &str = "Water supply default";
pub const WATER_FACTOR_UNIT: &str = "kg CO2e per m³";

pub const LANDFILL_KEY: &str = "landfill";
pub const MIXED_WASTE_KEY: &str = "mixed_waste";
pub const DEFAULT_LANDFILL_MIXED_WASTE_FACTOR: f64 = 583.0;
pub const LANDFILL_MIXED_WASTE_LABEL: &str = "Landfill - mixed waste (default)";
pub const WASTE_FACTOR_UNIT: &str = "kg CO2e per tonne";

/// Upper bound on a single factor document read from disk.
pub const MAX_DOCUMENT_BYTES: u64 = 4 * 1024 * 1024;
