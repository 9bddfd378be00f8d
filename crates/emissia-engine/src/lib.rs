// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Deterministic CO2e calculation over an injected, read-only factor
//! database. No I/O, no logging and no shared mutable state: one engine may
//! serve any number of threads.

mod normalize;
mod request;
mod resolve;

use std::sync::Arc;

use emissia_factors::FactorDatabase;
use emissia_model::{EmissionRecord, SourceCategory, UnsupportedCategoryError};

pub use normalize::{ElectricityUnit, WasteUnit, WaterUnit, CUBIC_METERS, KILOWATT_HOURS, TONNES};
pub use request::{
    CalculationRequest, DEFAULT_COUNTRY, DEFAULT_DISPOSAL_METHOD, DEFAULT_FUEL_TYPE,
    DEFAULT_WASTE_TYPE, DEFAULT_WATER_TYPE,
};
pub use resolve::{resolve_electricity, resolve_fuel, resolve_water, resolve_waste};

pub const CRATE_NAME: &str = "emissia-engine";

#[derive(Debug, Clone)]
pub struct EmissionEngine {
    factors: Arc<FactorDatabase>,
}

impl EmissionEngine {
    #[must_use]
    pub fn new(factors: FactorDatabase) -> Self {
        Self::from_shared(Arc::new(factors))
    }

    #[must_use]
    pub fn from_shared(factors: Arc<FactorDatabase>) -> Self {
        Self { factors }
    }

    #[must_use]
    pub fn factors(&self) -> &FactorDatabase {
        &self.factors
    }

    /// Normalizes the reported unit, resolves a factor and builds the record.
    /// The caller's amount and unit are kept as the reported figures.
    #[must_use]
    pub fn calculate(&self, request: &CalculationRequest) -> EmissionRecord {
        let amount = request.consumption_amount;
        let unit = request.consumption_unit.as_str();
        let record = match request.bill_type.category() {
            SourceCategory::Electricity => {
                let kwh = ElectricityUnit::parse(unit).to_kwh(amount);
                self.calculate_electricity(kwh, &request.country, request.region.as_deref())
            }
            SourceCategory::Fuel => {
                self.calculate_fuel(amount, request.effective_fuel_type(), Some(unit))
            }
            SourceCategory::Water => {
                let m3 = WaterUnit::parse(unit).to_cubic_meters(amount);
                self.calculate_water(m3, &request.water_type)
            }
            SourceCategory::Waste => {
                let tonnes = WasteUnit::parse(unit).to_tonnes(amount);
                self.calculate_waste(tonnes, &request.waste_type, &request.disposal_method)
            }
        };
        record.with_reported(amount, unit)
    }

    /// Flat form of [`EmissionEngine::calculate`]; `None` hints take the
    /// request defaults. Fails only on an unknown bill type.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate_bill(
        &self,
        bill_type: &str,
        consumption_amount: f64,
        consumption_unit: &str,
        country: Option<&str>,
        region: Option<&str>,
        fuel_type: Option<&str>,
        water_type: Option<&str>,
        waste_type: Option<&str>,
        disposal_method: Option<&str>,
    ) -> Result<EmissionRecord, UnsupportedCategoryError> {
        let mut request = CalculationRequest::parse(bill_type, consumption_amount, consumption_unit)?;
        if let Some(country) = country {
            request = request.with_country(country);
        }
        if let Some(region) = region {
            request = request.with_region(region);
        }
        if let Some(fuel_type) = fuel_type {
            request = request.with_fuel_type(fuel_type);
        }
        if let Some(water_type) = water_type {
            request = request.with_water_type(water_type);
        }
        if let Some(waste_type) = waste_type {
            request = request.with_waste_type(waste_type);
        }
        if let Some(disposal_method) = disposal_method {
            request = request.with_disposal_method(disposal_method);
        }
        Ok(self.calculate(&request))
    }

    #[must_use]
    pub fn calculate_electricity(
        &self,
        consumption_kwh: f64,
        country: &str,
        region: Option<&str>,
    ) -> EmissionRecord {
        let factor = resolve_electricity(&self.factors, country, region);
        EmissionRecord::new(
            SourceCategory::Electricity,
            consumption_kwh,
            KILOWATT_HOURS,
            factor,
        )
    }

    /// No conversion: the amount is taken in the unit of the factor entry, and
    /// that unit is recorded verbatim. `reported_unit`, when given, is only
    /// kept for audit.
    #[must_use]
    pub fn calculate_fuel(
        &self,
        consumption_amount: f64,
        fuel_type: &str,
        reported_unit: Option<&str>,
    ) -> EmissionRecord {
        let factor = resolve_fuel(&self.factors, fuel_type);
        let unit = factor.unit.clone();
        let record = EmissionRecord::new(SourceCategory::Fuel, consumption_amount, unit, factor);
        match reported_unit {
            Some(reported) => record.with_reported(consumption_amount, reported),
            None => record,
        }
    }

    #[must_use]
    pub fn calculate_water(&self, consumption_m3: f64, water_type: &str) -> EmissionRecord {
        let factor = resolve_water(&self.factors, water_type);
        EmissionRecord::new(SourceCategory::Water, consumption_m3, CUBIC_METERS, factor)
    }

    #[must_use]
    pub fn calculate_waste(
        &self,
        waste_tonnes: f64,
        waste_type: &str,
        disposal_method: &str,
    ) -> EmissionRecord {
        let factor = resolve_waste(&self.factors, waste_type, disposal_method);
        EmissionRecord::new(SourceCategory::Waste, waste_tonnes, TONNES, factor)
    }
}
