// SPDX-License-Identifier: Apache-2.0

use emissia_model::{BillType, UnsupportedCategoryError};

pub const DEFAULT_COUNTRY: &str = "global";
pub const DEFAULT_FUEL_TYPE: &str = "diesel";
pub const DEFAULT_WATER_TYPE: &str = "water_supply";
pub const DEFAULT_WASTE_TYPE: &str = "mixed_waste";
pub const DEFAULT_DISPOSAL_METHOD: &str = "landfill";

/// One bill line to convert into CO2e, with the lookup hints each category
/// may use. Hints irrelevant to the bill type are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub bill_type: BillType,
    pub consumption_amount: f64,
    pub consumption_unit: String,
    pub country: String,
    pub region: Option<String>,
    pub fuel_type: Option<String>,
    pub water_type: String,
    pub waste_type: String,
    pub disposal_method: String,
}

impl CalculationRequest {
    #[must_use]
    pub fn new(bill_type: BillType, consumption_amount: f64, consumption_unit: &str) -> Self {
        Self {
            bill_type,
            consumption_amount,
            consumption_unit: consumption_unit.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            region: None,
            fuel_type: None,
            water_type: DEFAULT_WATER_TYPE.to_string(),
            waste_type: DEFAULT_WASTE_TYPE.to_string(),
            disposal_method: DEFAULT_DISPOSAL_METHOD.to_string(),
        }
    }

    /// Same as [`CalculationRequest::new`] with the bill type given as text.
    pub fn parse(
        bill_type: &str,
        consumption_amount: f64,
        consumption_unit: &str,
    ) -> Result<Self, UnsupportedCategoryError> {
        Ok(Self::new(
            BillType::parse(bill_type)?,
            consumption_amount,
            consumption_unit,
        ))
    }

    #[must_use]
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    #[must_use]
    pub fn with_fuel_type(mut self, fuel_type: &str) -> Self {
        self.fuel_type = Some(fuel_type.to_string());
        self
    }

    #[must_use]
    pub fn with_water_type(mut self, water_type: &str) -> Self {
        self.water_type = water_type.to_string();
        self
    }

    #[must_use]
    pub fn with_waste_type(mut self, waste_type: &str) -> Self {
        self.waste_type = waste_type.to_string();
        self
    }

    #[must_use]
    pub fn with_disposal_method(mut self, disposal_method: &str) -> Self {
        self.disposal_method = disposal_method.to_string();
        self
    }

    /// Explicit fuel type, else the default for the bill type.
    #[must_use]
    pub fn effective_fuel_type(&self) -> &str {
        self.fuel_type
            .as_deref()
            .or_else(|| self.bill_type.default_fuel_type())
            .unwrap_or(DEFAULT_FUEL_TYPE)
    }
}
