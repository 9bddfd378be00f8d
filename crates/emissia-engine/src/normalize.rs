// SPDX-License-Identifier: Apache-2.0

//! Maps reported consumption units onto the canonical unit of each
//! category. Unknown units never fail: the amount passes through unchanged
//! and the original spelling is kept on the variant.

pub const KILOWATT_HOURS: &str = "kWh";
pub const CUBIC_METERS: &str = "m³";
pub const TONNES: &str = "tonnes";

fn unit_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElectricityUnit {
    KilowattHours,
    Unrecognized(String),
}

impl ElectricityUnit {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match unit_key(raw).as_str() {
            "kwh" | "kilowatt-hour" | "kilowatt hour" | "kilowatt-hours" | "kilowatt hours" => {
                Self::KilowattHours
            }
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    /// Every electricity unit is read as kWh.
    #[must_use]
    pub fn to_kwh(&self, amount: f64) -> f64 {
        match self {
            Self::KilowattHours | Self::Unrecognized(_) => amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaterUnit {
    CubicMeters,
    Liters,
    Unrecognized(String),
}

impl WaterUnit {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match unit_key(raw).as_str() {
            "m3" | "m³" | "cubic meter" | "cubic metre" | "cubic meters" | "cubic metres" => {
                Self::CubicMeters
            }
            "l" | "liter" | "litre" | "liters" | "litres" => Self::Liters,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    #[must_use]
    pub fn to_cubic_meters(&self, amount: f64) -> f64 {
        match self {
            Self::Liters => amount / 1000.0,
            Self::CubicMeters | Self::Unrecognized(_) => amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasteUnit {
    Kilograms,
    Tonnes,
    Unrecognized(String),
}

impl WasteUnit {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match unit_key(raw).as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Self::Kilograms,
            "t" | "tonne" | "tonnes" | "ton" | "tons" => Self::Tonnes,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    #[must_use]
    pub fn to_tonnes(&self, amount: f64) -> f64 {
        match self {
            Self::Kilograms => amount / 1000.0,
            Self::Tonnes | Self::Unrecognized(_) => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_keys_ignore_case_and_outer_whitespace() {
        assert_eq!(WaterUnit::parse(" Litres "), WaterUnit::Liters);
        assert_eq!(WasteUnit::parse("KG"), WasteUnit::Kilograms);
        assert_eq!(ElectricityUnit::parse("KWH"), ElectricityUnit::KilowattHours);
    }

    #[test]
    fn unrecognized_units_keep_their_spelling() {
        assert_eq!(
            WaterUnit::parse("Gallons"),
            WaterUnit::Unrecognized("Gallons".to_string())
        );
    }
}
