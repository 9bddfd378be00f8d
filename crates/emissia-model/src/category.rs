// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Emission source categories with a factor table of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Electricity,
    Fuel,
    Water,
    Waste,
}

impl SourceCategory {
    pub const ALL: [SourceCategory; 4] = [
        SourceCategory::Electricity,
        SourceCategory::Fuel,
        SourceCategory::Water,
        SourceCategory::Waste,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Fuel => "fuel",
            Self::Water => "water",
            Self::Waste => "waste",
        }
    }

    /// GHG Protocol scope. Fixed business rule, not configurable per call.
    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Electricity => Scope::Scope2,
            Self::Fuel => Scope::Scope1,
            Self::Water | Self::Waste => Scope::Scope3,
        }
    }

    #[must_use]
    pub fn document_file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl Display for SourceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "Scope 1")]
    Scope1,
    #[serde(rename = "Scope 2")]
    Scope2,
    #[serde(rename = "Scope 3")]
    Scope3,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scope1 => "Scope 1",
            Self::Scope2 => "Scope 2",
            Self::Scope3 => "Scope 3",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedCategoryError(pub String);

impl UnsupportedCategoryError {
    #[must_use]
    pub fn bill_type(&self) -> &str {
        &self.0
    }
}

impl Display for UnsupportedCategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported bill type: {}", self.0)
    }
}

impl std::error::Error for UnsupportedCategoryError {}

/// Bill types accepted by the calculator. `Gas` is a fuel bill whose fuel
/// defaults to natural gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillType {
    Electricity,
    Fuel,
    Gas,
    Water,
    Waste,
}

impl BillType {
    /// Case-insensitive; the rejected input is carried verbatim in the error.
    pub fn parse(input: &str) -> Result<Self, UnsupportedCategoryError> {
        match input.to_lowercase().as_str() {
            "electricity" => Ok(Self::Electricity),
            "fuel" => Ok(Self::Fuel),
            "gas" => Ok(Self::Gas),
            "water" => Ok(Self::Water),
            "waste" => Ok(Self::Waste),
            _ => Err(UnsupportedCategoryError(input.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Fuel => "fuel",
            Self::Gas => "gas",
            Self::Water => "water",
            Self::Waste => "waste",
        }
    }

    #[must_use]
    pub const fn category(self) -> SourceCategory {
        match self {
            Self::Electricity => SourceCategory::Electricity,
            Self::Fuel | Self::Gas => SourceCategory::Fuel,
            Self::Water => SourceCategory::Water,
            Self::Waste => SourceCategory::Waste,
        }
    }

    /// Fuel type assumed when a fuel bill does not name one.
    #[must_use]
    pub const fn default_fuel_type(self) -> Option<&'static str> {
        match self {
            Self::Fuel => Some("diesel"),
            Self::Gas => Some("natural_gas"),
            Self::Electricity | Self::Water | Self::Waste => None,
        }
    }
}

impl FromStr for BillType {
    type Err = UnsupportedCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for BillType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
