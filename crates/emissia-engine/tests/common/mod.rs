use emissia_factors::FactorDatabase;
use emissia_model::SourceCategory;

pub const ELECTRICITY: &str = r#"{
  "factors": {
    "global_average": 0.5,
    "countries": {
      "United States": { "national_grid": 0.386, "regions": { "California": 0.203 } },
      "Germany": { "national_grid": 0.385 },
      "Regionland": { "regions": { "North": 0.1 } }
    }
  }
}"#;

pub const FUEL: &str = r#"{
  "factors": {
    "diesel": { "value": 2.68, "unit": "kg CO2e per liter" },
    "natural_gas": { "value": 2.02, "unit": "kg CO2e per m³" },
    "heating_oil": { "value": 2.96, "unit": "kg CO2e per liter" }
  }
}"#;

pub const WATER: &str = r#"{
  "factors": {
    "water_supply": { "value": 0.344, "description": "Water supply" },
    "wastewater_treatment": { "value": 0.708 }
  }
}"#;

pub const WASTE: &str = r#"{
  "factors": {
    "disposal_methods": {
      "landfill": { "mixed_waste": 600.0, "food_waste": 700.0 },
      "recycling": { "paper": 21.0 }
    }
  }
}"#;

pub fn fixture_database() -> FactorDatabase {
    FactorDatabase::from_json_documents([
        (SourceCategory::Electricity, ELECTRICITY),
        (SourceCategory::Fuel, FUEL),
        (SourceCategory::Water, WATER),
        (SourceCategory::Waste, WASTE),
    ])
    .expect("fixture factors")
}
