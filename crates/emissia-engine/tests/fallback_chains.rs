mod common;

use emissia_engine::EmissionEngine;
use emissia_factors::FactorDatabase;
use emissia_model::SourceCategory;

fn engine() -> EmissionEngine {
    EmissionEngine::new(common::fixture_database())
}

#[test]
fn electricity_region_hit_uses_region_grid() {
    let record = engine().calculate_electricity(100.0, "United States", Some("California"));
    assert_eq!(record.emission_factor(), 0.203);
    assert_eq!(record.emission_factor_source(), "United States - California grid");
    assert_eq!(record.emission_factor_unit(), "kg CO2e per kWh");
    assert_eq!(record.consumption_unit(), "kWh");
}

#[test]
fn electricity_region_miss_falls_to_national_grid() {
    let record = engine().calculate_electricity(100.0, "United States", Some("Nevada"));
    assert_eq!(record.emission_factor(), 0.386);
    assert_eq!(record.emission_factor_source(), "United States national grid");
}

#[test]
fn national_grid_only_country_ignores_requested_region() {
    let record = engine().calculate_electricity(100.0, "Germany", Some("Bavaria"));
    assert_eq!(record.emission_factor(), 0.385);
    assert_eq!(record.emission_factor_source(), "Germany national grid");
}

#[test]
fn unknown_country_uses_global_average() {
    let record = engine().calculate_electricity(100.0, "Atlantis", Some("California"));
    assert_eq!(record.emission_factor(), 0.5);
    assert_eq!(record.emission_factor_source(), "Global average");
}

#[test]
fn country_without_national_grid_falls_to_global_average_on_region_miss() {
    let record = engine().calculate_electricity(100.0, "Regionland", Some("South"));
    assert_eq!(record.emission_factor(), 0.5);
    assert_eq!(record.emission_factor_source(), "Global average");
}

#[test]
fn country_lookup_is_exact_match() {
    let record = engine().calculate_electricity(100.0, "united states", None);
    assert_eq!(record.emission_factor_source(), "Global average");
}

#[test]
fn fuel_lookup_normalizes_identifier() {
    let record = engine().calculate_fuel(10.0, "Natural Gas", None);
    assert_eq!(record.emission_factor(), 2.02);
    assert_eq!(record.emission_factor_unit(), "kg CO2e per m³");
    assert_eq!(record.consumption_unit(), "kg CO2e per m³");
    assert_eq!(record.emission_factor_source(), "EPA/IPCC - Natural Gas");
}

#[test]
fn fuel_has_no_partial_matching() {
    let record = engine().calculate_fuel(10.0, "diesel_blend", None);
    assert_eq!(record.emission_factor(), 2.5);
    assert_eq!(record.emission_factor_source(), "Default estimate");
}

#[test]
fn water_hit_uses_description_or_type_as_label() {
    let engine = engine();
    let described = engine.calculate_water(10.0, "water_supply");
    assert_eq!(described.emission_factor_source(), "Water supply");
    let bare = engine.calculate_water(10.0, "wastewater_treatment");
    assert_eq!(bare.emission_factor(), 0.708);
    assert_eq!(bare.emission_factor_source(), "wastewater_treatment");
}

#[test]
fn water_miss_falls_back_to_water_supply_entry() {
    let record = engine().calculate_water(10.0, "irrigation");
    assert_eq!(record.emission_factor(), 0.344);
    assert_eq!(record.emission_factor_source(), "Water supply");
    assert_eq!(record.emission_factor_unit(), "kg CO2e per m³");
}

#[test]
fn water_without_supply_entry_resolves_to_zero() {
    let db = FactorDatabase::from_json_documents([(
        SourceCategory::Water,
        r#"{ "factors": { "wastewater_treatment": { "value": 0.708 } } }"#,
    )])
    .expect("water only");
    let record = EmissionEngine::new(db).calculate_water(10.0, "irrigation");
    assert_eq!(record.emission_factor(), 0.0);
    assert_eq!(record.emission_factor_source(), "Water supply default");
    assert_eq!(record.total_co2e(), 0.0);
}

#[test]
fn waste_full_hit_uses_specific_factor() {
    let record = engine().calculate_waste(2.0, "Paper", "Recycling");
    assert_eq!(record.emission_factor(), 21.0);
    assert_eq!(record.emission_factor_source(), "Recycling - Paper");
}

#[test]
fn waste_type_miss_under_known_method_falls_back_fully() {
    let record = engine().calculate_waste(2.0, "glass", "recycling");
    assert_eq!(record.emission_factor(), 600.0);
    assert_eq!(record.emission_factor_source(), "Landfill - mixed waste (default)");
}

#[test]
fn waste_method_miss_falls_back_even_if_type_exists_elsewhere() {
    let record = engine().calculate_waste(2.0, "food_waste", "incineration");
    assert_eq!(record.emission_factor(), 600.0);
    assert_eq!(record.emission_factor_source(), "Landfill - mixed waste (default)");
}

#[test]
fn empty_database_resolves_every_category_to_engine_defaults() {
    let engine = EmissionEngine::new(FactorDatabase::empty());

    let electricity = engine.calculate_electricity(1.0, "United States", Some("California"));
    assert_eq!(electricity.emission_factor(), 0.475);
    assert_eq!(electricity.emission_factor_source(), "Global average");

    let fuel = engine.calculate_fuel(1.0, "diesel", None);
    assert_eq!(fuel.emission_factor(), 2.5);
    assert_eq!(fuel.emission_factor_unit(), "kg CO2e per liter");

    let water = engine.calculate_water(1.0, "water_supply");
    assert_eq!(water.emission_factor(), 0.0);
    assert_eq!(water.emission_factor_source(), "Water supply default");

    let waste = engine.calculate_waste(1.0, "mixed_waste", "landfill");
    assert_eq!(waste.emission_factor(), 583.0);
    assert_eq!(waste.emission_factor_source(), "Landfill - mixed waste (default)");
}
