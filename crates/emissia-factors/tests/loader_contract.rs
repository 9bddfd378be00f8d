use std::fs;
use std::path::Path;

use emissia_factors::{category_document_path, load_factor_database, FactorDatabase};
use emissia_model::SourceCategory;

fn write(dir: &Path, category: SourceCategory, body: &str) {
    fs::write(category_document_path(dir, category), body).expect("write fixture");
}

const FUEL_DOC: &str = r#"{
  "description": "fixture",
  "factors": {
    "diesel": { "value": 2.68, "unit": "kg CO2e per liter" },
    "natural_gas": { "value": 2.02 }
  }
}"#;

#[test]
fn missing_category_file_is_not_fatal() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write(tmp.path(), SourceCategory::Fuel, FUEL_DOC);

    let db = load_factor_database(tmp.path()).expect("load");
    assert_eq!(db.loaded_categories(), vec![SourceCategory::Fuel]);
    assert_eq!(
        db.missing_categories(),
        vec![
            SourceCategory::Electricity,
            SourceCategory::Water,
            SourceCategory::Waste
        ]
    );
    assert!(db.electricity().countries.is_empty());
    assert!(db.water().is_empty());
    assert_eq!(db.entry_count(SourceCategory::Fuel), 2);
}

#[test]
fn fuel_entry_without_unit_gets_fallback_unit() {
    let db = FactorDatabase::from_json_documents([(SourceCategory::Fuel, FUEL_DOC)])
        .expect("parse");
    let gas = db.fuel().get("natural_gas").expect("natural gas entry");
    assert_eq!(gas.unit, "kg CO2e per unit");
    assert_eq!(
        db.document_meta(SourceCategory::Fuel)
            .and_then(|m| m.description.as_deref()),
        Some("fixture")
    );
}

#[test]
fn empty_directory_loads_with_every_category_missing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let db = load_factor_database(tmp.path()).expect("load");
    assert_eq!(db, FactorDatabase::empty());
    assert_eq!(db.missing_categories().len(), SourceCategory::ALL.len());
}

#[test]
fn missing_directory_is_configuration_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("nope");
    let err = load_factor_database(&missing).expect_err("must fail");
    assert_eq!(err.path.as_deref(), Some(missing.as_path()));
    assert!(err.category.is_none());
}

#[test]
fn file_in_place_of_directory_is_configuration_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = tmp.path().join("factors.json");
    fs::write(&file, "{}").expect("write");
    let err = load_factor_database(&file).expect_err("must fail");
    assert!(err.message.contains("not a directory"), "{err}");
}

#[test]
fn malformed_json_fails_at_load_with_category_and_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write(tmp.path(), SourceCategory::Water, "{ \"factors\": ");
    let err = load_factor_database(tmp.path()).expect_err("must fail");
    assert_eq!(err.category, Some(SourceCategory::Water));
    assert_eq!(
        err.path,
        Some(category_document_path(tmp.path(), SourceCategory::Water))
    );
    assert!(err.to_string().contains("[water]"), "{err}");
}

#[test]
fn unknown_fields_are_rejected() {
    let raw = r#"{ "factors": { "global_average": 0.4 }, "owner": "ops" }"#;
    let err = FactorDatabase::from_json_documents([(SourceCategory::Electricity, raw)])
        .expect_err("unknown top-level field");
    assert_eq!(err.category, Some(SourceCategory::Electricity));

    let raw = r#"{ "factors": { "global_avg": 0.4 } }"#;
    assert!(FactorDatabase::from_json_documents([(SourceCategory::Electricity, raw)]).is_err());
}

#[test]
fn missing_factors_object_is_rejected() {
    let raw = r#"{ "description": "no factors here" }"#;
    assert!(FactorDatabase::from_json_documents([(SourceCategory::Waste, raw)]).is_err());
}

#[test]
fn negative_factor_is_rejected() {
    let raw = r#"{ "factors": { "countries": { "Atlantis": { "national_grid": -0.2 } } } }"#;
    let err = FactorDatabase::from_json_documents([(SourceCategory::Electricity, raw)])
        .expect_err("negative factor");
    assert!(err.message.contains("Atlantis"), "{err}");
}

#[test]
fn non_normalized_waste_keys_are_rejected() {
    let raw = r#"{ "factors": { "disposal_methods": { "Landfill": { "mixed_waste": 583 } } } }"#;
    let err = FactorDatabase::from_json_documents([(SourceCategory::Waste, raw)])
        .expect_err("non-normalized method");
    assert!(err.message.contains("`landfill`"), "{err}");

    let raw = r#"{ "factors": { "disposal_methods": { "landfill": { "mixed waste": 583 } } } }"#;
    assert!(FactorDatabase::from_json_documents([(SourceCategory::Waste, raw)]).is_err());
}

#[test]
fn non_normalized_fuel_keys_are_rejected() {
    let raw = r#"{ "factors": { "Natural Gas": { "value": 2.02, "unit": "kg CO2e per m³" } } }"#;
    assert!(FactorDatabase::from_json_documents([(SourceCategory::Fuel, raw)]).is_err());
}

#[test]
fn duplicate_category_document_is_rejected() {
    let err = FactorDatabase::from_json_documents([
        (SourceCategory::Fuel, FUEL_DOC),
        (SourceCategory::Fuel, FUEL_DOC),
    ])
    .expect_err("duplicate");
    assert!(err.message.contains("more than once"), "{err}");
}

#[test]
fn waste_lookup_requires_both_levels() {
    let raw = r#"{ "factors": { "disposal_methods": { "recycling": { "paper": 21.0 } } } }"#;
    let db = FactorDatabase::from_json_documents([(SourceCategory::Waste, raw)]).expect("parse");
    assert_eq!(db.waste().get("recycling", "paper"), Some(21.0));
    assert_eq!(db.waste().get("recycling", "glass"), None);
    assert_eq!(db.waste().get("landfill", "paper"), None);
}
