use std::path::PathBuf;

use emissia_factors::load_factor_database;
use emissia_model::SourceCategory;

fn bundled_factors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("data/emission-factors")
}

#[test]
fn bundled_factor_documents_load_for_every_category() {
    let db = load_factor_database(&bundled_factors_dir()).expect("bundled factors");
    assert!(db.missing_categories().is_empty());
    for category in SourceCategory::ALL {
        assert!(db.entry_count(category) > 0, "{category} has no entries");
        let meta = db.document_meta(category).expect("meta");
        assert!(meta.source.is_some(), "{category} lacks provenance");
    }
}

#[test]
fn bundled_documents_carry_the_terminal_fallback_entries() {
    let db = load_factor_database(&bundled_factors_dir()).expect("bundled factors");
    assert!(db.electricity().global_average.is_some());
    assert!(db.water().get("water_supply").is_some());
    assert_eq!(db.waste().get("landfill", "mixed_waste"), Some(583.0));
    assert!(db.fuel().get("diesel").is_some());
    assert!(db.fuel().get("natural_gas").is_some());
}

#[test]
fn bundled_data_has_a_country_without_regions() {
    let db = load_factor_database(&bundled_factors_dir()).expect("bundled factors");
    let national_only = db
        .electricity()
        .countries
        .values()
        .filter(|grid| grid.regions.is_empty() && grid.national_grid.is_some())
        .count();
    assert!(national_only > 0);
}
