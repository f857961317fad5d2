//! TOML 프로필 저장소와 입력 로딩 테스트.
use std::fs;

use heatpump_cost_toolbox::home::{AnalysisRecord, HomeSettings};
use heatpump_cost_toolbox::store::{
    load_inputs, AnalysisStore, BuiltinClimateResolver, LocationResolver, MemoryStore,
    ProfileFile, SettingsStore,
};
use tempfile::tempdir;

#[test]
fn profile_file_round_trips_settings_location_and_analyses() {
    let dir = tempdir().expect("tempdir");
    let mut profile = ProfileFile::new(dir.path().join("home_profile.toml"));

    assert_eq!(profile.load_settings().expect("empty"), HomeSettings::default());
    assert_eq!(profile.latest_analysis().expect("empty"), None);

    let settings = HomeSettings {
        square_feet: 2250.0,
        hspf2: 9.2,
        utility_cost: Some(0.21),
        heat_loss_multiplier: 0.9,
        city: Some("Seattle".into()),
        ..HomeSettings::default()
    };
    profile.save_settings(&settings).expect("save settings");

    let seattle = BuiltinClimateResolver.resolve("Seattle").expect("seattle");
    profile.save_location(&seattle).expect("save location");

    profile
        .record_analysis(AnalysisRecord {
            heat_loss_factor: Some(610.0),
            ..AnalysisRecord::default()
        })
        .expect("first analysis");
    profile
        .record_analysis(AnalysisRecord {
            heat_loss_factor: Some(580.0),
            balance_point: Some(57.0),
            source: Some("january.csv".into()),
        })
        .expect("second analysis");

    let reopened = ProfileFile::new(profile.path());
    assert_eq!(reopened.load_settings().expect("settings"), settings);
    assert_eq!(reopened.load_location().expect("location"), Some(seattle));
    let latest = reopened.latest_analysis().expect("analysis").expect("some");
    assert_eq!(latest.heat_loss_factor, Some(580.0));
    assert_eq!(reopened.load().expect("profile").analyses.len(), 2);
}

#[test]
fn partial_settings_file_is_filled_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("home_profile.toml");
    fs::write(&path, "[settings]\nsquareFeet = 1400.0\nseer2 = 17.0\n").expect("write");
    let settings = ProfileFile::new(&path).load_settings().expect("load");
    assert_eq!(settings.square_feet, 1400.0);
    assert_eq!(settings.efficiency, 17.0);
    assert_eq!(settings.hspf2, HomeSettings::default().hspf2);
    assert_eq!(settings.winter_thermostat, 70.0);
    assert_eq!(settings.heat_loss_multiplier, 1.0);
}

#[test]
fn unreadable_profile_degrades_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("home_profile.toml");
    fs::write(&path, "this is = = not toml").expect("write");
    let profile = ProfileFile::new(&path);
    assert!(profile.load_settings().is_err());

    let inputs = load_inputs(&profile, None);
    assert_eq!(inputs.settings, HomeSettings::default());
    assert_eq!(inputs.analysis, None);
}

#[test]
fn memory_store_returns_latest_analysis() {
    let mut store = MemoryStore::default();
    store
        .record_analysis(AnalysisRecord {
            heat_loss_factor: Some(500.0),
            ..AnalysisRecord::default()
        })
        .expect("record");
    store
        .record_analysis(AnalysisRecord {
            heat_loss_factor: Some(450.0),
            ..AnalysisRecord::default()
        })
        .expect("record");
    let inputs = load_inputs(&store, None);
    assert_eq!(
        inputs.analysis.and_then(|a| a.heat_loss_factor),
        Some(450.0)
    );
}

#[test]
fn builtin_resolver_matches_city_and_state() {
    let resolver = BuiltinClimateResolver;
    assert!(resolver.resolve("portland, or").is_some());
    assert!(resolver.resolve("Portland, ME").is_none());
    assert!(resolver.resolve("Atlantis").is_none());
    let miami = resolver.resolve("MIAMI").expect("miami");
    assert_eq!(miami.state.as_deref(), Some("FL"));
}
