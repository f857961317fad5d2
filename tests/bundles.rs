//! 번들 카탈로그 평가/정렬 및 임의 개선 분석 테스트.
use heatpump_cost_toolbox::economics::compute_roi;
use heatpump_cost_toolbox::home::location::find_city;
use heatpump_cost_toolbox::home::{AnalysisRecord, HomeSettings, Location};
use heatpump_cost_toolbox::thermal::estimate_annual_cost;
use heatpump_cost_toolbox::upgrades::{
    analyze_upgrades, calculate_bundle_impact, catalog, evaluate_bundles, find_bundle,
    BundleComparator, UpgradeBundle, UpgradeKind, UpgradeSpec,
};

fn chicago() -> Location {
    find_city("chicago, il").expect("city").to_location()
}

#[test]
fn catalog_has_four_bundles_in_fixed_order() {
    let keys: Vec<String> = catalog().into_iter().map(|b| b.key).collect();
    assert_eq!(keys, ["starter", "comfort", "premium", "hvac_plus"]);
    for bundle in catalog() {
        let sum: f64 = bundle.upgrades.iter().map(|u| u.cost).sum();
        assert_eq!(bundle.total_cost, sum, "{}", bundle.key);
    }
    assert_eq!(find_bundle("starter").map(|b| b.total_cost), Some(1750.0));
    assert_eq!(find_bundle("HVAC+").map(|b| b.key), Some("hvac_plus".to_string()));
    assert!(find_bundle("platinum").is_none());
}

#[test]
fn evaluations_are_sorted_by_roi_descending() {
    let evals = evaluate_bundles(&HomeSettings::default(), Some(&chicago()), None, &catalog());
    assert_eq!(evals.len(), 4);
    for pair in evals.windows(2) {
        assert!(pair[0].roi10 >= pair[1].roi10);
    }
}

#[test]
fn evaluation_follows_the_pipeline() {
    let settings = HomeSettings::default();
    let loc = chicago();
    let evals = evaluate_bundles(&settings, Some(&loc), None, &catalog());
    let starter = evals
        .iter()
        .find(|e| e.bundle_key == "starter")
        .expect("starter evaluated");

    let baseline = estimate_annual_cost(&settings, Some(&loc), None).expect("baseline");
    let upgraded_settings = calculate_bundle_impact(&settings, &starter.bundle.upgrades);
    let upgraded = estimate_annual_cost(&upgraded_settings, Some(&loc), None).expect("upgraded");
    let savings = (baseline.total() - upgraded.total()).max(0.0);
    let roi = compute_roi(1750.0, savings, 10, 0.05);

    assert_eq!(starter.baseline_cost, baseline.total());
    assert_eq!(starter.upgraded_cost, upgraded.total());
    assert_eq!(starter.annual_savings, savings);
    assert_eq!(starter.roi(), roi);
    assert!(starter.annual_savings > 0.0);
}

#[test]
fn ties_keep_catalog_order() {
    let same =
        vec![UpgradeSpec::new(UpgradeKind::DuctSealing, "ducts", 500.0).heat_loss_factor(0.9)];
    let bundles: Vec<UpgradeBundle> = ["first", "second", "third"]
        .iter()
        .map(|key| UpgradeBundle {
            key: key.to_string(),
            name: key.to_string(),
            description: String::new(),
            total_cost: 500.0,
            upgrades: same.clone(),
        })
        .collect();
    let evals = evaluate_bundles(&HomeSettings::default(), None, None, &bundles);
    let keys: Vec<&str> = evals.iter().map(|e| e.bundle_key.as_str()).collect();
    assert_eq!(keys, ["first", "second", "third"]);
}

#[test]
fn missing_baseline_yields_no_evaluations() {
    let settings = HomeSettings {
        square_feet: 0.0,
        ..HomeSettings::default()
    };
    assert!(evaluate_bundles(&settings, Some(&chicago()), None, &catalog()).is_empty());

    let mut comparator = BundleComparator::default();
    assert!(comparator
        .evaluations(&settings, Some(&chicago()), None, None)
        .is_empty());
}

#[test]
fn worsening_upgrade_clamps_savings_to_zero() {
    let downgrade = vec![UpgradeSpec::new(UpgradeKind::HeatPump, "old unit", 3000.0).hspf2(6.0)];
    let analysis = analyze_upgrades(&HomeSettings::default(), None, None, &downgrade, 10, 0.05)
        .expect("analysis");
    assert_eq!(analysis.annual_savings, 0.0);
    assert!(analysis.roi.payback.is_infinite());
    assert_eq!(analysis.roi.npv, -3000.0);
    assert!(analysis.upgraded.total() > analysis.baseline.total());
}

#[test]
fn ad_hoc_analysis_uses_variable_discount_rate() {
    let upgrades = vec![
        UpgradeSpec::new(UpgradeKind::Insulation, "attic", 1500.0).insulation_factor(0.85),
        UpgradeSpec::new(UpgradeKind::Labor, "labor", 300.0),
    ];
    let settings = HomeSettings::default();
    let loc = chicago();
    let low = analyze_upgrades(&settings, Some(&loc), None, &upgrades, 15, 0.02).expect("low");
    let high = analyze_upgrades(&settings, Some(&loc), None, &upgrades, 15, 0.08).expect("high");
    assert_eq!(low.total_cost, 1800.0);
    assert_eq!(low.annual_savings, high.annual_savings);
    assert_eq!(low.roi.roi10, high.roi.roi10);
    assert!(low.roi.npv > high.roi.npv);
    assert!((low.upgraded_settings.insulation_level - 0.85).abs() < 1e-9);
}

#[test]
fn measured_analysis_flows_into_every_bundle() {
    let analysis = AnalysisRecord {
        heat_loss_factor: Some(420.0),
        ..AnalysisRecord::default()
    };
    let settings = HomeSettings::default();
    let loc = chicago();
    let evals = evaluate_bundles(&settings, Some(&loc), Some(&analysis), &catalog());
    let baseline = estimate_annual_cost(&settings, Some(&loc), Some(&analysis)).expect("baseline");
    assert_eq!(evals.len(), 4);
    assert!(evals.iter().all(|e| e.baseline_cost == baseline.total()));
}

#[test]
fn comparator_includes_custom_bundle_and_caches() {
    let custom = UpgradeBundle::custom(vec![
        UpgradeSpec::new(UpgradeKind::Thermostat, "smart", 150.0).temp_adjust(-2.0),
    ]);
    assert_eq!(custom.total_cost, 150.0);

    let settings = HomeSettings::default();
    let loc = chicago();
    let mut comparator = BundleComparator::default();
    assert!(!comparator.is_cached());
    let first = comparator
        .evaluations(&settings, Some(&loc), None, Some(&custom))
        .to_vec();
    assert_eq!(first.len(), 5);
    assert!(first.iter().any(|e| e.bundle_key == "custom"));
    assert!(comparator.is_cached());

    let again = comparator
        .evaluations(&settings, Some(&loc), None, Some(&custom))
        .to_vec();
    assert_eq!(first, again);

    let bigger = HomeSettings {
        square_feet: 3200.0,
        ..HomeSettings::default()
    };
    let changed = comparator.evaluations(&bigger, Some(&loc), None, Some(&custom));
    assert!(changed[0].baseline_cost > first[0].baseline_cost);
}

#[test]
fn bundle_without_upgraded_estimate_is_left_out() {
    let runaway = UpgradeBundle::custom(vec![
        UpgradeSpec::new(UpgradeKind::Insulation, "runaway", 100.0).insulation_factor(1e305),
    ]);
    let mut bundles = catalog();
    bundles.push(runaway);
    let evaluations = evaluate_bundles(&HomeSettings::default(), Some(&chicago()), None, &bundles);
    assert_eq!(evaluations.len(), 4);
    assert!(evaluations.iter().all(|ev| ev.bundle_key != "custom"));
}
