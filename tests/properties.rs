//! 비용 모델과 개선 적용의 성질 기반 테스트.
use heatpump_cost_toolbox::economics::compute_roi;
use heatpump_cost_toolbox::home::location::cities;
use heatpump_cost_toolbox::home::HomeSettings;
use heatpump_cost_toolbox::thermal::estimate_annual_cost;
use heatpump_cost_toolbox::upgrades::{calculate_bundle_impact, UpgradeKind, UpgradeSpec};
use proptest::prelude::{prop, prop_assert, prop_assert_eq, proptest};

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_hspf2_is_monotone_for_heating(
        city in 0usize..12,
        sqft in 600.0f64..5000.0,
        low in 6.0f64..12.0,
        bump in 0.0f64..4.0,
    ) {
        let loc = cities()[city % cities().len()].to_location();
        let a = HomeSettings { square_feet: sqft, hspf2: low, ..HomeSettings::default() };
        let b = HomeSettings { hspf2: low + bump, ..a.clone() };
        let ea = estimate_annual_cost(&a, Some(&loc), None).expect("a");
        let eb = estimate_annual_cost(&b, Some(&loc), None).expect("b");
        prop_assert!(eb.heating() <= ea.heating());
    }

    #[test]
    fn prop_seer2_is_monotone_for_cooling(
        city in 0usize..12,
        low in 10.0f64..20.0,
        bump in 0.0f64..8.0,
    ) {
        let loc = cities()[city % cities().len()].to_location();
        let a = HomeSettings { efficiency: low, ..HomeSettings::default() };
        let b = HomeSettings { efficiency: low + bump, ..a.clone() };
        let ea = estimate_annual_cost(&a, Some(&loc), None).expect("a");
        let eb = estimate_annual_cost(&b, Some(&loc), None).expect("b");
        prop_assert!(eb.cooling() <= ea.cooling());
    }

    #[test]
    fn prop_total_is_exact_sum(
        sqft in 1.0f64..8000.0,
        insulation in 0.3f64..1.5,
        winter in 60.0f64..78.0,
        summer in 68.0f64..82.0,
    ) {
        let s = HomeSettings {
            square_feet: sqft,
            insulation_level: insulation,
            winter_thermostat: winter,
            summer_thermostat: summer,
            ..HomeSettings::default()
        };
        let e = estimate_annual_cost(&s, None, None).expect("estimate");
        prop_assert_eq!(e.total(), e.heating() + e.cooling());
        prop_assert!(e.heating() >= 0.0 && e.cooling() >= 0.0);
    }

    #[test]
    fn prop_insulation_factors_compound(factors in prop::collection::vec(0.5f64..1.0, 0..6)) {
        let upgrades: Vec<UpgradeSpec> = factors
            .iter()
            .map(|f| {
                UpgradeSpec::new(UpgradeKind::Insulation, "layer", 100.0).insulation_factor(*f)
            })
            .collect();
        let out = calculate_bundle_impact(&HomeSettings::default(), &upgrades);
        let expected: f64 = factors.iter().product();
        prop_assert!((out.insulation_level - expected).abs() < 1e-9);

        let mut reversed = upgrades.clone();
        reversed.reverse();
        let back = calculate_bundle_impact(&HomeSettings::default(), &reversed);
        prop_assert!((back.insulation_level - out.insulation_level).abs() < 1e-9);
    }

    #[test]
    fn prop_roi_never_nan(
        cost in -1000.0f64..50_000.0,
        savings in -500.0f64..5000.0,
        years in 0u32..40,
        rate in -0.5f64..1.5,
    ) {
        let r = compute_roi(cost, savings, years, rate);
        prop_assert!(!r.payback.is_nan());
        prop_assert!(r.npv.is_finite());
        prop_assert!(r.roi10.is_finite());
    }
}
