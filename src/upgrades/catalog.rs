//! 고정 개선 번들 카탈로그. 비용은 2024년 미국 평균 시공가를 반올림한 참고치이다.

use crate::upgrades::spec::{UpgradeBundle, UpgradeKind, UpgradeSpec};

/// 카탈로그 비교에 쓰는 분석 기간 [년]
pub const CATALOG_HORIZON_YEARS: u32 = 10;
/// 카탈로그 비교에 쓰는 할인율
pub const CATALOG_DISCOUNT_RATE: f64 = 0.05;

/// 카탈로그 순서대로 번들 목록을 돌려준다.
pub fn catalog() -> Vec<UpgradeBundle> {
    vec![
        bundle(
            "starter",
            "Starter",
            "Low-cost envelope fixes and a smart thermostat",
            vec![
                UpgradeSpec::new(UpgradeKind::DuctSealing, "Duct sealing", 600.0)
                    .heat_loss_factor(0.9),
                UpgradeSpec::new(UpgradeKind::Thermostat, "Smart thermostat", 250.0)
                    .temp_adjust(-1.0),
                UpgradeSpec::new(UpgradeKind::Insulation, "Attic insulation top-up", 900.0)
                    .insulation_factor(0.9),
            ],
        ),
        bundle(
            "comfort",
            "Comfort",
            "Attic insulation, air sealing and duct sealing",
            vec![
                UpgradeSpec::new(UpgradeKind::Insulation, "Attic insulation R-49", 1800.0)
                    .insulation_factor(0.85),
                UpgradeSpec::new(UpgradeKind::AirSealing, "Air sealing", 500.0)
                    .insulation_factor(0.95),
                UpgradeSpec::new(UpgradeKind::DuctSealing, "Duct sealing", 800.0)
                    .heat_loss_factor(0.88),
                UpgradeSpec::new(UpgradeKind::Thermostat, "Smart thermostat", 250.0)
                    .temp_adjust(-1.0),
            ],
        ),
        bundle(
            "premium",
            "Premium",
            "Whole-envelope retrofit with new windows",
            vec![
                UpgradeSpec::new(UpgradeKind::Insulation, "Wall and attic insulation", 4500.0)
                    .insulation_factor(0.75),
                UpgradeSpec::new(UpgradeKind::Windows, "Double-pane low-e windows", 8000.0)
                    .home_shape(0.9),
                UpgradeSpec::new(UpgradeKind::DuctSealing, "Duct sealing", 900.0)
                    .heat_loss_factor(0.85),
                UpgradeSpec::new(UpgradeKind::Thermostat, "Smart thermostat", 250.0)
                    .temp_adjust(-2.0),
            ],
        ),
        bundle(
            "hvac_plus",
            "HVAC+",
            "Cold-climate heat pump replacement with duct work",
            vec![
                UpgradeSpec::new(UpgradeKind::HeatPump, "Cold-climate heat pump", 12000.0)
                    .hspf2(9.5)
                    .seer2(18.0),
                UpgradeSpec::new(UpgradeKind::DuctSealing, "Duct sealing", 800.0)
                    .heat_loss_factor(0.88),
                UpgradeSpec::new(UpgradeKind::Labor, "Installation labor", 1500.0),
                UpgradeSpec::new(UpgradeKind::Thermostat, "Smart thermostat", 250.0)
                    .temp_adjust(-1.0),
            ],
        ),
    ]
}

/// 키로 번들을 찾는다. 대소문자를 구분하지 않는다.
pub fn find_bundle(key: &str) -> Option<UpgradeBundle> {
    catalog()
        .into_iter()
        .find(|b| b.key.eq_ignore_ascii_case(key) || b.name.eq_ignore_ascii_case(key))
}

fn bundle(key: &str, name: &str, description: &str, upgrades: Vec<UpgradeSpec>) -> UpgradeBundle {
    let total_cost = upgrades.iter().map(|u| u.cost).sum();
    UpgradeBundle {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        total_cost,
        upgrades,
    }
}
