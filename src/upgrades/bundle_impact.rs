use tracing::debug;

use crate::home::{AnalysisRecord, HomeSettings};
use crate::upgrades::spec::UpgradeSpec;

/// 개선 항목들을 순서대로 적용한 뒤의 설정을 계산한다. 원본은 수정하지 않는다.
///
/// 필드별 병합 규칙:
/// - `hspf2`, `seer2`: 덮어쓰기 (나중 항목 우선)
/// - `insulationFactor`, `homeShape`, `heatLossFactor`: 곱하기
/// - `tempAdjust`: 난방 설정온도에 더하고 냉방 설정온도에서 뺀다
pub fn calculate_bundle_impact(settings: &HomeSettings, upgrades: &[UpgradeSpec]) -> HomeSettings {
    upgrades.iter().fold(settings.clone(), apply_upgrade)
}

fn apply_upgrade(mut s: HomeSettings, upgrade: &UpgradeSpec) -> HomeSettings {
    if let Some(hspf2) = upgrade.hspf2 {
        s.hspf2 = hspf2;
    }
    if let Some(seer2) = upgrade.seer2 {
        s.efficiency = seer2;
    }
    if let Some(f) = upgrade.insulation_factor {
        s.insulation_level *= f;
    }
    if let Some(f) = upgrade.home_shape {
        s.home_shape *= f;
    }
    if let Some(f) = upgrade.heat_loss_factor {
        s.heat_loss_multiplier *= f;
    }
    if let Some(delta) = upgrade.temp_adjust {
        s.winter_thermostat += delta;
        s.summer_thermostat -= delta;
    }
    debug!(kind = ?upgrade.kind, name = %upgrade.name, "upgrade applied");
    s
}

/// 실측 열손실 계수가 있을 때 단열/형상 계수를 바꾸는 항목이 있는지 확인한다.
///
/// 실측값은 추정 외피 계수를 대신하므로 이런 항목의 절감 효과는 비용에 반영되지 않는다.
pub fn envelope_factors_masked(
    analysis: Option<&AnalysisRecord>,
    upgrades: &[UpgradeSpec],
) -> bool {
    analysis.and_then(AnalysisRecord::measured_heat_loss).is_some()
        && upgrades
            .iter()
            .any(|u| u.insulation_factor.is_some() || u.home_shape.is_some())
}
