//! 히트펌프 효율 등급 환산과 보조(전열) 히터 분담률.

use crate::units::{convert_energy, EnergyUnit};

/// 히트펌프가 단독으로 부하를 감당하지 못하기 시작하는 외기온도 [°F]
pub const AUX_LOCKOUT_F: f64 = 25.0;
/// 도일 기준온도 [°F]
pub const DEGREE_DAY_BASE_F: f64 = 65.0;

/// HSPF2 [BTU/Wh] 를 계절 평균 COP로 환산한다.
pub fn hspf2_to_cop(hspf2: f64) -> f64 {
    hspf2 / (convert_energy(1.0, EnergyUnit::WattHour, EnergyUnit::Btu))
}

/// 열량 [BTU] 을 히트펌프로 공급할 때 필요한 전력량 [kWh].
pub fn heat_pump_kwh(load_btu: f64, hspf2: f64) -> f64 {
    if hspf2 <= 0.0 {
        return 0.0;
    }
    load_btu / hspf2 / 1000.0
}

/// 냉방 열량 [BTU] 을 SEER2 설비로 제거할 때 필요한 전력량 [kWh].
pub fn cooling_kwh(load_btu: f64, seer2: f64) -> f64 {
    if seer2 <= 0.0 {
        return 0.0;
    }
    load_btu / seer2 / 1000.0
}

/// 전열 히터(COP 1)로 공급할 때 필요한 전력량 [kWh].
pub fn resistance_kwh(load_btu: f64) -> f64 {
    convert_energy(load_btu, EnergyUnit::Btu, EnergyUnit::KilowattHour)
}

/// 난방 부하 중 보조 전열 히터가 담당하는 비율(0~1).
///
/// 설계온도와 밸런스 포인트 사이에서 난방 도일이 선형 분포한다고 보고,
/// 잠금 온도 아래 구간의 부족분 절반을 전열이 담당한다고 근사한다.
pub fn aux_heat_share(design_temp_f: f64, balance_point_f: f64) -> f64 {
    let span = balance_point_f - design_temp_f;
    if span <= 0.0 || design_temp_f >= AUX_LOCKOUT_F {
        return 0.0;
    }
    let below = (AUX_LOCKOUT_F.min(balance_point_f) - design_temp_f).max(0.0);
    (0.5 * (below / span).powi(2)).clamp(0.0, 1.0)
}
