use serde::Serialize;
use tracing::{debug, warn};

use crate::home::location::GENERIC_CLIMATE;
use crate::home::{AnalysisRecord, HomeSettings, Location};
use crate::thermal::efficiency::{
    aux_heat_share, cooling_kwh, heat_pump_kwh, resistance_kwh, DEGREE_DAY_BASE_F,
};

/// 기본 전기 요금 [$/kWh]
pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.15;
/// 단위 면적당 외피 열손실 계수 [BTU/hr/°F/ft²] (보통 단열 기준)
pub const UA_PER_SQUARE_FOOT: f64 = 0.35;
/// 설정온도 1°F 변화당 유효 도일 변화율
pub const SETPOINT_SENSITIVITY_PER_F: f64 = 0.03;
/// 냉방 부하 보정 (잠열, 내부 발열)
pub const COOLING_LOAD_FACTOR: f64 = 1.3;

/// 연간 냉난방 비용 추정값. `total`은 항상 `heating + cooling`이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualCostEstimate {
    heating: f64,
    cooling: f64,
    total: f64,
}

impl AnnualCostEstimate {
    pub fn new(heating: f64, cooling: f64) -> Self {
        Self {
            heating,
            cooling,
            total: heating + cooling,
        }
    }

    pub fn heating(&self) -> f64 {
        self.heating
    }

    pub fn cooling(&self) -> f64 {
        self.cooling
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// 도일 기반으로 연간 냉난방 전기 요금을 추정한다.
///
/// - 실측 열손실 계수가 있으면 단열/형상 계수로 만든 추정 외피 계수 대신 사용한다.
/// - 위치가 없으면 일반 기후 프로파일을 쓴다.
/// - 연면적도 실측값도 없어 외피 계수를 만들 수 없으면 `None`을 반환한다.
pub fn estimate_annual_cost(
    settings: &HomeSettings,
    location: Option<&Location>,
    historical_analysis: Option<&AnalysisRecord>,
) -> Option<AnnualCostEstimate> {
    let s = settings.sanitized();

    let climate = match location {
        Some(loc) => {
            if !loc.has_degree_days() {
                warn!(city = ?loc.city, "location has no degree-day data, using generic climate");
            }
            loc.climate()
        }
        None => {
            debug!("no location supplied, using generic climate");
            GENERIC_CLIMATE
        }
    };

    let measured_ua = historical_analysis.and_then(AnalysisRecord::measured_heat_loss);
    let envelope_ua = match measured_ua {
        Some(ua) => ua,
        None => {
            if !(s.square_feet.is_finite() && s.square_feet > 0.0) {
                debug!(square_feet = s.square_feet, "no envelope data for estimate");
                return None;
            }
            s.square_feet * UA_PER_SQUARE_FOOT * s.insulation_level * s.home_shape
        }
    };
    let ua = envelope_ua * s.heat_loss_multiplier;

    let balance_point = historical_analysis
        .and_then(|a| a.balance_point)
        .filter(|bp| bp.is_finite())
        .unwrap_or(DEGREE_DAY_BASE_F);

    let heating_dd = climate.heating_degree_days_f
        * winter_setpoint_factor(s.winter_thermostat)
        * balance_point_factor(balance_point, climate.design_temp_f);
    let cooling_dd = climate.cooling_degree_days_f * summer_setpoint_factor(s.summer_thermostat);

    let heating_load_btu = ua * heating_dd * 24.0;
    let aux_share = aux_heat_share(climate.design_temp_f, balance_point);
    let heating_kwh = heat_pump_kwh(heating_load_btu * (1.0 - aux_share), s.hspf2)
        + resistance_kwh(heating_load_btu * aux_share);

    let cooling_load_btu = ua * cooling_dd * 24.0 * COOLING_LOAD_FACTOR * s.solar_exposure;
    let cooling_energy_kwh = cooling_kwh(cooling_load_btu, s.efficiency);

    let rate = electricity_rate(&s, location);
    let estimate = AnnualCostEstimate::new(
        (heating_kwh * rate).max(0.0),
        (cooling_energy_kwh * rate).max(0.0),
    );
    if !estimate.total().is_finite() {
        return None;
    }
    debug!(
        ua,
        measured = measured_ua.is_some(),
        heating_dd,
        cooling_dd,
        aux_share,
        rate,
        heating = estimate.heating(),
        cooling = estimate.cooling(),
        "annual cost estimated"
    );
    Some(estimate)
}

/// 사용자 입력 요금, 지역 평균 요금, 기본 요금 순으로 적용한다.
pub fn electricity_rate(settings: &HomeSettings, location: Option<&Location>) -> f64 {
    settings
        .utility_cost
        .filter(|r| r.is_finite() && *r > 0.0)
        .or_else(|| {
            location
                .and_then(|l| l.electricity_rate)
                .filter(|r| r.is_finite() && *r > 0.0)
        })
        .unwrap_or(DEFAULT_ELECTRICITY_RATE)
}

fn winter_setpoint_factor(winter_f: f64) -> f64 {
    (1.0 + SETPOINT_SENSITIVITY_PER_F * (winter_f - 70.0)).max(0.0)
}

fn summer_setpoint_factor(summer_f: f64) -> f64 {
    (1.0 + SETPOINT_SENSITIVITY_PER_F * (74.0 - summer_f)).max(0.0)
}

fn balance_point_factor(balance_point_f: f64, design_temp_f: f64) -> f64 {
    let span = DEGREE_DAY_BASE_F - design_temp_f;
    if span <= 0.0 {
        return 1.0;
    }
    ((balance_point_f - design_temp_f) / span).clamp(0.0, 1.5)
}
