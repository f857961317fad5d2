use serde::{Deserialize, Serialize};

/// 기본 난방 효율(HSPF2).
pub const DEFAULT_HSPF2: f64 = 8.5;
/// 기본 냉방 효율(SEER2).
pub const DEFAULT_SEER2: f64 = 15.0;
/// 기본 난방 설정온도 [°F]
pub const DEFAULT_WINTER_THERMOSTAT_F: f64 = 70.0;
/// 기본 냉방 설정온도 [°F]
pub const DEFAULT_SUMMER_THERMOSTAT_F: f64 = 74.0;
/// 효율 등급 하한. 0 이하 값도 이 값으로 올려 읽는다.
pub const MIN_EFFICIENCY_RATING: f64 = 1.0;
/// 기본 연면적 [ft²]
pub const DEFAULT_SQUARE_FEET: f64 = 1800.0;

/// 주 난방 설비 종류. 계산에는 쓰이지 않고 그대로 전달된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimarySystem {
    HeatPump,
    GasFurnace,
    ElectricResistance,
}

/// 주택/설비 설정.
///
/// 누락된 필드는 역직렬화 시점에 기본값으로 채운다. 엔진은 이 값을 수정하지 않고
/// 항상 새 값을 만들어 반환한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeSettings {
    /// 연면적 [ft²]
    pub square_feet: f64,
    /// 난방 계절 성능 계수
    pub hspf2: f64,
    /// 냉방 효율(SEER2)
    #[serde(alias = "seer2")]
    pub efficiency: f64,
    /// 단열 계수 (1.0 기준, 작을수록 열손실 적음)
    pub insulation_level: f64,
    /// 외피 형상/노출 계수
    pub home_shape: f64,
    /// 일사 취득 계수
    pub solar_exposure: f64,
    /// 난방 설정온도 [°F]
    pub winter_thermostat: f64,
    /// 냉방 설정온도 [°F]
    pub summer_thermostat: f64,
    /// 전기 요금 [$/kWh]. 없으면 지역/설정 기본값 사용.
    pub utility_cost: Option<f64>,
    pub primary_system: PrimarySystem,
    pub indoor_temp: f64,
    pub city: Option<String>,
    /// 덕트 실링 등으로 누적된 열손실 배율
    #[serde(rename = "_heatLossMultiplier")]
    pub heat_loss_multiplier: f64,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            square_feet: DEFAULT_SQUARE_FEET,
            hspf2: DEFAULT_HSPF2,
            efficiency: DEFAULT_SEER2,
            insulation_level: 1.0,
            home_shape: 1.0,
            solar_exposure: 1.0,
            winter_thermostat: DEFAULT_WINTER_THERMOSTAT_F,
            summer_thermostat: DEFAULT_SUMMER_THERMOSTAT_F,
            utility_cost: None,
            primary_system: PrimarySystem::HeatPump,
            indoor_temp: DEFAULT_WINTER_THERMOSTAT_F,
            city: None,
            heat_loss_multiplier: 1.0,
        }
    }
}

impl HomeSettings {
    /// 계산에 쓸 수 있도록 정리한 사본을 돌려준다.
    ///
    /// 효율 등급은 유한하지 않을 때만 기본값으로 바꾸고, 그 밖의 값은
    /// [`MIN_EFFICIENCY_RATING`] 아래로 내려가지 않게 올린다.
    pub fn sanitized(&self) -> Self {
        let mut s = self.clone();
        s.hspf2 = rating_or(s.hspf2, DEFAULT_HSPF2);
        s.efficiency = rating_or(s.efficiency, DEFAULT_SEER2);
        s.insulation_level = positive_or(s.insulation_level, 1.0);
        s.home_shape = positive_or(s.home_shape, 1.0);
        s.solar_exposure = non_negative_or(s.solar_exposure, 1.0);
        s.heat_loss_multiplier = positive_or(s.heat_loss_multiplier, 1.0);
        if !s.winter_thermostat.is_finite() {
            s.winter_thermostat = DEFAULT_WINTER_THERMOSTAT_F;
        }
        if !s.summer_thermostat.is_finite() {
            s.summer_thermostat = DEFAULT_SUMMER_THERMOSTAT_F;
        }
        s.utility_cost = s.utility_cost.filter(|r| r.is_finite() && *r > 0.0);
        s
    }
}

fn rating_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(MIN_EFFICIENCY_RATING)
    } else {
        fallback
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}
