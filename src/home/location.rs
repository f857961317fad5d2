//! 기후 데이터(도일, 설계 외기온도)와 내장 도시 기후표.
//! 도시 값은 NOAA 평년값을 반올림한 참고치이다.

use serde::{Deserialize, Serialize};

use crate::units::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};

/// 기후 데이터가 없을 때 쓰는 일반 기후 프로파일 (미국 중부 평균 수준).
pub const GENERIC_CLIMATE: ClimateProfile = ClimateProfile {
    heating_degree_days_f: 4500.0,
    cooling_degree_days_f: 1300.0,
    design_temp_f: 15.0,
};

/// 도일 및 설계온도의 단위 체계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClimateUnits {
    /// 기준 65°F 화씨 도일, °F 설계온도
    #[default]
    Imperial,
    /// 기준 18°C 섭씨 도일, °C 설계온도
    Metric,
}

/// 위치 정보. 위치 조회기가 제공하며 엔진은 읽기만 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub heating_degree_days: Option<f64>,
    pub cooling_degree_days: Option<f64>,
    /// 99% 난방 설계 외기온도
    pub design_temp: Option<f64>,
    /// 지역 평균 전기 요금 [$/kWh]
    pub electricity_rate: Option<f64>,
    pub units: ClimateUnits,
}

/// 화씨 기준으로 정규화된 기후 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateProfile {
    pub heating_degree_days_f: f64,
    pub cooling_degree_days_f: f64,
    pub design_temp_f: f64,
}

impl Location {
    /// 화씨 기준 기후 값으로 정규화한다. 빠진 항목은 일반 기후 값으로 채운다.
    pub fn climate(&self) -> ClimateProfile {
        let diff_unit = match self.units {
            ClimateUnits::Imperial => TemperatureDiffUnit::Fahrenheit,
            ClimateUnits::Metric => TemperatureDiffUnit::Celsius,
        };
        let temp_unit = match self.units {
            ClimateUnits::Imperial => TemperatureUnit::Fahrenheit,
            ClimateUnits::Metric => TemperatureUnit::Celsius,
        };
        let to_f_days =
            |dd: f64| convert_temperature_diff(dd, diff_unit, TemperatureDiffUnit::Fahrenheit);
        ClimateProfile {
            heating_degree_days_f: valid_degree_days(self.heating_degree_days)
                .map(to_f_days)
                .unwrap_or(GENERIC_CLIMATE.heating_degree_days_f),
            cooling_degree_days_f: valid_degree_days(self.cooling_degree_days)
                .map(to_f_days)
                .unwrap_or(GENERIC_CLIMATE.cooling_degree_days_f),
            design_temp_f: self
                .design_temp
                .filter(|t| t.is_finite())
                .map(|t| convert_temperature(t, temp_unit, TemperatureUnit::Fahrenheit))
                .unwrap_or(GENERIC_CLIMATE.design_temp_f),
        }
    }

    /// 도일 값이 하나라도 주어졌는지 여부.
    pub fn has_degree_days(&self) -> bool {
        valid_degree_days(self.heating_degree_days).is_some()
            || valid_degree_days(self.cooling_degree_days).is_some()
    }
}

fn valid_degree_days(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

#[derive(Debug)]
pub struct CityClimate {
    pub name: &'static str,
    pub state: &'static str,
    pub heating_degree_days_f: f64,
    pub cooling_degree_days_f: f64,
    pub design_temp_f: f64,
    pub electricity_rate: f64,
}

impl CityClimate {
    const fn new(
        name: &'static str,
        state: &'static str,
        hdd: f64,
        cdd: f64,
        design_temp_f: f64,
        electricity_rate: f64,
    ) -> Self {
        Self {
            name,
            state,
            heating_degree_days_f: hdd,
            cooling_degree_days_f: cdd,
            design_temp_f,
            electricity_rate,
        }
    }

    pub fn to_location(&self) -> Location {
        Location {
            city: Some(self.name.to_string()),
            state: Some(self.state.to_string()),
            heating_degree_days: Some(self.heating_degree_days_f),
            cooling_degree_days: Some(self.cooling_degree_days_f),
            design_temp: Some(self.design_temp_f),
            electricity_rate: Some(self.electricity_rate),
            units: ClimateUnits::Imperial,
        }
    }
}

pub fn cities() -> &'static [CityClimate] {
    CITIES
}

/// 도시 이름(또는 "도시, 주")으로 기후표를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_city(query: &str) -> Option<&'static CityClimate> {
    let mut parts = query.split(',').map(str::trim);
    let name = parts.next()?;
    let state = parts.next();
    CITIES.iter().find(|c| {
        c.name.eq_ignore_ascii_case(name)
            && state.map_or(true, |s| s.is_empty() || c.state.eq_ignore_ascii_case(s))
    })
}

static CITIES: &[CityClimate] = &[
    CityClimate::new("Atlanta", "GA", 2700.0, 1900.0, 23.0, 0.14),
    CityClimate::new("Boston", "MA", 5600.0, 800.0, 9.0, 0.28),
    CityClimate::new("Chicago", "IL", 6200.0, 900.0, -1.0, 0.16),
    CityClimate::new("Dallas", "TX", 2200.0, 2900.0, 24.0, 0.14),
    CityClimate::new("Denver", "CO", 6000.0, 800.0, 3.0, 0.15),
    CityClimate::new("Miami", "FL", 130.0, 4500.0, 49.0, 0.15),
    CityClimate::new("Minneapolis", "MN", 7600.0, 750.0, -11.0, 0.15),
    CityClimate::new("Nashville", "TN", 3600.0, 1700.0, 16.0, 0.13),
    CityClimate::new("Phoenix", "AZ", 950.0, 4600.0, 37.0, 0.14),
    CityClimate::new("Portland", "OR", 4200.0, 400.0, 24.0, 0.13),
    CityClimate::new("Raleigh", "NC", 3200.0, 1600.0, 20.0, 0.13),
    CityClimate::new("Seattle", "WA", 4600.0, 250.0, 26.0, 0.12),
];
