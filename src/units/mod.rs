//! 열부하 계산에 쓰이는 단위 정의 및 변환.

pub mod energy;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
