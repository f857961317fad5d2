use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 BTU이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Btu,
    WattHour,
    KilowattHour,
}

/// 1 kWh 당 BTU.
pub const BTU_PER_KWH: f64 = 3412.14;

fn to_btu(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Btu => value,
        EnergyUnit::WattHour => value * BTU_PER_KWH / 1000.0,
        EnergyUnit::KilowattHour => value * BTU_PER_KWH,
    }
}

fn from_btu(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Btu => value,
        EnergyUnit::WattHour => value * 1000.0 / BTU_PER_KWH,
        EnergyUnit::KilowattHour => value / BTU_PER_KWH,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let btu = to_btu(value, from);
    from_btu(btu, to)
}
