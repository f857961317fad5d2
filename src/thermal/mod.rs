//! 도일 기반 연간 냉난방 비용 모델.

pub mod annual_cost;
pub mod efficiency;

pub use annual_cost::{electricity_rate, estimate_annual_cost, AnnualCostEstimate};
