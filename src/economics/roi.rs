use serde::Serialize;
use tracing::debug;

/// 이 값 이상의 회수기간은 "회수 불가"로 표시한다 [년]
pub const PAYBACK_CUTOFF_YEARS: f64 = 100.0;
/// 할인율 상한
pub const MAX_DISCOUNT_RATE: f64 = 0.99;

/// 투자 경제성 결과. 금액은 모두 요금과 같은 통화 단위이며 반올림하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    /// 단순 회수기간 [년]. 절감액이 없으면 무한대.
    pub payback: f64,
    /// 순현재가치(NPV)
    pub npv: f64,
    /// 분석 기간 단순 수익 `기간 × 절감액 - 투자비` (퍼센트 아님)
    pub roi10: f64,
}

impl RoiResult {
    /// 표시용 회수기간. 회수 불가(≥ 100년)면 `None`.
    pub fn payback_label_years(&self) -> Option<f64> {
        (self.payback < PAYBACK_CUTOFF_YEARS).then_some(self.payback)
    }
}

/// 투자비와 연간 절감액으로 회수기간, NPV, 단순 수익을 계산한다.
///
/// 음수/비유한 투자비와 절감액은 0으로, 할인율은 `[0, 0.99]`로 보정한다.
pub fn compute_roi(
    cost: f64,
    annual_savings: f64,
    horizon_years: u32,
    discount_rate: f64,
) -> RoiResult {
    let cost = non_negative(cost);
    let annual_savings = non_negative(annual_savings);
    let discount_rate = if discount_rate.is_finite() {
        discount_rate.clamp(0.0, MAX_DISCOUNT_RATE)
    } else {
        0.0
    };

    let payback = if annual_savings > 0.0 {
        cost / annual_savings
    } else {
        f64::INFINITY
    };
    let mut npv = -cost;
    for year in 1..=horizon_years {
        let df = (1.0 + discount_rate).powi(year as i32);
        npv += annual_savings / df;
    }
    let roi10 = f64::from(horizon_years) * annual_savings - cost;

    debug!(cost, annual_savings, horizon_years, discount_rate, payback, npv, roi10, "roi computed");
    RoiResult {
        payback,
        npv,
        roi10,
    }
}

/// 단순 수익을 투자비 대비 퍼센트로 바꾼다. 투자비가 0이면 0.
pub fn roi_percent(roi10: f64, cost: f64) -> f64 {
    if cost > 0.0 && roi10.is_finite() {
        roi10 / cost * 100.0
    } else {
        0.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
