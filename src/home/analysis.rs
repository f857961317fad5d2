use serde::{Deserialize, Serialize};

/// 과거 운전 데이터(CSV 업로드 등) 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// 실측 열손실 계수 [BTU/hr/°F]
    pub heat_loss_factor: Option<f64>,
    /// 실측 밸런스 포인트 [°F]
    pub balance_point: Option<f64>,
    /// 분석 원본 표시 (파일명 등)
    pub source: Option<String>,
}

impl AnalysisRecord {
    /// 계산에 쓸 수 있는 실측 열손실 계수. 0 이하/비유한 값은 무시한다.
    pub fn measured_heat_loss(&self) -> Option<f64> {
        self.heat_loss_factor.filter(|v| v.is_finite() && *v > 0.0)
    }
}
