use serde::{Deserialize, Serialize};

/// 개선 항목 종류. 알 수 없는 값은 `Other`로 읽는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeKind {
    Insulation,
    AirSealing,
    DuctSealing,
    Windows,
    HeatPump,
    Thermostat,
    Labor,
    #[serde(other)]
    Other,
}

/// 단일 개선 항목.
///
/// 선택 필드가 없으면 해당 설정값을 바꾸지 않는다. 정의되지 않은 필드는 무시한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeSpec {
    #[serde(rename = "type")]
    pub kind: UpgradeKind,
    #[serde(default)]
    pub name: String,
    /// 설치 비용
    #[serde(default)]
    pub cost: f64,
    /// 단열 계수에 곱해지는 값
    pub insulation_factor: Option<f64>,
    /// 열손실 배율에 곱해지는 값
    pub heat_loss_factor: Option<f64>,
    /// 교체 후 HSPF2 (덮어쓰기)
    pub hspf2: Option<f64>,
    /// 교체 후 SEER2 (덮어쓰기). `efficiency`로도 읽는다.
    #[serde(alias = "efficiency")]
    pub seer2: Option<f64>,
    /// 외피 형상 계수에 곱해지는 값
    pub home_shape: Option<f64>,
    /// 난방 설정온도에 더하고 냉방 설정온도에서 빼는 값 [°F]
    pub temp_adjust: Option<f64>,
}

impl UpgradeSpec {
    /// 효과 필드가 없는 비용 전용 항목을 만든다.
    pub fn new(kind: UpgradeKind, name: impl Into<String>, cost: f64) -> Self {
        Self {
            kind,
            name: name.into(),
            cost,
            insulation_factor: None,
            heat_loss_factor: None,
            hspf2: None,
            seer2: None,
            home_shape: None,
            temp_adjust: None,
        }
    }

    pub fn insulation_factor(mut self, factor: f64) -> Self {
        self.insulation_factor = Some(factor);
        self
    }

    pub fn heat_loss_factor(mut self, factor: f64) -> Self {
        self.heat_loss_factor = Some(factor);
        self
    }

    pub fn hspf2(mut self, hspf2: f64) -> Self {
        self.hspf2 = Some(hspf2);
        self
    }

    pub fn seer2(mut self, seer2: f64) -> Self {
        self.seer2 = Some(seer2);
        self
    }

    pub fn home_shape(mut self, factor: f64) -> Self {
        self.home_shape = Some(factor);
        self
    }

    pub fn temp_adjust(mut self, delta_f: f64) -> Self {
        self.temp_adjust = Some(delta_f);
        self
    }
}

/// 이름이 붙은 개선 묶음(번들).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeBundle {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub total_cost: f64,
    pub upgrades: Vec<UpgradeSpec>,
}

impl UpgradeBundle {
    /// 항목 비용 합계로 총비용을 정하는 사용자 정의 번들을 만든다.
    pub fn custom(upgrades: Vec<UpgradeSpec>) -> Self {
        let total_cost = upgrades.iter().map(|u| u.cost.max(0.0)).sum();
        Self {
            key: "custom".to_string(),
            name: "Custom".to_string(),
            description: String::new(),
            total_cost,
            upgrades,
        }
    }
}

/// TOML 파일에서 읽는 개선 항목 목록 (`[[upgrades]]` 배열).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradePlan {
    #[serde(default)]
    pub upgrades: Vec<UpgradeSpec>,
}
