use serde::Serialize;
use tracing::{debug, info, warn};

use crate::economics::{compute_roi, RoiResult};
use crate::home::{AnalysisRecord, HomeSettings, Location};
use crate::thermal::{estimate_annual_cost, AnnualCostEstimate};
use crate::upgrades::bundle_impact::calculate_bundle_impact;
use crate::upgrades::catalog::{catalog, CATALOG_DISCOUNT_RATE, CATALOG_HORIZON_YEARS};
use crate::upgrades::spec::{UpgradeBundle, UpgradeSpec};

/// 번들 하나의 평가 결과. 저장하지 않고 입력이 바뀔 때마다 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEvaluation {
    pub bundle_key: String,
    pub bundle: UpgradeBundle,
    pub annual_savings: f64,
    pub payback: f64,
    pub npv: f64,
    pub roi10: f64,
    /// 개선 후 연간 비용 합계
    pub upgraded_cost: f64,
    /// 현재 연간 비용 합계
    pub baseline_cost: f64,
}

impl BundleEvaluation {
    pub fn roi(&self) -> RoiResult {
        RoiResult {
            payback: self.payback,
            npv: self.npv,
            roi10: self.roi10,
        }
    }
}

/// 임의 개선 목록 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeAnalysis {
    pub total_cost: f64,
    pub baseline: AnnualCostEstimate,
    pub upgraded: AnnualCostEstimate,
    pub upgraded_settings: HomeSettings,
    pub annual_savings: f64,
    pub roi: RoiResult,
}

/// 개선 목록을 적용했을 때의 비용 변화와 경제성을 계산한다.
///
/// 투자비는 항목 비용 합계이다. 현재 비용을 추정할 수 없으면 `None`.
pub fn analyze_upgrades(
    settings: &HomeSettings,
    location: Option<&Location>,
    analysis: Option<&AnalysisRecord>,
    upgrades: &[UpgradeSpec],
    horizon_years: u32,
    discount_rate: f64,
) -> Option<UpgradeAnalysis> {
    let baseline = estimate_annual_cost(settings, location, analysis)?;
    let upgraded_settings = calculate_bundle_impact(settings, upgrades);
    let upgraded = estimate_annual_cost(&upgraded_settings, location, analysis)?;
    let total_cost = upgrades.iter().map(|u| u.cost.max(0.0)).sum();
    let annual_savings = (baseline.total() - upgraded.total()).max(0.0);
    let roi = compute_roi(total_cost, annual_savings, horizon_years, discount_rate);
    Some(UpgradeAnalysis {
        total_cost,
        baseline,
        upgraded,
        upgraded_settings,
        annual_savings,
        roi,
    })
}

/// 번들 목록을 평가하고 `roi10` 내림차순으로 정렬한다. 동률은 입력 순서를 유지한다.
///
/// 현재 비용을 추정할 수 없으면 빈 목록을 돌려준다.
pub fn evaluate_bundles(
    settings: &HomeSettings,
    location: Option<&Location>,
    analysis: Option<&AnalysisRecord>,
    bundles: &[UpgradeBundle],
) -> Vec<BundleEvaluation> {
    let Some(baseline) = estimate_annual_cost(settings, location, analysis) else {
        info!("baseline cost unavailable, skipping bundle evaluation");
        return Vec::new();
    };

    let mut evaluations: Vec<BundleEvaluation> = bundles
        .iter()
        .filter_map(|bundle| evaluate_bundle(settings, location, analysis, &baseline, bundle))
        .collect();
    // sort_by는 안정 정렬
    evaluations.sort_by(|a, b| b.roi10.total_cmp(&a.roi10));
    evaluations
}

fn evaluate_bundle(
    settings: &HomeSettings,
    location: Option<&Location>,
    analysis: Option<&AnalysisRecord>,
    baseline: &AnnualCostEstimate,
    bundle: &UpgradeBundle,
) -> Option<BundleEvaluation> {
    let upgraded_settings = calculate_bundle_impact(settings, &bundle.upgrades);
    let Some(upgraded) = estimate_annual_cost(&upgraded_settings, location, analysis) else {
        warn!(bundle = %bundle.key, "upgraded cost unavailable, bundle left out of ranking");
        return None;
    };
    let annual_savings = (baseline.total() - upgraded.total()).max(0.0);
    let roi = compute_roi(
        bundle.total_cost,
        annual_savings,
        CATALOG_HORIZON_YEARS,
        CATALOG_DISCOUNT_RATE,
    );
    debug!(bundle = %bundle.key, annual_savings, roi10 = roi.roi10, "bundle evaluated");
    Some(BundleEvaluation {
        bundle_key: bundle.key.clone(),
        bundle: bundle.clone(),
        annual_savings,
        payback: roi.payback,
        npv: roi.npv,
        roi10: roi.roi10,
        upgraded_cost: upgraded.total(),
        baseline_cost: baseline.total(),
    })
}

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    settings: HomeSettings,
    location: Option<Location>,
    analysis: Option<AnalysisRecord>,
    custom: Option<UpgradeBundle>,
}

/// 카탈로그 비교기. 마지막 입력과 값이 같으면 이전 결과를 재사용한다.
#[derive(Debug, Clone)]
pub struct BundleComparator {
    bundles: Vec<UpgradeBundle>,
    cache: Option<(CacheKey, Vec<BundleEvaluation>)>,
}

impl Default for BundleComparator {
    fn default() -> Self {
        Self::new(catalog())
    }
}

impl BundleComparator {
    pub fn new(bundles: Vec<UpgradeBundle>) -> Self {
        Self {
            bundles,
            cache: None,
        }
    }

    /// 카탈로그 번들(과 선택적 사용자 번들)의 순위표를 돌려준다.
    pub fn evaluations(
        &mut self,
        settings: &HomeSettings,
        location: Option<&Location>,
        analysis: Option<&AnalysisRecord>,
        custom: Option<&UpgradeBundle>,
    ) -> &[BundleEvaluation] {
        let key = CacheKey {
            settings: settings.clone(),
            location: location.cloned(),
            analysis: analysis.cloned(),
            custom: custom.cloned(),
        };
        let fresh = matches!(&self.cache, Some((cached, _)) if *cached == key);
        if !fresh {
            let mut bundles = self.bundles.clone();
            bundles.extend(custom.cloned());
            let evaluations = evaluate_bundles(settings, location, analysis, &bundles);
            self.cache = Some((key, evaluations));
        } else {
            debug!("bundle evaluations reused from cache");
        }
        match &self.cache {
            Some((_, evaluations)) => evaluations.as_slice(),
            None => &[],
        }
    }

    /// 캐시가 채워져 있는지 여부.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }
}
