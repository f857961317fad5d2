//! 개선 항목 적용, 번들 카탈로그, 경제성 비교.

pub mod bundle_impact;
pub mod catalog;
pub mod comparator;
pub mod spec;

pub use bundle_impact::{calculate_bundle_impact, envelope_factors_masked};
pub use catalog::{catalog, find_bundle};
pub use comparator::{
    analyze_upgrades, evaluate_bundles, BundleComparator, BundleEvaluation, UpgradeAnalysis,
};
pub use spec::{UpgradeBundle, UpgradeKind, UpgradePlan, UpgradeSpec};
