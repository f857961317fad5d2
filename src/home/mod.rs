//! 주택 설정, 위치/기후, 실측 분석 데이터.

pub mod analysis;
pub mod location;
pub mod settings;

pub use analysis::AnalysisRecord;
pub use location::{ClimateProfile, ClimateUnits, Location};
pub use settings::{HomeSettings, PrimarySystem};
