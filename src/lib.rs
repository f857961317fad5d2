//! 핵심 계산 로직(냉난방비 모델, 경제성, 개선 번들)을 라이브러리로 분리하여
//! CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod economics;
pub mod home;
pub mod store;
pub mod telemetry;
pub mod thermal;
pub mod ui_cli;
pub mod units;
pub mod upgrades;
