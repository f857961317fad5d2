use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::upgrades::catalog::{CATALOG_DISCOUNT_RATE, CATALOG_HORIZON_YEARS};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 주택 프로필(설정/위치/분석 이력) 파일 경로
    pub profile_path: PathBuf,
    /// 임의 개선 분석의 기본 할인율
    pub analyzer_discount_rate: f64,
    /// 임의 개선 분석의 기본 기간 [년]
    pub analyzer_horizon_years: u32,
    /// 금액 표시 기호
    pub currency_symbol: String,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from("home_profile.toml"),
            analyzer_discount_rate: CATALOG_DISCOUNT_RATE,
            analyzer_horizon_years: CATALOG_HORIZON_YEARS,
            currency_symbol: "$".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
