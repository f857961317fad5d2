//! 설정/위치/분석 데이터의 외부 저장소 경계.
//!
//! 엔진은 순수 함수이므로 저장 매체는 여기의 트레이트 뒤에 숨긴다.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::home::location::find_city;
use crate::home::{AnalysisRecord, HomeSettings, Location};

/// 저장소 입출력 오류.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("프로필 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("프로필 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 주택 설정 저장소.
pub trait SettingsStore {
    fn load_settings(&self) -> Result<HomeSettings, StoreError>;
    fn save_settings(&mut self, settings: &HomeSettings) -> Result<(), StoreError>;
}

/// 실측 분석 결과 저장소.
pub trait AnalysisStore {
    /// 가장 최근 분석 결과. 없으면 `None`.
    fn latest_analysis(&self) -> Result<Option<AnalysisRecord>, StoreError>;
    fn record_analysis(&mut self, record: AnalysisRecord) -> Result<(), StoreError>;
}

/// 주소/도시 이름을 기후 데이터로 바꾸는 조회기.
pub trait LocationResolver {
    fn resolve(&self, query: &str) -> Option<Location>;
}

/// 내장 도시 기후표를 쓰는 조회기.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinClimateResolver;

impl LocationResolver for BuiltinClimateResolver {
    fn resolve(&self, query: &str) -> Option<Location> {
        let found = find_city(query).map(|c| c.to_location());
        if found.is_none() {
            debug!(query, "city not in builtin climate table");
        }
        found
    }
}

/// 메모리 저장소. 테스트와 임시 계산용.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub settings: HomeSettings,
    pub analyses: Vec<AnalysisRecord>,
}

impl SettingsStore for MemoryStore {
    fn load_settings(&self) -> Result<HomeSettings, StoreError> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: &HomeSettings) -> Result<(), StoreError> {
        self.settings = settings.clone();
        Ok(())
    }
}

impl AnalysisStore for MemoryStore {
    fn latest_analysis(&self) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.analyses.last().cloned())
    }

    fn record_analysis(&mut self, record: AnalysisRecord) -> Result<(), StoreError> {
        self.analyses.push(record);
        Ok(())
    }
}

/// 프로필 파일에 저장되는 내용.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeProfile {
    pub settings: HomeSettings,
    pub location: Option<Location>,
    pub analyses: Vec<AnalysisRecord>,
}

/// TOML 파일 하나에 설정, 위치, 분석 이력을 저장한다.
#[derive(Debug, Clone)]
pub struct ProfileFile {
    path: PathBuf,
}

impl ProfileFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 파일이 없으면 빈 프로필을 돌려준다.
    pub fn load(&self) -> Result<HomeProfile, StoreError> {
        if !self.path.exists() {
            return Ok(HomeProfile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, profile: &HomeProfile) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(profile)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn load_location(&self) -> Result<Option<Location>, StoreError> {
        Ok(self.load()?.location)
    }

    pub fn save_location(&mut self, location: &Location) -> Result<(), StoreError> {
        let mut profile = self.load()?;
        profile.location = Some(location.clone());
        self.save(&profile)
    }
}

impl SettingsStore for ProfileFile {
    fn load_settings(&self) -> Result<HomeSettings, StoreError> {
        Ok(self.load()?.settings)
    }

    fn save_settings(&mut self, settings: &HomeSettings) -> Result<(), StoreError> {
        let mut profile = self.load()?;
        profile.settings = settings.clone();
        self.save(&profile)
    }
}

impl AnalysisStore for ProfileFile {
    fn latest_analysis(&self) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.load()?.analyses.pop())
    }

    fn record_analysis(&mut self, record: AnalysisRecord) -> Result<(), StoreError> {
        let mut profile = self.load()?;
        profile.analyses.push(record);
        self.save(&profile)
    }
}

/// 엔진 한 번 호출에 필요한 입력 묶음.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineInputs {
    pub settings: HomeSettings,
    pub location: Option<Location>,
    pub analysis: Option<AnalysisRecord>,
}

/// 저장소에서 입력을 읽는다. 읽기 실패는 기본값으로 대체하고 경고만 남긴다.
pub fn load_inputs<S>(store: &S, location: Option<Location>) -> EngineInputs
where
    S: SettingsStore + AnalysisStore,
{
    let settings = store.load_settings().unwrap_or_else(|err| {
        warn!(%err, "settings store read failed, using defaults");
        HomeSettings::default()
    });
    let analysis = store.latest_analysis().unwrap_or_else(|err| {
        warn!(%err, "analysis store read failed, ignoring measured data");
        None
    });
    EngineInputs {
        settings,
        location,
        analysis,
    }
}
