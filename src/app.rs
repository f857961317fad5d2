use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::home::AnalysisRecord;
use crate::store::{
    load_inputs, AnalysisStore, BuiltinClimateResolver, EngineInputs, LocationResolver,
    ProfileFile, SettingsStore, StoreError,
};
use crate::thermal::estimate_annual_cost;
use crate::ui_cli::{self, Cli, Command, SettingsAction};
use crate::upgrades::{
    analyze_upgrades, envelope_factors_masked, find_bundle, BundleComparator, UpgradeBundle,
    UpgradePlan,
};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("저장소 오류: {0}")]
    Store(#[from] StoreError),
    #[error("개선 목록 파싱 오류: {0}")]
    UpgradePlan(#[from] toml::de::Error),
    #[error("알 수 없는 번들: {0}")]
    UnknownBundle(String),
    #[error("알 수 없는 도시: {0}")]
    UnknownCity(String),
    #[error("입력 오류: {0}")]
    InvalidArgument(&'static str),
}

/// 명령 하나를 실행한다.
pub fn run(cli: Cli, config: &Config) -> Result<(), AppError> {
    let mut profile = ProfileFile::new(&config.profile_path);
    match cli.command {
        Command::Estimate => {
            let inputs = resolve_inputs(&profile);
            ui_cli::print_location(inputs.location.as_ref());
            ui_cli::print_analysis(inputs.analysis.as_ref());
            let estimate = estimate_annual_cost(
                &inputs.settings,
                inputs.location.as_ref(),
                inputs.analysis.as_ref(),
            );
            ui_cli::print_estimate(config, estimate.as_ref());
        }
        Command::Bundles { custom } => {
            let inputs = resolve_inputs(&profile);
            let custom = match custom {
                Some(path) => Some(UpgradeBundle::custom(read_plan(&path)?.upgrades)),
                None => None,
            };
            let mut comparator = BundleComparator::default();
            let evaluations = comparator.evaluations(
                &inputs.settings,
                inputs.location.as_ref(),
                inputs.analysis.as_ref(),
                custom.as_ref(),
            );
            ui_cli::print_bundle_table(config, evaluations);
            let masked = evaluations.iter().any(|ev| {
                envelope_factors_masked(inputs.analysis.as_ref(), &ev.bundle.upgrades)
            });
            if masked {
                ui_cli::print_measured_envelope_note();
            }
        }
        Command::Analyze {
            upgrades,
            bundle,
            discount_rate,
            years,
        } => {
            let specs = match (upgrades, bundle) {
                (Some(path), _) => read_plan(&path)?.upgrades,
                (None, Some(key)) => {
                    find_bundle(&key)
                        .ok_or_else(|| AppError::UnknownBundle(key.clone()))?
                        .upgrades
                }
                (None, None) => {
                    return Err(AppError::InvalidArgument(
                        "--upgrades 또는 --bundle 중 하나가 필요합니다.",
                    ))
                }
            };
            let discount_rate = discount_rate.unwrap_or(config.analyzer_discount_rate);
            let years = years.unwrap_or(config.analyzer_horizon_years);
            if years == 0 {
                return Err(AppError::InvalidArgument("분석 기간은 1년 이상이어야 합니다."));
            }
            let inputs = resolve_inputs(&profile);
            let analysis = analyze_upgrades(
                &inputs.settings,
                inputs.location.as_ref(),
                inputs.analysis.as_ref(),
                &specs,
                years,
                discount_rate,
            );
            ui_cli::print_upgrade_analysis(config, analysis.as_ref(), years, discount_rate);
            if envelope_factors_masked(inputs.analysis.as_ref(), &specs) {
                ui_cli::print_measured_envelope_note();
            }
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let inputs = resolve_inputs(&profile);
                ui_cli::print_settings(&inputs.settings);
                ui_cli::print_location(inputs.location.as_ref());
                ui_cli::print_analysis(inputs.analysis.as_ref());
            }
            SettingsAction::Set(args) => {
                let updated = args.apply(&profile.load_settings()?);
                profile.save_settings(&updated)?;
                info!(path = %profile.path().display(), "settings saved");
                ui_cli::print_settings(&updated);
            }
        },
        Command::Location { city } => {
            let location = BuiltinClimateResolver
                .resolve(&city)
                .ok_or_else(|| AppError::UnknownCity(city.clone()))?;
            profile.save_location(&location)?;
            info!(city = %city, "location saved");
            ui_cli::print_location(Some(&location));
        }
        Command::RecordAnalysis {
            heat_loss,
            balance_point,
            source,
        } => {
            if !(heat_loss.is_finite() && heat_loss > 0.0) {
                return Err(AppError::InvalidArgument("열손실 계수는 0보다 커야 합니다."));
            }
            profile.record_analysis(AnalysisRecord {
                heat_loss_factor: Some(heat_loss),
                balance_point,
                source,
            })?;
            info!(heat_loss, "analysis recorded");
        }
    }
    Ok(())
}

/// 프로필에서 입력을 읽고, 저장된 위치가 없으면 설정의 도시로 기후를 찾는다.
fn resolve_inputs(profile: &ProfileFile) -> EngineInputs {
    let stored = profile.load_location().unwrap_or_else(|err| {
        warn!(%err, "stored location unreadable");
        None
    });
    let mut inputs = load_inputs(profile, stored);
    if inputs.location.is_none() {
        inputs.location = inputs
            .settings
            .city
            .as_deref()
            .and_then(|city| BuiltinClimateResolver.resolve(city));
    }
    inputs
}

fn read_plan(path: &Path) -> Result<UpgradePlan, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
