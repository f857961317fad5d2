use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::economics::{roi_percent, RoiResult};
use crate::home::{AnalysisRecord, HomeSettings, Location};
use crate::thermal::efficiency::hspf2_to_cop;
use crate::thermal::AnnualCostEstimate;
use crate::upgrades::{BundleEvaluation, UpgradeAnalysis};

/// 히트펌프 냉난방비 추정 및 개선 투자 비교 도구.
#[derive(Debug, Parser)]
#[command(name = "heatpump_cost_toolbox", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

/// 서브 명령.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 현재 설정 기준 연간 냉난방비 추정
    Estimate,
    /// 카탈로그 번들 순위표
    Bundles {
        /// 순위에 함께 넣을 사용자 개선 목록(TOML, [[upgrades]])
        #[arg(long)]
        custom: Option<PathBuf>,
    },
    /// 임의 개선 목록 또는 번들 하나의 경제성 분석
    Analyze {
        /// 개선 목록 파일(TOML, [[upgrades]])
        #[arg(long, conflicts_with = "bundle")]
        upgrades: Option<PathBuf>,
        /// 카탈로그 번들 키
        #[arg(long)]
        bundle: Option<String>,
        #[arg(long)]
        discount_rate: Option<f64>,
        #[arg(long)]
        years: Option<u32>,
    },
    /// 주택 설정 조회/변경
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// 도시 이름으로 위치(기후) 설정
    Location {
        /// 예: "Denver" 또는 "Portland, OR"
        city: String,
    },
    /// 실측 열손실 계수 기록
    RecordAnalysis {
        /// 열손실 계수 [BTU/hr/°F]
        #[arg(long)]
        heat_loss: f64,
        /// 밸런스 포인트 [°F]
        #[arg(long)]
        balance_point: Option<f64>,
        #[arg(long)]
        source: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    Show,
    Set(SettingsArgs),
}

/// 주어진 항목만 바꾼다.
#[derive(Debug, Args, Default)]
pub struct SettingsArgs {
    #[arg(long)]
    pub square_feet: Option<f64>,
    #[arg(long)]
    pub hspf2: Option<f64>,
    #[arg(long)]
    pub seer2: Option<f64>,
    #[arg(long)]
    pub insulation: Option<f64>,
    #[arg(long)]
    pub home_shape: Option<f64>,
    #[arg(long)]
    pub solar_exposure: Option<f64>,
    #[arg(long)]
    pub winter: Option<f64>,
    #[arg(long)]
    pub summer: Option<f64>,
    /// 전기 요금 [$/kWh]
    #[arg(long)]
    pub rate: Option<f64>,
    #[arg(long)]
    pub city: Option<String>,
}

impl SettingsArgs {
    pub fn apply(&self, settings: &HomeSettings) -> HomeSettings {
        let mut s = settings.clone();
        if let Some(v) = self.square_feet {
            s.square_feet = v;
        }
        if let Some(v) = self.hspf2 {
            s.hspf2 = v;
        }
        if let Some(v) = self.seer2 {
            s.efficiency = v;
        }
        if let Some(v) = self.insulation {
            s.insulation_level = v;
        }
        if let Some(v) = self.home_shape {
            s.home_shape = v;
        }
        if let Some(v) = self.solar_exposure {
            s.solar_exposure = v;
        }
        if let Some(v) = self.winter {
            s.winter_thermostat = v;
        }
        if let Some(v) = self.summer {
            s.summer_thermostat = v;
        }
        if let Some(v) = self.rate {
            s.utility_cost = Some(v);
        }
        if let Some(city) = &self.city {
            s.city = Some(city.clone());
        }
        s
    }
}

pub fn print_settings(settings: &HomeSettings) {
    println!("\n-- 주택 설정 --");
    println!("연면적: {:.0} ft²", settings.square_feet);
    println!(
        "HSPF2: {:.1} (계절 COP {:.2}), SEER2: {:.1}",
        settings.hspf2,
        hspf2_to_cop(settings.hspf2),
        settings.efficiency
    );
    println!(
        "단열 {:.3}, 형상 {:.3}, 일사 {:.3}, 열손실 배율 {:.3}",
        settings.insulation_level,
        settings.home_shape,
        settings.solar_exposure,
        settings.heat_loss_multiplier
    );
    println!(
        "설정온도: 난방 {:.0}°F / 냉방 {:.0}°F",
        settings.winter_thermostat, settings.summer_thermostat
    );
    match settings.utility_cost {
        Some(rate) => println!("전기 요금: {rate:.3} $/kWh"),
        None => println!("전기 요금: 지역/기본값 사용"),
    }
    if let Some(city) = &settings.city {
        println!("도시: {city}");
    }
}

pub fn print_location(location: Option<&Location>) {
    match location {
        Some(loc) => {
            let climate = loc.climate();
            println!(
                "위치: {} (HDD {:.0}, CDD {:.0}, 설계온도 {:.0}°F)",
                loc.city.as_deref().unwrap_or("-"),
                climate.heating_degree_days_f,
                climate.cooling_degree_days_f,
                climate.design_temp_f
            );
        }
        None => println!("위치: 미설정 (일반 기후 프로파일 사용)"),
    }
}

pub fn print_analysis(analysis: Option<&AnalysisRecord>) {
    if let Some(heat_loss) = analysis.and_then(AnalysisRecord::measured_heat_loss) {
        println!("실측 열손실 계수: {heat_loss:.0} BTU/hr/°F (추정 외피 계수 대신 사용)");
    }
}

pub fn print_estimate(cfg: &Config, estimate: Option<&AnnualCostEstimate>) {
    let cur = &cfg.currency_symbol;
    match estimate {
        Some(e) => {
            println!("\n-- 연간 냉난방비 추정 --");
            println!("난방: {cur}{:.0}", e.heating());
            println!("냉방: {cur}{:.0}", e.cooling());
            println!("합계: {cur}{:.0}", e.total());
        }
        None => print_setup_required(),
    }
}

pub fn print_setup_required() {
    println!("\n추정에 필요한 정보가 부족합니다. 연면적을 설정하거나 실측 분석을 기록하세요.");
    println!("예: heatpump_cost_toolbox settings set --square-feet 1800");
}

pub fn print_bundle_table(cfg: &Config, evaluations: &[BundleEvaluation]) {
    if evaluations.is_empty() {
        print_setup_required();
        return;
    }
    let cur = &cfg.currency_symbol;
    println!("\n-- 개선 번들 비교 (10년, 할인율 5%) --");
    println!(
        "{:<3} {:<10} {:>10} {:>10} {:>8} {:>10} {:>10} {:>7}",
        "#", "번들", "투자비", "연절감", "회수", "NPV", "10년수익", "ROI%"
    );
    for (rank, ev) in evaluations.iter().enumerate() {
        println!(
            "{:<3} {:<10} {:>10} {:>10} {:>8} {:>10} {:>10} {:>6.0}%",
            rank + 1,
            ev.bundle.name,
            format!("{cur}{:.0}", ev.bundle.total_cost),
            format!("{cur}{:.0}", ev.annual_savings),
            payback_label(&ev.roi()),
            format!("{cur}{:.0}", ev.npv),
            format!("{cur}{:.0}", ev.roi10),
            roi_percent(ev.roi10, ev.bundle.total_cost)
        );
    }
}

pub fn print_upgrade_analysis(
    cfg: &Config,
    analysis: Option<&UpgradeAnalysis>,
    horizon_years: u32,
    discount_rate: f64,
) {
    let Some(a) = analysis else {
        print_setup_required();
        return;
    };
    let cur = &cfg.currency_symbol;
    println!(
        "\n-- 개선 분석 ({horizon_years}년, 할인율 {:.1}%) --",
        discount_rate * 100.0
    );
    println!("투자비: {cur}{:.0}", a.total_cost);
    println!(
        "연간 비용: {cur}{:.0} -> {cur}{:.0}",
        a.baseline.total(),
        a.upgraded.total()
    );
    println!("연간 절감: {cur}{:.0}", a.annual_savings);
    println!("회수기간: {}", payback_label(&a.roi));
    println!("NPV: {cur}{:.0}", a.roi.npv);
    println!(
        "단순 수익: {cur}{:.0} ({:.0}%)",
        a.roi.roi10,
        roi_percent(a.roi.roi10, a.total_cost)
    );
}

pub fn print_measured_envelope_note() {
    println!("\n참고: 실측 열손실 계수를 사용 중이므로 단열/형상 개선 효과는 절감액에 반영되지 않습니다.");
    println!("개선 공사 후 실측 분석을 다시 기록하면 결과가 갱신됩니다.");
}

fn payback_label(roi: &RoiResult) -> String {
    match roi.payback_label_years() {
        Some(years) => format!("{years:.1}년"),
        None => "N/A".to_string(),
    }
}
