//! # Match Configuration
//!
//! 경기 한 판을 구성하는 모든 설정. YAML/JSON 로드 후 항상 `validate()`를 거친다.
//!
//! ## 사용법
//! ```rust
//! use match_core::engine::config::MatchConfig;
//!
//! let config = MatchConfig::default();
//! let short = MatchConfig::quick(60.0);
//! assert!(short.max_game_time < config.max_game_time);
//! ```

mod decision_config;
mod dribble_profile;
mod stamina_config;

pub use decision_config::DecisionConfig;
pub use dribble_profile::{DribbleBand, DribbleProfile, MAX_DRIBBLE_DISTANCE_M};
pub use stamina_config::StaminaConfig;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::coordinates::Pitch;
use super::physics_constants::field;
use super::player::{Role, Team};
use super::timestep::DEFAULT_DT;
use crate::error::{Result, SimError};

/// toy = synthetic value field, empirical = 외부 데이터 로드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RealismLevel {
    #[default]
    Toy,
    Empirical,
}

impl RealismLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RealismLevel::Toy => "toy",
            RealismLevel::Empirical => "empirical",
        }
    }
}

/// 포메이션 슬롯 하나 = 선수 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub role: Role,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_accuracy: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dribble_skill: Option<f32>,
}

impl FormationSlot {
    pub fn new(role: Role, x: f32, y: f32) -> Self {
        Self { role, x, y, passing_accuracy: None, dribble_skill: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formations {
    pub team_0: Vec<FormationSlot>,
    pub team_1: Vec<FormationSlot>,
}

impl Default for Formations {
    fn default() -> Self {
        Self::seven_a_side()
    }
}

impl Formations {
    /// 1-2-3-1, 34×52 pitch 기준
    pub fn seven_a_side() -> Self {
        use Role::*;
        let team_0 = vec![
            FormationSlot::new(Goalkeeper, 17.0, 5.0),
            FormationSlot::new(Defender, 10.0, 15.0),
            FormationSlot::new(Defender, 24.0, 15.0),
            FormationSlot::new(Midfielder, 17.0, 25.0),
            FormationSlot::new(Midfielder, 8.0, 30.0),
            FormationSlot::new(Midfielder, 26.0, 30.0),
            FormationSlot::new(Forward, 17.0, 40.0),
        ];
        let team_1 = vec![
            FormationSlot::new(Goalkeeper, 17.0, 47.0),
            FormationSlot::new(Defender, 10.0, 37.0),
            FormationSlot::new(Defender, 24.0, 37.0),
            FormationSlot::new(Midfielder, 17.0, 27.0),
            FormationSlot::new(Midfielder, 8.0, 22.0),
            FormationSlot::new(Midfielder, 26.0, 22.0),
            FormationSlot::new(Forward, 17.0, 12.0),
        ];
        Self { team_0, team_1 }
    }

    pub fn for_team(&self, team: Team) -> &[FormationSlot] {
        match team {
            Team::Zero => &self.team_0,
            Team::One => &self.team_1,
        }
    }

    /// Arena order: team 0 slots, then team 1 slots
    pub fn iter(&self) -> impl Iterator<Item = (Team, &FormationSlot)> {
        self.team_0
            .iter()
            .map(|s| (Team::Zero, s))
            .chain(self.team_1.iter().map(|s| (Team::One, s)))
    }

    pub fn len(&self) -> usize {
        self.team_0.len() + self.team_1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// empirical 모드용 외부 데이터 경로
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub xt_lookup: Option<PathBuf>,
    pub dribble_profile: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            xt_lookup: Some(PathBuf::from("data/xT_lookup.json")),
            dribble_profile: Some(PathBuf::from("data/dribble_duration.json")),
        }
    }
}

/// Value field 해상도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 12, rows: 8 }
    }
}

/// 출력 파일 이름 (CLI가 out-dir 아래에 쓴다)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub csv_output: String,
    pub xes_output: String,
    pub json_output: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            csv_output: "match_log.csv".to_string(),
            xes_output: "match_log.xes".to_string(),
            json_output: "match_log.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub pitch_width: f32,
    pub pitch_length: f32,
    /// tick 길이 (초)
    pub dt: f64,
    /// 최대 경기 시간 (초)
    pub max_game_time: f64,
    /// 소유권 변화 없이 이 tick 수가 지나면 종료
    pub max_ticks_without_change: u64,
    pub realism_level: RealismLevel,
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    pub formations: Formations,
    pub data: DataPaths,
    pub grid: GridConfig,
    pub stamina: StaminaConfig,
    pub decision: DecisionConfig,
    pub logging: LoggingConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pitch_width: field::DEFAULT_WIDTH_M,
            pitch_length: field::DEFAULT_LENGTH_M,
            dt: DEFAULT_DT,
            max_game_time: 900.0,
            max_ticks_without_change: 1200,
            realism_level: RealismLevel::Toy,
            seed: 42,
            match_id: None,
            start_time: None,
            formations: Formations::default(),
            data: DataPaths::default(),
            grid: GridConfig::default(),
            stamina: StaminaConfig::default(),
            decision: DecisionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MatchConfig {
    /// 짧은 경기 (테스트/벤치용)
    pub fn quick(seconds: f64) -> Self {
        Self { max_game_time: seconds, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn pitch(&self) -> Pitch {
        Pitch::new(self.pitch_width, self.pitch_length)
    }

    /// 설정값이 없으면 `match_{seed}`
    pub fn match_id(&self) -> String {
        self.match_id.clone().unwrap_or_else(|| format!("match_{}", self.seed))
    }

    /// 설정값이 없으면 2024-01-01T00:00:00Z
    pub fn start_time_or_default(&self) -> DateTime<Utc> {
        self.start_time.unwrap_or_else(default_start_time)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SimError::InvalidConfig(msg));

        if !(self.pitch_width > 0.0 && self.pitch_width.is_finite()) {
            return invalid(format!("pitch_width must be positive, got {}", self.pitch_width));
        }
        if !(self.pitch_length > 0.0 && self.pitch_length.is_finite()) {
            return invalid(format!("pitch_length must be positive, got {}", self.pitch_length));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return invalid(format!("dt must be positive, got {}", self.dt));
        }
        if !(self.max_game_time > 0.0 && self.max_game_time.is_finite()) {
            return invalid(format!("max_game_time must be positive, got {}", self.max_game_time));
        }
        if self.max_ticks_without_change == 0 {
            return invalid("max_ticks_without_change must be at least 1".to_string());
        }
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.cols, self.grid.rows
            ));
        }

        let pitch = self.pitch();
        for team in Team::ALL {
            let slots = self.formations.for_team(team);
            if slots.is_empty() {
                return invalid(format!("formation for team {team} is empty"));
            }
            for (i, slot) in slots.iter().enumerate() {
                if !pitch.contains((slot.x, slot.y)) {
                    return invalid(format!(
                        "team {team} slot {i} ({}, {}) is outside the {} pitch",
                        slot.x,
                        slot.y,
                        pitch.dimensions_label()
                    ));
                }
                for (name, skill) in
                    [("passing_accuracy", slot.passing_accuracy), ("dribble_skill", slot.dribble_skill)]
                {
                    if let Some(v) = skill {
                        if !(0.0..=1.0).contains(&v) {
                            return invalid(format!(
                                "team {team} slot {i} {name} must be 0.0-1.0, got {v}"
                            ));
                        }
                    }
                }
            }
        }

        self.stamina.validate().map_err(SimError::InvalidConfig)?;
        self.decision.validate().map_err(SimError::InvalidConfig)?;
        Ok(())
    }
}

fn default_start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.pitch_width, 34.0);
        assert_eq!(cfg.pitch_length, 52.0);
        assert_eq!(cfg.dt, 0.066);
        assert_eq!(cfg.formations.len(), 14);
        assert_eq!(cfg.match_id(), "match_42");
        assert_eq!(cfg.start_time_or_default().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
pitch_width: 40.0
max_game_time: 120
realism_level: empirical
grid:
  cols: 10
"#;
        let cfg = MatchConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.pitch_width, 40.0);
        assert_eq!(cfg.pitch_length, 52.0);
        assert_eq!(cfg.max_game_time, 120.0);
        assert_eq!(cfg.realism_level, RealismLevel::Empirical);
        assert_eq!(cfg.grid, GridConfig { cols: 10, rows: 8 });
        assert_eq!(cfg.decision, DecisionConfig::default());
    }

    #[test]
    fn test_yaml_formations() {
        let yaml = r#"
formations:
  team_0:
    - {role: goalkeeper, x: 17, y: 5}
    - {role: forward, x: 17, y: 30, passing_accuracy: 0.9}
  team_1:
    - {role: goalkeeper, x: 17, y: 47}
"#;
        let cfg = MatchConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.formations.team_0.len(), 2);
        assert_eq!(cfg.formations.team_0[1].role, Role::Forward);
        assert_eq!(cfg.formations.team_0[1].passing_accuracy, Some(0.9));
        assert_eq!(cfg.formations.team_1.len(), 1);
    }

    #[test]
    fn test_rejects_non_positive_dimensions_and_dt() {
        let mut cfg = MatchConfig::default();
        cfg.pitch_width = 0.0;
        assert!(matches!(cfg.validate(), Err(SimError::InvalidConfig(_))));

        let mut cfg = MatchConfig::default();
        cfg.dt = -0.1;
        assert!(cfg.validate().is_err());

        assert!(MatchConfig::from_yaml_str("dt: 0").is_err());
    }

    #[test]
    fn test_rejects_slot_off_pitch_and_empty_team() {
        let mut cfg = MatchConfig::default();
        cfg.formations.team_1[0].y = 60.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("outside"));

        let mut cfg = MatchConfig::default();
        cfg.formations.team_0.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_skill_out_of_range() {
        let mut cfg = MatchConfig::default();
        cfg.formations.team_0[2].dribble_skill = Some(1.5);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = MatchConfig::quick(30.0).with_seed(7);
        let json = serde_json::to_string(&cfg).unwrap();
        let back = MatchConfig::from_json_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_malformed_yaml_is_fatal() {
        let err = MatchConfig::from_yaml_str("pitch_width: [").unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_shipped_base_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/base.yaml");
        let cfg = MatchConfig::from_yaml_file(&path).unwrap();
        let defaults = MatchConfig::default();
        assert_eq!(cfg.formations, defaults.formations);
        assert_eq!(cfg.stamina, defaults.stamina);
        assert_eq!(cfg.decision, defaults.decision);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn test_shipped_data_files_load() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let profile = DribbleProfile::load(&root.join("data/dribble_duration.json")).unwrap();
        assert_eq!(profile.distances(), vec![2.0, 4.0, 6.0]);
    }
}
