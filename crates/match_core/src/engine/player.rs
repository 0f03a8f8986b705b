//! Player entity and identity types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{FormationSlot, StaminaConfig};
use super::coordinates::{magnitude, MeterPos};
use super::team_phase::PossessionContext;
use super::weights::ActionWeights;

/// Arena index into `MatchEngine::players`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team 0 attacks toward `y = length`, team 1 toward `y = 0`.
/// Serialized as `0` / `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Team {
    Zero,
    One,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Zero, Team::One];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Team::Zero => 0,
            Team::One => 1,
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::Zero => Team::One,
            Team::One => Team::Zero,
        }
    }

    /// true면 y가 커지는 방향으로 공격
    #[inline]
    pub fn attacks_positive_y(self) -> bool {
        matches!(self, Team::Zero)
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> u8 {
        team.index() as u8
    }
}

impl TryFrom<u8> for Team {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Team::Zero),
            1 => Ok(Team::One),
            other => Err(format!("team must be 0 or 1, got {other}")),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "goalkeeper",
            Role::Defender => "defender",
            Role::Midfielder => "midfielder",
            Role::Forward => "forward",
        }
    }
}

/// 0..=1 범위의 고정 능력치
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub passing_accuracy: f32,
    pub dribble_skill: f32,
}

impl Default for Skills {
    fn default() -> Self {
        Self { passing_accuracy: 0.8, dribble_skill: 0.7 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub team: Team,
    /// 팀 안에서의 formation 슬롯 번호 (0부터)
    pub squad_index: u32,
    pub base_role: Role,
    /// 매 tick 국면/스태미나에 따라 재계산
    pub effective_role: Role,
    pub position: MeterPos,
    pub velocity: (f32, f32),
    pub stamina: f32,
    pub max_stamina: f32,
    /// 스태미나 반영된 현재 최고 속도
    pub max_speed: f32,
    pub skills: Skills,
    pub weights: ActionWeights,
    pub context: PossessionContext,
}

impl Player {
    pub fn new(id: PlayerId, team: Team, slot: &FormationSlot, stamina: &StaminaConfig) -> Self {
        let defaults = Skills::default();
        let skills = Skills {
            passing_accuracy: slot.passing_accuracy.unwrap_or(defaults.passing_accuracy),
            dribble_skill: slot.dribble_skill.unwrap_or(defaults.dribble_skill),
        };
        Self {
            id,
            team,
            squad_index: id.0,
            base_role: slot.role,
            effective_role: slot.role,
            position: (slot.x, slot.y),
            velocity: (0.0, 0.0),
            stamina: stamina.max_stamina,
            max_stamina: stamina.max_stamina,
            max_speed: stamina.max_speed,
            skills,
            weights: ActionWeights::for_role(slot.role),
            context: PossessionContext::default(),
        }
    }

    pub fn with_squad_index(mut self, squad_index: u32) -> Self {
        self.squad_index = squad_index;
        self
    }

    pub fn speed(&self) -> f32 {
        magnitude(self.velocity)
    }

    /// 0 = 탈진, 1 = 최상
    pub fn stamina_ratio(&self) -> f32 {
        if self.max_stamina > 0.0 {
            (self.stamina / self.max_stamina).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// 0 = 쌩쌩, 1 = 탈진
    pub fn fatigue(&self) -> f32 {
        1.0 - self.stamina_ratio()
    }
}
