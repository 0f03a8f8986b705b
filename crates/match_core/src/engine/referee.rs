//! Referee: match clock, half indicator, goal tally, termination authority

use serde::{Deserialize, Serialize};

use super::player::Team;
use super::timestep::elapsed_seconds;

/// 경기 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// elapsed ≥ max_game_time
    TimeUp,
    /// 소유권 변화 없는 tick이 임계값 도달
    Inactivity,
    /// 외부에서 중단 요청
    Cancelled,
    /// `max_steps` 안전 한도 도달
    StepLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referee {
    /// 경과 시간 (초) = tick × dt
    pub match_time: f64,
    /// 1 또는 2
    pub half: u8,
    goals: [u32; 2],
}

impl Default for Referee {
    fn default() -> Self {
        Self { match_time: 0.0, half: 1, goals: [0; 2] }
    }
}

impl Referee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, tick: u64, dt: f64, max_game_time: f64) {
        self.match_time = elapsed_seconds(tick, dt);
        self.half = if self.match_time >= max_game_time / 2.0 { 2 } else { 1 };
    }

    pub fn record_goal(&mut self, team: Team) {
        self.goals[team.index()] += 1;
    }

    pub fn goals(&self, team: Team) -> u32 {
        self.goals[team.index()]
    }

    pub fn goals_by_team(&self) -> [u32; 2] {
        self.goals
    }

    pub fn total_goals(&self) -> u32 {
        self.goals.iter().sum()
    }

    /// Time limit first, then inactivity.
    pub fn termination(
        &self,
        max_game_time: f64,
        ticks_since_possession_change: u64,
        max_ticks_without_change: u64,
    ) -> Option<EndReason> {
        if self.match_time >= max_game_time {
            Some(EndReason::TimeUp)
        } else if ticks_since_possession_change >= max_ticks_without_change {
            Some(EndReason::Inactivity)
        } else {
            None
        }
    }
}
