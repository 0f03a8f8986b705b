//! Trace events
//!
//! 한 번 기록된 이벤트는 불변. 순서 = tick 순, 같은 tick 안에서는 발생 순.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::coordinates::MeterPos;
use crate::engine::player::{PlayerId, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Possession,
    Pass,
    PassFailed,
    Dribble,
    DribbleFailed,
    Shot,
    ShotMissed,
    Goal,
    Clear,
}

impl EventKind {
    pub const ALL: [EventKind; 9] = [
        EventKind::Possession,
        EventKind::Pass,
        EventKind::PassFailed,
        EventKind::Dribble,
        EventKind::DribbleFailed,
        EventKind::Shot,
        EventKind::ShotMissed,
        EventKind::Goal,
        EventKind::Clear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Possession => "POSSESSION",
            EventKind::Pass => "PASS",
            EventKind::PassFailed => "PASS_FAILED",
            EventKind::Dribble => "DRIBBLE",
            EventKind::DribbleFailed => "DRIBBLE_FAILED",
            EventKind::Shot => "SHOT",
            EventKind::ShotMissed => "SHOT_MISSED",
            EventKind::Goal => "GOAL",
            EventKind::Clear => "CLEAR",
        }
    }

    /// *_FAILED
    pub fn is_turnover(&self) -> bool {
        matches!(self, EventKind::PassFailed | EventKind::DribbleFailed)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 엔진이 만든 이벤트 초안. tick/case/timestamp는 recorder가 채운다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventDraft {
    pub player: PlayerId,
    pub team: Team,
    pub kind: EventKind,
    pub dest: MeterPos,
    pub delta: f32,
}

/// Field order is the serialized column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub case_id: String,
    pub match_id: String,
    pub tick: u64,
    pub timestamp: DateTime<Utc>,
    pub player: PlayerId,
    pub team: Team,
    pub action_type: EventKind,
    /// 소수 둘째 자리
    pub dest_x: f64,
    pub dest_y: f64,
    /// 소수 넷째 자리
    #[serde(rename = "xThreat_delta")]
    pub xthreat_delta: f64,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
