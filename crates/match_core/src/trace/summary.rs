//! Match summary statistics
//!
//! 이벤트 로그에서 다시 계산 가능한 KPI. 엔진 상태(tick 수, 팀별 득점 등)는
//! `MatchEngine::summary()`가 채운다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::event::{round_to, EventKind, TraceEvent};
use crate::engine::config::RealismLevel;
use crate::engine::referee::EndReason;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchSummary {
    pub total_events: usize,
    /// POSSESSION 이벤트 수
    pub total_possessions: usize,
    /// 전체 xThreat delta 합 / possession 수 (소수 넷째 자리)
    #[serde(rename = "mean_xThreat_per_possession")]
    pub mean_xthreat_per_possession: f64,
    /// *_FAILED 수
    pub turnovers: usize,
    pub goals: usize,
    /// SHOT_MISSED + GOAL
    pub shots: usize,
    /// SHOT (막힌 유효 슈팅)
    pub saved_shots: usize,
    pub passes: usize,
    pub dribbles: usize,
    pub clears: usize,
    pub action_distribution: BTreeMap<String, usize>,

    // === 엔진 상태 (from_events에서는 기본값) ===
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub total_ticks: u64,
    /// 초
    #[serde(default)]
    pub match_duration: f64,
    #[serde(default)]
    pub pitch_dimensions: String,
    #[serde(default)]
    pub realism_level: RealismLevel,
    #[serde(default)]
    pub goals_by_team: [u32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<EndReason>,
}

impl MatchSummary {
    pub fn from_events(events: &[TraceEvent]) -> Self {
        let mut counts: BTreeMap<EventKind, usize> = BTreeMap::new();
        let mut total_delta = 0.0f64;
        for e in events {
            *counts.entry(e.action_type).or_default() += 1;
            total_delta += e.xthreat_delta;
        }
        let count = |kind: EventKind| counts.get(&kind).copied().unwrap_or(0);

        let total_possessions = count(EventKind::Possession);
        let mean = if total_possessions > 0 {
            round_to(total_delta / total_possessions as f64, 4)
        } else {
            0.0
        };

        Self {
            total_events: events.len(),
            total_possessions,
            mean_xthreat_per_possession: mean,
            turnovers: counts.iter().filter(|(k, _)| k.is_turnover()).map(|(_, n)| *n).sum(),
            goals: count(EventKind::Goal),
            shots: count(EventKind::ShotMissed) + count(EventKind::Goal),
            saved_shots: count(EventKind::Shot),
            passes: count(EventKind::Pass),
            dribbles: count(EventKind::Dribble),
            clears: count(EventKind::Clear),
            action_distribution: counts.iter().map(|(k, v)| (k.as_str().to_string(), *v)).collect(),
            ..Self::default()
        }
    }
}
