//! Possession sequences
//!
//! case_id 단위로 이벤트를 묶어 소유권 흐름을 요약한다.

use serde::{Deserialize, Serialize};

use super::event::{round_to, EventKind, TraceEvent};
use crate::engine::player::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceOutcome {
    Goal,
    /// 막힌 슈팅 또는 빗나간 슈팅
    Shot,
    Turnover,
    Clear,
    Ongoing,
}

impl SequenceOutcome {
    fn from_last(kind: EventKind) -> Self {
        match kind {
            EventKind::Goal => SequenceOutcome::Goal,
            EventKind::Shot | EventKind::ShotMissed => SequenceOutcome::Shot,
            EventKind::PassFailed | EventKind::DribbleFailed => SequenceOutcome::Turnover,
            EventKind::Clear => SequenceOutcome::Clear,
            EventKind::Possession | EventKind::Pass | EventKind::Dribble => SequenceOutcome::Ongoing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossessionSequence {
    pub sequence_id: usize,
    pub case_id: String,
    /// 첫 이벤트의 팀
    pub team: Team,
    pub events: usize,
    pub start_tick: u64,
    pub end_tick: u64,
    #[serde(rename = "total_xThreat")]
    pub total_xthreat: f64,
    pub outcome: SequenceOutcome,
}

/// 이벤트 순서대로 연속된 같은 case_id를 하나의 시퀀스로 묶는다.
pub fn possession_sequences(events: &[TraceEvent]) -> Vec<PossessionSequence> {
    let mut out: Vec<PossessionSequence> = Vec::new();
    let mut last_kind = None;

    for e in events {
        let same_case = out.last().is_some_and(|s| s.case_id == e.case_id);
        if !same_case {
            if let (Some(seq), Some(kind)) = (out.last_mut(), last_kind) {
                seq.outcome = SequenceOutcome::from_last(kind);
            }
            out.push(PossessionSequence {
                sequence_id: out.len(),
                case_id: e.case_id.clone(),
                team: e.team,
                events: 0,
                start_tick: e.tick,
                end_tick: e.tick,
                total_xthreat: 0.0,
                outcome: SequenceOutcome::Ongoing,
            });
        }
        if let Some(seq) = out.last_mut() {
            seq.events += 1;
            seq.end_tick = e.tick;
            seq.total_xthreat += e.xthreat_delta;
        }
        last_kind = Some(e.action_type);
    }
    if let (Some(seq), Some(kind)) = (out.last_mut(), last_kind) {
        seq.outcome = SequenceOutcome::from_last(kind);
    }
    for seq in &mut out {
        seq.total_xthreat = round_to(seq.total_xthreat, 4);
    }
    out
}
