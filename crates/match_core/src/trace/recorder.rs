//! Trace recorder
//!
//! 이벤트 초안에 tick, case id, timestamp를 붙여 append-only 로그에 쌓는다.
//! POSSESSION 이벤트마다 새 case가 열린다.

use chrono::{DateTime, Duration, Utc};

use super::event::{round_to, EventDraft, EventKind, TraceEvent};

#[derive(Debug, Clone)]
pub struct TraceRecorder {
    match_id: String,
    start_time: DateTime<Utc>,
    dt: f64,
    tick: u64,
    /// 지금까지 기록된 POSSESSION 수
    possessions: u32,
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new(match_id: impl Into<String>, start_time: DateTime<Utc>, dt: f64) -> Self {
        Self { match_id: match_id.into(), start_time, dt, tick: 0, possessions: 0, events: Vec::new() }
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// `start_time + tick × dt` (ms 정밀도)
    pub fn timestamp_for(&self, tick: u64) -> DateTime<Utc> {
        let millis = (tick as f64 * self.dt * 1000.0).round() as i64;
        self.start_time + Duration::milliseconds(millis)
    }

    /// `{match_id}_p{n:04}`
    pub fn case_id(&self) -> String {
        format!("{}_p{:04}", self.match_id, self.possessions)
    }

    pub fn record(&mut self, draft: EventDraft) -> &TraceEvent {
        if draft.kind == EventKind::Possession {
            self.possessions += 1;
        }
        let event = TraceEvent {
            case_id: self.case_id(),
            match_id: self.match_id.clone(),
            tick: self.tick,
            timestamp: self.timestamp_for(self.tick),
            player: draft.player,
            team: draft.team,
            action_type: draft.kind,
            dest_x: round_to(draft.dest.0 as f64, 2),
            dest_y: round_to(draft.dest.1 as f64, 2),
            xthreat_delta: round_to(draft.delta as f64, 4),
        };
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn events_since(&self, start: usize) -> &[TraceEvent] {
        &self.events[start.min(self.events.len())..]
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::{PlayerId, Team};
    use chrono::TimeZone;

    fn draft(kind: EventKind) -> EventDraft {
        EventDraft { player: PlayerId(3), team: Team::One, kind, dest: (12.345, 7.0), delta: 0.123456 }
    }

    fn recorder() -> TraceRecorder {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        TraceRecorder::new("match_42", start, 0.066)
    }

    #[test]
    fn test_case_changes_only_at_possession() {
        let mut r = recorder();
        assert_eq!(r.record(draft(EventKind::Pass)).case_id, "match_42_p0000");
        assert_eq!(r.record(draft(EventKind::Possession)).case_id, "match_42_p0001");
        assert_eq!(r.record(draft(EventKind::Dribble)).case_id, "match_42_p0001");
        assert_eq!(r.record(draft(EventKind::Possession)).case_id, "match_42_p0002");
    }

    #[test]
    fn test_fields_are_rounded() {
        let mut r = recorder();
        r.set_tick(10);
        let e = r.record(draft(EventKind::Clear)).clone();
        assert_eq!(e.tick, 10);
        assert_eq!(e.dest_x, 12.35);
        assert_eq!(e.dest_y, 7.0);
        assert_eq!(e.xthreat_delta, 0.1235);
        assert_eq!(e.match_id, "match_42");
    }

    #[test]
    fn test_timestamp_derived_from_tick() {
        let r = recorder();
        assert_eq!(r.timestamp_for(0).to_rfc3339(), "2024-01-01T00:00:00+00:00");
        // 1000 × 0.066 = 66s
        assert_eq!(r.timestamp_for(1000).to_rfc3339(), "2024-01-01T00:01:06+00:00");
        assert_eq!(
            (r.timestamp_for(1) - r.timestamp_for(0)).num_milliseconds(),
            66
        );
    }

    #[test]
    fn test_events_since() {
        let mut r = recorder();
        r.record(draft(EventKind::Pass));
        r.record(draft(EventKind::Pass));
        assert_eq!(r.events_since(1).len(), 1);
        assert!(r.events_since(5).is_empty());
    }
}
