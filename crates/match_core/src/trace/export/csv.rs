//! CSV trace export

use std::io::Write;

use serde::Serialize;

use super::format_timestamp;
use crate::error::Result;
use crate::trace::event::{EventKind, TraceEvent};

#[derive(Serialize)]
struct CsvRow<'a> {
    case_id: &'a str,
    match_id: &'a str,
    tick: u64,
    timestamp: String,
    player: u32,
    team: u8,
    action_type: EventKind,
    dest_x: f64,
    dest_y: f64,
    #[serde(rename = "xThreat_delta")]
    xthreat_delta: f64,
}

impl<'a> From<&'a TraceEvent> for CsvRow<'a> {
    fn from(e: &'a TraceEvent) -> Self {
        Self {
            case_id: &e.case_id,
            match_id: &e.match_id,
            tick: e.tick,
            timestamp: format_timestamp(&e.timestamp),
            player: e.player.0,
            team: e.team.index() as u8,
            action_type: e.action_type,
            dest_x: e.dest_x,
            dest_y: e.dest_y,
            xthreat_delta: e.xthreat_delta,
        }
    }
}

/// 헤더 한 줄 + 이벤트당 한 줄
pub fn write_csv<W: Write>(writer: W, events: &[TraceEvent]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    if events.is_empty() {
        wtr.write_record([
            "case_id",
            "match_id",
            "tick",
            "timestamp",
            "player",
            "team",
            "action_type",
            "dest_x",
            "dest_y",
            "xThreat_delta",
        ])?;
    }
    for e in events {
        wtr.serialize(CsvRow::from(e))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::{PlayerId, Team};
    use chrono::{TimeZone, Utc};

    fn event(tick: u64, kind: EventKind) -> TraceEvent {
        TraceEvent {
            case_id: "m_p0001".to_string(),
            match_id: "m".to_string(),
            tick,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::milliseconds(tick as i64 * 66),
            player: PlayerId(3),
            team: Team::One,
            action_type: kind,
            dest_x: 12.5,
            dest_y: 40.25,
            xthreat_delta: 0.0123,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[event(1, EventKind::Possession), event(2, EventKind::PassFailed)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "case_id,match_id,tick,timestamp,player,team,action_type,dest_x,dest_y,xThreat_delta"
        );
        assert_eq!(lines[1], "m_p0001,m,1,2024-01-01T00:00:00.066Z,3,1,POSSESSION,12.5,40.25,0.0123");
        assert!(lines[2].contains(",PASS_FAILED,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_log_still_has_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("case_id,"));
    }
}
