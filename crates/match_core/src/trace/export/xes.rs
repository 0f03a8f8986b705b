//! XES (IEEE 1849) process-mining export
//!
//! case_id 하나가 `<trace>` 하나. trace 순서는 처음 등장한 순서.

use std::collections::HashMap;
use std::io::Write;

use super::format_timestamp;
use crate::error::Result;
use crate::trace::event::TraceEvent;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<log xes.version="1.0" xes.features="nested-attributes" xmlns="http://www.xes-standard.org/">
  <extension name="Lifecycle" prefix="lifecycle" uri="http://www.xes-standard.org/lifecycle.xesext"/>
  <extension name="Organizational" prefix="org" uri="http://www.xes-standard.org/org.xesext"/>
  <extension name="Time" prefix="time" uri="http://www.xes-standard.org/time.xesext"/>
  <extension name="Concept" prefix="concept" uri="http://www.xes-standard.org/concept.xesext"/>
  <global scope="trace">
    <string key="concept:name" value="__INVALID__"/>
  </global>
  <global scope="event">
    <string key="concept:name" value="__INVALID__"/>
    <date key="time:timestamp" value="1970-01-01T00:00:00.000Z"/>
  </global>
  <classifier name="Activity" keys="concept:name"/>
"#;

/// XML 특수문자 escape
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// case_id 첫 등장 순서대로 이벤트를 묶는다.
fn group_by_case(events: &[TraceEvent]) -> Vec<(&str, Vec<&TraceEvent>)> {
    let mut groups: Vec<(&str, Vec<&TraceEvent>)> = Vec::new();
    let mut slot_of: HashMap<&str, usize> = HashMap::new();
    for e in events {
        let case = e.case_id.as_str();
        let slot = *slot_of.entry(case).or_insert_with(|| {
            groups.push((case, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(e);
    }
    groups
}

pub fn write_xes<W: Write>(mut writer: W, events: &[TraceEvent]) -> Result<()> {
    writer.write_all(HEADER.as_bytes())?;

    for (case, members) in group_by_case(events) {
        writeln!(writer, "  <trace>")?;
        writeln!(writer, "    <string key=\"concept:name\" value=\"{}\"/>", escape(case))?;
        for e in members {
            writeln!(writer, "    <event>")?;
            writeln!(writer, "      <string key=\"concept:name\" value=\"{}\"/>", e.action_type)?;
            writeln!(writer, "      <string key=\"lifecycle:transition\" value=\"complete\"/>")?;
            writeln!(
                writer,
                "      <date key=\"time:timestamp\" value=\"{}\"/>",
                format_timestamp(&e.timestamp)
            )?;
            writeln!(writer, "      <string key=\"org:resource\" value=\"player_{}\"/>", e.player)?;
            writeln!(writer, "      <int key=\"player\" value=\"{}\"/>", e.player)?;
            writeln!(writer, "      <int key=\"team\" value=\"{}\"/>", e.team.index())?;
            writeln!(writer, "      <int key=\"tick\" value=\"{}\"/>", e.tick)?;
            writeln!(writer, "      <float key=\"dest_x\" value=\"{}\"/>", e.dest_x)?;
            writeln!(writer, "      <float key=\"dest_y\" value=\"{}\"/>", e.dest_y)?;
            writeln!(writer, "      <float key=\"xThreat_delta\" value=\"{}\"/>", e.xthreat_delta)?;
            writeln!(writer, "    </event>")?;
        }
        writeln!(writer, "  </trace>")?;
    }

    writeln!(writer, "</log>")?;
    writer.flush()?;
    Ok(())
}
