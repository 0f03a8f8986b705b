//! Trace exporters
//!
//! 세 형식 모두 이벤트 순서와 필드 이름을 그대로 유지한다.

pub mod csv;
pub mod json;
pub mod xes;

pub use self::csv::write_csv;
pub use self::json::TraceDump;
pub use self::xes::write_xes;

/// RFC 3339, ms 정밀도, `Z` 접미사
pub(crate) fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
