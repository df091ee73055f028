//! Date helpers for display and due-date checks.
//!
//! [`format_date`] renders in the zone the timestamp already carries, so a
//! headless renderer and an interactive one produce the same string as long
//! as they are handed the same `DateTime`.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Formats as `M月D日 HH:MM`; month and day unpadded, hour and minute padded.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    format!(
        "{}月{}日 {:02}:{:02}",
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute()
    )
}

/// Parses a due date.
///
/// - `YYYY-MM-DD` is midnight UTC.
/// - RFC 3339 carries its own offset.
/// - `YYYY-MM-DDTHH:MM[:SS]` without an offset is local time.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// A due date strictly before `now` is overdue. Unparseable dates never are.
pub fn is_overdue(due_date: &str, now: DateTime<Utc>) -> bool {
    parse_due_date(due_date).is_some_and(|due| due < now)
}

/// Current time at the millisecond precision tasks are stored with.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    Utc.timestamp_millis_opt(now.timestamp_millis())
        .single()
        .unwrap_or(now)
}
