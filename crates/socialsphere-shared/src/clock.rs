use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to millisecond precision.
///
/// Timestamps are persisted as epoch milliseconds, so anything created in
/// memory must already be at that precision for save/load to be lossless.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Compact relative age: `42s`, `5m`, `3h`, `2d`.
///
/// Timestamps in the future clamp to `0s`. The epoch (what a record with no
/// timestamp deserializes to) renders as an empty string.
pub fn time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if ts.timestamp_millis() == 0 {
        return String::new();
    }
    let s = (now - ts).num_seconds().max(0);
    if s < 60 {
        format!("{s}s")
    } else if s < 3_600 {
        format!("{}m", s / 60)
    } else if s < 86_400 {
        format!("{}h", s / 3_600)
    } else {
        format!("{}d", s / 86_400)
    }
}
