use chrono::{Local, NaiveDateTime, Timelike};

/// Local wall-clock time truncated to the minute.
pub fn now_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
