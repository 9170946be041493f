use iso8601_timestamp::Timestamp;

/// Current UTC time as ISO-8601 string, e.g. `2024-04-14T09:30:12.345Z`.
pub fn now() -> String {
    Timestamp::now_utc().format().to_string()
}

pub fn timestamp_to_millis(ts: Timestamp) -> i128 {
    ts.duration_since(Timestamp::UNIX_EPOCH).whole_milliseconds()
}

pub fn string_to_millis(str: &str) -> Option<i128> {
    Timestamp::parse(str).map(timestamp_to_millis)
}

/// Returns month (1-12) and day of month of an ISO-8601 string
pub fn month_and_day(str: &str) -> Option<(u8, u8)> {
    Timestamp::parse(str).map(|ts| (u8::from(ts.month()), ts.day()))
}
