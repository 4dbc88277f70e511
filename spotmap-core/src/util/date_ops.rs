use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// datetime formats observed in listing exports, tried in order after RFC 3339.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

/// offset-carrying format for database exports, where the offset may omit its
/// minutes (`+00`).
const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";

/// date-only formats, interpreted as midnight.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// leniently parses a listing creation timestamp. values that match none of the
/// known formats are treated as unknown (None) rather than as an error.
pub fn parse_created_at(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, OFFSET_DATETIME_FORMAT) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS.iter() {
        if let Some(dt) = NaiveDate::parse_from_str(trimmed, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Some(dt);
        }
    }
    log::debug!("unable to parse timestamp '{trimmed}', treating as unknown");
    None
}

/// monthly period label (YYYY-MM) for a timestamp.
pub fn month_period(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m").to_string()
}
