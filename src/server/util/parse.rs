//! Parsing helpers for loosely formatted client and environment input.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Naive formats accepted for scheduled times, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a scheduled time sent by the dashboard.
///
/// Accepts RFC 3339 (`2025-06-01T18:00:00+02:00`) as well as the naive
/// `YYYY-MM-DDTHH:MM[:SS]` produced by `datetime-local` inputs, with either a `T`
/// or a space as separator. Naive values are taken to be UTC.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed timestamp
/// - `None` - Input matches none of the accepted formats
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Longest duration `parse_duration` accepts.
pub const MAX_DURATION_DAYS: i64 = 365;

/// Parses a token lifetime such as `24h`, `30m`, `7d`, `90s` or plain seconds.
///
/// # Returns
/// - `Some(Duration)` - Strictly positive duration of at most [`MAX_DURATION_DAYS`]
/// - `None` - Unknown unit, non-numeric amount, zero, or too long
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);

    let amount: i64 = amount.parse().ok()?;
    if amount <= 0 {
        return None;
    }

    let duration = match unit {
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        _ => None,
    }?;

    (duration <= Duration::try_days(MAX_DURATION_DAYS)?).then_some(duration)
}

/// Loose email plausibility check: `local@domain.tld` without whitespace.
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
