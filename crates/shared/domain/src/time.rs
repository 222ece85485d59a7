//! Instant parsing, formatting and calendar-day ranges.
//!
//! Instants cross the HTTP boundary as ISO-8601 strings with millisecond
//! precision and a `Z` suffix (`2024-03-15T09:30:00.000Z`).

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DAY_PATTERN, MILLIS_PER_MINUTE};
use crate::error::{DomainError, DomainResult};

static DAY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(DAY_PATTERN).expect("valid day pattern"));

/// Parse an ISO-8601 date-time.
///
/// Accepts RFC 3339 with an offset, a date-time without offset (read as UTC)
/// and a bare date (UTC midnight). Returns `None` for anything else.
///
/// Digits below the millisecond are dropped, so a stored instant always
/// formats back to itself and falls inside exactly one [`DayRange`].
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    parse_full_precision(text).map(|instant| instant.trunc_subsecs(3))
}

fn parse_full_precision(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::default()))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format an instant the way the API returns it.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Add a (possibly fractional) number of minutes, at millisecond precision.
///
/// Returns `None` when the result falls outside the representable range.
pub fn add_minutes(start: DateTime<Utc>, minutes: f64) -> Option<DateTime<Utc>> {
    let millis = (minutes * MILLIS_PER_MINUTE).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    let offset = Duration::try_milliseconds(millis as i64)?;
    start.checked_add_signed(offset)
}

/// Serde adapter for `DateTime<Utc>` fields using [`format_instant`].
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_instant(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_instant(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid ISO-8601 instant: {text}")))
    }
}

/// Inclusive UTC range covering one calendar day,
/// from `00:00:00.000` to `23:59:59.999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayRange {
    /// Build the range for a `YYYY-MM-DD` string.
    ///
    /// The string must match `YYYY-MM-DD`. Beyond that the day of month is
    /// not checked: a day past the end of the month rolls over into the next
    /// one (`2024-02-30` covers March 1st).
    ///
    /// Rejected: anything not matching the pattern, and months outside
    /// `01..=12` (`2024-00-10`, `2024-13-01`), which cannot be placed on a
    /// calendar.
    pub fn parse(day: &str, field: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation(field, format!("{field} must be in YYYY-MM-DD format"));

        if !DAY_REGEX.is_match(day) {
            return Err(invalid());
        }

        let year: i32 = day[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = day[5..7].parse().map_err(|_| invalid())?;
        let day_of_month: i64 = day[8..10].parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.checked_add_signed(Duration::days(day_of_month - 1)))
            .ok_or_else(invalid)?;

        let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
        let end = start + Duration::days(1) - Duration::milliseconds(1);

        Ok(Self { start, end })
    }

    /// Whether `instant` lies within the range (both ends inclusive).
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(text: &str) -> DateTime<Utc> {
        parse_instant(text).unwrap()
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();

        assert_eq!(parse_instant("2024-03-15T09:30:00.000Z"), Some(expected));
        assert_eq!(parse_instant("2024-03-15T10:30:00+01:00"), Some(expected));
        assert_eq!(parse_instant("2024-03-15T09:30:00"), Some(expected));
        assert_eq!(parse_instant("2024-03-15T09:30"), Some(expected));
        assert_eq!(
            parse_instant("2024-03-15"),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(parse_instant("tomorrow").is_none());
        assert!(parse_instant("").is_none());
        assert!(parse_instant("2024-13-45T99:00:00Z").is_none());
    }

    #[test]
    fn test_parse_instant_drops_sub_millisecond_digits() {
        let instant = instant("2024-03-15T23:59:59.9995Z");
        assert_eq!(format_instant(&instant), "2024-03-15T23:59:59.999Z");
        assert_eq!(instant, parse_instant("2024-03-15T23:59:59.999Z").unwrap());

        let day = DayRange::parse("2024-03-15", "date").unwrap();
        let next = DayRange::parse("2024-03-16", "date").unwrap();
        assert!(day.contains(&instant));
        assert!(!next.contains(&instant));

        assert_eq!(
            format_instant(&parse_instant("2024-03-15T09:00:00.123456789").unwrap()),
            "2024-03-15T09:00:00.123Z"
        );
    }

    #[test]
    fn test_format_instant_uses_millis_and_z() {
        assert_eq!(
            format_instant(&instant("2024-03-15T10:30:00+00:00")),
            "2024-03-15T10:30:00.000Z"
        );
    }

    #[test]
    fn test_add_minutes() {
        let start = instant("2024-03-15T09:00:00Z");
        assert_eq!(add_minutes(start, 30.0), Some(instant("2024-03-15T09:30:00Z")));
        assert_eq!(add_minutes(start, 0.01), Some(instant("2024-03-15T09:00:00.600Z")));
        assert_eq!(add_minutes(start, 90.0), Some(instant("2024-03-15T10:30:00Z")));
        assert!(add_minutes(start, f64::MAX).is_none());
    }

    #[test]
    fn test_day_range_bounds() {
        let range = DayRange::parse("2024-03-15", "date").unwrap();
        assert_eq!(format_instant(&range.start), "2024-03-15T00:00:00.000Z");
        assert_eq!(format_instant(&range.end), "2024-03-15T23:59:59.999Z");

        assert!(range.contains(&range.start));
        assert!(range.contains(&range.end));
        assert!(!range.contains(&instant("2024-03-14T23:59:59.999Z")));
        assert!(!range.contains(&instant("2024-03-16T00:00:00.000Z")));
    }

    #[test]
    fn test_day_range_rolls_over_impossible_days() {
        let range = DayRange::parse("2024-02-30", "date").unwrap();
        assert_eq!(format_instant(&range.start), "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_day_range_rejects_bad_shapes() {
        for day in ["2024-3-15", "2024-03-15T00:00", "15-03-2024", "", "2024/03/15", "2024-13-01", "2024-00-10"] {
            let err = DayRange::parse(day, "date").unwrap_err();
            assert_eq!(err.field(), Some("date"), "{day}");
        }
    }
}
