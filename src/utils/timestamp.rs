use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::AttendanceError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO-8601 shapes carrying an offset that RFC 3339 rejects: minute
/// precision, or an offset without the colon.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Offset-less ISO-8601 shapes scanners are known to send.
const LOCAL_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a scanner timestamp into the wall-clock time it names.
///
/// An explicit offset (`Z`, `+05:30`) is accepted but not applied: the
/// scanner's local date and time are kept as written.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, AttendanceError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }

    // `Z` is UTC; chrono's `%z` only reads numeric offsets
    let with_offset = match raw.strip_suffix(|c| c == 'Z' || c == 'z') {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };
    let offset_parsed = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&with_offset, fmt).ok())
        .map(|dt| dt.naive_local());

    offset_parsed
        .or_else(|| {
            LOCAL_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .ok_or_else(|| {
            AttendanceError::invalid(format!(
                "Invalid timestamp '{}': expected ISO-8601",
                raw
            ))
        })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AttendanceError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AttendanceError::invalid(format!("Invalid date '{}': expected YYYY-MM-DD", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, SubsecRound, Timelike};
    use rstest::rstest;

    #[rstest]
    #[case("2026-01-05T09:15:30")]
    #[case("2026-01-05 09:15:30")]
    #[case("2026-01-05T09:15:30.250")]
    #[case("2026-01-05T09:15:30Z")]
    #[case("2026-01-05T09:15:30+05:30")]
    #[case("2026-01-05T09:15:30-08:00")]
    fn keeps_wall_clock_as_written(#[case] raw: &str) {
        let parsed = parse_timestamp(raw).unwrap();

        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.minute(), 15);
        assert_eq!(parsed.second(), 30);
    }

    #[rstest]
    #[case("2026-01-05T09:15:30+0530")]
    #[case("2026-01-05T09:15:30.250-0800")]
    #[case("2026-01-05T09:15:30z")]
    fn accepts_colon_less_offsets(#[case] raw: &str) {
        let parsed = parse_timestamp(raw).unwrap();

        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(parsed.time().trunc_subsecs(0), NaiveTime::from_hms_opt(9, 15, 30).unwrap());
    }

    #[rstest]
    #[case("2026-01-05T17:30")]
    #[case("2026-01-05T17:30Z")]
    #[case("2026-01-05T17:30+05:30")]
    #[case("2026-01-05T17:30-0800")]
    fn minute_precision_is_accepted(#[case] raw: &str) {
        let parsed = parse_timestamp(raw).unwrap();

        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2026-13-05T09:00:00")]
    #[case("2026-01-05")]
    #[case("2026-01-05T09:15+5")]
    #[case("2026-01-05T09:15:30Zulu")]
    fn malformed_timestamps_are_invalid_input(#[case] raw: &str) {
        let err = parse_timestamp(raw).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn parses_calendar_dates() {
        assert_eq!(
            parse_date("2026-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
        assert!(matches!(
            parse_date("05/01/2026"),
            Err(AttendanceError::InvalidInput(_))
        ));
    }
}
