use chrono::NaiveTime;

/// Duration between entry and exit as `HH:MM`, floored to the minute.
///
/// `None` when either side is missing or when exit precedes entry
/// (overnight shifts are not tracked).
pub fn compute_worked_hours(entry: Option<NaiveTime>, exit: Option<NaiveTime>) -> Option<String> {
    let (entry, exit) = (entry?, exit?);

    let total_seconds = (exit - entry).num_seconds();
    if total_seconds < 0 {
        return None;
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    Some(format!("{:02}:{:02}", hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn t(s: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(s, "%H:%M:%S").ok()
    }

    #[rstest]
    #[case("09:00:00", "17:30:00", Some("08:30"))]
    #[case("09:00:00", "09:00:00", Some("00:00"))]
    #[case("09:00:00", "09:00:59", Some("00:00"))]
    #[case("08:15:30", "16:45:29", Some("08:29"))]
    #[case("00:00:00", "23:59:59", Some("23:59"))]
    #[case("09:00:00", "08:00:00", None)]
    fn computes_floor_of_same_day_duration(
        #[case] entry: &str,
        #[case] exit: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            compute_worked_hours(t(entry), t(exit)).as_deref(),
            expected
        );
    }

    #[test]
    fn missing_side_yields_none() {
        assert_eq!(compute_worked_hours(t("09:00:00"), None), None);
        assert_eq!(compute_worked_hours(None, t("17:00:00")), None);
        assert_eq!(compute_worked_hours(None, None), None);
    }
}
