// ABOUTME: Parses --newer-than expressions into a creation-date lower bound
// ABOUTME: Accepts N_unit_ago, calendar dates, RFC3339 timestamps and all_time

use chrono::{DateTime, Months, NaiveDate, SecondsFormat, TimeDelta, Utc};

use super::error::FilterError;
use crate::constants::filters::{ALL_TIME, DEFAULT_NEWER_THAN};

/// Resolve a time expression relative to `now`.
///
/// Returns `None` for `all_time`, otherwise an RFC3339 UTC timestamp.
/// A blank expression falls back to the default window.
pub fn parse_newer_than(expr: &str, now: DateTime<Utc>) -> Result<Option<String>, FilterError> {
    let expr = match expr.trim() {
        "" => DEFAULT_NEWER_THAN,
        trimmed => trimmed,
    };

    if expr.eq_ignore_ascii_case(ALL_TIME) {
        return Ok(None);
    }

    let instant = if let Some(relative) = expr.strip_suffix("_ago") {
        parse_relative(relative, now).ok_or_else(|| invalid(expr))?
    } else if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| invalid(expr))?
            .and_utc()
    } else if let Ok(timestamp) = DateTime::parse_from_rfc3339(expr) {
        timestamp.with_timezone(&Utc)
    } else {
        return Err(invalid(expr));
    };

    Ok(Some(instant.to_rfc3339_opts(SecondsFormat::Secs, true)))
}

fn parse_relative(relative: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let (amount, unit) = relative.split_once('_')?;
    let amount: u32 = amount.parse().ok()?;
    let unit = unit.to_ascii_lowercase();
    let unit = unit.strip_suffix('s').unwrap_or(&unit);

    match unit {
        "minute" => now.checked_sub_signed(TimeDelta::try_minutes(amount.into())?),
        "hour" => now.checked_sub_signed(TimeDelta::try_hours(amount.into())?),
        "day" => now.checked_sub_signed(TimeDelta::try_days(amount.into())?),
        "week" => now.checked_sub_signed(TimeDelta::try_weeks(amount.into())?),
        "month" => now.checked_sub_months(Months::new(amount)),
        "year" => now.checked_sub_months(Months::new(amount.checked_mul(12)?)),
        _ => None,
    }
}

fn invalid(expr: &str) -> FilterError {
    FilterError::InvalidTimeWindow(format!(
        "'{}' (expected N_unit_ago, YYYY-MM-DD, an RFC3339 timestamp, or {})",
        expr, ALL_TIME
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 31, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_all_time_disables_window() {
        assert_eq!(parse_newer_than("all_time", now()).unwrap(), None);
        assert_eq!(parse_newer_than("ALL_TIME", now()).unwrap(), None);
    }

    #[test]
    fn test_blank_uses_default_window() {
        assert_eq!(
            parse_newer_than("  ", now()).unwrap().as_deref(),
            Some("2024-02-29T12:00:00Z")
        );
    }

    #[test]
    fn test_relative_units() {
        let cases = [
            ("30_minutes_ago", "2024-08-31T11:30:00Z"),
            ("1_hour_ago", "2024-08-31T11:00:00Z"),
            ("2_days_ago", "2024-08-29T12:00:00Z"),
            ("1_week_ago", "2024-08-24T12:00:00Z"),
            ("6_months_ago", "2024-02-29T12:00:00Z"),
            ("1_year_ago", "2023-08-31T12:00:00Z"),
        ];
        for (expr, expected) in cases {
            assert_eq!(
                parse_newer_than(expr, now()).unwrap().as_deref(),
                Some(expected),
                "expression {expr}"
            );
        }
    }

    #[test]
    fn test_calendar_date_and_timestamp() {
        assert_eq!(
            parse_newer_than("2024-01-15", now()).unwrap().as_deref(),
            Some("2024-01-15T00:00:00Z")
        );
        assert_eq!(
            parse_newer_than("2024-01-15T10:30:00+02:00", now())
                .unwrap()
                .as_deref(),
            Some("2024-01-15T08:30:00Z")
        );
    }

    #[test]
    fn test_invalid_expressions() {
        for expr in ["yesterday", "3_fortnights_ago", "x_days_ago", "2024-13-01"] {
            let err = parse_newer_than(expr, now()).unwrap_err();
            assert!(matches!(err, FilterError::InvalidTimeWindow(_)), "{expr}");
            assert!(err.to_string().starts_with("Invalid newer-than value:"));
        }
    }
}
