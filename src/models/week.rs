//! Calendar-week helpers.
//!
//! A rota week always starts on Monday, regardless of locale. Availability
//! is keyed by lowercase English weekday names (`"monday"` .. `"sunday"`).

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Result, RotaError};

/// Weekdays in rota order (Monday first).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase weekday key used by [`Availability`](super::Availability).
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parses a weekday key. Accepts any casing of the full English name.
pub fn parse_day_name(name: &str) -> Option<Weekday> {
    let lower = name.trim().to_ascii_lowercase();
    WEEKDAYS.into_iter().find(|&d| day_name(d) == lower)
}

/// Monday of the week containing `anchor`.
///
/// `None` when that Monday precedes [`NaiveDate::MIN`].
pub fn week_start(anchor: NaiveDate) -> Option<NaiveDate> {
    anchor.checked_sub_days(Days::new(u64::from(anchor.weekday().num_days_from_monday())))
}

/// The dates (Monday → Sunday) of the week containing `anchor`.
///
/// Always seven dates, except for the weeks clipped by
/// [`NaiveDate::MIN`] or [`NaiveDate::MAX`], which yield only the dates
/// that exist.
pub fn week_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let offset = anchor.weekday().num_days_from_monday();
    (0..7u32)
        .filter_map(|i| {
            if i < offset {
                anchor.checked_sub_days(Days::new(u64::from(offset - i)))
            } else {
                anchor.checked_add_days(Days::new(u64::from(i - offset)))
            }
        })
        .collect()
}

/// Parses a `YYYY-MM-DD` week anchor.
pub fn parse_anchor(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| RotaError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Whether `date` falls in the same rota week as `anchor`.
#[inline]
pub fn in_week(anchor: NaiveDate, date: NaiveDate) -> bool {
    anchor.iso_week() == date.iso_week()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_from_midweek() {
        // 2024-01-03 is a Wednesday
        assert_eq!(week_start(d(2024, 1, 3)), Some(d(2024, 1, 1)));
    }

    #[test]
    fn test_week_start_sunday_belongs_to_previous_monday() {
        // Sunday 2024-01-07 closes the week that began Monday 2024-01-01
        assert_eq!(week_start(d(2024, 1, 7)), Some(d(2024, 1, 1)));
        assert_eq!(week_start(d(2024, 1, 8)), Some(d(2024, 1, 8)));
    }

    #[test]
    fn test_week_dates_cross_year() {
        // Week of Monday 2024-12-30 spans into 2025
        let dates = week_dates(d(2025, 1, 2));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], d(2024, 12, 30));
        assert_eq!(dates[6], d(2025, 1, 5));
        for (date, day) in dates.iter().zip(WEEKDAYS) {
            assert_eq!(date.weekday(), day);
        }
    }

    #[test]
    fn test_week_clipped_at_calendar_bounds() {
        let min = NaiveDate::MIN;
        let from_monday = min.weekday().num_days_from_monday() as usize;
        let dates = week_dates(min);
        assert_eq!(dates.len(), 7 - from_monday);
        assert_eq!(dates[0], min);
        assert_eq!(week_start(min).is_some(), from_monday == 0);

        let max = NaiveDate::MAX;
        let dates = week_dates(max);
        assert_eq!(dates.len(), max.weekday().num_days_from_monday() as usize + 1);
        assert_eq!(dates.last(), Some(&max));
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }

        assert!(in_week(max, max));
        assert!(in_week(min, min));
    }

    #[test]
    fn test_day_name_round_trip() {
        for day in WEEKDAYS {
            assert_eq!(parse_day_name(day_name(day)), Some(day));
        }
        assert_eq!(parse_day_name("Monday"), Some(Weekday::Mon));
        assert_eq!(parse_day_name(" SUNDAY "), Some(Weekday::Sun));
        assert_eq!(parse_day_name("mon"), None);
    }

    #[test]
    fn test_parse_anchor() {
        assert_eq!(parse_anchor(" 2024-01-03 ").unwrap(), d(2024, 1, 3));

        let err = parse_anchor("03/01/2024").unwrap_err();
        assert!(matches!(err, RotaError::InvalidDate { .. }));
        assert!(err.to_string().contains("03/01/2024"));
    }

    #[test]
    fn test_in_week() {
        let anchor = d(2024, 1, 3);
        assert!(in_week(anchor, d(2024, 1, 1)));
        assert!(in_week(anchor, d(2024, 1, 7)));
        assert!(!in_week(anchor, d(2023, 12, 31)));
        assert!(!in_week(anchor, d(2024, 1, 8)));
    }
}
