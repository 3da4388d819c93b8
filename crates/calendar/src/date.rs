//! Proleptic-Gregorian calendar date with validated construction.

use std::fmt;

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month of the given year.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// A calendar date in the proleptic Gregorian calendar.
///
/// Always holds a valid (year, month, day) combination; the constructors
/// reject impossible dates such as February 30 or February 29 in a
/// common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// and [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Parses a date from its `YYYY-MM-DD` string form.
    ///
    /// This is the only accepted external date format. The year must have
    /// four digits and month and day two each.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the input does not have
    /// the `YYYY-MM-DD` shape, and [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDay`] if the fields parse but name an
    /// impossible date.
    pub fn parse_iso(input: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDate {
            input: input.to_string(),
        };
        let mut parts = input.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
                (y, m, d)
            }
            _ => return Err(invalid()),
        };
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u8 = m.parse().map_err(|_| invalid())?;
        let day: u8 = d.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the next calendar date.
    ///
    /// Month and year boundaries are handled automatically; December 31
    /// wraps to January 1 of the following year.
    pub fn next(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Returns the number of days between this date and 1970-01-01,
    /// negative for earlier dates.
    ///
    /// Uses era-based arithmetic over 400-year Gregorian cycles, so it is
    /// exact for any representable year.
    pub fn days_from_epoch(self) -> i64 {
        let y = if self.month <= 2 {
            i64::from(self.year) - 1
        } else {
            i64::from(self.year)
        };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let mp = if m > 2 { m - 3 } else { m + 9 };
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Returns the weekday of this date.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday, index 3 with Monday = 0.
        let index = (self.days_from_epoch() + 3).rem_euclid(7) as u8;
        Weekday::from_index(index).expect("index mod 7 is always a valid weekday")
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CivilDate::new(2025, 9, 4).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 4);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CivilDate::new(2025, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            CivilDate::new(2025, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            CivilDate::new(2025, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2025,
                max_day: 28,
            }
        );
        assert_eq!(
            CivilDate::new(2025, 4, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                year: 2025,
                max_day: 30,
            }
        );
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(1900));

        // Feb 29 exists only in leap years.
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn parse_iso_valid() {
        let date = CivilDate::parse_iso("2025-09-04").unwrap();
        assert_eq!(date, CivilDate::new(2025, 9, 4).unwrap());
    }

    #[test]
    fn parse_iso_malformed() {
        for input in [
            "",
            "today",
            "2025-9-4",
            "2025/09/04",
            "04-09-2025",
            "2025-09",
            "2025-09-04T00:00",
            "20250904",
        ] {
            assert_eq!(
                CivilDate::parse_iso(input).unwrap_err(),
                CalendarError::InvalidDate {
                    input: input.to_string()
                },
                "input {input:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn parse_iso_impossible_date() {
        // Well-formed string, impossible date: component error, not InvalidDate.
        assert_eq!(
            CivilDate::parse_iso("2025-13-01").unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            CivilDate::parse_iso("2025-02-30").unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                year: 2025,
                max_day: 28,
            }
        );
    }

    #[test]
    fn display_roundtrips_parse() {
        let date = CivilDate::new(2025, 9, 4).unwrap();
        assert_eq!(date.to_string(), "2025-09-04");
        assert_eq!(CivilDate::parse_iso(&date.to_string()).unwrap(), date);
    }

    #[test]
    fn next_within_month() {
        let date = CivilDate::new(2025, 9, 4).unwrap();
        assert_eq!(date.next(), CivilDate::new(2025, 9, 5).unwrap());
    }

    #[test]
    fn next_month_boundary() {
        let date = CivilDate::new(2025, 9, 30).unwrap();
        assert_eq!(date.next(), CivilDate::new(2025, 10, 1).unwrap());
    }

    #[test]
    fn next_year_boundary() {
        let date = CivilDate::new(2025, 12, 31).unwrap();
        assert_eq!(date.next(), CivilDate::new(2026, 1, 1).unwrap());
    }

    #[test]
    fn next_leap_february() {
        let feb28 = CivilDate::new(2024, 2, 28).unwrap();
        assert_eq!(feb28.next(), CivilDate::new(2024, 2, 29).unwrap());
        assert_eq!(feb28.next().next(), CivilDate::new(2024, 3, 1).unwrap());

        let common_feb28 = CivilDate::new(2025, 2, 28).unwrap();
        assert_eq!(common_feb28.next(), CivilDate::new(2025, 3, 1).unwrap());
    }

    #[test]
    fn days_from_epoch_anchors() {
        assert_eq!(CivilDate::new(1970, 1, 1).unwrap().days_from_epoch(), 0);
        assert_eq!(CivilDate::new(1970, 1, 2).unwrap().days_from_epoch(), 1);
        assert_eq!(CivilDate::new(1969, 12, 31).unwrap().days_from_epoch(), -1);
        // 30 years, 7 of them leap (1972..=1996).
        assert_eq!(
            CivilDate::new(2000, 1, 1).unwrap().days_from_epoch(),
            10_957
        );
    }

    #[test]
    fn days_from_epoch_consistent_with_next() {
        let mut date = CivilDate::new(2024, 2, 27).unwrap();
        let mut days = date.days_from_epoch();
        for _ in 0..400 {
            date = date.next();
            days += 1;
            assert_eq!(date.days_from_epoch(), days, "mismatch at {date}");
        }
    }

    #[test]
    fn weekday_known_dates() {
        // 1970-01-01 was a Thursday.
        assert_eq!(
            CivilDate::new(1970, 1, 1).unwrap().weekday(),
            Weekday::Thursday
        );
        // 2000-01-01 was a Saturday.
        assert_eq!(
            CivilDate::new(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
        // 2025-09-04 was a Thursday.
        assert_eq!(
            CivilDate::new(2025, 9, 4).unwrap().weekday(),
            Weekday::Thursday
        );
        // 2025-09-06 was a Saturday.
        assert_eq!(
            CivilDate::new(2025, 9, 6).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn ordering() {
        let a = CivilDate::new(2025, 9, 4).unwrap();
        let b = CivilDate::new(2025, 9, 5).unwrap();
        let c = CivilDate::new(2026, 1, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, CivilDate::new(2025, 9, 4).unwrap());
    }

    #[test]
    fn copy_and_hash_traits() {
        fn assert_copy<T: Copy>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<CivilDate>();
        assert_hash::<CivilDate>();
    }
}
