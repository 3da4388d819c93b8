//! Rotation configuration: anchor, school week, holidays, half days.

use std::collections::{BTreeMap, BTreeSet};

use rotaday_calendar::{CivilDate, Weekday};

use crate::error::RotationError;

/// A known (date, cycle day) reference point.
///
/// All other cycle days are computed from the anchor by counting
/// advancement days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    date: CivilDate,
    cycle_day: u8,
}

impl Anchor {
    /// Creates a new anchor. The cycle day is validated against the
    /// rotation length by [`RotationConfig::validate`].
    pub fn new(date: CivilDate, cycle_day: u8) -> Self {
        Self { date, cycle_day }
    }

    /// Returns the anchor date.
    pub fn date(self) -> CivilDate {
        self.date
    }

    /// Returns the cycle day in effect on the anchor date.
    pub fn cycle_day(self) -> u8 {
        self.cycle_day
    }
}

/// An inclusive [start, end] span of holiday dates with a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRange {
    start: CivilDate,
    end: CivilDate,
    label: String,
}

impl HolidayRange {
    /// Creates a new labeled holiday range. Inverted ranges are rejected
    /// by [`RotationConfig::validate`].
    pub fn new(start: CivilDate, end: CivilDate, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Returns the first date of the range.
    pub fn start(&self) -> CivilDate {
        self.start
    }

    /// Returns the last date of the range (inclusive).
    pub fn end(&self) -> CivilDate {
        self.end
    }

    /// Returns the range label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a date falls within this range (both bounds inclusive).
    pub fn contains(&self, date: CivilDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Immutable rotation configuration.
///
/// Use the builder methods to customise parameters, then [`validate`]
/// before use. Loaded once at process start and read-only afterwards.
///
/// # Example
///
/// ```ignore
/// use rotaday_rotation::{Anchor, RotationConfig};
/// use rotaday_calendar::CivilDate;
///
/// let anchor = Anchor::new(CivilDate::parse_iso("2025-09-04")?, 1);
/// let config = RotationConfig::new(8, anchor)
///     .with_holiday(CivilDate::parse_iso("2025-10-13")?, "Fall break");
/// config.validate()?;
/// ```
///
/// [`validate`]: RotationConfig::validate
#[derive(Debug, Clone)]
pub struct RotationConfig {
    rotation_length: u8,
    anchor: Anchor,
    school_weekdays: BTreeSet<Weekday>,
    holidays: BTreeMap<CivilDate, String>,
    holiday_ranges: Vec<HolidayRange>,
    half_days: BTreeSet<CivilDate>,
    carry_over: bool,
}

impl RotationConfig {
    /// Creates a new configuration with the given rotation length and
    /// anchor.
    ///
    /// Defaults: school weekdays Monday through Friday, no holidays, no
    /// half days, carry-over enabled.
    pub fn new(rotation_length: u8, anchor: Anchor) -> Self {
        Self {
            rotation_length,
            anchor,
            school_weekdays: BTreeSet::from([
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ]),
            holidays: BTreeMap::new(),
            holiday_ranges: Vec::new(),
            half_days: BTreeSet::new(),
            carry_over: true,
        }
    }

    /// Replaces the set of school weekdays.
    pub fn with_school_weekdays(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.school_weekdays = days.into_iter().collect();
        self
    }

    /// Adds a labeled single-day holiday.
    pub fn with_holiday(mut self, date: CivilDate, label: impl Into<String>) -> Self {
        self.holidays.insert(date, label.into());
        self
    }

    /// Adds a holiday range.
    pub fn with_holiday_range(mut self, range: HolidayRange) -> Self {
        self.holiday_ranges.push(range);
        self
    }

    /// Adds a half day.
    pub fn with_half_day(mut self, date: CivilDate) -> Self {
        self.half_days.insert(date);
        self
    }

    /// Sets the carry-over policy.
    ///
    /// When enabled (the default, and the only observed setting),
    /// non-school days do not advance the cycle counter. When disabled,
    /// every calendar day advances it.
    pub fn with_carry_over(mut self, carry_over: bool) -> Self {
        self.carry_over = carry_over;
        self
    }

    // --- Accessors ---

    /// Returns the rotation length.
    pub fn rotation_length(&self) -> u8 {
        self.rotation_length
    }

    /// Returns the anchor.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the set of school weekdays.
    pub fn school_weekdays(&self) -> &BTreeSet<Weekday> {
        &self.school_weekdays
    }

    /// Returns the single-day holidays with their labels.
    pub fn holidays(&self) -> &BTreeMap<CivilDate, String> {
        &self.holidays
    }

    /// Returns the holiday ranges in configuration order.
    pub fn holiday_ranges(&self) -> &[HolidayRange] {
        &self.holiday_ranges
    }

    /// Returns the set of half days.
    pub fn half_days(&self) -> &BTreeSet<CivilDate> {
        &self.half_days
    }

    /// Returns the carry-over policy.
    pub fn carry_over(&self) -> bool {
        self.carry_over
    }

    /// Validates this configuration.
    ///
    /// Checks that the rotation length is positive, the anchor cycle day
    /// is in 1..=rotation_length, the school weekday set is non-empty,
    /// and every holiday range has start <= end.
    pub fn validate(&self) -> Result<(), RotationError> {
        if self.rotation_length == 0 {
            return Err(RotationError::InvalidRotationLength {
                length: self.rotation_length,
            });
        }
        if !(1..=self.rotation_length).contains(&self.anchor.cycle_day()) {
            return Err(RotationError::InvalidCycleDay {
                cycle_day: self.anchor.cycle_day(),
                rotation_length: self.rotation_length,
            });
        }
        if self.school_weekdays.is_empty() {
            return Err(RotationError::EmptySchoolWeek);
        }
        for range in &self.holiday_ranges {
            if range.start() > range.end() {
                return Err(RotationError::InvertedHolidayRange {
                    start: range.start(),
                    end: range.end(),
                });
            }
        }
        Ok(())
    }
}
