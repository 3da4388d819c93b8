//! The rotation calculator: date classification and cycle-day computation.

use rotaday_calendar::{CivilDate, ClockTime};

use crate::bells::BellSchedule;
use crate::classify::DayClass;
use crate::config::RotationConfig;
use crate::error::RotationError;
use crate::patterns::SchedulePatterns;

/// Maps calendar dates onto an N-day school rotation.
///
/// A pure function of its configuration and pattern table: no internal
/// state, no I/O, no logging. One instance may be shared freely, nothing
/// mutates after construction.
#[derive(Debug, Clone)]
pub struct RotationCalendar {
    config: RotationConfig,
    patterns: SchedulePatterns,
}

impl RotationCalendar {
    /// Creates a calculator from a configuration and its pattern table.
    ///
    /// # Errors
    ///
    /// Returns any [`RotationConfig::validate`] failure, or
    /// [`RotationError::RotationLengthMismatch`] if the pattern table was
    /// built for a different rotation length.
    pub fn new(
        config: RotationConfig,
        patterns: SchedulePatterns,
    ) -> Result<Self, RotationError> {
        config.validate()?;
        if patterns.rotation_length() != config.rotation_length() {
            return Err(RotationError::RotationLengthMismatch {
                patterns: patterns.rotation_length(),
                config: config.rotation_length(),
            });
        }
        Ok(Self { config, patterns })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Returns the pattern table.
    pub fn patterns(&self) -> &SchedulePatterns {
        &self.patterns
    }

    /// Whether the date's weekday is outside the school weekday set.
    pub fn is_weekend(&self, date: CivilDate) -> bool {
        !self.config.school_weekdays().contains(&date.weekday())
    }

    /// Returns the holiday label for a date, if any.
    ///
    /// Single-day entries are checked before ranges; ranges are checked
    /// in configuration order. Ranges should not overlap, and the first
    /// match wins when they do.
    pub fn holiday_label(&self, date: CivilDate) -> Option<&str> {
        if let Some(label) = self.config.holidays().get(&date) {
            return Some(label.as_str());
        }
        self.config
            .holiday_ranges()
            .iter()
            .find(|range| range.contains(date))
            .map(|range| range.label())
    }

    /// Whether the date is a half day.
    pub fn is_half_day(&self, date: CivilDate) -> bool {
        self.config.half_days().contains(&date)
    }

    /// Whether the date is a school day: not a weekend and not a holiday.
    /// Half days are school days.
    pub fn is_school_day(&self, date: CivilDate) -> bool {
        !self.is_weekend(date) && self.holiday_label(date).is_none()
    }

    /// Counts school days strictly after `start`, up to and including
    /// `end`.
    ///
    /// The boundary is the load-bearing contract: the start date itself
    /// is never counted, the end date is counted when it is a school
    /// day, and `school_days_between(x, x) == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidRange`] when `start > end`.
    pub fn school_days_between(
        &self,
        start: CivilDate,
        end: CivilDate,
    ) -> Result<u32, RotationError> {
        if start > end {
            return Err(RotationError::InvalidRange { start, end });
        }
        let mut count = 0;
        let mut current = start;
        while current < end {
            current = current.next();
            if self.is_school_day(current) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Counts the days that advance the cycle counter between `start`
    /// (exclusive) and `end` (inclusive).
    ///
    /// With carry-over enabled only school days advance the counter;
    /// with it disabled every calendar day does.
    fn advancement_days(&self, start: CivilDate, end: CivilDate) -> Result<u32, RotationError> {
        if self.config.carry_over() {
            self.school_days_between(start, end)
        } else {
            if start > end {
                return Err(RotationError::InvalidRange { start, end });
            }
            Ok((end.days_from_epoch() - start.days_from_epoch()) as u32)
        }
    }

    /// Computes the cycle day (1..=rotation_length) for a date.
    ///
    /// Returns `Ok(None)` when the date is not a school day.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::BeforeAnchor`] when the date precedes the
    /// anchor date: counting in reverse would silently produce a cycle
    /// day with inverted semantics, so the precondition fails explicitly
    /// instead.
    pub fn cycle_day_of(&self, date: CivilDate) -> Result<Option<u8>, RotationError> {
        if !self.is_school_day(date) {
            return Ok(None);
        }
        let anchor = self.config.anchor();
        if date < anchor.date() {
            return Err(RotationError::BeforeAnchor {
                date,
                anchor: anchor.date(),
            });
        }
        let passed = self.advancement_days(anchor.date(), date)?;
        let length = u32::from(self.config.rotation_length());
        let day = (u32::from(anchor.cycle_day()) - 1 + passed) % length + 1;
        Ok(Some(day as u8))
    }

    /// Classifies a date.
    ///
    /// Priority order: a holiday label wins even on a weekend, then
    /// weekend, then half day versus normal school day, the latter two
    /// annotated with the resolved cycle day and pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::BeforeAnchor`] for school days preceding
    /// the anchor; weekends and holidays before the anchor still
    /// classify, since they need no cycle arithmetic.
    pub fn classify(&self, date: CivilDate) -> Result<DayClass, RotationError> {
        if let Some(label) = self.holiday_label(date) {
            return Ok(DayClass::Holiday {
                label: label.to_string(),
            });
        }
        if self.is_weekend(date) {
            return Ok(DayClass::Weekend);
        }
        let cycle_day = self
            .cycle_day_of(date)?
            .expect("a non-weekend, non-holiday date is a school day");
        let pattern = self
            .patterns
            .pattern(cycle_day)
            .expect("every cycle day in 1..=rotation_length has a pattern")
            .clone();
        if self.is_half_day(date) {
            Ok(DayClass::HalfDay { cycle_day, pattern })
        } else {
            Ok(DayClass::School { cycle_day, pattern })
        }
    }

    /// Resolves the period label in effect at `time` on `date`.
    ///
    /// Returns `Ok(None)` for non-school days. On a school day the day's
    /// pattern is resolved and handed to the bell schedule; times outside
    /// every interval yield the schedule's fallback label.
    ///
    /// # Errors
    ///
    /// Propagates [`RotationError::BeforeAnchor`] from classification.
    pub fn block_label_at(
        &self,
        date: CivilDate,
        time: ClockTime,
        bells: &BellSchedule,
    ) -> Result<Option<String>, RotationError> {
        match self.classify(date)? {
            DayClass::HalfDay { pattern, .. } | DayClass::School { pattern, .. } => {
                Ok(Some(bells.label_at(&pattern, time)))
            }
            DayClass::Weekend | DayClass::Holiday { .. } => Ok(None),
        }
    }
}
