//! Bell schedule: wall-clock intervals resolved to period labels.

use rotaday_calendar::ClockTime;

use crate::error::RotationError;
use crate::patterns::{Pattern, SchedulePatterns};

/// What a bell interval resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BellSlot {
    /// The nth teaching block (1-based) of the day's pattern.
    Block(usize),
    /// A literal label, e.g. lunch or a transition period.
    Label(String),
}

/// A wall-clock interval with both bounds inclusive.
///
/// Intervals are checked in configuration order, so at a shared boundary
/// the earlier interval wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellInterval {
    start: ClockTime,
    end: ClockTime,
    slot: BellSlot,
}

impl BellInterval {
    /// Returns the interval start.
    pub fn start(&self) -> ClockTime {
        self.start
    }

    /// Returns the interval end (inclusive).
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Returns what this interval resolves to.
    pub fn slot(&self) -> &BellSlot {
        &self.slot
    }

    /// Whether a time falls within this interval (both bounds inclusive).
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// An ordered bell schedule plus a fallback label for times outside
/// every interval.
///
/// Pure configuration data: new bell schedules are added by editing the
/// configuration, not the code.
#[derive(Debug, Clone)]
pub struct BellSchedule {
    intervals: Vec<BellInterval>,
    fallback: String,
}

impl BellSchedule {
    /// Creates an empty schedule with the given fallback label.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            intervals: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Appends an interval resolving to the nth teaching block.
    pub fn with_block(mut self, start: ClockTime, end: ClockTime, block: usize) -> Self {
        self.intervals.push(BellInterval {
            start,
            end,
            slot: BellSlot::Block(block),
        });
        self
    }

    /// Appends an interval resolving to a literal label.
    pub fn with_label(mut self, start: ClockTime, end: ClockTime, label: impl Into<String>) -> Self {
        self.intervals.push(BellInterval {
            start,
            end,
            slot: BellSlot::Label(label.into()),
        });
        self
    }

    /// Returns the intervals in configuration order.
    pub fn intervals(&self) -> &[BellInterval] {
        &self.intervals
    }

    /// Returns the fallback label.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Validates this schedule against a pattern table.
    ///
    /// Checks that no interval is inverted and that every block reference
    /// stays within the block count of every pattern it could resolve
    /// against.
    pub fn validate(&self, patterns: &SchedulePatterns) -> Result<(), RotationError> {
        for interval in &self.intervals {
            if interval.start > interval.end {
                return Err(RotationError::InvertedBellInterval {
                    start: interval.start,
                    end: interval.end,
                });
            }
            if let BellSlot::Block(block) = interval.slot {
                for cycle_day in 1..=patterns.rotation_length() {
                    let pattern_len = patterns
                        .pattern(cycle_day)
                        .map(Pattern::len)
                        .unwrap_or_default();
                    if block == 0 || block > pattern_len {
                        return Err(RotationError::BlockOutOfRange {
                            block,
                            cycle_day,
                            pattern_len,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolves the label in effect at `time` for a day following
    /// `pattern`.
    ///
    /// The first interval containing `time` wins; block references past
    /// the pattern's end (prevented by [`validate`]) and times outside
    /// every interval yield the fallback label.
    ///
    /// [`validate`]: BellSchedule::validate
    pub fn label_at(&self, pattern: &Pattern, time: ClockTime) -> String {
        for interval in &self.intervals {
            if interval.contains(time) {
                return match &interval.slot {
                    BellSlot::Block(n) => pattern
                        .block(*n)
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| self.fallback.clone()),
                    BellSlot::Label(label) => label.clone(),
                };
            }
        }
        self.fallback.clone()
    }
}
