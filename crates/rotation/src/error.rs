//! Error types for the rotaday-rotation crate.

use rotaday_calendar::{CivilDate, ClockTime};

/// Error type for all fallible operations in the rotaday-rotation crate.
///
/// Configuration-integrity variants (`InvalidRotationLength`,
/// `InvalidCycleDay`, `EmptySchoolWeek`, `InvertedHolidayRange`,
/// `MissingPattern`, `EmptyPattern`, `RotationLengthMismatch`,
/// `InvertedBellInterval`, `BlockOutOfRange`) surface at load time and
/// should abort startup; the remaining variants are runtime precondition
/// violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RotationError {
    /// Returned when the rotation length is zero.
    #[error("invalid rotation length: {length} (must be positive)")]
    InvalidRotationLength {
        /// The invalid rotation length that was provided.
        length: u8,
    },

    /// Returned when a cycle day is outside 1..=rotation_length.
    #[error("invalid cycle day: {cycle_day} (must be 1..={rotation_length})")]
    InvalidCycleDay {
        /// The invalid cycle day that was provided.
        cycle_day: u8,
        /// The configured rotation length.
        rotation_length: u8,
    },

    /// Returned when the school weekday set is empty.
    #[error("school weekday set is empty (no day could ever be a school day)")]
    EmptySchoolWeek,

    /// Returned when a holiday range has its start after its end.
    #[error("inverted holiday range: {start} > {end}")]
    InvertedHolidayRange {
        /// The range start.
        start: CivilDate,
        /// The range end.
        end: CivilDate,
    },

    /// Returned when a cycle day in 1..=rotation_length has no schedule
    /// pattern.
    #[error("no schedule pattern for cycle day {cycle_day}")]
    MissingPattern {
        /// The cycle day without a pattern.
        cycle_day: u8,
    },

    /// Returned when a cycle day's schedule pattern has no blocks.
    #[error("empty schedule pattern for cycle day {cycle_day}")]
    EmptyPattern {
        /// The cycle day with an empty pattern.
        cycle_day: u8,
    },

    /// Returned when a pattern table was built for a different rotation
    /// length than the configuration it is paired with.
    #[error("pattern table covers {patterns} cycle days but the rotation length is {config}")]
    RotationLengthMismatch {
        /// Rotation length of the pattern table.
        patterns: u8,
        /// Rotation length of the configuration.
        config: u8,
    },

    /// Returned when a range count is requested with start after end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// The range start.
        start: CivilDate,
        /// The range end.
        end: CivilDate,
    },

    /// Returned when a cycle-day computation is requested for a date
    /// preceding the rotation anchor.
    #[error("date {date} precedes the rotation anchor {anchor}")]
    BeforeAnchor {
        /// The requested date.
        date: CivilDate,
        /// The configured anchor date.
        anchor: CivilDate,
    },

    /// Returned when a bell interval has its start after its end.
    #[error("inverted bell interval: {start} > {end}")]
    InvertedBellInterval {
        /// The interval start.
        start: ClockTime,
        /// The interval end.
        end: ClockTime,
    },

    /// Returned when a bell interval references a teaching block outside a
    /// pattern's block count.
    #[error("bell interval block {block} out of range for cycle day {cycle_day} (pattern has {pattern_len} blocks)")]
    BlockOutOfRange {
        /// The 1-based block index the interval references.
        block: usize,
        /// The cycle day whose pattern is too short.
        cycle_day: u8,
        /// The number of blocks in that pattern.
        pattern_len: usize,
    },
}
