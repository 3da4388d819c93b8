//! Day-of-week enumeration with Monday-based indexing.

use crate::error::CalendarError;

/// Day of the week.
///
/// Indices are Monday-based: Monday = 0 through Sunday = 6. This matches
/// the weekday-set convention used by rotation configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (index 0).
    Monday = 0,
    /// Tuesday (index 1).
    Tuesday = 1,
    /// Wednesday (index 2).
    Wednesday = 2,
    /// Thursday (index 3).
    Thursday = 3,
    /// Friday (index 4).
    Friday = 4,
    /// Saturday (index 5).
    Saturday = 5,
    /// Sunday (index 6).
    Sunday = 6,
}

impl Weekday {
    /// All seven weekdays in index order.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a `Weekday` from its Monday-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `index` is not in 0..=6.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CalendarError::InvalidWeekday { index })
    }

    /// Returns the Monday-based index of this weekday (matches the
    /// `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this weekday.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}
