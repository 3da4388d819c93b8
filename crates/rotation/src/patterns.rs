//! Schedule patterns: the cycle-day to block-letter table.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RotationError;

/// An ordered sequence of block letters for one cycle day, e.g. `ABCD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(String);

impl Pattern {
    pub(crate) fn new(blocks: impl Into<String>) -> Self {
        Self(blocks.into())
    }

    /// Returns the block letters in teaching order.
    pub fn blocks(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Returns the nth block letter (1-based), or `None` past the end.
    pub fn block(&self, n: usize) -> Option<char> {
        n.checked_sub(1).and_then(|i| self.0.chars().nth(i))
    }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the pattern has no blocks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the pattern as its compact string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The complete cycle-day to pattern table for one rotation.
///
/// Construction enforces the configuration invariant that every cycle
/// day in 1..=rotation_length has a non-empty pattern, so lookups for
/// in-range cycle days cannot fail afterwards.
#[derive(Debug, Clone)]
pub struct SchedulePatterns {
    rotation_length: u8,
    by_day: Vec<Pattern>,
}

impl SchedulePatterns {
    /// Builds the table from (cycle day, blocks) entries.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidCycleDay`] for an entry outside
    /// 1..=rotation_length, [`RotationError::MissingPattern`] if any
    /// cycle day has no entry, and [`RotationError::EmptyPattern`] for a
    /// blockless entry.
    pub fn new(
        rotation_length: u8,
        entries: impl IntoIterator<Item = (u8, String)>,
    ) -> Result<Self, RotationError> {
        let mut map = BTreeMap::new();
        for (cycle_day, blocks) in entries {
            if !(1..=rotation_length).contains(&cycle_day) {
                return Err(RotationError::InvalidCycleDay {
                    cycle_day,
                    rotation_length,
                });
            }
            map.insert(cycle_day, blocks);
        }

        let mut by_day = Vec::with_capacity(rotation_length as usize);
        for cycle_day in 1..=rotation_length {
            let blocks = map
                .remove(&cycle_day)
                .ok_or(RotationError::MissingPattern { cycle_day })?;
            if blocks.is_empty() {
                return Err(RotationError::EmptyPattern { cycle_day });
            }
            by_day.push(Pattern::new(blocks));
        }

        Ok(Self {
            rotation_length,
            by_day,
        })
    }

    /// Returns the rotation length this table covers.
    pub fn rotation_length(&self) -> u8 {
        self.rotation_length
    }

    /// Returns the pattern for a cycle day, or `None` outside
    /// 1..=rotation_length.
    pub fn pattern(&self, cycle_day: u8) -> Option<&Pattern> {
        if !(1..=self.rotation_length).contains(&cycle_day) {
            return None;
        }
        self.by_day.get(usize::from(cycle_day) - 1)
    }
}
