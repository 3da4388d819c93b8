use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level rotaday configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotadayConfig {
    /// Number of days in the rotation.
    pub rotation_length: u8,

    /// Known (date, cycle day) reference point.
    pub anchor: AnchorToml,

    /// Weekday indices that are school days (Monday = 0).
    #[serde(default = "default_school_weekdays")]
    pub school_weekdays: Vec<u8>,

    /// Single-day holidays.
    #[serde(default)]
    pub holidays: Vec<HolidayToml>,

    /// Inclusive holiday date ranges.
    #[serde(default)]
    pub holiday_ranges: Vec<HolidayRangeToml>,

    /// Half days (shortened schedule, still school days).
    #[serde(default)]
    pub half_days: Vec<String>,

    /// Whether non-school days pause the cycle counter.
    #[serde(default = "default_true")]
    pub carry_over: bool,

    /// Schedule patterns keyed by cycle day ("1" = first day).
    pub patterns: BTreeMap<String, String>,

    /// Bell schedule; `now` needs it, everything else works without.
    #[serde(default)]
    pub bell: Option<BellToml>,
}

fn default_school_weekdays() -> Vec<u8> {
    vec![0, 1, 2, 3, 4]
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorToml {
    pub date: String,
    pub cycle_day: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayToml {
    pub date: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayRangeToml {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BellToml {
    #[serde(default = "default_fallback")]
    pub fallback: String,
    #[serde(default)]
    pub intervals: Vec<BellIntervalToml>,
}

fn default_fallback() -> String {
    "Outside scheduled hours".to_string()
}

/// One bell interval — exactly one of `block` or `label` should be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BellIntervalToml {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub block: Option<usize>,
    #[serde(default)]
    pub label: Option<String>,
}
