//! Conversion functions: TOML config structs -> crate API config types.

use std::path::Path;

use anyhow::{Context, Result, bail};

use rotaday_calendar::{CivilDate, ClockTime, Weekday};
use rotaday_rotation::{
    Anchor, BellSchedule, HolidayRange, RotationCalendar, RotationConfig, SchedulePatterns,
};

use crate::config::{BellToml, RotadayConfig};

/// Label applied to holidays configured without one.
const DEFAULT_HOLIDAY_LABEL: &str = "Holiday";

/// A fully validated calculator plus its optional bell schedule.
pub struct LoadedCalendar {
    pub calendar: RotationCalendar,
    pub bells: Option<BellSchedule>,
}

/// Reads, parses, converts, and validates a configuration file.
///
/// Configuration integrity violations (missing patterns, bad anchor
/// cycle day, inverted ranges, bad bell block references) are fatal here
/// so they never surface at runtime.
pub fn load_calendar(path: &Path) -> Result<LoadedCalendar> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: RotadayConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let rotation = build_rotation_config(&config)?;
    let patterns = build_patterns(&config)?;
    let bells = match &config.bell {
        Some(bell) => {
            let bells = build_bells(bell)?;
            bells
                .validate(&patterns)
                .context("invalid [bell] configuration")?;
            Some(bells)
        }
        None => None,
    };

    let calendar = RotationCalendar::new(rotation, patterns)
        .context("invalid rotation configuration")?;
    Ok(LoadedCalendar { calendar, bells })
}

/// Builds the rotation configuration from the TOML representation.
pub fn build_rotation_config(config: &RotadayConfig) -> Result<RotationConfig> {
    let anchor_date = parse_date(&config.anchor.date, "anchor.date")?;
    let anchor = Anchor::new(anchor_date, config.anchor.cycle_day);

    let mut weekdays = Vec::with_capacity(config.school_weekdays.len());
    for &index in &config.school_weekdays {
        let day = Weekday::from_index(index)
            .with_context(|| format!("bad school_weekdays entry {index}"))?;
        weekdays.push(day);
    }

    let mut rotation = RotationConfig::new(config.rotation_length, anchor)
        .with_school_weekdays(weekdays)
        .with_carry_over(config.carry_over);

    for holiday in &config.holidays {
        let date = parse_date(&holiday.date, "holidays")?;
        let label = holiday.label.as_deref().unwrap_or(DEFAULT_HOLIDAY_LABEL);
        rotation = rotation.with_holiday(date, label);
    }
    for range in &config.holiday_ranges {
        let start = parse_date(&range.start, "holiday_ranges")?;
        let end = parse_date(&range.end, "holiday_ranges")?;
        let label = range.label.as_deref().unwrap_or(DEFAULT_HOLIDAY_LABEL);
        rotation = rotation.with_holiday_range(HolidayRange::new(start, end, label));
    }
    for half_day in &config.half_days {
        rotation = rotation.with_half_day(parse_date(half_day, "half_days")?);
    }

    Ok(rotation)
}

/// Builds the pattern table from the TOML `[patterns]` map.
pub fn build_patterns(config: &RotadayConfig) -> Result<SchedulePatterns> {
    let mut entries = Vec::with_capacity(config.patterns.len());
    for (key, blocks) in &config.patterns {
        let cycle_day: u8 = key
            .parse()
            .map_err(|_| anyhow::anyhow!("bad [patterns] key {key:?}: cycle days are integers"))?;
        entries.push((cycle_day, blocks.clone()));
    }
    SchedulePatterns::new(config.rotation_length, entries).context("invalid [patterns] table")
}

/// Builds the bell schedule from the TOML `[bell]` table.
///
/// Each interval must have exactly one of `block` or `label`.
pub fn build_bells(bell: &BellToml) -> Result<BellSchedule> {
    let mut bells = BellSchedule::new(bell.fallback.clone());
    for interval in &bell.intervals {
        let start = parse_time(&interval.start)?;
        let end = parse_time(&interval.end)?;
        match (interval.block, &interval.label) {
            (Some(block), None) => bells = bells.with_block(start, end, block),
            (None, Some(label)) => bells = bells.with_label(start, end, label),
            (Some(_), Some(_)) => {
                bail!("bell interval must have exactly one of block or label, got both")
            }
            (None, None) => {
                bail!("bell interval must have exactly one of block or label, got neither")
            }
        }
    }
    Ok(bells)
}

fn parse_date(input: &str, field: &str) -> Result<CivilDate> {
    CivilDate::parse_iso(input).with_context(|| format!("bad date in {field}"))
}

fn parse_time(input: &str) -> Result<ClockTime> {
    ClockTime::parse(input).context("bad time in [bell] interval")
}
