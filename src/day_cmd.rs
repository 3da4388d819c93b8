//! Day command: classify a date against the rotation.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use rotaday_calendar::CivilDate;
use rotaday_rotation::{DayClass, RotationCalendar, RotationError};

use crate::cli::DayArgs;
use crate::convert;
use crate::wallclock;

/// Run the `day` subcommand.
pub fn run(config: &Path, args: &DayArgs) -> Result<()> {
    let loaded = convert::load_calendar(config)?;
    let date = match &args.date {
        Some(input) => CivilDate::parse_iso(input)?,
        None => wallclock::today(),
    };
    info!(%date, "classifying date");
    print!("{}", render(&loaded.calendar, date)?);
    Ok(())
}

/// Renders a date's classification for the console.
///
/// A school day before the anchor renders as a warning rather than an
/// error: the calculator refuses to compute a cycle day there, and the
/// presentation layer reports why.
pub fn render(calendar: &RotationCalendar, date: CivilDate) -> Result<String> {
    let mut out = format!("{date} ({}):\n", date.weekday().name());
    match calendar.classify(date) {
        Ok(DayClass::School { cycle_day, pattern }) => {
            out.push_str("  Status: School day\n");
            out.push_str(&format!("  Cycle day: {cycle_day}\n"));
            out.push_str(&format!("  Schedule: {pattern}\n"));
        }
        Ok(DayClass::HalfDay { cycle_day, pattern }) => {
            out.push_str("  Status: Half day\n");
            out.push_str(&format!("  Cycle day: {cycle_day}\n"));
            out.push_str(&format!("  Schedule: {pattern}\n"));
        }
        Ok(DayClass::Holiday { label }) => {
            out.push_str(&format!("  Status: Holiday ({label})\n"));
        }
        Ok(DayClass::Weekend) => {
            out.push_str("  Status: Weekend\n");
        }
        Err(RotationError::BeforeAnchor { anchor, .. }) => {
            out.push_str(&format!(
                "  Warning: {date} precedes the anchor {anchor}; no rotation data\n"
            ));
        }
        Err(e) => return Err(e.into()),
    }
    Ok(out)
}
