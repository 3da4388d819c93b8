//! Anchor command: the reference point and days elapsed since it.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use rotaday_rotation::RotationCalendar;

use crate::convert;
use crate::wallclock;

/// Run the `anchor` subcommand.
pub fn run(config: &Path) -> Result<()> {
    let loaded = convert::load_calendar(config)?;
    info!("reporting anchor data");
    print!("{}", render(&loaded.calendar));
    Ok(())
}

/// Renders the anchor data for the console.
pub fn render(calendar: &RotationCalendar) -> String {
    let anchor = calendar.config().anchor();
    let mut out = format!(
        "Anchor date: {} (cycle day {})\n",
        anchor.date(),
        anchor.cycle_day()
    );
    let today = wallclock::today();
    match calendar.school_days_between(anchor.date(), today) {
        Ok(count) => out.push_str(&format!("School days since anchor: {count}\n")),
        // start > end means the anchor hasn't been reached yet.
        Err(_) => out.push_str(&format!("The anchor {} is in the future.\n", anchor.date())),
    }
    out
}
