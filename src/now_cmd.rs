//! Now command: today's classification plus the active period.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::convert;
use crate::day_cmd;
use crate::wallclock;

/// Run the `now` subcommand.
pub fn run(config: &Path) -> Result<()> {
    let loaded = convert::load_calendar(config)?;
    let date = wallclock::today();
    let time = wallclock::now();
    info!(%date, %time, "resolving current period");

    print!("{}", day_cmd::render(&loaded.calendar, date)?);
    match &loaded.bells {
        Some(bells) => {
            // A before-anchor day was already reported by the rendering
            // above; a non-school day has no period to name.
            if let Ok(Some(label)) = loaded.calendar.block_label_at(date, time, bells) {
                println!("  Current period ({time}): {label}");
            }
        }
        None => {
            println!("  No [bell] table in the configuration; current period unavailable.");
        }
    }
    Ok(())
}
