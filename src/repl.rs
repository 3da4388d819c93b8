//! Interactive console loop.
//!
//! Accepts a menu selection or a bare ISO date. Unrecognized dates are
//! reported and the loop continues; `q`, `quit`, or `exit` ends it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use rotaday_calendar::CivilDate;

use crate::anchor_cmd;
use crate::convert;
use crate::day_cmd;
use crate::wallclock;

const MENU: &str = "\
Actions:
  1: today's rotation data
  2: anchor data
  q: quit
or enter a date (YYYY-MM-DD) for that day's data";

/// Run the interactive console.
pub fn run(config: &Path) -> Result<()> {
    let loaded = convert::load_calendar(config)?;
    println!("rotaday — school rotation calculator");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("{MENU}");
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed; behave like quit.
            break;
        };
        let line = line?;
        let input = line.trim();
        debug!(input, "console input");

        match input {
            "" => {}
            "1" => {
                let today = wallclock::today();
                print!("{}", day_cmd::render(&loaded.calendar, today)?);
            }
            "2" => {
                print!("{}", anchor_cmd::render(&loaded.calendar));
            }
            "q" | "quit" | "exit" => break,
            other => match CivilDate::parse_iso(other) {
                Ok(date) => print!("{}", day_cmd::render(&loaded.calendar, date)?),
                Err(e) => println!("{e}"),
            },
        }
    }
    println!("bye");
    Ok(())
}
