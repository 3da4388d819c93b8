//! # rotaday-rotation
//!
//! The rotation-day calculator: maps calendar dates onto a recurring
//! N-day school rotation, accounting for weekends, holidays, holiday
//! ranges, and half days.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["RotationConfig"] -->|"RotationCalendar::new()"| C["RotationCalendar"]
//!     B["SchedulePatterns"] -->|"RotationCalendar::new()"| C
//!     C -->|".classify(date)"| D["DayClass"]
//!     C -->|".cycle_day_of(date)"| E["cycle day 1..=N"]
//!     C -->|".block_label_at(date, time, bells)"| F["period label"]
//!     G["BellSchedule"] --> F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use rotaday_calendar::CivilDate;
//! use rotaday_rotation::{Anchor, RotationCalendar, RotationConfig, SchedulePatterns};
//!
//! let anchor = Anchor::new(CivilDate::parse_iso("2025-09-04")?, 1);
//! let config = RotationConfig::new(8, anchor);
//! let patterns = SchedulePatterns::new(8, entries)?;
//! let calendar = RotationCalendar::new(config, patterns)?;
//!
//! let class = calendar.classify(CivilDate::parse_iso("2025-09-08")?)?;
//! assert_eq!(class.cycle_day(), Some(3));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Anchor, school week, holidays, half days, carry-over |
//! | `patterns` | Cycle-day to block-letter table |
//! | `bells` | Wall-clock intervals resolved to period labels |
//! | `classify` | Day classification output type |
//! | `calendar` | The calculator itself |
//! | `error` | Error types |

mod bells;
mod calendar;
mod classify;
mod config;
mod error;
mod patterns;

pub use bells::{BellInterval, BellSchedule, BellSlot};
pub use calendar::RotationCalendar;
pub use classify::DayClass;
pub use config::{Anchor, HolidayRange, RotationConfig};
pub use error::RotationError;
pub use patterns::{Pattern, SchedulePatterns};
