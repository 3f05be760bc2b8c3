//! # Rusty Rundown
//!
//! Turns a weekly radio broadcast schedule sheet into structured, per-program
//! daily rundowns. A sheet is a free-form grid: columns are headed by program
//! names, a remarks column carries one segment tag per Monday..Thursday block,
//! and Friday, Saturday and Sunday each start at a section anchor row.
//!
//! ## Pipeline
//!
//! - [`layout`]: locates the anchor rows and derives one row range per weekday
//! - [`categorize`]: buckets each day's lines into a program's categories
//! - [`music`]: resolves song mentions against a reference catalog
//! - [`schedule`]: drives the pipeline and assembles the [`ProgramSchedule`]
//!
//! ## Collaborators
//!
//! Sheets, the music catalog, recording schedules and broadcast status are
//! fetched through the traits of [`source`]. Collaborator failures degrade the
//! output to sentinel values and are reported as [`DataQualityWarning`]s.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rusty_rundown::{Config, Grid, MusicCatalog, ScheduleBuilder, Weekday};
//!
//! let grid = Grid::from_rows("6/2週", vec![
//!     vec!["ワイド", "備考"],
//!     vec!["♪Sunrise", "★"],
//!     vec!["", "★"],
//!     vec!["", "★"],
//!     vec!["", "★"],
//!     vec!["【金曜】", ""],
//!     vec!["【土曜】", ""],
//!     vec!["【日曜】", ""],
//!     vec!["【連絡事項】", ""],
//! ]);
//! let builder = ScheduleBuilder::new(Config::default(), MusicCatalog::default(), None, None);
//! let sheet = builder.build(&grid, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()).unwrap();
//! assert_eq!(sheet.schedule.get("ワイド", Weekday::Monday).unwrap().date(), "6/2(月)");
//! ```
pub mod categorize;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod music;
pub mod schedule;
pub mod source;

pub use crate::categorize::DayRecord;
pub use crate::config::Config;
pub use crate::error::DataQualityWarning;
pub use crate::error::RundownError;
pub use crate::grid::Grid;
pub use crate::music::catalog::MusicCatalog;
pub use crate::music::MusicEntry;
pub use crate::schedule::builder::ScheduleBuilder;
pub use crate::schedule::builder::SheetSchedule;
pub use crate::schedule::builder::WeeklyRun;
pub use crate::schedule::ProgramSchedule;
pub use crate::schedule::Weekday;
