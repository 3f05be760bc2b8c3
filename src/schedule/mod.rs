//! # Schedule Module
//!
//! The assembled result of a run: one [`DayRecord`] per program and weekday,
//! keyed by program header name. [`builder::ScheduleBuilder`] drives the
//! layout, categorize and music modules to produce it.
pub mod builder;
pub mod program;
pub mod weekday;

pub use weekday::Weekday;

use crate::categorize::CategoryItem;
use crate::categorize::DayRecord;
use crate::error::RundownError;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A unit of work that could not be located. The unit is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Sheet '{0}' not found")]
    Sheet(String),

    #[error("Column of program '{program}' not found in sheet '{sheet}'")]
    ProgramColumn { program: String, sheet: String },
}

/// Program name -> weekday -> record. Both levels iterate in a stable order,
/// so serializing the same schedule twice gives identical output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProgramSchedule(BTreeMap<String, BTreeMap<Weekday, DayRecord>>);

impl ProgramSchedule {
    pub fn get(&self, program: &str, weekday: Weekday) -> Option<&DayRecord> {
        self.0.get(program).and_then(|days| days.get(&weekday))
    }

    pub fn insert(&mut self, program: &str, weekday: Weekday, record: DayRecord) {
        self.0
            .entry(program.to_owned())
            .or_default()
            .insert(weekday, record);
    }

    pub fn programs(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Records of one program in week order.
    pub fn days(&self, program: &str) -> impl Iterator<Item = (Weekday, &DayRecord)> + '_ {
        self.0
            .get(program)
            .into_iter()
            .flat_map(|days| days.iter().map(|(weekday, record)| (*weekday, record)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Category name and values of one record, text or song.
    pub fn categories(
        &self,
        program: &str,
        weekday: Weekday,
    ) -> Option<Vec<(&'static str, Vec<CategoryItem<'_>>)>> {
        self.get(program, weekday).map(DayRecord::categories)
    }

    /// Pretty JSON for downstream consumers.
    pub fn to_json(&self) -> Result<String, RundownError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
