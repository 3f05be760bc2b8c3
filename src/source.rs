//! Collaborator contracts consumed by the builder, with in-memory implementations.
//!
//! Fetching sheets, the catalog table, recording schedules and broadcast
//! status is I/O owned by the caller. Each call happens once per run; errors
//! are opaque `anyhow` errors that the core turns into degraded output.

use crate::categorize::context::BroadcastStatus;
use crate::grid::Grid;
use anyhow::anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Weekly sheets of a workbook.
pub trait GridSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Result<Vec<String>>;

    /// Snapshot of a sheet; `Ok(None)` when no sheet has that name.
    fn fetch(&self, name: &str) -> Result<Option<Grid>>;
}

/// Song reference table: a header row followed by data rows.
pub trait CatalogSource {
    fn rows(&self) -> Result<Vec<Vec<String>>>;
}

/// Upcoming "date + time + title" strings per sub-program keyword.
pub trait RecordingSource {
    fn upcoming(&self, keyword: &str) -> Result<Vec<String>>;
}

/// Live/recorded status of a broadcast date, when known.
pub trait StatusSource {
    fn status(&self, date: NaiveDate) -> Result<Option<BroadcastStatus>>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryGridSource {
    grids: Vec<Grid>,
}

impl MemoryGridSource {
    pub fn new(grids: Vec<Grid>) -> Self {
        Self { grids }
    }
}

impl GridSource for MemoryGridSource {
    fn sheet_names(&self) -> Result<Vec<String>> {
        Ok(self.grids.iter().map(|grid| grid.name.to_owned()).collect())
    }

    fn fetch(&self, name: &str) -> Result<Option<Grid>> {
        Ok(self.grids.iter().find(|grid| grid.name == name).cloned())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryCatalogSource {
    rows: Vec<Vec<String>>,
    failure: Option<String>,
}

impl MemoryCatalogSource {
    pub fn new<S: Into<String>>(rows: Vec<Vec<S>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            failure: None,
        }
    }

    /// A source whose every fetch fails with the message.
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.to_owned()),
        }
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn rows(&self) -> Result<Vec<Vec<String>>> {
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(self.rows.to_owned()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryRecordingSource {
    schedules: HashMap<String, Vec<String>>,
}

impl MemoryRecordingSource {
    pub fn with(mut self, keyword: &str, upcoming: &[&str]) -> Self {
        self.schedules.insert(
            keyword.to_owned(),
            upcoming.iter().map(|item| item.to_string()).collect(),
        );
        self
    }
}

impl RecordingSource for MemoryRecordingSource {
    fn upcoming(&self, keyword: &str) -> Result<Vec<String>> {
        Ok(self.schedules.get(keyword).cloned().unwrap_or_default())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStatusSource {
    statuses: HashMap<NaiveDate, BroadcastStatus>,
}

impl MemoryStatusSource {
    pub fn with(mut self, date: NaiveDate, status: BroadcastStatus) -> Self {
        self.statuses.insert(date, status);
        self
    }
}

impl StatusSource for MemoryStatusSource {
    fn status(&self, date: NaiveDate) -> Result<Option<BroadcastStatus>> {
        Ok(self.statuses.get(&date).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_source_lookup() {
        let source = MemoryGridSource::new(vec![
            Grid::from_rows("6/2週", vec![vec!["備考"]]),
            Grid::from_rows("6/9週", vec![vec!["備考"]]),
        ]);
        assert_eq!(source.sheet_names().unwrap(), vec!["6/2週", "6/9週"]);
        assert!(source.fetch("6/9週").unwrap().is_some());
        assert!(source.fetch("6/16週").unwrap().is_none());
    }

    #[test]
    fn failing_catalog_source() {
        let error = MemoryCatalogSource::failing("quota exceeded").rows().unwrap_err();
        assert_eq!(error.to_string(), "quota exceeded");
    }

    #[test]
    fn recording_and_status_sources() {
        let recordings = MemoryRecordingSource::default().with("ワイド", &["6/2 13:00 収録"]);
        assert_eq!(recordings.upcoming("ワイド").unwrap(), vec!["6/2 13:00 収録"]);
        assert!(recordings.upcoming("other").unwrap().is_empty());

        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let statuses = MemoryStatusSource::default().with(date, BroadcastStatus::Live);
        assert_eq!(statuses.status(date).unwrap(), Some(BroadcastStatus::Live));
        assert_eq!(statuses.status(date.succ_opt().unwrap()).unwrap(), None);
    }
}
