use crate::categorize::categorize;
use crate::categorize::context::recordings_on;
use crate::categorize::context::split_commercials;
use crate::categorize::context::BroadcastStatus;
use crate::categorize::context::DayContext;
use crate::categorize::wide::WideRecord;
use crate::categorize::DayRecord;
use crate::categorize::Finisher;
use crate::categorize::ProgramRules;
use crate::config::Config;
use crate::error::DataQualityWarning;
use crate::error::ResultMessage;
use crate::error::RundownError;
use crate::grid::Grid;
use crate::layout::extract::extract_columns;
use crate::layout::extract::extract_lines;
use crate::layout::markers;
use crate::layout::range;
use crate::layout::range::WeekdayRange;
use crate::layout::StructuralError;
use crate::music::catalog::MusicCatalog;
use crate::music::matcher::MusicMatcher;
use crate::music::render::MusicRenderings;
use crate::schedule::program::Program;
use crate::schedule::NotFoundError;
use crate::schedule::ProgramSchedule;
use crate::schedule::Weekday;
use crate::source::GridSource;
use crate::source::RecordingSource;
use crate::source::StatusSource;
use anyhow::Context;
use chrono::Datelike;
use chrono::NaiveDate;
use log::debug;
use log::info;
use log::warn;
use std::collections::BTreeMap;

/// Result of one weekly sheet.
#[derive(Clone, Debug)]
pub struct SheetSchedule {
    pub sheet: String,
    /// Monday of the sheet's week
    pub week_start: NaiveDate,
    pub schedule: ProgramSchedule,
    /// Music renderings per program and weekday
    pub renderings: BTreeMap<String, BTreeMap<Weekday, MusicRenderings>>,
    /// Non-fatal problems met while building, in encounter order
    pub warnings: Vec<DataQualityWarning>,
}

impl SheetSchedule {
    fn new(sheet: &str, week_start: NaiveDate) -> Self {
        Self {
            sheet: sheet.to_owned(),
            week_start,
            schedule: ProgramSchedule::default(),
            renderings: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn rendering(&self, program: &str, weekday: Weekday) -> Option<&MusicRenderings> {
        self.renderings.get(program).and_then(|days| days.get(&weekday))
    }
}

/// Outcome of one requested sheet in a multi-sheet run.
#[derive(Debug)]
pub struct SheetRun {
    pub name: String,
    pub outcome: Result<SheetSchedule, RundownError>,
}

impl SheetRun {
    /// The built schedule; None when the sheet failed.
    pub fn schedule(&self) -> Option<&SheetSchedule> {
        self.outcome.as_ref().ok()
    }
}

/// Outcomes of every selected sheet, in request order.
#[derive(Debug, Default)]
pub struct WeeklyRun {
    pub sheets: Vec<SheetRun>,
}

impl WeeklyRun {
    pub fn schedules(&self) -> impl Iterator<Item = &SheetSchedule> + '_ {
        self.sheets.iter().filter_map(SheetRun::schedule)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &RundownError)> + '_ {
        self.sheets
            .iter()
            .filter_map(|run| run.outcome.as_ref().err().map(|e| (run.name.as_str(), e)))
    }
}

/// Builds program schedules from weekly sheets.
///
/// Holds the immutable run inputs: configuration, the loaded music catalog
/// and the optional recording and status collaborators.
pub struct ScheduleBuilder<'a> {
    config: Config,
    catalog: MusicCatalog,
    recordings: Option<&'a dyn RecordingSource>,
    status: Option<&'a dyn StatusSource>,
    rules: ProgramRules,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(
        config: Config,
        catalog: MusicCatalog,
        recordings: Option<&'a dyn RecordingSource>,
        status: Option<&'a dyn StatusSource>,
    ) -> Self {
        let rules = ProgramRules::new(&config);
        Self {
            config,
            catalog,
            recordings,
            status,
            rules,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the schedule of one sheet.
    ///
    /// # Arguments
    ///
    /// * `grid` - Snapshot of the weekly sheet
    /// * `week_start` - Monday of the week, used for date labels and date matching
    ///
    /// # Returns
    ///
    /// * `Result<SheetSchedule, StructuralError>` - The schedule, or the structural problem
    ///   that makes the sheet unusable. Missing program columns only produce warnings.
    pub fn build(
        &self,
        grid: &Grid,
        week_start: NaiveDate,
    ) -> Result<SheetSchedule, StructuralError> {
        let markers = markers::locate(grid, &self.config.markers)?;
        let ranges = range::compute(&markers)?;
        let matcher = MusicMatcher::new(&self.catalog, &self.config.music);
        let sentinel = self.config.sentinel.as_str();
        let mut sheet = SheetSchedule::new(&grid.name, week_start);
        let upcoming = self.upcoming_recordings(week_start, &mut sheet.warnings);

        for program in Program::ALL {
            let name = program.name(&self.config.programs);
            let columns = program
                .header_row(&markers)
                .map(|row| grid.columns_matching(row, name))
                .unwrap_or_default();
            if columns.is_empty() {
                let error = NotFoundError::ProgramColumn {
                    program: name.to_owned(),
                    sheet: grid.name.to_owned(),
                };
                warn!("{}", error);
                sheet.warnings.push(DataQualityWarning::NotFound(error.to_string()));
                continue;
            }
            debug!("{}: program {} in columns {:?}", grid.name, name, columns);

            for &weekday in program.weekdays() {
                let range = ranges.get(weekday);
                let lines = extract_columns(grid, &columns, range);
                let date = weekday.date_in_week(week_start);
                let context = match program {
                    Program::Wide => self.day_context(
                        grid,
                        markers.remarks_col,
                        range,
                        date,
                        &upcoming,
                        &mut sheet.warnings,
                    ),
                    _ => DayContext::default(),
                };

                let label = weekday.date_label(week_start);
                let mut finisher = Finisher::new(&matcher, sentinel, &mut sheet.warnings);
                let rules = &self.rules;
                let record = match program {
                    Program::Wide => DayRecord::Wide(
                        categorize::<WideRecord>(&lines, label, &rules.wide, &mut finisher)
                            .with_context(context, &finisher),
                    ),
                    Program::News => {
                        DayRecord::News(categorize(&lines, label, &rules.news, &mut finisher))
                    }
                    Program::Friday => {
                        DayRecord::Friday(categorize(&lines, label, &rules.friday, &mut finisher))
                    }
                    Program::Saturday => DayRecord::Saturday(categorize(
                        &lines,
                        label,
                        &rules.saturday,
                        &mut finisher,
                    )),
                    Program::Sunday => {
                        DayRecord::Sunday(categorize(&lines, label, &rules.sunday, &mut finisher))
                    }
                };

                sheet
                    .renderings
                    .entry(name.to_owned())
                    .or_default()
                    .insert(weekday, MusicRenderings::from_entries(record.music()));
                sheet.schedule.insert(name, weekday, record);
            }
        }

        info!(
            "{}: built {} programs with {} warnings",
            grid.name,
            sheet.schedule.programs().count(),
            sheet.warnings.len()
        );
        Ok(sheet)
    }

    /// Builds several sheets of a workbook. Sheets rejected by the configured
    /// patterns are skipped; a failing sheet never aborts the run.
    pub fn build_sheets(
        &self,
        source: &dyn GridSource,
        sheets: &[(&str, NaiveDate)],
    ) -> Result<WeeklyRun, RundownError> {
        let criteria = self.config.criteria()?;
        let selected = criteria.select(sheets.iter().map(|(name, _)| *name));
        let mut run = WeeklyRun::default();
        for &(name, week_start) in sheets.iter().filter(|(name, _)| selected.contains(name)) {
            let outcome = self.build_sheet(source, name, week_start).with_prefix(name);
            if let Err(e) = &outcome {
                warn!("{}", e);
            }
            run.sheets.push(SheetRun {
                name: name.to_owned(),
                outcome,
            });
        }
        Ok(run)
    }

    fn build_sheet(
        &self,
        source: &dyn GridSource,
        name: &str,
        week_start: NaiveDate,
    ) -> Result<SheetSchedule, RundownError> {
        let grid = source
            .fetch(name)
            .with_context(|| format!("Fetch sheet '{}' failed", name))?
            .ok_or_else(|| NotFoundError::Sheet(name.to_owned()))?;
        Ok(self.build(&grid, week_start)?)
    }

    /// Contextual fields of one wide-show day.
    fn day_context(
        &self,
        grid: &Grid,
        remarks_col: usize,
        range: WeekdayRange,
        date: NaiveDate,
        upcoming: &[String],
        warnings: &mut Vec<DataQualityWarning>,
    ) -> DayContext {
        let remarks = extract_lines(grid, remarks_col, range);
        let (commercial_sponsored, commercial_spots) =
            split_commercials(&remarks, &self.config.context);
        let status = if Weekday::from(date.weekday()) == self.config.context.status_weekday {
            self.broadcast_status(date, warnings)
        } else {
            None
        };
        DayContext {
            commercial_sponsored,
            commercial_spots,
            status,
            recordings: recordings_on(upcoming, date),
        }
    }

    fn broadcast_status(
        &self,
        date: NaiveDate,
        warnings: &mut Vec<DataQualityWarning>,
    ) -> Option<BroadcastStatus> {
        let source = self.status?;
        match source.status(date) {
            Ok(status) => status,
            Err(e) => {
                let warning = DataQualityWarning::Collaborator {
                    program: self.config.programs.wide.to_owned(),
                    date,
                    message: format!("{:#}", e),
                };
                warn!("{}", warning);
                warnings.push(warning);
                None
            }
        }
    }

    /// Upcoming recordings of every configured keyword, keyword order first.
    /// Fetched once per sheet.
    fn upcoming_recordings(
        &self,
        week_start: NaiveDate,
        warnings: &mut Vec<DataQualityWarning>,
    ) -> Vec<String> {
        let Some(source) = self.recordings else {
            return Vec::new();
        };
        let mut upcoming = Vec::new();
        for keyword in &self.config.context.recording_keywords {
            match source.upcoming(keyword) {
                Ok(items) => upcoming.extend(items),
                Err(e) => {
                    let warning = DataQualityWarning::Collaborator {
                        program: keyword.to_owned(),
                        date: week_start,
                        message: format!("{:#}", e),
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }
        upcoming
    }
}
