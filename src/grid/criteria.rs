use crate::config::ConfigError;
use glob::Pattern;

/// Criteria for selecting which sheets of a workbook a run processes.
#[derive(Clone, Debug, Default)]
pub struct SheetCriteria {
    /// Sheet name patterns; None accepts every sheet.
    pub sheet_name_patterns: Option<Vec<Pattern>>,

    /// Maximum number of sheets to process.
    pub sheet_limit: Option<usize>,
}

impl SheetCriteria {
    /// Compiles glob patterns. An empty list accepts every sheet.
    pub fn new(patterns: &[String], sheet_limit: Option<usize>) -> Result<Self, ConfigError> {
        let sheet_name_patterns = if patterns.is_empty() {
            None
        } else {
            Some(patterns
                .iter()
                .map(|pattern| Pattern::new(pattern)
                    .map_err(|e| ConfigError::PatternError(pattern.to_owned(), e)))
                .collect::<Result<Vec<_>, _>>()?)
        };
        Ok(Self {
            sheet_name_patterns,
            sheet_limit,
        })
    }

    /// Checks if a sheet name matches the criteria patterns.
    /// Returns true if no patterns are specified or if name matches any pattern.
    pub fn accept(&self, sheet_name: &str) -> bool {
        if let Some(patterns) = &self.sheet_name_patterns {
            patterns.iter().any(|pattern| pattern.matches(sheet_name))
        } else {
            true
        }
    }

    /// Filters sheet names in order, honoring the sheet limit.
    pub fn select<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names
            .into_iter()
            .filter(|name| self.accept(name))
            .take(self.sheet_limit.unwrap_or(usize::MAX))
            .collect()
    }
}
