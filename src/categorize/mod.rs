//! # Categorize Module
//!
//! One categorizer per program. Each variant declares its category vocabulary
//! as a record struct and its classification as an ordered [`rules::RuleSet`].
//! Every line of a day is bucketed exactly once (first matching rule wins,
//! music lines always first), then the buckets are finalized into the record:
//! music is resolved against the catalog and empty categories receive the
//! sentinel.
pub mod context;
pub mod friday;
pub mod news;
pub mod rules;
pub mod saturday;
pub mod sunday;
pub mod wide;

use crate::categorize::rules::Buckets;
use crate::categorize::rules::RuleSet;
use crate::config::Config;
use crate::error::DataQualityWarning;
use crate::music::matcher::MusicMatcher;
use crate::music::MusicEntry;
use either::Either;
use serde::Serialize;
use std::fmt::Debug;

/// Category value handed to downstream consumers: plain text or a song.
pub type CategoryItem<'a> = Either<&'a str, &'a MusicEntry>;

/// Finalizes buckets: resolves music and fills empty categories.
pub struct Finisher<'a, 'w> {
    matcher: &'a MusicMatcher<'a>,
    sentinel: &'a str,
    warnings: &'w mut Vec<DataQualityWarning>,
}

impl<'a, 'w> Finisher<'a, 'w> {
    pub fn new(
        matcher: &'a MusicMatcher<'a>,
        sentinel: &'a str,
        warnings: &'w mut Vec<DataQualityWarning>,
    ) -> Self {
        Self {
            matcher,
            sentinel,
            warnings,
        }
    }

    pub fn sentinel(&self) -> &str {
        self.sentinel
    }

    /// Returns the lines, or the sentinel alone when there are none.
    pub fn text(&self, lines: Vec<String>) -> Vec<String> {
        if lines.is_empty() {
            vec![self.sentinel.to_owned()]
        } else {
            lines
        }
    }

    /// Resolves music lines; never returns an empty list.
    pub fn music(&mut self, lines: Vec<String>) -> Vec<MusicEntry> {
        let entries = if lines.is_empty() {
            Vec::new()
        } else {
            self.matcher.resolve(&lines, self.warnings)
        };
        if entries.is_empty() {
            vec![MusicEntry::literal(self.sentinel)]
        } else {
            entries
        }
    }
}

/// A per-program day record built from bucketed lines.
pub trait ProgramRecord: Sized {
    type Category: Copy + Eq + Debug;

    /// Classification rules, music rule first.
    fn rules(config: &Config) -> RuleSet<Self::Category>;

    /// Finalizes the buckets of one day into the record.
    fn from_buckets(
        date: String,
        buckets: Buckets<Self::Category>,
        finisher: &mut Finisher,
    ) -> Self;

    /// Category name and values, in vocabulary order; the date is not a category.
    fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)>;
}

/// Buckets the lines of one day and finalizes the record.
pub fn categorize<R: ProgramRecord>(
    lines: &[String],
    date: String,
    rules: &RuleSet<R::Category>,
    finisher: &mut Finisher,
) -> R {
    R::from_buckets(date, rules.bucket(lines), finisher)
}

pub(crate) fn texts(lines: &[String]) -> Vec<CategoryItem<'_>> {
    lines.iter().map(|line| Either::Left(line.as_str())).collect()
}

pub(crate) fn songs(entries: &[MusicEntry]) -> Vec<CategoryItem<'_>> {
    entries.iter().map(Either::Right).collect()
}

/// Structured record of one program on one weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DayRecord {
    Wide(wide::WideRecord),
    News(news::NewsRecord),
    Friday(friday::FridayRecord),
    Saturday(saturday::SaturdayRecord),
    Sunday(sunday::SundayRecord),
}

impl DayRecord {
    pub fn date(&self) -> &str {
        match self {
            DayRecord::Wide(record) => &record.date,
            DayRecord::News(record) => &record.date,
            DayRecord::Friday(record) => &record.date,
            DayRecord::Saturday(record) => &record.date,
            DayRecord::Sunday(record) => &record.date,
        }
    }

    pub fn music(&self) -> &[MusicEntry] {
        match self {
            DayRecord::Wide(record) => &record.music,
            DayRecord::News(record) => &record.music,
            DayRecord::Friday(record) => &record.music,
            DayRecord::Saturday(record) => &record.music,
            DayRecord::Sunday(record) => &record.music,
        }
    }

    pub fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)> {
        match self {
            DayRecord::Wide(record) => record.categories(),
            DayRecord::News(record) => record.categories(),
            DayRecord::Friday(record) => record.categories(),
            DayRecord::Saturday(record) => record.categories(),
            DayRecord::Sunday(record) => record.categories(),
        }
    }
}

/// Prebuilt rule sets for every variant.
#[derive(Clone, Debug)]
pub struct ProgramRules {
    pub wide: RuleSet<wide::WideCategory>,
    pub news: RuleSet<news::NewsCategory>,
    pub friday: RuleSet<friday::FridayCategory>,
    pub saturday: RuleSet<saturday::SaturdayCategory>,
    pub sunday: RuleSet<sunday::SundayCategory>,
}

impl ProgramRules {
    pub fn new(config: &Config) -> Self {
        Self {
            wide: wide::WideRecord::rules(config),
            news: news::NewsRecord::rules(config),
            friday: friday::FridayRecord::rules(config),
            saturday: saturday::SaturdayRecord::rules(config),
            sunday: sunday::SundayRecord::rules(config),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::music::catalog::MusicCatalog;

    pub(crate) fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    pub(crate) fn catalog() -> MusicCatalog {
        MusicCatalog::from_entries([MusicEntry::new(
            "Sunrise",
            "Nova",
            "https://example.com/sunrise",
            "",
        )])
    }

    /// Counts every non-sentinel value across categories.
    pub(crate) fn content_count(
        categories: &[(&'static str, Vec<CategoryItem<'_>>)],
        sentinel: &str,
    ) -> usize {
        categories
            .iter()
            .flat_map(|(_, items)| items.iter())
            .filter(|item| item.either(|text| text != sentinel, |entry| entry.title != sentinel))
            .count()
    }

    #[test]
    fn finisher_fills_sentinel() {
        let catalog = catalog();
        let config = Config::default();
        let matcher = MusicMatcher::new(&catalog, &config.music);
        let mut warnings = Vec::new();
        let mut finisher = Finisher::new(&matcher, config.sentinel.as_str(), &mut warnings);
        assert_eq!(finisher.text(Vec::new()), vec!["なし"]);
        assert_eq!(finisher.text(lines(&["a"])), vec!["a"]);
        assert_eq!(finisher.music(Vec::new()), vec![MusicEntry::literal("なし")]);
        assert_eq!(finisher.music(lines(&["♪①"])), vec![MusicEntry::literal("なし")]);
        assert_eq!(finisher.music(lines(&["♪sunrise"]))[0].artist, "Nova");
    }
}
