use crate::categorize::rules::Buckets;
use crate::categorize::rules::Pattern;
use crate::categorize::rules::RuleSet;
use crate::categorize::rules::TIMED_SLOT;
use crate::categorize::songs;
use crate::categorize::texts;
use crate::categorize::CategoryItem;
use crate::categorize::Finisher;
use crate::categorize::ProgramRecord;
use crate::config::Config;
use crate::music::MusicEntry;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NewsCategory {
    Music,
    Reports,
    Weather,
    TimedSegments,
    Announcements,
}

/// Evening news (Monday..Friday).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    pub date: String,
    pub announcements: Vec<String>,
    pub music: Vec<MusicEntry>,
    pub reports: Vec<String>,
    pub weather: Vec<String>,
    pub timed_segments: Vec<String>,
}

impl ProgramRecord for NewsRecord {
    type Category = NewsCategory;

    fn rules(config: &Config) -> RuleSet<NewsCategory> {
        RuleSet::with_music(&config.music, NewsCategory::Music, NewsCategory::Announcements)
            .rule(Pattern::contains("中継"), NewsCategory::Reports)
            .rule(Pattern::contains("天気"), NewsCategory::Weather)
            .rule(Pattern::regex(TIMED_SLOT), NewsCategory::TimedSegments)
    }

    fn from_buckets(
        date: String,
        mut buckets: Buckets<NewsCategory>,
        finisher: &mut Finisher,
    ) -> Self {
        NewsRecord {
            date,
            announcements: finisher.text(buckets.take(NewsCategory::Announcements)),
            music: finisher.music(buckets.take(NewsCategory::Music)),
            reports: finisher.text(buckets.take(NewsCategory::Reports)),
            weather: finisher.text(buckets.take(NewsCategory::Weather)),
            timed_segments: finisher.text(buckets.take(NewsCategory::TimedSegments)),
        }
    }

    fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)> {
        vec![
            ("announcements", texts(&self.announcements)),
            ("music", songs(&self.music)),
            ("reports", texts(&self.reports)),
            ("weather", texts(&self.weather)),
            ("timed_segments", texts(&self.timed_segments)),
        ]
    }
}
