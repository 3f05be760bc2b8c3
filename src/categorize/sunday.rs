use crate::categorize::rules::Buckets;
use crate::categorize::rules::Pattern;
use crate::categorize::rules::RuleSet;
use crate::categorize::songs;
use crate::categorize::texts;
use crate::categorize::CategoryItem;
use crate::categorize::Finisher;
use crate::categorize::ProgramRecord;
use crate::config::Config;
use crate::music::MusicEntry;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SundayCategory {
    Music,
    Corners,
    Guests,
    Announcements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SundayRecord {
    pub date: String,
    pub announcements: Vec<String>,
    pub guests: Vec<String>,
    pub music: Vec<MusicEntry>,
    pub corners: Vec<String>,
}

impl ProgramRecord for SundayRecord {
    type Category = SundayCategory;

    fn rules(config: &Config) -> RuleSet<SundayCategory> {
        RuleSet::with_music(&config.music, SundayCategory::Music, SundayCategory::Announcements)
            .rule(Pattern::contains("コーナー"), SundayCategory::Corners)
            .rule(Pattern::contains("ゲスト"), SundayCategory::Guests)
    }

    fn from_buckets(
        date: String,
        mut buckets: Buckets<SundayCategory>,
        finisher: &mut Finisher,
    ) -> Self {
        SundayRecord {
            date,
            announcements: finisher.text(buckets.take(SundayCategory::Announcements)),
            guests: finisher.text(buckets.take(SundayCategory::Guests)),
            music: finisher.music(buckets.take(SundayCategory::Music)),
            corners: finisher.text(buckets.take(SundayCategory::Corners)),
        }
    }

    fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)> {
        vec![
            ("announcements", texts(&self.announcements)),
            ("guests", texts(&self.guests)),
            ("music", songs(&self.music)),
            ("corners", texts(&self.corners)),
        ]
    }
}
