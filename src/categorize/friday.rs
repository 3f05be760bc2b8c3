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
pub enum FridayCategory {
    Music,
    Guests,
    Presents,
    Messages,
    Announcements,
}

/// Friday night show; its header sits on the Friday anchor row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FridayRecord {
    pub date: String,
    pub announcements: Vec<String>,
    pub guests: Vec<String>,
    pub music: Vec<MusicEntry>,
    pub presents: Vec<String>,
    pub messages: Vec<String>,
}

impl ProgramRecord for FridayRecord {
    type Category = FridayCategory;

    fn rules(config: &Config) -> RuleSet<FridayCategory> {
        RuleSet::with_music(&config.music, FridayCategory::Music, FridayCategory::Announcements)
            .rule(Pattern::contains("ゲスト"), FridayCategory::Guests)
            .rule(Pattern::contains("プレゼント"), FridayCategory::Presents)
            .rule(
                Pattern::any_of(&["メール", "メッセージ", "FAX"]),
                FridayCategory::Messages,
            )
    }

    fn from_buckets(
        date: String,
        mut buckets: Buckets<FridayCategory>,
        finisher: &mut Finisher,
    ) -> Self {
        FridayRecord {
            date,
            announcements: finisher.text(buckets.take(FridayCategory::Announcements)),
            guests: finisher.text(buckets.take(FridayCategory::Guests)),
            music: finisher.music(buckets.take(FridayCategory::Music)),
            presents: finisher.text(buckets.take(FridayCategory::Presents)),
            messages: finisher.text(buckets.take(FridayCategory::Messages)),
        }
    }

    fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)> {
        vec![
            ("announcements", texts(&self.announcements)),
            ("guests", texts(&self.guests)),
            ("music", songs(&self.music)),
            ("presents", texts(&self.presents)),
            ("messages", texts(&self.messages)),
        ]
    }
}
