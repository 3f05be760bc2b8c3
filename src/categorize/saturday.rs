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
pub enum SaturdayCategory {
    Music,
    Requests,
    Events,
    Reservations,
    Announcements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaturdayRecord {
    pub date: String,
    pub announcements: Vec<String>,
    pub music: Vec<MusicEntry>,
    pub requests: Vec<String>,
    pub events: Vec<String>,
    pub reservations: Vec<String>,
}

impl ProgramRecord for SaturdayRecord {
    type Category = SaturdayCategory;

    fn rules(config: &Config) -> RuleSet<SaturdayCategory> {
        RuleSet::with_music(&config.music, SaturdayCategory::Music, SaturdayCategory::Announcements)
            .rule(Pattern::contains("リクエスト"), SaturdayCategory::Requests)
            .rule(Pattern::contains("イベント"), SaturdayCategory::Events)
            .rule(Pattern::contains("予約"), SaturdayCategory::Reservations)
    }

    fn from_buckets(
        date: String,
        mut buckets: Buckets<SaturdayCategory>,
        finisher: &mut Finisher,
    ) -> Self {
        SaturdayRecord {
            date,
            announcements: finisher.text(buckets.take(SaturdayCategory::Announcements)),
            music: finisher.music(buckets.take(SaturdayCategory::Music)),
            requests: finisher.text(buckets.take(SaturdayCategory::Requests)),
            events: finisher.text(buckets.take(SaturdayCategory::Events)),
            reservations: finisher.text(buckets.take(SaturdayCategory::Reservations)),
        }
    }

    fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)> {
        vec![
            ("announcements", texts(&self.announcements)),
            ("music", songs(&self.music)),
            ("requests", texts(&self.requests)),
            ("events", texts(&self.events)),
            ("reservations", texts(&self.reservations)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::categorize;
    use crate::categorize::tests::catalog;
    use crate::categorize::tests::content_count;
    use crate::categorize::tests::lines;
    use crate::music::matcher::MusicMatcher;

    #[test]
    fn request_with_song_goes_to_music() {
        let config = Config::default();
        let catalog = catalog();
        let matcher = MusicMatcher::new(&catalog, &config.music);
        let mut warnings = Vec::new();
        let mut finisher = Finisher::new(&matcher, config.sentinel.as_str(), &mut warnings);
        let input = lines(&[
            "♪Sunrise リクエスト",
            "リクエスト募集",
            "イベント予約開始",
            "会場予約",
        ]);
        let rules = SaturdayRecord::rules(&config);
        let record: SaturdayRecord = categorize(&input, "6/7(土)".to_owned(), &rules, &mut finisher);
        assert_eq!(record.music.len(), 1);
        assert_eq!(record.music[0].title, "Sunrise");
        assert_eq!(record.requests, vec!["リクエスト募集"]);
        assert_eq!(record.events, vec!["イベント予約開始"]);
        assert_eq!(record.reservations, vec!["会場予約"]);
        assert_eq!(content_count(&record.categories(), "なし"), input.len());
    }
}
