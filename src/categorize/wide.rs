//! Daily wide show (Monday..Thursday). The only variant with contextual
//! fields: commercial slots from the remarks column, the broadcast status of
//! one weekday and the recording sessions falling on the day.
use crate::categorize::context::DayContext;
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
pub enum WideCategory {
    Music,
    TimedSegments,
    Guests,
    Reservations,
    Announcements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WideRecord {
    pub date: String,
    pub announcements: Vec<String>,
    pub guests: Vec<String>,
    pub music: Vec<MusicEntry>,
    pub reservations: Vec<String>,
    pub timed_segments: Vec<String>,
    pub commercial_sponsored: Vec<String>,
    pub commercial_spots: Vec<String>,
    /// Status label on the status weekday, sentinel otherwise
    pub status: String,
    /// Recording sessions on this date; empty rather than sentinel-filled
    pub recordings: Vec<String>,
}

impl WideRecord {
    /// Merges the externally derived fields of the day.
    pub fn with_context(mut self, context: DayContext, finisher: &Finisher) -> Self {
        self.commercial_sponsored = finisher.text(context.commercial_sponsored);
        self.commercial_spots = finisher.text(context.commercial_spots);
        self.status = context
            .status
            .map(|status| status.label().to_owned())
            .unwrap_or_else(|| finisher.sentinel().to_owned());
        self.recordings = context.recordings;
        self
    }
}

impl ProgramRecord for WideRecord {
    type Category = WideCategory;

    fn rules(config: &Config) -> RuleSet<WideCategory> {
        RuleSet::with_music(&config.music, WideCategory::Music, WideCategory::Announcements)
            .rule(Pattern::regex(TIMED_SLOT), WideCategory::TimedSegments)
            .rule(Pattern::contains("ゲスト"), WideCategory::Guests)
            .rule(Pattern::contains("予約"), WideCategory::Reservations)
    }

    fn from_buckets(
        date: String,
        mut buckets: Buckets<WideCategory>,
        finisher: &mut Finisher,
    ) -> Self {
        WideRecord {
            date,
            announcements: finisher.text(buckets.take(WideCategory::Announcements)),
            guests: finisher.text(buckets.take(WideCategory::Guests)),
            music: finisher.music(buckets.take(WideCategory::Music)),
            reservations: finisher.text(buckets.take(WideCategory::Reservations)),
            timed_segments: finisher.text(buckets.take(WideCategory::TimedSegments)),
            commercial_sponsored: finisher.text(Vec::new()),
            commercial_spots: finisher.text(Vec::new()),
            status: finisher.sentinel().to_owned(),
            recordings: Vec::new(),
        }
    }

    fn categories(&self) -> Vec<(&'static str, Vec<CategoryItem<'_>>)> {
        vec![
            ("announcements", texts(&self.announcements)),
            ("guests", texts(&self.guests)),
            ("music", songs(&self.music)),
            ("reservations", texts(&self.reservations)),
            ("timed_segments", texts(&self.timed_segments)),
            ("commercial_sponsored", texts(&self.commercial_sponsored)),
            ("commercial_spots", texts(&self.commercial_spots)),
            ("status", vec![CategoryItem::Left(self.status.as_str())]),
            ("recordings", texts(&self.recordings)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::categorize;
    use crate::categorize::context::BroadcastStatus;
    use crate::categorize::tests::catalog;
    use crate::categorize::tests::content_count;
    use crate::categorize::tests::lines;
    use crate::music::matcher::MusicMatcher;

    #[test]
    fn buckets_by_rule_order() {
        let config = Config::default();
        let catalog = catalog();
        let matcher = MusicMatcher::new(&catalog, &config.music);
        let mut warnings = Vec::new();
        let mut finisher = Finisher::new(&matcher, config.sentinel.as_str(), &mut warnings);
        let input = lines(&[
            "10:00 オープニング",
            "ゲスト：山田花子",
            "♪sunrise",
            "10:30 ゲストトーク",
            "チケット予約受付中",
            "ゲスト予約 ♪Unknown Song",
            "プレゼントのお知らせ",
        ]);
        let rules = WideRecord::rules(&config);
        let record: WideRecord = categorize(&input, "6/2(月)".to_owned(), &rules, &mut finisher);

        assert_eq!(record.date, "6/2(月)");
        assert_eq!(
            record.timed_segments,
            vec!["10:00 オープニング", "10:30 ゲストトーク"]
        );
        assert_eq!(record.guests, vec!["ゲスト：山田花子"]);
        assert_eq!(record.reservations, vec!["チケット予約受付中"]);
        assert_eq!(record.announcements, vec!["プレゼントのお知らせ"]);
        // "ゲスト予約" folds into the carried-over "sunrise" mention, which still hits tier 3
        assert_eq!(
            record.music,
            vec![
                MusicEntry::new("Sunrise", "Nova", "https://example.com/sunrise", ""),
                MusicEntry::literal("Unknown Song"),
            ]
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(record.commercial_sponsored, vec!["なし"]);
        assert_eq!(record.status, "なし");
        assert!(record.recordings.is_empty());
    }

    #[test]
    fn every_line_lands_once() {
        let config = Config::default();
        let catalog = catalog();
        let matcher = MusicMatcher::new(&catalog, &config.music);
        let mut warnings = Vec::new();
        let mut finisher = Finisher::new(&matcher, config.sentinel.as_str(), &mut warnings);
        let input = lines(&["9:00 a", "ゲスト b", "予約 c", "d", "e"]);
        let rules = WideRecord::rules(&config);
        let record: WideRecord = categorize(&input, String::new(), &rules, &mut finisher);
        assert_eq!(content_count(&record.categories(), "なし"), input.len());
    }

    #[test]
    fn context_fields_merge() {
        let config = Config::default();
        let catalog = catalog();
        let matcher = MusicMatcher::new(&catalog, &config.music);
        let mut warnings = Vec::new();
        let mut finisher = Finisher::new(&matcher, config.sentinel.as_str(), &mut warnings);
        let rules = WideRecord::rules(&config);
        let record: WideRecord = categorize(&[], "6/5(木)".to_owned(), &rules, &mut finisher);
        let context = DayContext {
            commercial_sponsored: lines(&["CM 提供A"]),
            commercial_spots: Vec::new(),
            status: Some(BroadcastStatus::Live),
            recordings: lines(&["6/5 13:00 収録"]),
        };
        let record = record.with_context(context, &finisher);
        assert_eq!(record.commercial_sponsored, vec!["CM 提供A"]);
        assert_eq!(record.commercial_spots, vec!["なし"]);
        assert_eq!(record.status, "生放送");
        assert_eq!(record.recordings, vec!["6/5 13:00 収録"]);
    }
}
