use crate::config::ContextConfig;
use chrono::Datelike;
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// Whether a broadcast airs live or from a recording.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BroadcastStatus {
    Live,
    Recorded,
}

impl BroadcastStatus {
    pub const fn label(self) -> &'static str {
        match self {
            BroadcastStatus::Live => "生放送",
            BroadcastStatus::Recorded => "収録",
        }
    }
}

/// Externally derived inputs merged into a wide-show record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayContext {
    pub commercial_sponsored: Vec<String>,
    pub commercial_spots: Vec<String>,
    /// Only looked up on the configured status weekday
    pub status: Option<BroadcastStatus>,
    pub recordings: Vec<String>,
}

/// Splits the remarks lines of a day into sponsored and spot commercial slots.
/// Lines without the commercial token are not slots.
pub fn split_commercials(remarks: &[String], config: &ContextConfig) -> (Vec<String>, Vec<String>) {
    remarks
        .iter()
        .filter(|line| line.contains(config.commercial_token.as_str()))
        .cloned()
        .partition(|line| line.contains(config.sponsored_token.as_str()))
}

/// Strict `M/D` matcher: the date may not be glued to other digits,
/// so `6/2` is found in "6/2 収録" but not in "6/24" or "16/2".
pub struct DatePattern {
    regex: Regex,
}

impl DatePattern {
    pub fn new(date: NaiveDate) -> Self {
        let pattern = format!(
            r"(?:^|[^0-9０-９]){}/{}(?:[^0-9０-９]|$)",
            date.month(),
            date.day()
        );
        Self {
            regex: Regex::new(&pattern).expect("Date pattern from integers"),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

pub fn contains_date(text: &str, date: NaiveDate) -> bool {
    DatePattern::new(date).is_match(text)
}

/// Keeps the upcoming recording strings that fall on `date`, in source order.
pub fn recordings_on(upcoming: &[String], date: NaiveDate) -> Vec<String> {
    let pattern = DatePattern::new(date);
    upcoming
        .iter()
        .filter(|item| pattern.is_match(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn date_match_is_strict() {
        assert!(contains_date("6/2 Program", june(2)));
        assert!(!contains_date("6/24 Program", june(2)));
        assert!(!contains_date("16/2 Program", june(2)));
        assert!(contains_date("収録 6/2(月) 13:00", june(2)));
        assert!(contains_date("6/24", june(24)));
        assert!(!contains_date("６6/2", june(2)));
        assert!(!contains_date("6/20", june(2)));
    }

    #[test]
    fn recordings_filtered_by_date() {
        let upcoming = vec![
            "6/2 13:00 ワイド収録".to_owned(),
            "6/24 10:00 特番".to_owned(),
            "6/2 15:00 コメント収録".to_owned(),
        ];
        assert_eq!(
            recordings_on(&upcoming, june(2)),
            vec!["6/2 13:00 ワイド収録", "6/2 15:00 コメント収録"]
        );
        assert!(recordings_on(&upcoming, june(3)).is_empty());
    }

    #[test]
    fn commercials_split_by_sponsor_token() {
        let remarks = vec![
            "★".to_owned(),
            "CM 提供：山田商店".to_owned(),
            "CM スポット 20秒".to_owned(),
            "交通情報".to_owned(),
        ];
        let (sponsored, spots) = split_commercials(&remarks, &ContextConfig::default());
        assert_eq!(sponsored, vec!["CM 提供：山田商店"]);
        assert_eq!(spots, vec!["CM スポット 20秒"]);
    }

    #[test]
    fn status_labels() {
        assert_eq!(BroadcastStatus::Live.label(), "生放送");
        assert_eq!(BroadcastStatus::Recorded.label(), "収録");
    }
}
