use crate::config::MusicConfig;
use crate::error::DataQualityWarning;
use crate::music::catalog::CatalogEntry;
use crate::music::catalog::MusicCatalog;
use crate::music::normalize::normalize_mention;
use crate::music::MusicEntry;
use log::debug;
use log::warn;

/// Cascade tiers in evaluation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Catalog title contains the mention
    TitleContains = 1,
    /// Catalog artist contains the mention
    ArtistContains = 2,
    /// Mention contains the catalog title
    TitleWithin = 3,
    /// Mention contains the catalog artist
    ArtistWithin = 4,
    /// A mention word longer than one character occurs in title + artist
    WordOverlap = 5,
}

/// Resolves song mentions against a catalog.
pub struct MusicMatcher<'a> {
    catalog: &'a MusicCatalog,
    glyph: char,
    designated_token: &'a str,
}

impl<'a> MusicMatcher<'a> {
    pub fn new(catalog: &'a MusicCatalog, config: &'a MusicConfig) -> Self {
        Self {
            catalog,
            glyph: config.glyph,
            designated_token: &config.designated_token,
        }
    }

    /// Splits music-bucket lines into raw mentions, in order.
    ///
    /// Text ahead of the first glyph of a line belongs to the mention carried
    /// over from earlier lines; it only starts a mention of its own when there
    /// is none yet. A line without any glyph (a designated-song line) always
    /// starts a new mention. The designated-song token itself is dropped.
    pub fn segment(&self, lines: &[String]) -> Vec<String> {
        let mut mentions: Vec<String> = Vec::new();
        for line in lines {
            let line = line.replace(self.designated_token, "");
            if !line.contains(self.glyph) {
                let text = line.trim().trim_start_matches([':', '：']).trim();
                if !text.is_empty() {
                    mentions.push(text.to_owned());
                }
                continue;
            }
            let mut parts = line.split(self.glyph);
            let head = parts.next().unwrap_or_default().trim();
            if !head.is_empty() {
                match mentions.last_mut() {
                    Some(last) => {
                        last.push(' ');
                        last.push_str(head);
                    }
                    None => mentions.push(head.to_owned()),
                }
            }
            mentions.extend(
                parts
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_owned),
            );
        }
        mentions
    }

    /// Runs the cascade for one normalized mention. First tier, then first
    /// catalog row, wins. Empty catalog keys never match.
    pub fn lookup(&self, mention: &str) -> Option<(Tier, &'a MusicEntry)> {
        let key = mention.to_lowercase();
        if key.is_empty() {
            return None;
        }
        let catalog: &'a MusicCatalog = self.catalog;
        let entries = catalog.keyed();
        let find = |predicate: &dyn Fn(&CatalogEntry) -> bool| {
            entries.iter().find(|&entry| predicate(entry))
        };
        let words: Vec<&str> = key
            .split_whitespace()
            .filter(|word| word.chars().count() > 1)
            .collect();

        let title_contains = |entry: &CatalogEntry| {
            !entry.title_key.is_empty() && entry.title_key.contains(&key)
        };
        let artist_contains = |entry: &CatalogEntry| {
            !entry.artist_key.is_empty() && entry.artist_key.contains(&key)
        };
        let title_within = |entry: &CatalogEntry| {
            !entry.title_key.is_empty() && key.contains(&entry.title_key)
        };
        let artist_within = |entry: &CatalogEntry| {
            !entry.artist_key.is_empty() && key.contains(&entry.artist_key)
        };
        let word_overlap = |entry: &CatalogEntry| {
            words.iter().any(|word| entry.combined_key.contains(word))
        };

        let tiers: [(Tier, &dyn Fn(&CatalogEntry) -> bool); 5] = [
            (Tier::TitleContains, &title_contains),
            (Tier::ArtistContains, &artist_contains),
            (Tier::TitleWithin, &title_within),
            (Tier::ArtistWithin, &artist_within),
            (Tier::WordOverlap, &word_overlap),
        ];
        tiers
            .iter()
            .find_map(|(tier, predicate)| find(*predicate).map(|entry| (*tier, &entry.entry)))
    }

    /// Resolves music-bucket lines to entries in mention order.
    ///
    /// Unmatched mentions are kept as literal text with an empty URL. Returns
    /// an empty list only when the lines carry no mention at all.
    pub fn resolve(
        &self,
        lines: &[String],
        warnings: &mut Vec<DataQualityWarning>,
    ) -> Vec<MusicEntry> {
        self.segment(lines)
            .iter()
            .map(|mention| normalize_mention(mention))
            .filter(|mention| !mention.is_empty())
            .map(|mention| match self.lookup(&mention) {
                Some((tier, entry)) => {
                    debug!("'{}' matched '{}' at tier {:?}", mention, entry.title, tier);
                    entry.clone()
                }
                None => {
                    let warning = DataQualityWarning::UnresolvedSong(mention.to_owned());
                    warn!("{}", warning);
                    warnings.push(warning);
                    MusicEntry::literal(&mention)
                }
            })
            .collect()
    }
}
