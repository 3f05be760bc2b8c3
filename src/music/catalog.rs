use crate::error::DataQualityWarning;
use crate::music::MusicEntry;
use crate::source::CatalogSource;
use log::info;
use log::warn;

const TITLE_HEADERS: &[&str] = &["曲名", "タイトル", "title", "song"];
const ARTIST_HEADERS: &[&str] = &["アーティスト", "歌手", "artist", "singer"];
const URL_HEADERS: &[&str] = &["url", "リンク", "link"];
const METADATA_HEADERS: &[&str] = &["備考", "メモ", "note", "info"];

/// Catalog row with its lowercase match keys.
#[derive(Clone, Debug)]
pub(crate) struct CatalogEntry {
    pub(crate) entry: MusicEntry,
    pub(crate) title_key: String,
    pub(crate) artist_key: String,
    /// `title + artist`, used by the word-overlap tier
    pub(crate) combined_key: String,
}

impl CatalogEntry {
    fn new(entry: MusicEntry) -> Self {
        let title_key = entry.title.to_lowercase();
        let artist_key = entry.artist.to_lowercase();
        let combined_key = format!("{}{}", title_key, artist_key);
        Self {
            entry,
            title_key,
            artist_key,
            combined_key,
        }
    }
}

/// Ordered song reference table. Lookups scan in row order.
#[derive(Clone, Debug, Default)]
pub struct MusicCatalog {
    entries: Vec<CatalogEntry>,
}

/// Finds the first header cell containing any candidate keyword (case-insensitive).
fn resolve_column(header: &[String], candidates: &[&str]) -> Option<usize> {
    header.iter().position(|title| {
        let title = title.trim().to_lowercase();
        candidates.iter().any(|candidate| title.contains(&candidate.to_lowercase()))
    })
}

impl MusicCatalog {
    pub fn from_entries(entries: impl IntoIterator<Item = MusicEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    /// Builds the catalog from a header row followed by data rows.
    ///
    /// Title and artist columns are required; without either the catalog is
    /// empty and a warning is recorded. Rows blank in both are skipped.
    pub fn from_rows(rows: &[Vec<String>], warnings: &mut Vec<DataQualityWarning>) -> Self {
        let Some((header, records)) = rows.split_first() else {
            warn!("Music catalog is empty");
            return Self::default();
        };
        let title_col = resolve_column(header, TITLE_HEADERS);
        let artist_col = resolve_column(header, ARTIST_HEADERS);
        let (title_col, artist_col) = match (title_col, artist_col) {
            (Some(title_col), Some(artist_col)) => (title_col, artist_col),
            (title_col, _) => {
                let missing = if title_col.is_none() { "title" } else { "artist" };
                let warning = DataQualityWarning::CatalogColumnMissing(missing);
                warn!("{}", warning);
                warnings.push(warning);
                return Self::default();
            }
        };
        let url_col = resolve_column(header, URL_HEADERS);
        let metadata_col = resolve_column(header, METADATA_HEADERS);

        let field = |record: &Vec<String>, col: Option<usize>| -> String {
            col.and_then(|col| record.get(col))
                .map(|value| value.trim().to_owned())
                .unwrap_or_default()
        };
        let catalog = Self::from_entries(records.iter().filter_map(|record| {
            let entry = MusicEntry {
                title: field(record, Some(title_col)),
                artist: field(record, Some(artist_col)),
                url: field(record, url_col),
                metadata: field(record, metadata_col),
            };
            (!entry.title.is_empty() || !entry.artist.is_empty()).then_some(entry)
        }));
        info!("Music catalog loaded with {} entries", catalog.len());
        catalog
    }

    /// Fetches rows from the collaborator; a failed fetch yields an empty catalog.
    pub fn load(source: &dyn CatalogSource, warnings: &mut Vec<DataQualityWarning>) -> Self {
        match source.rows() {
            Ok(rows) => Self::from_rows(&rows, warnings),
            Err(e) => {
                let warning = DataQualityWarning::CatalogUnavailable(format!("{:#}", e));
                warn!("{}", warning);
                warnings.push(warning);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MusicEntry> + '_ {
        self.entries.iter().map(|entry| &entry.entry)
    }

    pub(crate) fn keyed(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
