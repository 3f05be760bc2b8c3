//! # Music Module
//!
//! Song mentions in schedule cells are free text ("♪①Sunrise ♪Nova - Tides").
//! This module resolves them against the station's reference catalog:
//!
//! - [`catalog`]: loads the reference table with fuzzy header detection
//! - [`normalize`]: strips numbering noise from a mention
//! - [`matcher`]: segments mentions and runs the five-tier match cascade
//! - [`render`]: text renderings of a resolved music list for templates
pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod render;

use serde::Serialize;

/// A song, either resolved from the catalog or carried as literal text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MusicEntry {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub metadata: String,
}

impl MusicEntry {
    pub fn new(title: &str, artist: &str, url: &str, metadata: &str) -> Self {
        Self {
            title: title.to_owned(),
            artist: artist.to_owned(),
            url: url.to_owned(),
            metadata: metadata.to_owned(),
        }
    }

    /// Unresolved mention kept verbatim, without URL.
    pub fn literal(text: &str) -> Self {
        Self {
            title: text.to_owned(),
            ..Default::default()
        }
    }

    /// Display text: `title / artist`, then metadata when present.
    pub fn text(&self) -> String {
        let mut text = match (self.title.is_empty(), self.artist.is_empty()) {
            (false, false) => format!("{} / {}", self.title, self.artist),
            (true, false) => self.artist.to_owned(),
            _ => self.title.to_owned(),
        };
        if !self.metadata.is_empty() {
            text.push(' ');
            text.push_str(&self.metadata);
        }
        text
    }
}
