//! Immutable run configuration, loaded from `rundown.toml` or built from defaults.
//!
//! Every section is optional in the TOML source; missing keys fall back to the
//! values used by the weekly sheets this crate was written against.

use crate::grid::criteria::SheetCriteria;
use crate::schedule::Weekday;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Read config file '{0}' failed: {1}")]
    IoError(String, #[source] std::io::Error),

    #[error("Invalid config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid sheet pattern '{0}': {1}")]
    PatternError(String, #[source] glob::PatternError),
}

/// Root configuration passed to the schedule builder at construction time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Placeholder written into every category that has no content.
    pub sentinel: Sentinel,
    /// Structural anchor tokens.
    pub markers: MarkerConfig,
    /// Song mention tokens.
    pub music: MusicConfig,
    /// Program header names, one per categorizer variant.
    pub programs: ProgramNames,
    /// Inputs of the day-specific contextual fields.
    pub context: ContextConfig,
    /// Sheet selection for multi-sheet runs.
    pub sheets: SheetConfig,
}

/// The "no data" placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Sentinel(pub String);

impl Default for Sentinel {
    fn default() -> Self {
        Sentinel("なし".to_owned())
    }
}

impl Sentinel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Row-0 header text of the remarks column.
    pub remarks_header: String,
    /// Tag in the remarks column that starts a Monday..Thursday segment.
    pub segment_tag: String,
    pub friday_anchor: String,
    pub saturday_anchor: String,
    pub sunday_anchor: String,
    /// Token of the terminal notes row; scanning stops there.
    pub notes_token: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            remarks_header: "備考".to_owned(),
            segment_tag: "★".to_owned(),
            friday_anchor: "【金曜】".to_owned(),
            saturday_anchor: "【土曜】".to_owned(),
            sunday_anchor: "【日曜】".to_owned(),
            notes_token: "【連絡事項】".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MusicConfig {
    /// Delimiter between consecutive song mentions.
    pub glyph: char,
    /// Literal that marks a designated-song line.
    pub designated_token: String,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            glyph: '♪',
            designated_token: "指定曲".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProgramNames {
    pub wide: String,
    pub news: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for ProgramNames {
    fn default() -> Self {
        Self {
            wide: "ワイド".to_owned(),
            news: "ニュース".to_owned(),
            friday: "フライデー".to_owned(),
            saturday: "サタデー".to_owned(),
            sunday: "サンデー".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContextConfig {
    /// The only weekday whose status field is looked up.
    pub status_weekday: Weekday,
    /// Sub-program keywords passed to the recording-schedule source.
    pub recording_keywords: Vec<String>,
    /// Remarks lines containing this token are commercial slots.
    pub commercial_token: String,
    /// Commercial lines also containing this token are sponsored slots.
    pub sponsored_token: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            status_weekday: Weekday::Thursday,
            recording_keywords: vec!["ワイド".to_owned()],
            commercial_token: "CM".to_owned(),
            sponsored_token: "提供".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Glob patterns of sheet names to process; empty processes all.
    pub patterns: Vec<String>,
    pub limit: Option<usize>,
}

impl Config {
    /// Parses a TOML document; absent keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.display().to_string(), e))?;
        Self::from_toml_str(&source)
    }

    /// Compiles the sheet selection criteria.
    pub fn criteria(&self) -> Result<SheetCriteria, ConfigError> {
        SheetCriteria::new(&self.sheets.patterns, self.sheets.limit)
    }
}
