use crate::music::MusicEntry;
use serde::Serialize;

/// Text renderings of one music bucket, ready for template substitution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MusicRenderings {
    /// `1. text` per line
    pub numbered: String,
    /// Texts joined on one line with `、`
    pub unnumbered: String,
    /// `・text` per line
    pub bulleted: String,
    /// `title<TAB>artist<TAB>url` per line
    pub tabular: String,
    /// One text per line
    pub lines: String,
}

impl MusicRenderings {
    pub fn from_entries(entries: &[MusicEntry]) -> Self {
        let texts: Vec<String> = entries.iter().map(MusicEntry::text).collect();
        Self {
            numbered: texts
                .iter()
                .enumerate()
                .map(|(index, text)| format!("{}. {}", index + 1, text))
                .collect::<Vec<_>>()
                .join("\n"),
            unnumbered: texts.join("、"),
            bulleted: texts
                .iter()
                .map(|text| format!("・{}", text))
                .collect::<Vec<_>>()
                .join("\n"),
            tabular: entries
                .iter()
                .map(|entry| format!("{}\t{}\t{}", entry.title, entry.artist, entry.url))
                .collect::<Vec<_>>()
                .join("\n"),
            lines: texts.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_all_forms() {
        let renderings = MusicRenderings::from_entries(&[
            MusicEntry::new("Sunrise", "Nova", "https://example.com/s", ""),
            MusicEntry::literal("Unknown Song"),
        ]);
        assert_eq!(renderings.numbered, "1. Sunrise / Nova\n2. Unknown Song");
        assert_eq!(renderings.unnumbered, "Sunrise / Nova、Unknown Song");
        assert_eq!(renderings.bulleted, "・Sunrise / Nova\n・Unknown Song");
        assert_eq!(renderings.tabular, "Sunrise\tNova\thttps://example.com/s\nUnknown Song\t\t");
        assert_eq!(renderings.lines, "Sunrise / Nova\nUnknown Song");
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(MusicRenderings::from_entries(&[]), MusicRenderings::default());
    }
}
