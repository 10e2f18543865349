//! Document title selection.

use super::options::TitleOptions;
use crate::model::{HeadingLevel, OutlineEntry};

/// Picks the single best title from a leveled outline.
///
/// The first H1 of acceptable length wins; otherwise the first heading of
/// any level that is long enough. Structural phrases such as "Contents"
/// never qualify. No title at all is a valid outcome.
#[derive(Debug, Clone, Default)]
pub struct TitleSelector {
    options: TitleOptions,
}

impl TitleSelector {
    /// Create a selector with the given options.
    pub fn new(options: TitleOptions) -> Self {
        Self { options }
    }

    /// Select a title, or an empty string when nothing qualifies.
    pub fn select(&self, entries: &[OutlineEntry]) -> String {
        let h1 = entries.iter().find(|entry| {
            let len = entry.text.trim().chars().count();
            entry.level == HeadingLevel::H1
                && len >= self.options.min_chars
                && len <= self.options.max_chars
                && !self.is_noise(&entry.text)
        });

        if let Some(entry) = h1 {
            return entry.text.trim().to_string();
        }

        entries
            .iter()
            .find(|entry| {
                entry.text.trim().chars().count() >= self.options.min_chars
                    && !self.is_noise(&entry.text)
            })
            .map(|entry| entry.text.trim().to_string())
            .unwrap_or_default()
    }

    /// Whether the text is a structural phrase or decoration rather than content.
    fn is_noise(&self, text: &str) -> bool {
        let text = text.trim();
        if text
            .chars()
            .all(|c| c.is_whitespace() || matches!(c, '-' | '•' | '*' | '+'))
        {
            return true;
        }

        let lowered = text.to_lowercase();
        self.options
            .noise_phrases
            .iter()
            .any(|phrase| phrase.eq_ignore_ascii_case(&lowered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: HeadingLevel, text: &str) -> OutlineEntry {
        OutlineEntry::new(level, text, 0)
    }

    #[test]
    fn test_first_h1_wins() {
        let entries = vec![
            entry(HeadingLevel::H2, "Preface"),
            entry(HeadingLevel::H1, "Annual Report"),
            entry(HeadingLevel::H1, "Appendix"),
        ];
        assert_eq!(TitleSelector::default().select(&entries), "Annual Report");
    }

    #[test]
    fn test_noise_h1_skipped() {
        let entries = vec![
            entry(HeadingLevel::H1, "Table of Contents"),
            entry(HeadingLevel::H1, "INDEX"),
            entry(HeadingLevel::H1, "Field Guide"),
        ];
        assert_eq!(TitleSelector::default().select(&entries), "Field Guide");
    }

    #[test]
    fn test_falls_back_to_any_level() {
        let entries = vec![
            entry(HeadingLevel::H1, "Contents"),
            entry(HeadingLevel::H2, "Go"),
            entry(HeadingLevel::H3, "Methods"),
        ];
        assert_eq!(TitleSelector::default().select(&entries), "Methods");
    }

    #[test]
    fn test_overlong_h1_skipped() {
        let long = "word ".repeat(50);
        let entries = vec![
            entry(HeadingLevel::H1, long.trim()),
            entry(HeadingLevel::H1, "Short Title"),
        ];
        assert_eq!(TitleSelector::default().select(&entries), "Short Title");
    }

    #[test]
    fn test_nothing_qualifies() {
        let entries = vec![entry(HeadingLevel::H1, "Page"), entry(HeadingLevel::H2, "--")];
        assert_eq!(TitleSelector::default().select(&entries), "");
        assert_eq!(TitleSelector::default().select(&[]), "");
    }
}
