//! Matcher configuration

use kwmatch_match_mode::MatchMode;

/// Options controlling how a [`Trie`](crate::Trie) is built and how it scans.
///
/// The configuration is fixed when the trie is built. Filters combine with a
/// logical AND: an emit must pass every enabled filter to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Case sensitivity for keywords and text
    pub match_mode: MatchMode,
    /// Report overlapping matches; when false, `parse_text` and `first_match`
    /// keep only the longest, then leftmost, non-overlapping matches
    pub allow_overlaps: bool,
    /// Reject matches directly preceded or followed by an alphabetic character
    pub only_whole_words: bool,
    /// Reject matches not bounded by whitespace or the ends of the text
    pub only_whole_words_whitespace_separated: bool,
    /// Stop scanning as soon as one emit is accepted
    pub stop_on_first_hit: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::CaseSensitive,
            allow_overlaps: true,
            only_whole_words: false,
            only_whole_words_whitespace_separated: false,
            stop_on_first_hit: false,
        }
    }
}

impl TrieConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Shorthand for [`MatchMode::CaseInsensitive`]
    pub fn case_insensitive(self) -> Self {
        self.with_match_mode(MatchMode::CaseInsensitive)
    }

    pub fn with_allow_overlaps(mut self, allow_overlaps: bool) -> Self {
        self.allow_overlaps = allow_overlaps;
        self
    }

    pub fn with_only_whole_words(mut self, only_whole_words: bool) -> Self {
        self.only_whole_words = only_whole_words;
        self
    }

    pub fn with_only_whole_words_whitespace_separated(mut self, enabled: bool) -> Self {
        self.only_whole_words_whitespace_separated = enabled;
        self
    }

    pub fn with_stop_on_first_hit(mut self, stop_on_first_hit: bool) -> Self {
        self.stop_on_first_hit = stop_on_first_hit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrieConfig::default();
        assert_eq!(config.match_mode, MatchMode::CaseSensitive);
        assert!(config.allow_overlaps);
        assert!(!config.only_whole_words);
        assert!(!config.only_whole_words_whitespace_separated);
        assert!(!config.stop_on_first_hit);
    }

    #[test]
    fn test_setters_chain() {
        let config = TrieConfig::new()
            .case_insensitive()
            .with_allow_overlaps(false)
            .with_only_whole_words(true)
            .with_stop_on_first_hit(true);
        assert!(config.match_mode.is_case_insensitive());
        assert!(!config.allow_overlaps);
        assert!(config.only_whole_words);
        assert!(config.stop_on_first_hit);
        assert!(!config.only_whole_words_whitespace_separated);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: TrieConfig =
            serde_json::from_str(r#"{"match_mode": "case_insensitive", "allow_overlaps": false}"#)
                .unwrap();
        assert_eq!(
            config,
            TrieConfig::new()
                .case_insensitive()
                .with_allow_overlaps(false)
        );
    }
}
