//! Match mode configuration for keyword matching.
//!
//! This crate provides the `MatchMode` enum which controls case-sensitivity
//! across the kwmatch crates, together with the character fold that both the
//! automaton builder and the scanner apply.

/// Match mode for keyword matching operations.
///
/// Controls whether keywords and text are compared case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// Case-sensitive matching - "abc" matches "abc" but not "ABC"
    #[default]
    CaseSensitive,
    /// Case-insensitive matching - "abc" matches "ABC", "Abc", etc.
    CaseInsensitive,
}

impl MatchMode {
    /// Returns true for [`MatchMode::CaseInsensitive`].
    #[inline]
    pub fn is_case_insensitive(self) -> bool {
        matches!(self, MatchMode::CaseInsensitive)
    }

    /// Normalize a single character for this mode.
    ///
    /// Case-insensitive mode lowercases the character when its lowercase form
    /// is exactly one character. Characters with multi-character expansions
    /// (e.g. `'İ'`) are kept as-is so that a folded keyword always has the
    /// same number of characters as the text it matches.
    #[inline]
    pub fn fold(self, ch: char) -> char {
        match self {
            MatchMode::CaseSensitive => ch,
            MatchMode::CaseInsensitive => fold_char(ch),
        }
    }

    /// Normalize a whole keyword, character by character.
    pub fn fold_str(self, text: &str) -> String {
        match self {
            MatchMode::CaseSensitive => text.to_string(),
            MatchMode::CaseInsensitive => text.chars().map(fold_char).collect(),
        }
    }
}

#[inline]
fn fold_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive_is_identity() {
        assert_eq!(MatchMode::CaseSensitive.fold('A'), 'A');
        assert_eq!(MatchMode::CaseSensitive.fold_str("HeLLo"), "HeLLo");
    }

    #[test]
    fn test_case_insensitive_lowercases() {
        assert_eq!(MatchMode::CaseInsensitive.fold('A'), 'a');
        assert_eq!(MatchMode::CaseInsensitive.fold('Ä'), 'ä');
        assert_eq!(MatchMode::CaseInsensitive.fold_str("HeLLo"), "hello");
    }

    #[test]
    fn test_multi_char_expansion_kept() {
        // 'İ' lowercases to "i\u{307}", two characters
        assert_eq!(MatchMode::CaseInsensitive.fold('İ'), 'İ');
        assert_eq!(MatchMode::CaseInsensitive.fold_str("İx").chars().count(), 2);
    }

    #[test]
    fn test_default_is_case_sensitive() {
        assert_eq!(MatchMode::default(), MatchMode::CaseSensitive);
        assert!(!MatchMode::default().is_case_insensitive());
    }
}
