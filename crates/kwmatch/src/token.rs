//! Splitting text into fragment and match tokens

use crate::{Emit, Trie};
use kwmatch_interval::remove_overlaps;

/// A run of text produced by [`Trie::tokenize`].
#[derive(Debug)]
pub enum Token<'a, T> {
    /// Text between matches
    Fragment(&'a str),
    /// Text covered by a match
    Match { text: &'a str, emit: Emit<'a, T> },
}

impl<'a, T> Token<'a, T> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::Fragment(text) => *text,
            Token::Match { text, .. } => *text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Token::Match { .. })
    }

    pub fn emit(&self) -> Option<&Emit<'a, T>> {
        match self {
            Token::Fragment(_) => None,
            Token::Match { emit, .. } => Some(emit),
        }
    }
}

impl<T> Clone for Token<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Token::Fragment(text) => Token::Fragment(*text),
            Token::Match { text, emit } => Token::Match {
                text: *text,
                emit: *emit,
            },
        }
    }
}

impl<T> Trie<T> {
    /// Split `text` into alternating fragments and matches.
    ///
    /// The tokens cover the whole text in order, without gaps or overlaps,
    /// so matches are always overlap-resolved here regardless of the
    /// `allow_overlaps` setting. Empty fragments are never produced.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Vec<Token<'a, T>> {
        let mut emits = self.parse_text(text);
        if self.config().allow_overlaps {
            emits = remove_overlaps(emits);
        }

        let mut tokens = Vec::with_capacity(emits.len() * 2 + 1);
        let mut position = 0;

        for emit in emits {
            if emit.start() > position {
                tokens.push(Token::Fragment(&text[position..emit.start()]));
            }
            tokens.push(Token::Match {
                text: emit.matched(text),
                emit,
            });
            position = emit.end() + 1;
        }

        if position < text.len() {
            tokens.push(Token::Fragment(&text[position..]));
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use crate::{Token, Trie, TrieConfig};

    fn render(tokens: &[Token<'_, ()>]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                Token::Fragment(text) => format!("[{}]", text),
                Token::Match { text, .. } => format!("<{}>", text),
            })
            .collect()
    }

    #[test]
    fn test_tokenize() {
        let config = TrieConfig::default().case_insensitive();
        let trie = Trie::build(["Alpha", "Beta", "Gamma"], config).unwrap();
        let text = "Hear: Alpha team first, Beta from the rear, gamma in reserve";
        let tokens = trie.tokenize(text);
        assert_eq!(
            render(&tokens),
            vec![
                "[Hear: ]",
                "<Alpha>",
                "[ team first, ]",
                "<Beta>",
                "[ from the rear, ]",
                "<gamma>",
                "[ in reserve]",
            ]
        );
        assert_eq!(tokens[1].emit().unwrap().keyword(), "alpha");
    }

    #[test]
    fn test_tokenize_covers_text() {
        let trie = Trie::build(["he", "she", "hers", "his"], TrieConfig::default()).unwrap();
        let text = "ushers and his sheep";
        let tokens = trie.tokenize(text);
        let rebuilt: String = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(rebuilt, text);
        // Overlapping matches are resolved even though overlaps are allowed
        let matches: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_match())
            .map(|t| t.text())
            .collect();
        assert_eq!(matches, vec!["hers", "his", "she"]);
    }

    #[test]
    fn test_tokenize_match_at_edges() {
        let trie = Trie::build(["ab"], TrieConfig::default()).unwrap();
        assert_eq!(render(&trie.tokenize("abxab")), vec!["<ab>", "[x]", "<ab>"]);
        assert_eq!(render(&trie.tokenize("abab")), vec!["<ab>", "<ab>"]);
        assert!(trie.tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_whole_words() {
        let config = TrieConfig::default().with_only_whole_words(true);
        let trie = Trie::build(["sugar"], config).unwrap();
        assert_eq!(
            render(&trie.tokenize("sugarcane sugar")),
            vec!["[sugarcane ]", "<sugar>"]
        );
    }
}
