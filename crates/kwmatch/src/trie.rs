//! Keyword trie and the scanning engine
//!
//! A [`Trie`] owns an immutable Aho-Corasick automaton plus the
//! [`TrieConfig`] it was built with. Scanning walks the text once, left to
//! right, one `char` at a time:
//!
//! 1. fold the character per the match mode
//! 2. advance the automaton (failure links followed as needed)
//! 3. turn each output of the new state into an [`Emit`], run it through the
//!    whole-word filters and hand it to the emit handler
//!
//! Emits are therefore produced in discovery order (by end offset). Only
//! overlap resolution reorders them, by start.

use crate::error::Result;
use crate::handler::{CollectingHandler, EmitHandler};
use crate::{Emit, TrieConfig};
use kwmatch_ac::{Automaton, AutomatonBuilder, Payload};
use kwmatch_interval::remove_overlaps;
use std::collections::VecDeque;

/// Immutable multi-keyword matcher.
///
/// All scanning methods take `&self`; share a trie across threads with
/// `Arc<Trie<T>>` (or plain references with scoped threads).
///
/// # Example
///
/// ```
/// use kwmatch::{Trie, TrieConfig};
///
/// let trie = Trie::build(["hers", "his", "she", "he"], TrieConfig::default())?;
/// let found: Vec<_> = trie
///     .parse_text("ushers")
///     .iter()
///     .map(|e| (e.start(), e.end(), e.keyword()))
///     .collect();
/// assert_eq!(found, vec![(2, 3, "he"), (1, 3, "she"), (2, 5, "hers")]);
/// # Ok::<(), kwmatch::TrieError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Trie<T = ()> {
    automaton: Automaton<T>,
    config: TrieConfig,
}

impl Trie<()> {
    /// Build a trie from plain keywords.
    pub fn build<I, K>(keywords: I, config: TrieConfig) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self::build_with_payloads(keywords.into_iter().map(|k| (k, None)), config)
    }
}

impl<T> Trie<T> {
    /// Build a trie from `(keyword, data)` pairs.
    ///
    /// Empty keywords are ignored. When a keyword occurs more than once, the
    /// first payload is kept.
    pub fn build_with_payloads<I, K>(patterns: I, config: TrieConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Option<T>)>,
        K: AsRef<str>,
    {
        let automaton = Automaton::build(patterns, config.match_mode)?;
        Ok(Self { automaton, config })
    }

    pub fn builder(config: TrieConfig) -> TrieBuilder<T> {
        TrieBuilder::new(config)
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    pub fn automaton(&self) -> &Automaton<T> {
        &self.automaton
    }

    /// Number of distinct keywords
    pub fn keyword_count(&self) -> usize {
        self.automaton.payload_count()
    }

    /// Find all matches.
    ///
    /// With overlaps allowed, emits come in discovery order. Otherwise the
    /// longest, then leftmost, non-overlapping matches are kept and returned
    /// ordered by start.
    pub fn parse_text<'a>(&'a self, text: &str) -> Vec<Emit<'a, T>> {
        let mut handler = CollectingHandler::new();
        self.parse_text_with(text, &mut handler);
        let emits = handler.into_emits();

        if self.config.allow_overlaps {
            emits
        } else {
            remove_overlaps(emits)
        }
    }

    /// Feed every filtered emit to `handler`, in discovery order.
    ///
    /// Overlap resolution does not apply here. Returns true if the scan
    /// ended early because of `stop_on_first_hit`.
    pub fn parse_text_with<'a, H>(&'a self, text: &str, handler: &mut H) -> bool
    where
        H: EmitHandler<'a, T> + ?Sized,
    {
        self.scan(text, handler, self.config.stop_on_first_hit)
    }

    /// First match in the text, or `None`.
    ///
    /// With overlaps allowed this stops at the first accepted emit. With
    /// overlaps disallowed a later, longer match may suppress the first one
    /// found, so the whole text is scanned and resolved first.
    pub fn first_match<'a>(&'a self, text: &str) -> Option<Emit<'a, T>> {
        if !self.config.allow_overlaps {
            return self.parse_text(text).into_iter().next();
        }

        let mut first = None;
        self.scan(
            text,
            &mut |emit: Emit<'a, T>| {
                first = Some(emit);
                true
            },
            true,
        );
        first
    }

    /// True if the text contains at least one match.
    pub fn contains_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    fn scan<'a, H>(&'a self, text: &str, handler: &mut H, stop_on_hit: bool) -> bool
    where
        H: EmitHandler<'a, T> + ?Sized,
    {
        let automaton = &self.automaton;
        let mode = self.config.match_mode;
        let max_depth = automaton.max_depth();
        if max_depth == 0 {
            return false;
        }

        // Byte offsets of the last `max_depth` characters, to locate starts
        let mut window: VecDeque<usize> = VecDeque::with_capacity(max_depth + 1);
        let mut state = automaton.root();

        for (position, ch) in text.char_indices() {
            window.push_back(position);
            if window.len() > max_depth {
                window.pop_front();
            }

            state = automaton.next_state(state, mode.fold(ch));
            let end = position + ch.len_utf8() - 1;

            let mut emitted = false;
            for (payload, length) in automaton.outputs(state) {
                let start = window[window.len() - length];
                let emit = Emit::new(start, end, payload);

                if !self.passes_filters(text, &emit) {
                    continue;
                }

                emitted = handler.emit(emit) || emitted;
                if emitted && stop_on_hit {
                    return true;
                }
            }
        }

        false
    }

    fn passes_filters(&self, text: &str, emit: &Emit<'_, T>) -> bool {
        let before = text[..emit.start()].chars().next_back();
        let after = text[emit.end() + 1..].chars().next();

        if self.config.only_whole_words
            && (before.is_some_and(char::is_alphabetic) || after.is_some_and(char::is_alphabetic))
        {
            return false;
        }

        if self.config.only_whole_words_whitespace_separated
            && (before.is_some_and(|c| !c.is_whitespace())
                || after.is_some_and(|c| !c.is_whitespace()))
        {
            return false;
        }

        true
    }
}

/// Incremental construction of a [`Trie`].
///
/// The configuration is fixed up front, so keywords are folded consistently
/// as they are added.
///
/// ```
/// use kwmatch::{TrieBuilder, TrieConfig};
///
/// let mut builder = TrieBuilder::new(TrieConfig::default().case_insensitive());
/// builder.add_keyword_with_payload("Rust", 1)?;
/// builder.add_keyword("crab")?;
/// let trie = builder.build()?;
///
/// let emit = trie.first_match("RUST is a CRAB").unwrap();
/// assert_eq!(emit.keyword(), "rust");
/// assert_eq!(emit.data(), Some(&1));
/// # Ok::<(), kwmatch::TrieError>(())
/// ```
#[derive(Debug)]
pub struct TrieBuilder<T = ()> {
    builder: AutomatonBuilder<T>,
    config: TrieConfig,
}

impl<T> TrieBuilder<T> {
    pub fn new(config: TrieConfig) -> Self {
        Self {
            builder: AutomatonBuilder::new(config.match_mode),
            config,
        }
    }

    /// Cap the number of automaton states; exceeding it fails the add.
    pub fn with_state_limit(mut self, limit: usize) -> Self {
        self.builder = self.builder.with_state_limit(limit);
        self
    }

    /// Add a keyword without data. Empty keywords are ignored.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<&mut Self> {
        self.builder.add_pattern(keyword, None)?;
        Ok(self)
    }

    pub fn add_keywords<I, K>(&mut self, keywords: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for keyword in keywords {
            self.builder.add_pattern(keyword.as_ref(), None)?;
        }
        Ok(self)
    }

    pub fn add_keyword_with_payload(&mut self, keyword: &str, data: T) -> Result<&mut Self> {
        self.builder.add_pattern(keyword, Some(data))?;
        Ok(self)
    }

    pub fn add_payload(&mut self, payload: Payload<T>) -> Result<&mut Self> {
        let keyword = payload.keyword().to_string();
        self.builder.add_pattern(&keyword, payload.into_data())?;
        Ok(self)
    }

    pub fn build(self) -> Result<Trie<T>> {
        let automaton = self.builder.build()?;
        Ok(Trie {
            automaton,
            config: self.config,
        })
    }
}
