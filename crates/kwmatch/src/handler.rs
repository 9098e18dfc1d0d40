//! Emit handlers
//!
//! A handler receives every emit that passes the configured filters, in
//! discovery order. Its return value decides whether the emit counts as
//! accepted: returning `false` vetoes the emit without stopping the scan,
//! which is what allows "skip the first N, then collect" style handlers.
//! Only accepted emits trigger `stop_on_first_hit`.

use crate::Emit;

/// Receiver for emits produced by [`Trie::parse_text_with`](crate::Trie::parse_text_with).
pub trait EmitHandler<'a, T: 'a> {
    /// Handle one emit; return whether it was accepted.
    fn emit(&mut self, emit: Emit<'a, T>) -> bool;
}

impl<'a, T: 'a, F> EmitHandler<'a, T> for F
where
    F: FnMut(Emit<'a, T>) -> bool,
{
    fn emit(&mut self, emit: Emit<'a, T>) -> bool {
        self(emit)
    }
}

/// Handler that accepts and keeps every emit.
#[derive(Debug)]
pub struct CollectingHandler<'a, T> {
    emits: Vec<Emit<'a, T>>,
}

impl<'a, T> CollectingHandler<'a, T> {
    pub fn new() -> Self {
        Self { emits: Vec::new() }
    }

    pub fn emits(&self) -> &[Emit<'a, T>] {
        &self.emits
    }

    pub fn into_emits(self) -> Vec<Emit<'a, T>> {
        self.emits
    }
}

impl<T> Default for CollectingHandler<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: 'a> EmitHandler<'a, T> for CollectingHandler<'a, T> {
    fn emit(&mut self, emit: Emit<'a, T>) -> bool {
        self.emits.push(emit);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{CollectingHandler, Emit, Trie, TrieConfig};

    #[test]
    fn test_closure_handler_with_borrowed_payloads() {
        let labels = vec![String::from("pronoun"), String::from("verb")];
        let trie = Trie::build_with_payloads(
            [("she", Some(labels[0].as_str())), ("sells", Some(labels[1].as_str()))],
            TrieConfig::default(),
        )
        .unwrap();

        let mut seen = Vec::new();
        let stopped = trie.parse_text_with("she sells", &mut |emit: Emit<'_, _>| {
            seen.push(*emit.data().unwrap());
            true
        });
        assert!(!stopped);
        assert_eq!(seen, vec!["pronoun", "verb"]);
    }

    #[test]
    fn test_collecting_handler() {
        let trie = Trie::build(["ab"], TrieConfig::default()).unwrap();
        let mut handler = CollectingHandler::default();
        trie.parse_text_with("abab", &mut handler);
        assert_eq!(handler.emits().len(), 2);
        let starts: Vec<_> = handler.into_emits().iter().map(|e| e.start()).collect();
        assert_eq!(starts, vec![0, 2]);
    }
}
