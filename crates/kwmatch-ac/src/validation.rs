//! AC Automaton validation
//!
//! Checks the structural invariants the scanner relies on: depth grows by one
//! along every trie edge, failure links point strictly upward, every state is
//! reachable from root, and output sets only reference known payloads that fit
//! within the state's depth.

use crate::{Automaton, StateId, ROOT};
use std::collections::VecDeque;

/// Validation result for AC automaton structures
#[derive(Debug, Clone)]
pub struct ACValidationResult {
    /// Critical errors that make the structure unusable
    pub errors: Vec<String>,
    /// Warnings about potential issues (non-fatal)
    pub warnings: Vec<String>,
    /// Statistics gathered during validation
    pub stats: ACStats,
}

/// Statistics gathered during AC automaton validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ACStats {
    /// Number of states, root included
    pub state_count: usize,
    /// Number of distinct keywords
    pub payload_count: usize,
    /// Number of trie edges
    pub transition_count: usize,
    /// Deepest state
    pub max_depth: usize,
    /// Number of states unreachable from root
    pub orphaned_count: usize,
}

impl ACValidationResult {
    fn new(state_count: usize, payload_count: usize) -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ACStats {
                state_count,
                payload_count,
                ..ACStats::default()
            },
        }
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate an automaton's invariants.
///
/// Validates:
/// - Root has depth 0 and fails to itself
/// - Each trie edge increases depth by exactly one
/// - Each non-root failure target is strictly shallower
/// - Every state is reachable from root
/// - Output payload ids are in range and no keyword is longer than its state
pub fn validate_automaton<T>(automaton: &Automaton<T>) -> ACValidationResult {
    let state_count = automaton.state_count();
    let mut result = ACValidationResult::new(state_count, automaton.payload_count());

    if automaton.depth(ROOT) != 0 {
        result
            .errors
            .push(format!("Root has depth {}", automaton.depth(ROOT)));
    }
    if automaton.failure(ROOT) != ROOT {
        result.errors.push(format!(
            "Root fails to state {} instead of itself",
            automaton.failure(ROOT)
        ));
    }

    for id in 0..state_count as StateId {
        let depth = automaton.depth(id);
        result.stats.max_depth = result.stats.max_depth.max(depth);

        for (ch, next) in automaton.transitions(id) {
            result.stats.transition_count += 1;
            if next as usize >= state_count {
                result.errors.push(format!(
                    "State {} has transition {:?} to missing state {}",
                    id, ch, next
                ));
                continue;
            }
            if automaton.depth(next) != depth + 1 {
                result.errors.push(format!(
                    "State {} (depth {}) has transition {:?} to state {} at depth {}",
                    id,
                    depth,
                    ch,
                    next,
                    automaton.depth(next)
                ));
            }
        }

        if id != ROOT {
            let failure = automaton.failure(id);
            if failure as usize >= state_count {
                result
                    .errors
                    .push(format!("State {} fails to missing state {}", id, failure));
            } else if automaton.depth(failure) >= depth {
                result.errors.push(format!(
                    "State {} (depth {}) fails to state {} at depth {}",
                    id,
                    depth,
                    failure,
                    automaton.depth(failure)
                ));
            }
        }

        for &payload_id in automaton.output_ids(id) {
            match automaton.keyword_depth(payload_id) {
                None => result.errors.push(format!(
                    "State {} emits unknown payload {}",
                    id, payload_id
                )),
                Some(len) if len > depth => result.errors.push(format!(
                    "State {} (depth {}) emits keyword of length {}",
                    id, depth, len
                )),
                Some(_) => {}
            }
        }
    }

    let orphaned = count_unreachable(automaton);
    result.stats.orphaned_count = orphaned;
    if orphaned > 0 {
        result
            .errors
            .push(format!("{} states unreachable from root", orphaned));
    }

    if state_count > 1 && automaton.payload_count() == 0 {
        result
            .warnings
            .push("Automaton has states but no keywords".to_string());
    }

    result
}

fn count_unreachable<T>(automaton: &Automaton<T>) -> usize {
    let state_count = automaton.state_count();
    let mut visited = vec![false; state_count];
    let mut queue = VecDeque::new();

    visited[ROOT as usize] = true;
    queue.push_back(ROOT);

    while let Some(id) = queue.pop_front() {
        for (_, next) in automaton.transitions(id) {
            if let Some(seen) = visited.get_mut(next as usize) {
                if !*seen {
                    *seen = true;
                    queue.push_back(next);
                }
            }
        }
    }

    visited.iter().filter(|&&seen| !seen).count()
}
