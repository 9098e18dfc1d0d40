//! Aho-Corasick Automaton with keyword payloads
//!
//! This crate builds the classic Aho-Corasick automaton: a trie of keywords
//! plus failure links computed breadth-first, with each state's output set
//! extended by the outputs reachable through its failure link.
//!
//! # Design
//!
//! States live in an arena (`Vec<State>`) and refer to each other by index:
//! - trie edges are per-state `char -> StateId` maps, each child owned by
//!   exactly one parent
//! - failure links are plain indices pointing back to shallower states
//! - outputs are payload indices, so inherited outputs are shared rather
//!   than copied
//!
//! The automaton is immutable once built and can be shared across threads
//! for concurrent scanning.

use kwmatch_match_mode::MatchMode;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

// Validation module for automaton structures
pub mod validation;

pub use validation::{validate_automaton, ACStats, ACValidationResult};

/// Index of a state in the automaton arena
pub type StateId = u32;

/// The root state is always the first arena slot
pub const ROOT: StateId = 0;

/// Error type for AC automaton operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ACError {
    /// Resource limit exceeded (e.g., too many states)
    ResourceLimitExceeded(String),
}

impl fmt::Display for ACError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ACError::ResourceLimitExceeded(msg) => write!(f, "Resource limit exceeded: {}", msg),
        }
    }
}

impl std::error::Error for ACError {}

/// A keyword together with optional caller data.
///
/// Payloads compare and order by keyword text only; the data never takes
/// part in matching.
#[derive(Debug, Clone)]
pub struct Payload<T> {
    keyword: String,
    data: Option<T>,
}

impl<T> Payload<T> {
    pub fn new(keyword: impl Into<String>, data: Option<T>) -> Self {
        Self {
            keyword: keyword.into(),
            data,
        }
    }

    /// Keyword as stored in the automaton (case-folded when the automaton is
    /// case-insensitive)
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> PartialEq for Payload<T> {
    fn eq(&self, other: &Self) -> bool {
        self.keyword == other.keyword
    }
}

impl<T> Eq for Payload<T> {}

impl<T> PartialOrd for Payload<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Payload<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.keyword.cmp(&other.keyword)
    }
}

/// One automaton state
#[derive(Debug, Clone)]
struct State {
    depth: u32,
    transitions: FxHashMap<char, StateId>,
    failure: StateId,
    /// Payload ids emitted on arrival, ascending by keyword
    outputs: Vec<u32>,
}

impl State {
    fn new(depth: u32) -> Self {
        Self {
            depth,
            transitions: FxHashMap::default(),
            failure: ROOT,
            outputs: Vec::new(),
        }
    }
}

/// Builder for constructing the automaton
///
/// Keywords are inserted into the trie as they are added; failure links are
/// computed once in [`AutomatonBuilder::build`].
#[derive(Debug)]
pub struct AutomatonBuilder<T> {
    states: Vec<State>,
    payloads: Vec<Payload<T>>,
    /// Keyword length in characters, indexed by payload id
    depths: Vec<u32>,
    mode: MatchMode,
    state_limit: usize,
}

impl<T> AutomatonBuilder<T> {
    /// Create a builder. The match mode is fixed for the builder's lifetime
    /// since it determines how keywords are inserted.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            states: vec![State::new(0)], // Root
            payloads: Vec::new(),
            depths: Vec::new(),
            mode,
            state_limit: StateId::MAX as usize,
        }
    }

    /// Cap the number of states (root included) the automaton may grow to.
    pub fn with_state_limit(mut self, limit: usize) -> Self {
        self.state_limit = limit.min(StateId::MAX as usize);
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Add a keyword with optional data.
    ///
    /// Returns the payload id, or `None` for an empty keyword, which is
    /// ignored. If the (folded) keyword was already added, the first payload
    /// is kept, `data` is dropped and the existing id is returned.
    ///
    /// # Case-Insensitive Mode
    ///
    /// Keywords are lowercased here and the scanner lowercases text, so a
    /// single trie path serves every case combination.
    pub fn add_pattern(&mut self, keyword: &str, data: Option<T>) -> Result<Option<u32>, ACError> {
        if keyword.is_empty() {
            return Ok(None);
        }

        let keyword = self.mode.fold_str(keyword);

        // Walk the existing prefix, then check the budget before inserting
        let mut current = ROOT;
        let mut chars = keyword.chars().peekable();
        while let Some(&ch) = chars.peek() {
            match self.states[current as usize].transitions.get(&ch) {
                Some(&next) => {
                    current = next;
                    chars.next();
                }
                None => break,
            }
        }

        let remaining: Vec<char> = chars.collect();
        if self.states.len() + remaining.len() > self.state_limit {
            return Err(ACError::ResourceLimitExceeded(format!(
                "automaton would exceed {} states while adding {:?}",
                self.state_limit, keyword
            )));
        }

        for ch in remaining {
            let depth = self.states[current as usize].depth + 1;
            let new_id = self.states.len() as StateId;
            self.states.push(State::new(depth));
            self.states[current as usize].transitions.insert(ch, new_id);
            current = new_id;
        }

        // Before failure links exist a state carries at most its own keyword
        if let Some(&existing) = self.states[current as usize].outputs.first() {
            return Ok(Some(existing));
        }

        let payload_id = self.payloads.len() as u32;
        self.depths.push(self.states[current as usize].depth);
        self.payloads.push(Payload::new(keyword, data));
        self.states[current as usize].outputs.push(payload_id);

        Ok(Some(payload_id))
    }

    /// Breadth-first failure link assignment.
    ///
    /// Depth-1 states fail to root. A deeper state reached from `parent` on
    /// `ch` fails to the first state along `parent`'s failure chain with a
    /// transition on `ch`, falling back to root, and inherits that state's
    /// outputs.
    fn build_failure_links(&mut self) {
        let Self {
            states, payloads, ..
        } = self;
        let mut queue = VecDeque::new();

        for &child in states[ROOT as usize].transitions.values() {
            queue.push_back(child);
        }

        while let Some(state_id) = queue.pop_front() {
            let transitions: Vec<(char, StateId)> = states[state_id as usize]
                .transitions
                .iter()
                .map(|(&ch, &next)| (ch, next))
                .collect();

            for (ch, next_state) in transitions {
                queue.push_back(next_state);

                let mut fail = states[state_id as usize].failure;
                let target = loop {
                    if let Some(&target) = states[fail as usize].transitions.get(&ch) {
                        break target;
                    }
                    if fail == ROOT {
                        break ROOT;
                    }
                    fail = states[fail as usize].failure;
                };
                states[next_state as usize].failure = target;

                // Target is shallower, so its outputs already include its own
                // inherited ones
                if !states[target as usize].outputs.is_empty() {
                    let inherited = states[target as usize].outputs.clone();
                    let outputs = &mut states[next_state as usize].outputs;
                    outputs.extend(inherited);
                    outputs.sort_by(|&a, &b| {
                        payloads[a as usize]
                            .keyword
                            .cmp(&payloads[b as usize].keyword)
                    });
                    outputs.dedup();
                }
            }
        }
    }

    /// Compute failure links and freeze the automaton.
    pub fn build(mut self) -> Result<Automaton<T>, ACError> {
        self.build_failure_links();

        let max_depth = self.states.iter().map(|s| s.depth).max().unwrap_or(0) as usize;
        let automaton = Automaton {
            states: self.states,
            payloads: self.payloads,
            depths: self.depths,
            mode: self.mode,
            max_depth,
        };

        debug!(
            patterns = automaton.payload_count(),
            states = automaton.state_count(),
            max_depth,
            mode = ?automaton.mode,
            "built automaton"
        );

        if cfg!(debug_assertions) {
            let report = validate_automaton(&automaton);
            assert!(
                report.is_valid(),
                "built automaton violates its invariants: {:?}",
                report.errors
            );
        }

        Ok(automaton)
    }
}

/// Immutable Aho-Corasick automaton.
///
/// Scanning only needs `&self`, so one automaton can serve any number of
/// concurrent scans.
#[derive(Debug, Clone)]
pub struct Automaton<T> {
    states: Vec<State>,
    payloads: Vec<Payload<T>>,
    depths: Vec<u32>,
    mode: MatchMode,
    max_depth: usize,
}

impl<T> Automaton<T> {
    /// Build the automaton from `(keyword, data)` pairs.
    ///
    /// Empty keywords are skipped. Zero keywords yield an automaton that
    /// never emits.
    pub fn build<I, K>(patterns: I, mode: MatchMode) -> Result<Self, ACError>
    where
        I: IntoIterator<Item = (K, Option<T>)>,
        K: AsRef<str>,
    {
        let mut builder = AutomatonBuilder::new(mode);
        for (keyword, data) in patterns {
            builder.add_pattern(keyword.as_ref(), data)?;
        }
        builder.build()
    }

    pub fn root(&self) -> StateId {
        ROOT
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Number of states, root included
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of distinct keywords
    pub fn payload_count(&self) -> usize {
        self.payloads.len()
    }

    /// Length in characters of the longest keyword
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Payloads in insertion order
    pub fn payloads(&self) -> &[Payload<T>] {
        &self.payloads
    }

    pub fn depth(&self, state: StateId) -> usize {
        self.states[state as usize].depth as usize
    }

    pub fn failure(&self, state: StateId) -> StateId {
        self.states[state as usize].failure
    }

    /// Trie edge only, no failure handling
    pub fn goto(&self, state: StateId, ch: char) -> Option<StateId> {
        self.states[state as usize].transitions.get(&ch).copied()
    }

    /// Advance from `state` on an already-folded character, following failure
    /// links until a transition exists. Root without a transition stays at
    /// root, so the walk always terminates.
    #[inline]
    pub fn next_state(&self, mut state: StateId, ch: char) -> StateId {
        loop {
            if let Some(&next) = self.states[state as usize].transitions.get(&ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state as usize].failure;
        }
    }

    /// Payloads emitted on arriving at `state`, with each keyword's length in
    /// characters, ascending by keyword.
    pub fn outputs(&self, state: StateId) -> impl Iterator<Item = (&Payload<T>, usize)> + '_ {
        self.states[state as usize]
            .outputs
            .iter()
            .map(move |&id| (&self.payloads[id as usize], self.depths[id as usize] as usize))
    }

    pub(crate) fn transitions(&self, state: StateId) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.states[state as usize]
            .transitions
            .iter()
            .map(|(&ch, &next)| (ch, next))
    }

    pub(crate) fn output_ids(&self, state: StateId) -> &[u32] {
        &self.states[state as usize].outputs
    }

    pub(crate) fn keyword_depth(&self, payload_id: u32) -> Option<usize> {
        self.depths.get(payload_id as usize).map(|&d| d as usize)
    }
}
