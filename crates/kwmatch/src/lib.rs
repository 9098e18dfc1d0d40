//! Kwmatch - Multi-Keyword Matching with Aho-Corasick
//!
//! Kwmatch locates many keywords in a text with a single linear scan. Each
//! keyword may carry a payload that is handed back with every match. On top of
//! the raw scan it offers whole-word filtering, stop-on-first-hit, greedy
//! overlap resolution and tokenization.
//!
//! # Quick Start
//!
//! ```rust
//! use kwmatch::{Trie, TrieConfig};
//!
//! let config = TrieConfig::default()
//!     .with_allow_overlaps(false)
//!     .with_only_whole_words(true);
//! let trie = Trie::build_with_payloads(
//!     [("new york", Some("city")), ("york", Some("city")), ("new", None)],
//!     config,
//! )?;
//!
//! let text = "flights from new york to york";
//! for emit in trie.parse_text(text) {
//!     println!("{} -> {:?}", emit.matched(text), emit.data());
//! }
//! assert_eq!(trie.parse_text(text).len(), 2);
//! # Ok::<(), kwmatch::TrieError>(())
//! ```
//!
//! # Key Features
//!
//! - **Linear scan**: one pass over the text regardless of keyword count
//! - **Payloads**: any `T` attached to a keyword, borrowed back on match
//! - **Filters**: whole words (alphabetic or whitespace boundaries), case
//!   folding, stop on first hit, caller-side veto through [`EmitHandler`]
//! - **Overlap resolution**: longest match wins, leftmost breaks ties
//! - **Thread safe**: a built [`Trie`] is immutable and `Sync` whenever its
//!   payload type is
//!
//! # Offsets
//!
//! [`Emit`] offsets are inclusive byte offsets into the scanned `&str`, so
//! `&text[emit.start()..=emit.end()]` (or [`Emit::matched`]) is always valid.

mod config;
mod emit;
pub mod error;
mod handler;
mod token;
mod trie;

pub use config::TrieConfig;
pub use emit::Emit;
pub use error::{Result, TrieError};
pub use handler::{CollectingHandler, EmitHandler};
pub use token::Token;
pub use trie::{Trie, TrieBuilder};

// Re-export component types used in the public API
pub use kwmatch_ac::{Automaton, Payload};
pub use kwmatch_interval::{remove_overlaps, Interval, IntervalTree, Intervalable};
pub use kwmatch_match_mode::MatchMode;

