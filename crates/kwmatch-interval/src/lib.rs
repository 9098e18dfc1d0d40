//! Interval model and static interval tree
//!
//! This crate provides the closed integer interval abstraction used by the
//! matcher to describe where a keyword was found, a median-split interval
//! tree answering overlap queries against a fixed interval set, and the
//! greedy "longest match wins, leftmost breaks ties" overlap resolution
//! built on top of it.
//!
//! # Example
//!
//! ```
//! use kwmatch_interval::{remove_overlaps, Interval};
//!
//! let survivors = remove_overlaps(vec![
//!     Interval::new(0, 2),
//!     Interval::new(1, 5),
//!     Interval::new(6, 7),
//! ]);
//! assert_eq!(survivors, vec![Interval::new(1, 5), Interval::new(6, 7)]);
//! ```

mod interval;
mod tree;

pub use interval::{by_position, by_size, Interval, Intervalable};
pub use tree::{remove_overlaps, IntervalNode, IntervalTree};
