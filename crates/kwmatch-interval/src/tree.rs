//! Static median-split interval tree
//!
//! The tree is built once from a fixed interval set and never updated. Each
//! node picks the midpoint of its intervals' overall range; intervals lying
//! entirely left or right of that point are pushed into the corresponding
//! subtree, and the ones straddling it stay at the node.
//!
//! Queries descend in O(log n) expected steps. A degenerate distribution
//! (e.g. many identical intervals) keeps everything at one node and degrades
//! to a linear scan.

use crate::interval::{by_position, by_size, Intervalable};
use std::collections::BTreeSet;
use tracing::trace;

/// A node of an [`IntervalTree`].
#[derive(Debug)]
pub struct IntervalNode<'a, I> {
    point: usize,
    left: Option<Box<IntervalNode<'a, I>>>,
    right: Option<Box<IntervalNode<'a, I>>>,
    intervals: Vec<&'a I>,
}

impl<'a, I: Intervalable> IntervalNode<'a, I> {
    fn new(intervals: Vec<&'a I>) -> Self {
        let point = median(&intervals);

        let mut to_left = Vec::new();
        let mut to_right = Vec::new();
        let mut here = Vec::new();

        for interval in intervals {
            if interval.end() < point {
                to_left.push(interval);
            } else if interval.start() > point {
                to_right.push(interval);
            } else {
                here.push(interval);
            }
        }

        let left = (!to_left.is_empty()).then(|| Box::new(IntervalNode::new(to_left)));
        let right = (!to_right.is_empty()).then(|| Box::new(IntervalNode::new(to_right)));

        Self {
            point,
            left,
            right,
            intervals: here,
        }
    }

    /// Split point of this node
    pub fn point(&self) -> usize {
        self.point
    }

    /// Intervals straddling the split point
    pub fn intervals(&self) -> &[&'a I] {
        &self.intervals
    }

    fn find_overlaps<Q: Intervalable + ?Sized>(&self, query: &Q, overlaps: &mut Vec<&'a I>) {
        if self.point < query.start() {
            // Query lies right of the point: stored intervals overlap if they reach it
            if let Some(right) = &self.right {
                right.find_overlaps(query, overlaps);
            }
            self.collect(query, overlaps, |i| i.end() >= query.start());
        } else if self.point > query.end() {
            if let Some(left) = &self.left {
                left.find_overlaps(query, overlaps);
            }
            self.collect(query, overlaps, |i| i.start() <= query.end());
        } else {
            self.collect(query, overlaps, |_| true);
            if let Some(left) = &self.left {
                left.find_overlaps(query, overlaps);
            }
            if let Some(right) = &self.right {
                right.find_overlaps(query, overlaps);
            }
        }
    }

    fn collect<Q, F>(&self, query: &Q, overlaps: &mut Vec<&'a I>, keep: F)
    where
        Q: Intervalable + ?Sized,
        F: Fn(&I) -> bool,
    {
        overlaps.extend(
            self.intervals
                .iter()
                .copied()
                .filter(|i| keep(*i) && !i.same_span(query)),
        );
    }
}

fn median<I: Intervalable>(intervals: &[&I]) -> usize {
    let start = intervals.iter().map(|i| i.start()).min().unwrap_or(0);
    let end = intervals.iter().map(|i| i.end()).max().unwrap_or(0);
    start + (end - start) / 2
}

/// Interval tree over a borrowed, fixed set of intervals.
#[derive(Debug)]
pub struct IntervalTree<'a, I> {
    root: Option<IntervalNode<'a, I>>,
}

impl<'a, I: Intervalable> IntervalTree<'a, I> {
    /// Build the tree. An empty slice produces a tree that finds nothing.
    pub fn new(intervals: &'a [I]) -> Self {
        let refs: Vec<&'a I> = intervals.iter().collect();
        let root = (!refs.is_empty()).then(|| IntervalNode::new(refs));
        Self { root }
    }

    /// Root node, if any interval was given
    pub fn root(&self) -> Option<&IntervalNode<'a, I>> {
        self.root.as_ref()
    }

    /// All intervals that overlap `query`.
    ///
    /// Intervals with the same start and end as the query are excluded, so
    /// querying with a member of the tree never returns the member itself.
    pub fn find_overlaps<Q: Intervalable + ?Sized>(&self, query: &Q) -> Vec<&'a I> {
        let mut overlaps = Vec::new();
        if let Some(root) = &self.root {
            root.find_overlaps(query, &mut overlaps);
        }
        overlaps
    }
}

/// Resolve overlapping intervals, keeping the longest (then leftmost) ones.
///
/// Candidates are visited from largest to smallest, ties broken by start;
/// each candidate not yet eliminated eliminates everything overlapping it.
/// Survivors are returned ordered by start, then end. Value-identical
/// intervals collapse to a single survivor.
///
/// This is a greedy heuristic, not an optimal interval-scheduling solver.
pub fn remove_overlaps<I: Intervalable>(mut intervals: Vec<I>) -> Vec<I> {
    if intervals.len() < 2 {
        return intervals;
    }

    let candidates = intervals.len();
    intervals.sort_by(by_size);

    let removed: BTreeSet<(usize, usize)> = {
        let tree = IntervalTree::new(&intervals);
        let mut removed = BTreeSet::new();
        for interval in &intervals {
            if removed.contains(&(interval.start(), interval.end())) {
                continue;
            }
            removed.extend(
                tree.find_overlaps(interval)
                    .into_iter()
                    .map(|i| (i.start(), i.end())),
            );
        }
        removed
    };

    intervals.retain(|i| !removed.contains(&(i.start(), i.end())));
    intervals.sort_by(by_position);
    intervals.dedup_by(|a, b| a.same_span(&*b));

    trace!(
        candidates,
        survivors = intervals.len(),
        "resolved overlapping intervals"
    );
    intervals
}
