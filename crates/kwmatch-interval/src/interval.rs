use std::cmp::Ordering;
use std::fmt;

/// A closed interval `[start, end]` over integer positions.
///
/// Implementors must guarantee `start <= end`.
pub trait Intervalable {
    /// First position covered (inclusive)
    fn start(&self) -> usize;

    /// Last position covered (inclusive)
    fn end(&self) -> usize;

    /// Number of positions covered
    fn size(&self) -> usize {
        self.end() - self.start() + 1
    }

    /// True if the two intervals share at least one position
    fn overlaps_with<I: Intervalable + ?Sized>(&self, other: &I) -> bool {
        self.start() <= other.end() && self.end() >= other.start()
    }

    /// True if `point` lies within the interval
    fn overlaps_with_point(&self, point: usize) -> bool {
        self.start() <= point && point <= self.end()
    }

    /// Value identity: intervals are equal when start and end match
    fn same_span<I: Intervalable + ?Sized>(&self, other: &I) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }
}

impl<I: Intervalable + ?Sized> Intervalable for &I {
    fn start(&self) -> usize {
        (**self).start()
    }

    fn end(&self) -> usize {
        (**self).end()
    }
}

/// Plain interval with no attached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: usize,
    end: usize,
}

impl Interval {
    /// Create an interval covering `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "interval end {} precedes start {}",
            end,
            start
        );
        Self { start, end }
    }
}

impl Intervalable for Interval {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Larger intervals first; equal sizes ordered by start.
pub fn by_size<A: Intervalable, B: Intervalable>(a: &A, b: &B) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.start().cmp(&b.start()))
}

/// Ordered by start, then end.
pub fn by_position<A: Intervalable, B: Intervalable>(a: &A, b: &B) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| a.end().cmp(&b.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(Interval::new(0, 2).size(), 3);
        assert_eq!(Interval::new(4, 4).size(), 1);
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::new(1, 3);
        assert!(a.overlaps_with(&Interval::new(3, 5)));
        assert!(a.overlaps_with(&Interval::new(0, 1)));
        assert!(!a.overlaps_with(&Interval::new(4, 6)));
        assert!(a.overlaps_with_point(2));
        assert!(!a.overlaps_with_point(0));
    }

    #[test]
    #[should_panic]
    fn test_inverted_interval_rejected() {
        let _ = Interval::new(5, 4);
    }

    #[test]
    fn test_size_comparator() {
        let mut intervals = vec![
            Interval::new(4, 5),
            Interval::new(2, 3),
            Interval::new(0, 4),
            Interval::new(1, 1),
        ];
        intervals.sort_by(by_size);
        assert_eq!(
            intervals,
            vec![
                Interval::new(0, 4),
                Interval::new(2, 3),
                Interval::new(4, 5),
                Interval::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_position_comparator() {
        let mut intervals = vec![Interval::new(3, 4), Interval::new(1, 5), Interval::new(1, 2)];
        intervals.sort_by(by_position);
        assert_eq!(
            intervals,
            vec![Interval::new(1, 2), Interval::new(1, 5), Interval::new(3, 4)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(2, 7).to_string(), "2:7");
    }
}
