use kwmatch_ac::Payload;
use kwmatch_interval::Intervalable;
use std::cmp::Ordering;
use std::fmt;

/// A keyword match found in scanned text.
///
/// `start` and `end` are inclusive byte offsets, so the matched text is
/// `&text[emit.start()..=emit.end()]`. The payload is borrowed from the trie
/// that produced the emit.
///
/// Equality and ordering consider only `(start, end)`; the payload is
/// deliberately ignored so that identical spans are treated as duplicates
/// during overlap resolution.
pub struct Emit<'a, T> {
    start: usize,
    end: usize,
    payload: &'a Payload<T>,
}

impl<'a, T> Emit<'a, T> {
    pub fn new(start: usize, end: usize, payload: &'a Payload<T>) -> Self {
        Self {
            start,
            end,
            payload,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The keyword that matched, as stored in the trie
    pub fn keyword(&self) -> &'a str {
        self.payload.keyword()
    }

    pub fn payload(&self) -> &'a Payload<T> {
        self.payload
    }

    pub fn data(&self) -> Option<&'a T> {
        self.payload.data()
    }

    /// Slice of `text` covered by this emit.
    ///
    /// `text` must be the string the emit was produced from.
    pub fn matched<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..=self.end]
    }
}

impl<T> Intervalable for Emit<'_, T> {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl<T> Clone for Emit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Emit<'_, T> {}

impl<T> PartialEq for Emit<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T> Eq for Emit<'_, T> {}

impl<T> PartialOrd for Emit<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Emit<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<T: fmt::Debug> fmt::Debug for Emit<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emit")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("keyword", &self.payload.keyword())
            .field("data", &self.payload.data())
            .finish()
    }
}

impl<T> fmt::Display for Emit<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}={}", self.start, self.end, self.payload.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_payload() {
        let a = Payload::new("abc", Some(1));
        let b = Payload::new("xyz", Some(2));
        assert_eq!(Emit::new(1, 3, &a), Emit::new(1, 3, &b));
        assert_ne!(Emit::new(1, 3, &a), Emit::new(1, 4, &a));
    }

    #[test]
    fn test_ordering() {
        let p = Payload::<()>::new("k", None);
        let mut emits = vec![Emit::new(4, 5, &p), Emit::new(1, 3, &p), Emit::new(1, 2, &p)];
        emits.sort();
        let spans: Vec<_> = emits.iter().map(|e| (e.start(), e.end())).collect();
        assert_eq!(spans, vec![(1, 2), (1, 3), (4, 5)]);
    }

    #[test]
    fn test_interval_view() {
        let p = Payload::<()>::new("abc", None);
        let emit = Emit::new(2, 4, &p);
        assert_eq!(emit.size(), 3);
        assert_eq!(emit.matched("xxabcxx"), "abc");
        assert_eq!(emit.to_string(), "2:4=abc");
    }
}
