//! Inclusive source-line intervals.

/// An inclusive `[first, last]` interval of 1-based source line numbers.
///
/// Spans are value types; widening a span produces a new one rather than
/// mutating in place.
///
/// # Examples
///
/// ```
/// use scenario_steps::LineSpan;
///
/// let span = LineSpan::new(3, 7);
/// assert_eq!(span.first, 3);
/// assert_eq!(span.last, 7);
/// assert_eq!(span.merge(LineSpan::single(9)), LineSpan::new(3, 9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSpan {
    /// First line covered by the span.
    pub first: u32,
    /// Last line covered by the span; always `>= first`.
    pub last: u32,
}

impl LineSpan {
    /// Create a span covering `first..=last`, normalising a reversed pair so
    /// the `first <= last` invariant holds by construction.
    #[must_use]
    pub fn new(first: u32, last: u32) -> Self {
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    /// Create a span covering a single line.
    #[must_use]
    pub const fn single(line: u32) -> Self {
        Self {
            first: line,
            last: line,
        }
    }

    /// Return the smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            first: self.first.min(other.first),
            last: self.last.max(other.last),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::LineSpan;

    #[rstest]
    #[case(2, 5, 2, 5)]
    #[case(5, 2, 2, 5)]
    #[case(4, 4, 4, 4)]
    fn new_normalises_reversed_bounds(
        #[case] first: u32,
        #[case] last: u32,
        #[case] expected_first: u32,
        #[case] expected_last: u32,
    ) {
        let span = LineSpan::new(first, last);
        assert_eq!(span.first, expected_first);
        assert_eq!(span.last, expected_last);
    }

    #[test]
    fn merge_covers_both_operands() {
        let merged = LineSpan::new(3, 4).merge(LineSpan::new(1, 2));
        assert_eq!(merged, LineSpan::new(1, 4));
    }

    #[test]
    fn merge_with_contained_span_is_identity() {
        let outer = LineSpan::new(1, 10);
        assert_eq!(outer.merge(LineSpan::new(4, 6)), outer);
    }
}
