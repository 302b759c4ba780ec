//! Literal multi-line text blocks attached to steps.

use crate::span::LineSpan;

/// A literal multi-line text block following a step line.
///
/// `line` is the 1-based line of the opening delimiter; the block's span also
/// covers every content line and the closing delimiter. Empty content still
/// occupies one source line, matching how the document reader emits blocks.
///
/// # Examples
///
/// ```
/// use scenario_steps::{DocBlock, LineSpan};
///
/// let block = DocBlock::new("text/plain", "first\nsecond", 4);
/// assert_eq!(block.line_span(), LineSpan::new(4, 7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocBlock {
    /// Media-type hint from the opening delimiter; empty when absent.
    pub content_type: String,
    /// The raw block content, delimiters excluded.
    pub content: String,
    /// 1-based source line of the opening delimiter.
    pub line: u32,
}

impl DocBlock {
    /// Create a block from its content-type hint, content, and opening line.
    #[must_use]
    pub fn new(content_type: impl Into<String>, content: impl Into<String>, line: u32) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
            line,
        }
    }

    /// The inclusive span from the opening delimiter to the closing one.
    #[must_use]
    pub fn line_span(&self) -> LineSpan {
        let content_lines = u32::try_from(self.content.split('\n').count()).unwrap_or(u32::MAX);
        let last = self.line.saturating_add(content_lines).saturating_add(1);
        LineSpan::new(self.line, last)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DocBlock;
    use crate::span::LineSpan;

    #[rstest]
    #[case("single", 10, LineSpan::new(10, 12))]
    #[case("one\ntwo\nthree", 2, LineSpan::new(2, 6))]
    #[case("", 3, LineSpan::new(3, 5))]
    #[case("crlf\r\nlines", 1, LineSpan::new(1, 4))]
    fn span_counts_delimiters_and_content(
        #[case] content: &str,
        #[case] line: u32,
        #[case] expected: LineSpan,
    ) {
        assert_eq!(DocBlock::new("", content, line).line_span(), expected);
    }
}
