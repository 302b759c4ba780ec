//! Structured payloads a step may carry.
//!
//! A step carries at most one attachment: either a data table or a doc
//! block. The tagged [`Attachment`] enum rules out the "both at once" state
//! structurally; [`crate::StepBuilder`] rejects the conflicting calls before
//! one could be assembled.

mod doc_block;
mod table;

pub use doc_block::DocBlock;
pub use table::{TableRow, TableRows};

use crate::span::LineSpan;

/// The structured payload attached to a step, when one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attachment {
    /// A tabular data block following the step line.
    Table(TableRows),
    /// A literal multi-line text block following the step line.
    DocBlock(DocBlock),
}

impl Attachment {
    /// The last source line the attachment occupies, used to widen the
    /// owning step's span.
    #[must_use]
    pub fn last_line(&self) -> u32 {
        match self {
            Self::Table(rows) => rows.last_line(),
            Self::DocBlock(block) => block.line_span().last,
        }
    }

    /// Widen `span` to cover this attachment.
    pub(crate) fn widen(&self, span: LineSpan) -> LineSpan {
        span.merge(LineSpan::single(self.last_line()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Attachment, DocBlock, TableRow, TableRows};

    #[test]
    fn table_attachment_reports_last_row_line() {
        let rows = TableRows::from(vec![
            TableRow::new(Vec::new(), vec!["a".to_owned()], 5),
            TableRow::new(Vec::new(), vec!["b".to_owned()], 6),
        ]);
        assert_eq!(Attachment::Table(rows).last_line(), 6);
    }

    #[test]
    fn doc_block_attachment_reports_closing_delimiter_line() {
        let block = DocBlock::new("", "one\ntwo", 10);
        assert_eq!(Attachment::DocBlock(block).last_line(), 13);
    }
}
