//! Error types surfaced at the builder boundary.

use thiserror::Error;

/// Contract violations rejected while a step is being accumulated.
///
/// A step carries at most one attachment, so mixing table rows and a doc
/// block on the same builder is a caller error rather than a representable
/// state.
///
/// # Examples
///
/// ```
/// use scenario_steps::{BuildError, DocBlock, StepBuilder};
///
/// let mut builder = StepBuilder::new(Vec::new(), "Given ", "a table", 3);
/// builder.append_row(Vec::new(), vec!["a".into()], 4)?;
/// let err = builder
///     .attach_doc_block(DocBlock::new("", "text", 5))
///     .unwrap_err();
/// assert!(matches!(err, BuildError::DocBlockAfterRows { rows: 1, .. }));
/// # Ok::<(), scenario_steps::BuildError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A table row arrived after a doc block was already attached.
    #[error("cannot append a table row at line {row_line}: a doc block is attached at line {block_line}")]
    RowAfterDocBlock {
        /// Line of the rejected row.
        row_line: u32,
        /// Opening line of the attached doc block.
        block_line: u32,
    },
    /// A doc block arrived after table rows were already accumulated.
    #[error("cannot attach a doc block at line {block_line}: {rows} table row(s) are already attached")]
    DocBlockAfterRows {
        /// Opening line of the rejected block.
        block_line: u32,
        /// Number of rows already accumulated.
        rows: usize,
    },
    /// A second doc block arrived for the same step.
    #[error("cannot attach a doc block at line {block_line}: one is already attached at line {existing_line}")]
    DocBlockAlreadyAttached {
        /// Opening line of the rejected block.
        block_line: u32,
        /// Opening line of the block already held.
        existing_line: u32,
    },
    /// A table row claimed a source line above the step's own line.
    #[error("table row at line {row_line} precedes its step at line {step_line}")]
    RowBeforeStep {
        /// Line of the rejected row.
        row_line: u32,
        /// Line of the step under construction.
        step_line: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::BuildError;

    #[test]
    fn row_after_doc_block_names_both_lines() {
        let err = BuildError::RowAfterDocBlock {
            row_line: 9,
            block_line: 5,
        };
        assert_eq!(
            err.to_string(),
            "cannot append a table row at line 9: a doc block is attached at line 5"
        );
    }

    #[test]
    fn doc_block_after_rows_reports_row_count() {
        let err = BuildError::DocBlockAfterRows {
            block_line: 7,
            rows: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot attach a doc block at line 7: 3 table row(s) are already attached"
        );
    }

    #[test]
    fn row_before_step_reports_ordering() {
        let err = BuildError::RowBeforeStep {
            row_line: 2,
            step_line: 4,
        };
        assert_eq!(
            err.to_string(),
            "table row at line 2 precedes its step at line 4"
        );
    }
}
