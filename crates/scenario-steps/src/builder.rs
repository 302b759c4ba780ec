//! Staged construction of steps during document reading.

use crate::annotation::Annotation;
use crate::attachment::{Attachment, DocBlock, TableRow, TableRows};
use crate::container::{PopulateContainer, StepContainer};
use crate::errors::BuildError;
use crate::step::Step;
use crate::visit::{StepVisitor, TraversalQueue};

/// Mutable accumulator for one step, mirroring how a document reader
/// discovers the step's parts across successive input lines.
///
/// The builder is the only mutable type in the crate: the step's own line is
/// known atomically when read, trailing rows or a doc block arrive one line
/// at a time, and [`build`](Self::build) finalises the lot into an immutable
/// [`Step`]. A builder serves exactly one step and one reader; nothing is
/// shared.
///
/// Attachments are mutually exclusive. The builder rejects whichever of
/// rows and doc block arrives second, so no step with both can ever be
/// assembled.
///
/// # Examples
///
/// ```
/// use scenario_steps::{LineSpan, StepBuilder};
///
/// let mut builder = StepBuilder::new(Vec::new(), "Given ", "these cukes", 3);
/// builder.append_row(Vec::new(), vec!["a".into(), "1".into()], 4)?;
/// builder.append_row(Vec::new(), vec!["b".into(), "2".into()], 5)?;
/// let step = builder.build();
/// assert_eq!(step.line_span(), LineSpan::new(3, 5));
/// # Ok::<(), scenario_steps::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StepBuilder {
    annotations: Vec<Annotation>,
    keyword: String,
    text: String,
    line: u32,
    rows: Vec<TableRow>,
    doc_block: Option<DocBlock>,
}

impl StepBuilder {
    /// Begin a step from the fragments known when its own line is read.
    #[must_use]
    pub fn new(
        annotations: Vec<Annotation>,
        keyword: impl Into<String>,
        text: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            annotations,
            keyword: keyword.into(),
            text: text.into(),
            line,
            rows: Vec::new(),
            doc_block: None,
        }
    }

    /// Append one data-table row.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RowAfterDocBlock`] when a doc block is already
    /// attached, and [`BuildError::RowBeforeStep`] when `line` lies above
    /// the step's own line.
    pub fn append_row(
        &mut self,
        annotations: Vec<Annotation>,
        cells: Vec<String>,
        line: u32,
    ) -> Result<(), BuildError> {
        if let Some(block) = &self.doc_block {
            log::debug!(
                "rejecting table row at line {line}: doc block attached at line {}",
                block.line
            );
            return Err(BuildError::RowAfterDocBlock {
                row_line: line,
                block_line: block.line,
            });
        }
        if line < self.line {
            return Err(BuildError::RowBeforeStep {
                row_line: line,
                step_line: self.line,
            });
        }
        self.rows.push(TableRow::new(annotations, cells, line));
        Ok(())
    }

    /// Attach the step's doc block.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DocBlockAfterRows`] when table rows are already
    /// accumulated, and [`BuildError::DocBlockAlreadyAttached`] when a block
    /// was attached earlier; overwriting is never allowed.
    pub fn attach_doc_block(&mut self, block: DocBlock) -> Result<(), BuildError> {
        if !self.rows.is_empty() {
            log::debug!(
                "rejecting doc block at line {}: {} row(s) attached",
                block.line,
                self.rows.len()
            );
            return Err(BuildError::DocBlockAfterRows {
                block_line: block.line,
                rows: self.rows.len(),
            });
        }
        if let Some(existing) = &self.doc_block {
            return Err(BuildError::DocBlockAlreadyAttached {
                block_line: block.line,
                existing_line: existing.line,
            });
        }
        self.doc_block = Some(block);
        Ok(())
    }

    /// Finalise the accumulated state into an immutable [`Step`].
    ///
    /// Repeated calls yield value-equal steps; the builder keeps no hidden
    /// counters.
    #[must_use]
    pub fn build(&self) -> Step {
        let attachment = if self.rows.is_empty() {
            self.doc_block.clone().map(Attachment::DocBlock)
        } else {
            Some(Attachment::Table(TableRows::from(self.rows.clone())))
        };
        Step::new(
            self.annotations.clone(),
            self.keyword.clone(),
            self.text.clone(),
            self.line,
            attachment,
        )
    }

    /// Finalise and immediately feed the step through the traversal
    /// protocol, for formatting pipelines that never store steps.
    ///
    /// # Errors
    ///
    /// Propagates the visitor's error untransformed.
    pub fn deliver_to<V: StepVisitor + ?Sized>(
        self,
        visitor: &mut V,
        queue: &mut TraversalQueue,
    ) -> Result<(), V::Error> {
        self.build().visit(visitor, queue)
    }

    /// Finalise and append the step into `container`.
    pub fn attach_to(self, container: &mut dyn StepContainer) {
        container.add_step(self.build());
    }
}

impl PopulateContainer for StepBuilder {
    fn populate_into(self, container: &mut dyn StepContainer) {
        self.attach_to(container);
    }
}
