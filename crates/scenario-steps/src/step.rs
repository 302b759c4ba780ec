//! The immutable step entity.

use crate::annotation::Annotation;
use crate::attachment::{Attachment, DocBlock, TableRows};
use crate::location::SyntheticLocation;
use crate::outline::{OutlineMatch, PlaceholderToken, extract_placeholders};
use crate::span::LineSpan;
use crate::visit::{ChildNode, StepVisitor, TraversalQueue};

/// One Given/When/Then instruction line plus its optional attachment.
///
/// Steps are constructed by [`crate::StepBuilder`] and never mutated
/// afterwards; every method here is a pure query over the finalised state.
///
/// # Examples
///
/// ```
/// use scenario_steps::{LineSpan, StepBuilder};
///
/// let step = StepBuilder::new(Vec::new(), "Given ", "a basket", 2).build();
/// assert_eq!(step.keyword(), "Given ");
/// assert_eq!(step.line_span(), LineSpan::single(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    annotations: Vec<Annotation>,
    keyword: String,
    text: String,
    line: u32,
    attachment: Option<Attachment>,
}

impl Step {
    pub(crate) fn new(
        annotations: Vec<Annotation>,
        keyword: String,
        text: String,
        line: u32,
        attachment: Option<Attachment>,
    ) -> Self {
        debug_assert!(line >= 1, "step lines are 1-based");
        Self {
            annotations,
            keyword,
            text,
            line,
            attachment,
        }
    }

    /// Markers attached to the step's source line, in document order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The step keyword, trailing whitespace included (e.g. `"Given "`).
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The step's instruction text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based source line of the step's own line.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The attached payload, when one is present.
    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// The attached data table, when the attachment is one.
    #[must_use]
    pub fn table_rows(&self) -> Option<&TableRows> {
        match &self.attachment {
            Some(Attachment::Table(rows)) => Some(rows),
            _ => None,
        }
    }

    /// The attached doc block, when the attachment is one.
    #[must_use]
    pub fn doc_block(&self) -> Option<&DocBlock> {
        match &self.attachment {
            Some(Attachment::DocBlock(block)) => Some(block),
            _ => None,
        }
    }

    /// The inclusive source-line span the step occupies: its own line,
    /// widened to the last row of an attached table or the closing line of
    /// an attached doc block.
    #[must_use]
    pub fn line_span(&self) -> LineSpan {
        let own = LineSpan::single(self.line);
        self.attachment
            .as_ref()
            .map_or(own, |attachment| attachment.widen(own))
    }

    /// Every `<name>`-shaped placeholder in the step text, left to right.
    ///
    /// Returns an empty vector when the text contains no complete `<...>`
    /// pair; that is an ordinary outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_steps::StepBuilder;
    ///
    /// let step = StepBuilder::new(Vec::new(), "Given ", "<n> cukes", 1).build();
    /// let tokens = step.outline_placeholders();
    /// assert_eq!(tokens.len(), 1);
    /// assert_eq!(tokens[0].literal, "<n>");
    /// assert_eq!(tokens[0].offset, 0);
    /// ```
    #[must_use]
    pub fn outline_placeholders(&self) -> Vec<PlaceholderToken> {
        extract_placeholders(&self.text)
    }

    /// Bundle the step's placeholders with a caller-supplied location label
    /// for outline reporting.
    #[must_use]
    pub fn outline_match(&self, location: impl Into<String>) -> OutlineMatch {
        OutlineMatch {
            arguments: self.outline_placeholders(),
            location: location.into(),
        }
    }

    /// Build a synthetic frame placing this step at its document position,
    /// for failure reports that should point at the feature line rather than
    /// a real call frame.
    #[must_use]
    pub fn synthetic_location(&self, path: impl Into<String>) -> SyntheticLocation {
        SyntheticLocation::new(
            format!("{}{}", self.keyword, self.text),
            path.into(),
            self.line,
        )
    }

    /// Enqueue the step's children on `queue`, then invoke the visitor's
    /// callback for the step itself.
    ///
    /// Children land on the queue before the callback fires and in document
    /// order, so a driver chooses whether child content renders before or
    /// after the step line by deciding when it drains the queue. The step
    /// never drains the queue itself and holds no state to roll back.
    ///
    /// # Errors
    ///
    /// Propagates the visitor's error untransformed.
    pub fn visit<V: StepVisitor + ?Sized>(
        &self,
        visitor: &mut V,
        queue: &mut TraversalQueue,
    ) -> Result<(), V::Error> {
        log::trace!("visiting step at line {}", self.line);
        match &self.attachment {
            Some(Attachment::DocBlock(block)) => {
                queue.push(ChildNode::DocBlock(block.clone()));
            }
            Some(Attachment::Table(rows)) => {
                queue.push_all(rows.iter().cloned().map(ChildNode::Row));
            }
            None => {}
        }
        visitor.visit_step(self)
    }
}
