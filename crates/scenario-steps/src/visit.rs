//! Queue-driven traversal of steps and their attached children.
//!
//! Rather than recursing into its own children, a step pushes them onto a
//! queue owned by the traversal driver and then surrenders control through
//! the visitor callback. Traversal order and depth stay entirely under the
//! driver's control and never consume native call-stack frames.

use std::collections::VecDeque;

use crate::attachment::{DocBlock, TableRow};
use crate::step::Step;

/// Callback contract a rendering backend implements to receive visited
/// steps.
///
/// A failure returned from [`visit_step`](Self::visit_step) propagates
/// untransformed through [`Step::visit`] to the traversal driver.
pub trait StepVisitor {
    /// Failure type raised by the backend.
    type Error;

    /// Called exactly once per visited step, after its children have been
    /// enqueued.
    ///
    /// # Errors
    ///
    /// Backend-defined; the model neither catches nor transforms it.
    fn visit_step(&mut self, step: &Step) -> Result<(), Self::Error>;
}

/// A child item enqueued during traversal: one table row or the doc block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildNode {
    /// One row of the step's data table, in document order.
    Row(TableRow),
    /// The step's doc block.
    DocBlock(DocBlock),
}

/// The driver-owned continuation queue.
///
/// The model only ever pushes onto the queue; draining it, and thereby
/// deciding traversal order, is the driver's job. It is an ordinary
/// double-ended queue, so a driver may work breadth-first with
/// [`pop_front`](Self::pop_front) or depth-first with
/// [`pop_back`](Self::pop_back).
///
/// # Examples
///
/// ```
/// use scenario_steps::{ChildNode, DocBlock, TraversalQueue};
///
/// let mut queue = TraversalQueue::new();
/// queue.push(ChildNode::DocBlock(DocBlock::new("", "body", 5)));
/// assert_eq!(queue.len(), 1);
/// assert!(queue.pop_front().is_some());
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TraversalQueue {
    items: VecDeque<ChildNode>,
}

impl TraversalQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one child item.
    pub fn push(&mut self, item: ChildNode) {
        self.items.push_back(item);
    }

    /// Append every item in order.
    pub fn push_all(&mut self, items: impl IntoIterator<Item = ChildNode>) {
        self.items.extend(items);
    }

    /// Remove and return the oldest item.
    pub fn pop_front(&mut self) -> Option<ChildNode> {
        self.items.pop_front()
    }

    /// Remove and return the newest item.
    pub fn pop_back(&mut self) -> Option<ChildNode> {
        self.items.pop_back()
    }

    /// Number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
