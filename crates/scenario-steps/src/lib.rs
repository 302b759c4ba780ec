//! Immutable step model for Given/When/Then scenario documents.
//!
//! The crate models a single executable step as a document reader discovers
//! it: a [`StepBuilder`] accumulates the step's own line plus any trailing
//! data table rows or doc block, then finalises into an immutable [`Step`].
//! Finalised steps answer line-span and outline-placeholder queries and take
//! part in a queue-driven visitor traversal, so rendering backends can walk
//! a step's children without recursing on the native call stack.
//!
//! Parsing raw document text, keyword grammar, localisation, and step
//! execution all live in collaborating crates; this one only holds the model.

mod annotation;
mod attachment;
mod builder;
mod container;
mod errors;
mod location;
mod outline;
mod span;
mod step;
mod visit;

pub use annotation::Annotation;
pub use attachment::{Attachment, DocBlock, TableRow, TableRows};
pub use builder::StepBuilder;
pub use container::{PopulateContainer, StepContainer};
pub use errors::BuildError;
pub use location::{STEP_MARKER, SyntheticLocation};
pub use outline::{OutlineMatch, PlaceholderToken};
pub use span::LineSpan;
pub use step::Step;
pub use visit::{ChildNode, StepVisitor, TraversalQueue};
