//! Contracts binding builders to the enclosing document model.

use crate::step::Step;

/// An ordered collection of finalised steps, typically the enclosing
/// scenario or background object.
pub trait StepContainer {
    /// Append `step` after every step already held.
    fn add_step(&mut self, step: Step);
}

impl StepContainer for Vec<Step> {
    fn add_step(&mut self, step: Step) {
        self.push(step);
    }
}

/// Staged-construction types that can finalise themselves into a
/// [`StepContainer`].
///
/// A document reader holds builders for several statement kinds; this trait
/// lets it populate the enclosing container without knowing which kind each
/// builder is.
pub trait PopulateContainer {
    /// Finalise the accumulated state and append the result to `container`.
    fn populate_into(self, container: &mut dyn StepContainer);
}
