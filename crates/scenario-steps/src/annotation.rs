//! Free-form markers attached to source lines.

/// A free-form marker (for example a comment line) attached to a source line.
///
/// Steps and table rows carry annotations as an ordered sequence; the model
/// imposes no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// The marker text, verbatim.
    pub text: String,
    /// 1-based line the marker occupies in the source document.
    pub line: u32,
}

impl Annotation {
    /// Create an annotation from its text and source line.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_steps::Annotation;
    ///
    /// let note = Annotation::new("# flaky upstream", 4);
    /// assert_eq!(note.text, "# flaky upstream");
    /// assert_eq!(note.line, 4);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}
