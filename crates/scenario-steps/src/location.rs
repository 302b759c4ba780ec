//! Synthetic document locations for failure reporting.

use std::fmt;

/// Symbolic marker prefixed to synthetic frames so reports can tell a
/// document position apart from a real call frame.
pub const STEP_MARKER: &str = "✽";

/// A fabricated "frame" placing a step at its document position.
///
/// When a step implementation fails, reporting collaborators want the
/// failure attributed to the step's line in the feature document rather than
/// to whatever code frame happened to raise it. The description is the
/// step's keyword and text, verbatim.
///
/// # Examples
///
/// ```
/// use scenario_steps::SyntheticLocation;
///
/// let frame = SyntheticLocation::new("When it rains", "weather.feature", 12);
/// assert_eq!(frame.to_string(), "✽ When it rains (weather.feature:12)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntheticLocation {
    /// The step's keyword and text, concatenated verbatim.
    pub description: String,
    /// Caller-supplied document path label.
    pub path: String,
    /// 1-based line of the step in the document.
    pub line: u32,
}

impl SyntheticLocation {
    /// Create a frame from its description, path label, and line.
    #[must_use]
    pub fn new(description: impl Into<String>, path: impl Into<String>, line: u32) -> Self {
        Self {
            description: description.into(),
            path: path.into(),
            line,
        }
    }
}

impl fmt::Display for SyntheticLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{STEP_MARKER} {} ({}:{})",
            self.description, self.path, self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SyntheticLocation;

    #[test]
    fn display_includes_marker_path_and_line() {
        let frame = SyntheticLocation::new("Given a cuke", "basket.feature", 3);
        assert_eq!(frame.to_string(), "✽ Given a cuke (basket.feature:3)");
    }
}
