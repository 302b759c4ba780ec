//! Scenario-outline placeholder extraction.
//!
//! Outline steps mark substitution points as `<name>` spans in their text.
//! Extraction is a single forward pass that tracks whether the scanner is
//! inside a placeholder: every `<` (re)starts a candidate token and every `>`
//! inside one emits it, so tokens never nest and never contain `<`. No
//! regular-expression engine is involved and each position is visited once.

/// One `<name>`-shaped substitution point found in outline step text.
///
/// Tokens are derived on demand from the step's text, never stored on the
/// step itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderToken {
    /// Byte offset of the opening `<` within the step text.
    pub offset: usize,
    /// The matched substring, angle brackets included.
    pub literal: String,
}

impl PlaceholderToken {
    /// Create a token from its byte offset and bracketed literal.
    #[must_use]
    pub fn new(offset: usize, literal: impl Into<String>) -> Self {
        Self {
            offset,
            literal: literal.into(),
        }
    }
}

/// The placeholder tokens of one outline step paired with the document
/// location a reporting collaborator resolved for it.
///
/// Carries no logic of its own; it exists so outline reports can describe
/// which literal argument values were substituted where.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineMatch {
    /// Placeholders in left-to-right text order.
    pub arguments: Vec<PlaceholderToken>,
    /// Caller-supplied document location label.
    pub location: String,
}

/// Scan `text` for placeholder tokens in left-to-right order.
pub(crate) fn extract_placeholders(text: &str) -> Vec<PlaceholderToken> {
    let mut tokens = Vec::new();
    let mut pending: Option<(usize, String)> = None;
    for (offset, ch) in text.char_indices() {
        match ch {
            '<' => pending = Some((offset, String::from('<'))),
            '>' => {
                if let Some((start, mut literal)) = pending.take() {
                    literal.push('>');
                    tokens.push(PlaceholderToken::new(start, literal));
                }
            }
            _ => {
                if let Some((_, literal)) = pending.as_mut() {
                    literal.push(ch);
                }
            }
        }
    }
    tokens
}
