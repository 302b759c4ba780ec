//! Tabular data blocks attached to steps.

use derive_more::{Deref, From, IntoIterator};

use crate::annotation::Annotation;

/// One row of a step's data table: its annotations, cell texts in column
/// order, and the 1-based source line it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    /// Markers attached to the row's source line.
    pub annotations: Vec<Annotation>,
    /// Cell texts in column order.
    pub cells: Vec<String>,
    /// 1-based source line of the row.
    pub line: u32,
}

impl TableRow {
    /// Create a row from its annotations, cells, and source line.
    #[must_use]
    pub fn new(annotations: Vec<Annotation>, cells: Vec<String>, line: u32) -> Self {
        Self {
            annotations,
            cells,
            line,
        }
    }
}

/// The ordered rows of a step's data table.
///
/// The builder only ever attaches a non-empty sequence, so
/// [`last_line`](Self::last_line) is total for attached tables. The type
/// dereferences to a row slice for read access.
///
/// # Examples
///
/// ```
/// use scenario_steps::{TableRow, TableRows};
///
/// let rows = TableRows::from(vec![TableRow::new(Vec::new(), vec!["a".into()], 7)]);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows.last_line(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From, IntoIterator)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRows(#[into_iterator(owned, ref)] Vec<TableRow>);

impl TableRows {
    /// The source line of the final row, or the sentinel `0` when empty.
    ///
    /// An empty sequence never reaches span arithmetic because the builder
    /// refuses to attach one.
    #[must_use]
    pub fn last_line(&self) -> u32 {
        self.0.last().map_or(0, |row| row.line)
    }

    /// Consume the collection, returning the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<TableRow> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{TableRow, TableRows};

    fn row(cell: &str, line: u32) -> TableRow {
        TableRow::new(Vec::new(), vec![cell.to_owned()], line)
    }

    #[test]
    fn last_line_tracks_final_row() {
        let rows = TableRows::from(vec![row("a", 4), row("b", 5), row("c", 9)]);
        assert_eq!(rows.last_line(), 9);
    }

    #[test]
    fn deref_exposes_row_slice() {
        let rows = TableRows::from(vec![row("a", 4)]);
        assert_eq!(rows.first().map(|r| r.line), Some(4));
        assert!(!rows.is_empty());
    }

    #[test]
    fn iteration_preserves_document_order() {
        let rows = TableRows::from(vec![row("a", 4), row("b", 5)]);
        let lines: Vec<u32> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![4, 5]);
    }
}
