use crate::grid::reference::index_to_reference;
use std::fmt::Display;

/// A single non-blank cell of a schedule grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
    /// Raw cell text, untrimmed
    pub value: String,
}

impl Cell {
    pub fn new(row: usize, col: usize, value: impl Into<String>) -> Self {
        Self {
            row,
            col,
            value: value.into(),
        }
    }

    /// Returns the Excel-style cell reference (e.g., "A1", "B2").
    pub fn reference(&self) -> String {
        index_to_reference(self.row, self.col)
    }

    /// Returns the trimmed text, or None when the cell holds only whitespace.
    pub fn text(&self) -> Option<&str> {
        let text = self.value.trim();
        (!text.is_empty()).then_some(text)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.value.contains(token)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:?}", self.reference(), self.value)
    }
}
