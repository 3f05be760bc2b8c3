//! # Grid Module
//!
//! Immutable snapshot of one weekly schedule sheet. A grid is a rectangular
//! array of free-text cells where row 0 names the program of each column.
//! Only non-blank cells are stored; every other position reads as blank.
pub mod cell;
pub mod criteria;
pub mod reference;

use crate::grid::cell::Cell;
use std::collections::HashMap;

/// Immutable cell snapshot of one sheet, taken once per run.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    /// Sheet name the snapshot was taken from
    pub name: String,
    /// All non-blank cells in row-major order
    cells: Vec<Cell>,
    /// Index mapping from (row, column) to cell vector position
    indexes: HashMap<(usize, usize), usize>,
    /// Number of rows, including trailing blank rows of the source
    row_count: usize,
    /// Width of the widest source row
    col_count: usize,
}

impl Grid {
    /// Builds a grid from row-major text. Ragged rows are accepted.
    pub fn from_rows<R, S>(name: &str, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Grid {
            name: name.to_owned(),
            ..Default::default()
        };
        for (row, values) in rows.into_iter().enumerate() {
            grid.row_count = row + 1;
            for (col, value) in values.into_iter().enumerate() {
                grid.push(Cell::new(row, col, value));
            }
        }
        grid
    }

    /// Adds a cell, updating the grid bounds. Blank cells only widen the bounds.
    fn push(&mut self, cell: Cell) {
        self.row_count = self.row_count.max(cell.row + 1);
        self.col_count = self.col_count.max(cell.col + 1);
        if cell.text().is_some() {
            self.indexes.insert((cell.row, cell.col), self.cells.len());
            self.cells.push(cell);
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the non-blank cell at the specified position.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.indexes
            .get(&(row, col))
            .and_then(|index| self.cells.get(*index))
    }

    /// Gets the trimmed text at the specified position; blank and missing cells yield None.
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.get(row, col).and_then(Cell::text)
    }

    /// Iterates the non-blank cells of a row from left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.col_count).filter_map(move |col| self.get(row, col))
    }

    /// Returns the first cell of a row whose text contains the token.
    pub fn find_in_row(&self, row: usize, token: &str) -> Option<&Cell> {
        self.row(row).find(|cell| cell.contains(token))
    }

    /// Returns every column whose cell in `row` contains the token, left to right.
    pub fn columns_matching(&self, row: usize, token: &str) -> Vec<usize> {
        self.row(row)
            .filter(|cell| cell.contains(token))
            .map(|cell| cell.col)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows("6/2週", vec![
            vec!["", "ワイド", "ニュース", "備考"],
            vec!["", "  ", "天気", "★"],
            vec!["x"],
        ])
    }

    #[test]
    fn grid_bounds_cover_ragged_rows() {
        let grid = sample();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 4);
        assert!(!grid.is_empty());
    }

    #[test]
    fn blank_and_missing_cells_read_as_none() {
        let grid = sample();
        assert_eq!(grid.text(1, 1), None);
        assert_eq!(grid.text(2, 3), None);
        assert_eq!(grid.text(50, 50), None);
        assert_eq!(grid.text(1, 2), Some("天気"));
    }

    #[test]
    fn row_lookup_by_token() {
        let grid = sample();
        assert_eq!(grid.find_in_row(0, "備考").map(|cell| cell.col), Some(3));
        assert_eq!(grid.columns_matching(0, "ワイド"), vec![1]);
        assert!(grid.columns_matching(0, "サンデー").is_empty());
        assert_eq!(grid.row(1).count(), 2);
    }

    #[test]
    fn empty_grid() {
        let grid = Grid::from_rows("empty", Vec::<Vec<String>>::new());
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.row(0).count(), 0);
    }
}
