use crate::grid::Grid;
use crate::layout::range::WeekdayRange;

/// Collects the trimmed, non-blank text of `col` within `range`, in row order.
/// No deduplication; an inverted range yields nothing.
pub fn extract_lines(grid: &Grid, col: usize, range: WeekdayRange) -> Vec<String> {
    range
        .rows()
        .filter_map(|row| grid.text(row, col))
        .map(str::to_owned)
        .collect()
}

/// Concatenates the lines of several columns, left to right.
pub fn extract_columns(grid: &Grid, cols: &[usize], range: WeekdayRange) -> Vec<String> {
    cols.iter()
        .flat_map(|col| extract_lines(grid, *col, range))
        .collect()
}
