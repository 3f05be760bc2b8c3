//! Excel-style cell references ("A1", "AB12") used in log messages.

/// Converts a 0-based column index to its letter form (0 -> "A", 27 -> "AB").
pub fn col_to_letters(col: usize) -> String {
    let mut column = col + 1;
    let mut letters = String::new();
    while column > 0 {
        column -= 1;
        let digit = char::from(b'A' + (column % 26) as u8);
        column /= 26;
        letters.insert(0, digit);
    }
    letters
}

/// Converts a 0-based (row, column) pair to an Excel-style reference in upper case.
pub fn index_to_reference(row: usize, col: usize) -> String {
    format!("{}{}", col_to_letters(col), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_round_trip_on_boundaries() {
        assert_eq!(index_to_reference(0, 0), "A1");
        assert_eq!(index_to_reference(9, 25), "Z10");
        assert_eq!(index_to_reference(0, 26), "AA1");
        assert_eq!(index_to_reference(99, 701), "ZZ100");
        assert_eq!(index_to_reference(0, 702), "AAA1");
    }
}
