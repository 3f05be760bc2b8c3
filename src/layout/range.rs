use crate::layout::markers::Markers;
use crate::layout::StructuralError;
use crate::schedule::Weekday;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Inclusive row range of one weekday. `end < start` is a valid, empty range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeekdayRange {
    pub start: usize,
    pub end: usize,
}

impl WeekdayRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn len(&self) -> usize {
        if self.is_empty() { 0 } else { self.end - self.start + 1 }
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// One range per weekday, Monday first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeekRanges(pub [WeekdayRange; 7]);

impl WeekRanges {
    pub fn get(&self, weekday: Weekday) -> WeekdayRange {
        self.0[weekday.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, WeekdayRange)> + '_ {
        Weekday::ALL.into_iter().zip(self.0.iter().copied())
    }
}

/// Derives the weekday ranges from the anchors.
///
/// Monday..Wednesday run from one segment row to the row before the next.
/// Thursday ends before a fifth segment row above the Friday anchor, or before
/// the Friday anchor otherwise. Friday, Saturday and Sunday sit strictly between their
/// anchor and the next one, Sunday ending before the notes row.
pub fn compute(markers: &Markers) -> Result<WeekRanges, StructuralError> {
    let segments = &markers.segment_rows;
    if segments.len() < 4 {
        Err(StructuralError::InsufficientSegments { found: segments.len() })?
    }
    let missing = |name: &str| StructuralError::MissingAnchor(name.to_owned());
    let friday = markers.friday.ok_or_else(|| missing("friday"))?;
    let saturday = markers.saturday.ok_or_else(|| missing("saturday"))?;
    let sunday = markers.sunday.ok_or_else(|| missing("sunday"))?;
    let notes = markers.notes.ok_or_else(|| missing("notes"))?;

    let anchors = [
        segments[0],
        segments[1],
        segments[2],
        segments[3],
        friday,
        saturday,
        sunday,
        notes,
    ];
    if anchors.windows(2).any(|pair| pair[0] >= pair[1]) {
        Err(StructuralError::OutOfOrder(anchors.to_vec()))?
    }

    let thursday_end = segments
        .get(4)
        .copied()
        .filter(|row| *row < friday)
        .unwrap_or(friday)
        - 1;
    Ok(WeekRanges([
        WeekdayRange::new(segments[0], segments[1] - 1),
        WeekdayRange::new(segments[1], segments[2] - 1),
        WeekdayRange::new(segments[2], segments[3] - 1),
        WeekdayRange::new(segments[3], thursday_end),
        WeekdayRange::new(friday + 1, saturday - 1),
        WeekdayRange::new(saturday + 1, sunday - 1),
        WeekdayRange::new(sunday + 1, notes - 1),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(
        segment_rows: Vec<usize>,
        friday: usize,
        saturday: usize,
        sunday: usize,
        notes: usize,
    ) -> Markers {
        Markers {
            remarks_col: 0,
            segment_rows,
            friday: Some(friday),
            saturday: Some(saturday),
            sunday: Some(sunday),
            notes: Some(notes),
        }
    }

    #[test]
    fn exact_boundaries() {
        let ranges = compute(&markers(vec![2, 5, 9, 12], 20, 25, 30, 40)).unwrap();
        assert_eq!(ranges.get(Weekday::Monday), WeekdayRange::new(2, 4));
        assert_eq!(ranges.get(Weekday::Tuesday), WeekdayRange::new(5, 8));
        assert_eq!(ranges.get(Weekday::Wednesday), WeekdayRange::new(9, 11));
        assert_eq!(ranges.get(Weekday::Thursday), WeekdayRange::new(12, 19));
        assert_eq!(ranges.get(Weekday::Friday), WeekdayRange::new(21, 24));
        assert_eq!(ranges.get(Weekday::Saturday), WeekdayRange::new(26, 29));
        assert_eq!(ranges.get(Weekday::Sunday), WeekdayRange::new(31, 39));
    }

    #[test]
    fn fifth_segment_row_ends_thursday() {
        let ranges = compute(&markers(vec![2, 5, 9, 12, 15], 20, 25, 30, 40)).unwrap();
        assert_eq!(ranges.get(Weekday::Thursday), WeekdayRange::new(12, 14));
        assert_eq!(ranges.get(Weekday::Friday), WeekdayRange::new(21, 24));
    }

    #[test]
    fn fifth_segment_row_below_friday_is_ignored() {
        let ranges = compute(&markers(vec![1, 2, 3, 4, 8], 6, 10, 12, 14)).unwrap();
        let thursday = ranges.get(Weekday::Thursday);
        let friday = ranges.get(Weekday::Friday);
        assert_eq!(thursday, WeekdayRange::new(4, 5));
        assert_eq!(friday, WeekdayRange::new(7, 9));
        assert!(thursday.end < friday.start);
    }

    #[test]
    fn ranges_are_ordered_and_disjoint() {
        let ranges = compute(&markers(vec![1, 3, 4, 8], 10, 11, 14, 15)).unwrap();
        let non_empty: Vec<WeekdayRange> = ranges
            .iter()
            .map(|(_, range)| range)
            .filter(|range| !range.is_empty())
            .collect();
        for pair in non_empty.windows(2) {
            assert!(pair[0].end < pair[1].start, "{:?}", pair);
        }
        let weekdays: Vec<Weekday> = ranges.iter().map(|(weekday, _)| weekday).collect();
        assert_eq!(weekdays, Weekday::ALL.to_vec());
    }

    #[test]
    fn adjacent_anchors_give_empty_range() {
        let ranges = compute(&markers(vec![1, 2, 3, 4], 6, 7, 8, 9)).unwrap();
        let friday = ranges.get(Weekday::Friday);
        assert_eq!(friday, WeekdayRange::new(7, 6));
        assert!(friday.is_empty());
        assert_eq!(friday.len(), 0);
        assert_eq!(friday.rows().count(), 0);
    }

    #[test]
    fn fewer_than_four_segments() {
        let result = compute(&markers(vec![1, 2, 3], 6, 7, 8, 9));
        assert_eq!(result, Err(StructuralError::InsufficientSegments { found: 3 }));
    }

    #[test]
    fn missing_anchor() {
        let mut markers = markers(vec![1, 2, 3, 4], 6, 7, 8, 9);
        markers.saturday = None;
        assert_eq!(compute(&markers), Err(StructuralError::MissingAnchor("saturday".to_owned())));
    }

    #[test]
    fn out_of_order_anchors() {
        let result = compute(&markers(vec![1, 2, 3, 4], 9, 7, 8, 10));
        assert!(matches!(result, Err(StructuralError::OutOfOrder(_))));
        let result = compute(&markers(vec![1, 2, 3, 7], 6, 8, 9, 10));
        assert!(matches!(result, Err(StructuralError::OutOfOrder(_))));
    }
}
