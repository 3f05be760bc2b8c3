use crate::config::MarkerConfig;
use crate::grid::reference::index_to_reference;
use crate::grid::Grid;
use crate::layout::StructuralError;
use log::debug;

/// Anchor rows located in one grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markers {
    /// Column holding the segment tags
    pub remarks_col: usize,
    /// Every row tagged in the remarks column, top to bottom
    pub segment_rows: Vec<usize>,
    pub friday: Option<usize>,
    pub saturday: Option<usize>,
    pub sunday: Option<usize>,
    /// Terminal notes row; nothing below it is scanned
    pub notes: Option<usize>,
}

/// Scans the grid top to bottom for anchor rows.
///
/// The remarks column is the first header cell containing
/// `config.remarks_header`. Segment tags are looked up in that column only;
/// section and notes tokens anywhere in a row. The header row itself is never
/// an anchor. Scanning stops at the notes row.
pub fn locate(grid: &Grid, config: &MarkerConfig) -> Result<Markers, StructuralError> {
    let remarks = grid
        .find_in_row(0, &config.remarks_header)
        .ok_or_else(|| StructuralError::MissingRemarksColumn(config.remarks_header.to_owned()))?;
    debug!("{}: remarks header {}", grid.name, remarks);
    let remarks_col = remarks.col;
    let mut markers = Markers {
        remarks_col,
        ..Default::default()
    };

    for row in 1..grid.row_count() {
        if grid.find_in_row(row, &config.notes_token).is_some() {
            debug!("{}: notes row at {}", grid.name, index_to_reference(row, 0));
            markers.notes = Some(row);
            break;
        }
        let tagged = grid
            .get(row, remarks_col)
            .map(|cell| cell.contains(&config.segment_tag))
            .unwrap_or(false);
        if tagged {
            debug!("{}: segment row at {}", grid.name, index_to_reference(row, remarks_col));
            markers.segment_rows.push(row);
        }
        for (slot, token) in [
            (&mut markers.friday, &config.friday_anchor),
            (&mut markers.saturday, &config.saturday_anchor),
            (&mut markers.sunday, &config.sunday_anchor),
        ] {
            if slot.is_none() && grid.find_in_row(row, token).is_some() {
                debug!("{}: anchor {} at row {}", grid.name, token, row + 1);
                *slot = Some(row);
            }
        }
    }
    Ok(markers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<&str>>) -> Grid {
        Grid::from_rows("test", rows)
    }

    #[test]
    fn locate_all_anchors() {
        let grid = grid(vec![
            vec!["", "ワイド", "備考"],
            vec!["6/2", "", "★"],
            vec!["", "a", ""],
            vec!["6/3", "", "★ CM"],
            vec!["6/4", "", "★"],
            vec!["6/5", "", "★"],
            vec!["【金曜】", "フライデー", ""],
            vec!["【土曜】", "サタデー", ""],
            vec!["【日曜】", "", ""],
            vec!["", "", ""],
            vec!["【連絡事項】", "", ""],
            vec!["", "", "★"],
        ]);
        let markers = locate(&grid, &MarkerConfig::default()).unwrap();
        assert_eq!(markers.remarks_col, 2);
        assert_eq!(markers.segment_rows, vec![1, 3, 4, 5]);
        assert_eq!(markers.friday, Some(6));
        assert_eq!(markers.saturday, Some(7));
        assert_eq!(markers.sunday, Some(8));
        assert_eq!(markers.notes, Some(10));
    }

    #[test]
    fn scanning_collects_more_than_four_tags() {
        let grid = grid(vec![
            vec!["備考"],
            vec!["★"], vec!["★"], vec!["★"], vec!["★"], vec!["★"],
        ]);
        let markers = locate(&grid, &MarkerConfig::default()).unwrap();
        assert_eq!(markers.segment_rows, vec![1, 2, 3, 4, 5]);
        assert_eq!(markers.notes, None);
    }

    #[test]
    fn tags_outside_remarks_column_are_ignored() {
        let grid = grid(vec![
            vec!["ワイド", "備考"],
            vec!["★", ""],
            vec!["", "★"],
        ]);
        let markers = locate(&grid, &MarkerConfig::default()).unwrap();
        assert_eq!(markers.segment_rows, vec![2]);
    }

    #[test]
    fn first_anchor_occurrence_wins() {
        let grid = grid(vec![
            vec!["備考"],
            vec!["【金曜】"],
            vec!["【金曜】 again"],
        ]);
        let markers = locate(&grid, &MarkerConfig::default()).unwrap();
        assert_eq!(markers.friday, Some(1));
    }

    #[test]
    fn missing_remarks_column() {
        let grid = grid(vec![vec!["ワイド"], vec!["★"]]);
        assert_eq!(
            locate(&grid, &MarkerConfig::default()),
            Err(StructuralError::MissingRemarksColumn("備考".to_owned()))
        );
    }
}
