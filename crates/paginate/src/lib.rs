//! Row-window computation.
//!
//! Given the per-archetype row capacities of one table binding and the total
//! number of rows in its source, [`paginate`] computes the ordered list of
//! row windows, one per output page. The function is pure and deterministic:
//! the windows partition the row range into contiguous, non-overlapping,
//! order-preserving slices whose concatenation is exactly `0..total_rows`.

use platen_types::ArchetypeKind;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaginateError {
    #[error("table overflows the first page by {overflow} rows but no repeat archetype is configured")]
    MissingRepeatArchetype { overflow: usize },

    #[error("repeat archetype has zero row capacity while {remaining} rows remain")]
    ZeroCapacityOverflow { remaining: usize },
}

/// Row capacities of the archetypes a table may appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    /// Rows the table holds on the first page.
    pub first: usize,
    /// Rows the table holds on each repeat page, if a repeat archetype
    /// exists at all.
    pub repeat: Option<usize>,
}

/// A contiguous slice of table rows assigned to one output page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub kind: ArchetypeKind,
    pub row_start: usize,
    pub row_count: usize,
}

impl RowWindow {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.row_start..self.row_start + self.row_count
    }
}

/// Computes the ordered row windows for one table.
///
/// An empty table still yields one empty first window, so a document with no
/// line items renders its (static) first page; `skip_empty` suppresses that
/// window when the caller wants the table's pages dropped instead.
pub fn paginate(
    capacities: Capacities,
    total_rows: usize,
    skip_empty: bool,
) -> Result<Vec<RowWindow>, PaginateError> {
    if total_rows == 0 {
        if skip_empty {
            return Ok(Vec::new());
        }
        return Ok(vec![RowWindow {
            kind: ArchetypeKind::First,
            row_start: 0,
            row_count: 0,
        }]);
    }

    let first_count = capacities.first.min(total_rows);
    let mut windows = vec![RowWindow {
        kind: ArchetypeKind::First,
        row_start: 0,
        row_count: first_count,
    }];

    let mut row_start = first_count;
    let mut remaining = total_rows - first_count;
    if remaining == 0 {
        return Ok(windows);
    }

    let repeat = match capacities.repeat {
        None => return Err(PaginateError::MissingRepeatArchetype { overflow: remaining }),
        Some(0) => return Err(PaginateError::ZeroCapacityOverflow { remaining }),
        Some(capacity) => capacity,
    };

    while remaining > 0 {
        let row_count = repeat.min(remaining);
        windows.push(RowWindow {
            kind: ArchetypeKind::Repeat,
            row_start,
            row_count,
        });
        row_start += row_count;
        remaining -= row_count;
    }

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(kind: ArchetypeKind, row_start: usize, row_count: usize) -> RowWindow {
        RowWindow {
            kind,
            row_start,
            row_count,
        }
    }

    #[test]
    fn test_fits_on_first_page() {
        // first.rowsPerPage=10, 3 rows: one window, no repeat needed.
        let windows = paginate(
            Capacities {
                first: 10,
                repeat: None,
            },
            3,
            false,
        )
        .unwrap();
        assert_eq!(windows, vec![window(ArchetypeKind::First, 0, 3)]);
    }

    #[test]
    fn test_overflow_splits_onto_repeat_pages() {
        // first=2, repeat=3, 7 rows: (first,0,2) (repeat,2,3) (repeat,5,2).
        let windows = paginate(
            Capacities {
                first: 2,
                repeat: Some(3),
            },
            7,
            false,
        )
        .unwrap();
        assert_eq!(
            windows,
            vec![
                window(ArchetypeKind::First, 0, 2),
                window(ArchetypeKind::Repeat, 2, 3),
                window(ArchetypeKind::Repeat, 5, 2),
            ]
        );
    }

    #[test]
    fn test_empty_table_still_renders_first_page() {
        let windows = paginate(
            Capacities {
                first: 5,
                repeat: Some(8),
            },
            0,
            false,
        )
        .unwrap();
        assert_eq!(windows, vec![window(ArchetypeKind::First, 0, 0)]);
    }

    #[test]
    fn test_empty_table_skipped_when_requested() {
        let windows = paginate(
            Capacities {
                first: 5,
                repeat: None,
            },
            0,
            true,
        )
        .unwrap();
        assert!(windows.is_empty());
    }

    #[test]
    fn test_overflow_without_repeat_archetype_fails() {
        let err = paginate(
            Capacities {
                first: 2,
                repeat: None,
            },
            5,
            false,
        )
        .unwrap_err();
        assert_eq!(err, PaginateError::MissingRepeatArchetype { overflow: 3 });
    }

    #[test]
    fn test_zero_capacity_repeat_fails() {
        let err = paginate(
            Capacities {
                first: 1,
                repeat: Some(0),
            },
            4,
            false,
        )
        .unwrap_err();
        assert_eq!(err, PaginateError::ZeroCapacityOverflow { remaining: 3 });
    }

    #[test]
    fn test_zero_capacity_first_page_spills_everything() {
        // A first page with no table region still renders; all rows spill.
        let windows = paginate(
            Capacities {
                first: 0,
                repeat: Some(2),
            },
            3,
            false,
        )
        .unwrap();
        assert_eq!(
            windows,
            vec![
                window(ArchetypeKind::First, 0, 0),
                window(ArchetypeKind::Repeat, 0, 2),
                window(ArchetypeKind::Repeat, 2, 1),
            ]
        );
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_window() {
        let windows = paginate(
            Capacities {
                first: 2,
                repeat: Some(3),
            },
            5,
            false,
        )
        .unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1], window(ArchetypeKind::Repeat, 2, 3));
    }

    #[test]
    fn test_row_conservation() {
        // Concatenated windows reproduce 0..total exactly, for many shapes.
        for total in 0..60 {
            for first in 0..7 {
                let windows = paginate(
                    Capacities {
                        first,
                        repeat: Some(4),
                    },
                    total,
                    false,
                )
                .unwrap();
                let covered: Vec<usize> = windows.iter().flat_map(RowWindow::range).collect();
                let expected: Vec<usize> = (0..total).collect();
                assert_eq!(covered, expected, "total={total} first={first}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let capacities = Capacities {
            first: 3,
            repeat: Some(5),
        };
        assert_eq!(
            paginate(capacities, 23, false).unwrap(),
            paginate(capacities, 23, false).unwrap()
        );
    }
}
