use super::grid::{Cell, Grid};

// A puzzle line rarely splits into more than a handful of runs.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// A maximal run of non-water cells along one row or column.
///
/// Chains are recomputed on demand from the grid and never stored.
/// `completed` means every cell in the run is already a committed ship part:
/// it flips to false the moment an [`Cell::Unknown`] or
/// [`Cell::UnknownBoatPart`] cell joins the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub length: usize,
    pub completed: bool,
    pub vertical: bool,
}

/// Partitions `row` into chains, scanning west to east.
pub fn scan_row(grid: &Grid, row: usize) -> SmallVec<Chain> {
    scan_line(grid, false, row)
}

/// Partitions `column` into chains, scanning north to south.
pub fn scan_column(grid: &Grid, column: usize) -> SmallVec<Chain> {
    scan_line(grid, true, column)
}

fn scan_line(grid: &Grid, vertical: bool, index: usize) -> SmallVec<Chain> {
    let length = if vertical { grid.rows() } else { grid.columns() };
    let mut chains = SmallVec::new();
    let mut current: Option<Chain> = None;

    for i in 0..length {
        let (column, row) = if vertical { (index, i) } else { (i, index) };
        let cell = grid.cell(column, row);
        let unresolved = matches!(cell, Cell::Unknown | Cell::UnknownBoatPart);
        let joins = unresolved
            || if vertical {
                cell.is_vertical_part()
            } else {
                cell.is_horizontal_part()
            };

        if joins {
            match &mut current {
                Some(chain) => {
                    chain.end = (column, row);
                    chain.length += 1;
                    chain.completed &= !unresolved;
                },
                None => {
                    current = Some(Chain {
                        start: (column, row),
                        end: (column, row),
                        length: 1,
                        completed: !unresolved,
                        vertical,
                    });
                },
            }
        } else if let Some(chain) = current.take() {
            chains.push(chain);
        }
    }
    if let Some(chain) = current {
        chains.push(chain);
    }

    chains
}
