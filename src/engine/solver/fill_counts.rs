use super::{Rule, Solution};
use crate::base::grid::{Cell, Grid};
use log::trace;

// A line has at most one grid dimension's worth of cells.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// Fills or empties a column whose target count forces it: when the ship
/// cells still needed equal the unknown cells left, every unknown is a ship
/// part; when none are needed, every unknown is water.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillColumns;

/// The row counterpart of [`FillColumns`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FillRows;

impl Rule for FillColumns {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        for column in 0..grid.columns() {
            let (ships, unknowns) = tally((0..grid.rows()).map(|row| grid.cell(column, row)));
            if unknowns == 0 {
                continue;
            }
            let needed = grid.column_count(column).saturating_sub(ships);
            if needed == unknowns {
                let solved = mark_column(grid, column, Cell::UnknownBoatPart);
                let description = format!("Column {column} needs a ship cell in every remaining unknown cell");
                trace!("FillColumns: {description}");
                return Some(Solution::cluster(description, None, solved));
            }
            if needed == 0 {
                let solved = mark_column(grid, column, Cell::Water);
                let description = format!("Column {column} has all the ship cells it needs; the rest is water");
                trace!("FillColumns: {description}");
                return Some(Solution::cluster(description, None, solved));
            }
        }
        None
    }
}

impl Rule for FillRows {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        for row in 0..grid.rows() {
            let (ships, unknowns) = tally((0..grid.columns()).map(|column| grid.cell(column, row)));
            if unknowns == 0 {
                continue;
            }
            let needed = grid.row_count(row).saturating_sub(ships);
            if needed == unknowns {
                let solved = mark_row(grid, row, Cell::UnknownBoatPart);
                let description = format!("Row {row} needs a ship cell in every remaining unknown cell");
                trace!("FillRows: {description}");
                return Some(Solution::cluster(description, None, solved));
            }
            if needed == 0 {
                let solved = mark_row(grid, row, Cell::Water);
                let description = format!("Row {row} has all the ship cells it needs; the rest is water");
                trace!("FillRows: {description}");
                return Some(Solution::cluster(description, None, solved));
            }
        }
        None
    }
}

fn tally(cells: impl Iterator<Item = Cell>) -> (usize, usize) {
    let mut ships = 0;
    let mut unknowns = 0;
    for cell in cells {
        match cell {
            Cell::Unknown => unknowns += 1,
            cell if cell.is_ship() => ships += 1,
            _ => {},
        }
    }
    (ships, unknowns)
}

fn mark_column(grid: &mut Grid, column: usize, cell: Cell) -> SmallVec<(usize, usize)> {
    let mut solved = SmallVec::new();
    for row in 0..grid.rows() {
        if grid.cell(column, row) == Cell::Unknown {
            grid.set_cell(column, row, cell);
            solved.push((column, row));
        }
    }
    solved
}

fn mark_row(grid: &mut Grid, row: usize, cell: Cell) -> SmallVec<(usize, usize)> {
    let mut solved = SmallVec::new();
    for column in 0..grid.columns() {
        if grid.cell(column, row) == Cell::Unknown {
            grid.set_cell(column, row, cell);
            solved.push((column, row));
        }
    }
    solved
}
