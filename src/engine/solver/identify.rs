use super::{Rule, Solution};
use crate::base::grid::{Cell, Grid};
use log::trace;

/// Resolves provisional ship parts toward certainty: an isolated part is a
/// round ship, a part touching a ship cell picks up that neighbor's axis,
/// and an oriented part against water or the grid edge becomes an end, or a
/// middle when flanked by ship cells on both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifyBoats;

const NEIGHBORS: [(isize, isize); 8] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

impl Rule for IdentifyBoats {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                if let Some(solution) = identify(grid, column, row) {
                    trace!("IdentifyBoats: {}", solution.description);
                    return Some(solution);
                }
            }
        }
        None
    }
}

fn identify(grid: &mut Grid, column: usize, row: usize) -> Option<Solution> {
    match grid.cell(column, row) {
        Cell::UnknownBoatPart => {
            // Cells beyond the grid edge count as water
            let surrounded = NEIGHBORS
                .iter()
                .all(|&(dx, dy)| grid.offset(column, row, dx, dy).is_none_or(|c| c == Cell::Water));
            if surrounded {
                return Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::Round,
                    "has water on every side, so it is a single-cell ship",
                ));
            }
            if [(0, -1), (0, 1)]
                .iter()
                .any(|&(dx, dy)| grid.offset(column, row, dx, dy).is_some_and(Cell::is_ship))
            {
                return Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::UnknownVerticalBoatPart,
                    "touches a ship cell above or below, so it belongs to a vertical ship",
                ));
            }
            if [(-1, 0), (1, 0)]
                .iter()
                .any(|&(dx, dy)| grid.offset(column, row, dx, dy).is_some_and(Cell::is_ship))
            {
                return Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::UnknownHorizontalBoatPart,
                    "touches a ship cell beside it, so it belongs to a horizontal ship",
                ));
            }
            None
        },
        Cell::UnknownVerticalBoatPart => {
            let north = grid.offset(column, row, 0, -1);
            let south = grid.offset(column, row, 0, 1);
            if north.is_none_or(|c| c == Cell::Water) {
                Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::NorthEnd,
                    "has nothing above it, so it is the north end of its ship",
                ))
            } else if south.is_none_or(|c| c == Cell::Water) {
                Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::SouthEnd,
                    "has nothing below it, so it is the south end of its ship",
                ))
            } else if north.is_some_and(Cell::is_vertical_part) && south.is_some_and(Cell::is_vertical_part) {
                Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::VerticalMiddle,
                    "sits between two vertical ship cells, so it is a middle",
                ))
            } else {
                None
            }
        },
        Cell::UnknownHorizontalBoatPart => {
            let west = grid.offset(column, row, -1, 0);
            let east = grid.offset(column, row, 1, 0);
            if west.is_none_or(|c| c == Cell::Water) {
                Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::WestEnd,
                    "has nothing to its west, so it is the west end of its ship",
                ))
            } else if east.is_none_or(|c| c == Cell::Water) {
                Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::EastEnd,
                    "has nothing to its east, so it is the east end of its ship",
                ))
            } else if west.is_some_and(Cell::is_horizontal_part) && east.is_some_and(Cell::is_horizontal_part) {
                Some(resolve(
                    grid,
                    column,
                    row,
                    Cell::HorizontalMiddle,
                    "sits between two horizontal ship cells, so it is a middle",
                ))
            } else {
                None
            }
        },
        _ => None,
    }
}

fn resolve(grid: &mut Grid, column: usize, row: usize, cell: Cell, reason: &str) -> Solution {
    grid.set_cell(column, row, cell);
    Solution::cell(
        format!("The ship part at column {column}, row {row} {reason}"),
        (column, row),
    )
}
