use super::{Rule, Solution};
use crate::base::grid::{Cell, Grid};
use log::trace;

// A shape has at most 8 dead neighbors.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// Waters every neighbor of a resolved ship shape that provably cannot hold
/// a ship cell: all 8 around a round ship, everything but the open end
/// around an end, everything off the axis around a middle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindDeadSquares;

const ALL: &[(isize, isize)] = &[(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
const EXCEPT_NORTH: &[(isize, isize)] = &[(-1, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
const EXCEPT_SOUTH: &[(isize, isize)] = &[(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (1, 1)];
const EXCEPT_WEST: &[(isize, isize)] = &[(-1, -1), (0, -1), (1, -1), (1, 0), (-1, 1), (0, 1), (1, 1)];
const EXCEPT_EAST: &[(isize, isize)] = &[(-1, -1), (0, -1), (1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)];
const BESIDE_VERTICAL: &[(isize, isize)] = &[(-1, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (1, 1)];
const BESIDE_HORIZONTAL: &[(isize, isize)] = &[(-1, -1), (0, -1), (1, -1), (-1, 1), (0, 1), (1, 1)];

/// Neighbor offsets that can never hold a ship cell, per shape. The open end
/// of each shape is the one direction its ship may continue into.
fn dead_offsets(cell: Cell) -> Option<&'static [(isize, isize)]> {
    match cell {
        Cell::Round => Some(ALL),
        Cell::NorthEnd => Some(EXCEPT_SOUTH),
        Cell::SouthEnd => Some(EXCEPT_NORTH),
        Cell::WestEnd => Some(EXCEPT_EAST),
        Cell::EastEnd => Some(EXCEPT_WEST),
        Cell::VerticalMiddle => Some(BESIDE_VERTICAL),
        Cell::HorizontalMiddle => Some(BESIDE_HORIZONTAL),
        _ => None,
    }
}

impl Rule for FindDeadSquares {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let cell = grid.cell(column, row);
                let Some(offsets) = dead_offsets(cell) else {
                    continue;
                };

                let mut cleared: SmallVec<(usize, usize)> = SmallVec::new();
                for &(dx, dy) in offsets {
                    if let Some((nc, nr)) = grid.offset_position(column, row, dx, dy)
                        && grid.cell(nc, nr) == Cell::Unknown
                    {
                        grid.set_cell(nc, nr, Cell::Water);
                        cleared.push((nc, nr));
                    }
                }

                if !cleared.is_empty() {
                    let description = format!(
                        "No ship fits beside the {} at column {column}, row {row}; watered {} dead square{}",
                        cell.description(),
                        cleared.len(),
                        if cleared.len() == 1 { "" } else { "s" },
                    );
                    trace!("FindDeadSquares: {description}");
                    return Some(Solution::cluster(description, Some((column, row)), cleared));
                }
            }
        }
        None
    }
}
