use super::{Rule, Solution};
use crate::base::{
    chain::{self, Chain},
    grid::{Cell, Grid},
};
use log::trace;

/// Commits a whole ship when the inventory forces it: working down from the
/// longest ship class, if more ships of a length are required than there are
/// completed chains of that length, and exactly one open chain of exactly
/// that length exists, that chain must be the ship.
///
/// An open chain strictly longer than the ship being placed is ignored;
/// which sub-span such a ship would occupy is not deducible here.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertLargestBoat;

impl Rule for InsertLargestBoat {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        let inventory = grid.inventory()?.clone();

        let mut chains: Vec<Chain> = Vec::new();
        for row in 0..grid.rows() {
            chains.extend(chain::scan_row(grid, row));
        }
        for column in 0..grid.columns() {
            chains.extend(chain::scan_column(grid, column));
        }

        for class in inventory.classes() {
            let completed = chains
                .iter()
                .filter(|chain| chain.completed && chain.length == class.length)
                .count();
            if completed >= class.quantity {
                continue;
            }

            let mut open = chains.iter().filter(|chain| !chain.completed && chain.length == class.length);
            if let (Some(&chain), None) = (open.next(), open.next()) {
                let solved = commit(grid, &chain);
                let description = format!(
                    "Only one open run fits a ship of length {}; placed it from column {}, row {} to column {}, row {}",
                    class.length, chain.start.0, chain.start.1, chain.end.0, chain.end.1,
                );
                trace!("InsertLargestBoat: {description}");
                return Some(Solution::cluster(description, None, solved));
            }
        }
        None
    }
}

fn commit(grid: &mut Grid, chain: &Chain) -> Vec<(usize, usize)> {
    let mut solved = Vec::with_capacity(chain.length);
    if chain.length == 1 {
        grid.set_cell(chain.start.0, chain.start.1, Cell::Round);
        solved.push(chain.start);
        return solved;
    }

    for i in 0..chain.length {
        let (column, row) = if chain.vertical {
            (chain.start.0, chain.start.1 + i)
        } else {
            (chain.start.0 + i, chain.start.1)
        };
        let part = if i == 0 {
            if chain.vertical { Cell::NorthEnd } else { Cell::WestEnd }
        } else if i == chain.length - 1 {
            if chain.vertical { Cell::SouthEnd } else { Cell::EastEnd }
        } else if chain.vertical {
            Cell::VerticalMiddle
        } else {
            Cell::HorizontalMiddle
        };
        grid.set_cell(column, row, part);
        solved.push((column, row));
    }
    solved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        crate::base::parse::decode(text).unwrap()
    }

    #[test]
    fn single_open_run_is_committed_horizontally() {
        let mut grid = grid("1x3\n 11100\n3...MM");
        let solution = InsertLargestBoat.apply(&mut grid).unwrap();
        assert_eq!(solution.solved_cells.len(), 3);
        assert_eq!(grid.cell(0, 0), Cell::WestEnd);
        assert_eq!(grid.cell(1, 0), Cell::HorizontalMiddle);
        assert_eq!(grid.cell(2, 0), Cell::EastEnd);
    }

    #[test]
    fn single_open_run_is_committed_vertically() {
        let mut grid = grid("1x3\n 3\n1.\n1.\n1.");
        InsertLargestBoat.apply(&mut grid).unwrap();
        assert_eq!(grid.cell(0, 0), Cell::NorthEnd);
        assert_eq!(grid.cell(0, 1), Cell::VerticalMiddle);
        assert_eq!(grid.cell(0, 2), Cell::SouthEnd);
    }

    #[test]
    fn ambiguous_runs_are_left_alone() {
        // two open length-3 runs: either could hold the ship
        let mut grid = grid("1x3\n 22200\n3...MM\n3...MM");
        assert!(InsertLargestBoat.apply(&mut grid).is_none());
    }

    #[test]
    fn completed_runs_satisfy_the_inventory() {
        // the W-E pair already counts as the one length-2 ship
        let mut grid = grid("1x2\n 1111\n2WE..");
        assert!(InsertLargestBoat.apply(&mut grid).is_none());
    }

    #[test]
    fn longer_open_runs_are_ignored() {
        // a length-3 ship is owed, but the only open run has length 4
        let mut grid = grid("1x3\n 11110\n4....M");
        assert!(InsertLargestBoat.apply(&mut grid).is_none());
    }

    #[test]
    fn larger_ships_are_placed_first() {
        // both a length-3 and a length-2 ship have single fits; the
        // length-3 run is committed on this step
        let mut grid = grid("1x3 1x2\n 111011\n5...M..");
        let solution = InsertLargestBoat.apply(&mut grid).unwrap();
        assert_eq!(solution.solved_cells.len(), 3);
        assert_eq!(grid.cell(0, 0), Cell::WestEnd);
        assert_eq!(grid.cell(2, 0), Cell::EastEnd);
        assert_eq!(grid.cell(4, 0), Cell::Unknown);
    }

    #[test]
    fn no_inventory_means_no_insertion() {
        let mut grid = grid(" 11100\n3...MM");
        assert!(InsertLargestBoat.apply(&mut grid).is_none());
    }
}
