use crate::base::grid::Grid;
use log::trace;
use smallvec::smallvec;

pub mod dead_squares;
pub mod fill_counts;
pub mod grow;
pub mod identify;
pub mod insert;

// One deduction touches at most one ship's worth of cells.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// One committed deduction: what was inferred, which cell triggered it, and
/// which cells changed. Never outlives the `solve` call that produced it.
#[derive(Debug, Clone)]
pub struct Solution {
    pub description: String,
    pub cell_of_interest: Option<(usize, usize)>,
    pub solved_cells: SmallVec<(usize, usize)>,
}

impl Solution {
    /// A deduction that resolved exactly one cell.
    pub fn cell(description: String, cell: (usize, usize)) -> Self {
        Solution {
            description,
            cell_of_interest: Some(cell),
            solved_cells: smallvec![cell],
        }
    }

    /// A deduction that resolved a cluster of cells in one step.
    pub fn cluster(
        description: String,
        cell_of_interest: Option<(usize, usize)>,
        solved_cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        Solution {
            description,
            cell_of_interest,
            solved_cells: solved_cells.into_iter().collect(),
        }
    }
}

/// One deduction procedure. Inspects the grid and, when it applies, commits
/// exactly one inference and describes it; otherwise leaves the grid alone.
pub trait Rule: Send + Sync {
    fn apply(&self, grid: &mut Grid) -> Option<Solution>;
}

#[derive(Debug, Clone)]
struct RuleCombinerOr<T: Rule, U: Rule>(T, U);

impl<T: Rule, U: Rule> Rule for RuleCombinerOr<T, U> {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        self.0.apply(grid).or_else(|| self.1.apply(grid))
    }
}

pub trait RuleExt {
    /// Combines two rules such that the second is only tried when the first
    /// commits no deduction.
    fn or<T: Rule>(self, alternative: T) -> impl Rule
    where
        Self: Sized + Rule,
    {
        RuleCombinerOr(self, alternative)
    }
}

impl<T: Rule> RuleExt for T {}

/// The fixed priority order: the safest, most local deductions fire before
/// the board-wide ones.
pub fn default_engine() -> impl Rule {
    identify::IdentifyBoats
        .or(dead_squares::FindDeadSquares)
        .or(fill_counts::FillColumns)
        .or(fill_counts::FillRows)
        .or(grow::GrowBoats)
        .or(insert::InsertLargestBoat)
}

/// Owns the grid for the lifetime of a puzzle and advances it by at most one
/// deduction per call.
pub struct Solver {
    grid: Grid,
}

impl Solver {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Applies the highest-priority applicable rule.
    ///
    /// Returns `None` when no rule can make a deduction; that is the normal
    /// terminal outcome for a stalled or finished puzzle, not an error.
    pub fn solve(&mut self) -> Option<Solution> {
        let solution = default_engine().apply(&mut self.grid);
        if solution.is_none() {
            trace!("No rule produced a deduction");
        }
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::grid::Cell;

    fn solver(text: &str) -> Solver {
        Solver::new(crate::base::parse::decode(text).unwrap())
    }

    #[test]
    fn dead_square_symmetry() {
        // Lone round ship at (2, 2) of a 5x5 grid: one step waters exactly
        // its 8 neighbors and touches nothing else
        let mut solver = solver(" 00100\n0.....\n0.....\n1..R..\n0.....\n0.....");
        let solution = solver.solve().unwrap();
        assert_eq!(solution.solved_cells.len(), 8);
        for row in 0usize..5 {
            for column in 0usize..5 {
                let expected = if (column, row) == (2, 2) {
                    Cell::Round
                } else if column.abs_diff(2) <= 1 && row.abs_diff(2) <= 1 {
                    Cell::Water
                } else {
                    Cell::Unknown
                };
                assert_eq!(solver.grid().cell(column, row), expected, "at ({column}, {row})");
            }
        }
    }

    #[test]
    fn forced_row_fill() {
        // Column targets of 2 keep the column rule quiet so the row rule
        // fills the whole row in one step
        let mut solver = solver(" 22222\n5.....");
        solver.solve().unwrap();
        for column in 0..5 {
            assert_eq!(solver.grid().cell(column, 0), Cell::UnknownBoatPart);
        }
    }

    #[test]
    fn forced_row_empty() {
        let mut solver = solver(" 22222\n0.....");
        solver.solve().unwrap();
        for column in 0..5 {
            assert_eq!(solver.grid().cell(column, 0), Cell::Water);
        }
    }

    #[test]
    fn identify_preempts_dead_squares() {
        // Both rules apply: the lone ship part resolves to a round ship
        // before the existing round ship's dead squares are watered
        let mut solver = solver(" 01011\n1M?MR.");
        let solution = solver.solve().unwrap();
        assert_eq!(solution.cell_of_interest, Some((1, 0)));
        assert_eq!(solver.grid().cell(1, 0), Cell::Round);
        assert_eq!(solver.grid().cell(4, 0), Cell::Unknown);
    }

    #[test]
    fn idempotent_termination() {
        let mut solver = solver(" 10\n1RM");
        assert!(solver.solve().is_none());
        assert!(solver.solve().is_none());
    }

    #[test]
    fn single_fit_insertion_through_the_full_engine() {
        // Rules 1-5 all stall: no provisional parts, no definite shapes, and
        // every line's remaining target differs from both zero and its
        // number of unknowns. The only open run of length 3 is committed.
        let mut solver = solver("1x3\n 01110\n1M.M.M\n0MMMMM\n2M...M\n0MMMMM\n2MM.MM");
        let solution = solver.solve().unwrap();
        assert_eq!(solution.solved_cells.len(), 3);
        assert_eq!(solver.grid().cell(1, 2), Cell::WestEnd);
        assert_eq!(solver.grid().cell(2, 2), Cell::HorizontalMiddle);
        assert_eq!(solver.grid().cell(3, 2), Cell::EastEnd);
        assert_eq!(solver.grid().cell(1, 0), Cell::Unknown);
    }

    #[test]
    fn monotonic_progress_to_completion() {
        // A 3-cell row solves end to end through count fill, orientation,
        // and end resolution; certainty never decreases anywhere
        fn ranks(grid: &crate::base::grid::Grid) -> Vec<u8> {
            let mut ranks = Vec::new();
            for row in 0..grid.rows() {
                for column in 0..grid.columns() {
                    ranks.push(match grid.cell(column, row) {
                        Cell::Unknown => 0,
                        Cell::UnknownBoatPart => 1,
                        Cell::UnknownVerticalBoatPart | Cell::UnknownHorizontalBoatPart => 2,
                        _ => 3,
                    });
                }
            }
            ranks
        }

        let mut solver = solver(" 111\n3...");
        let mut previous = ranks(solver.grid());
        let mut steps = 0;
        while let Some(solution) = solver.solve() {
            assert!(!solution.description.is_empty());
            steps += 1;
            assert!(steps <= 100, "solver did not terminate");
            let current = ranks(solver.grid());
            for (before, after) in previous.iter().zip(&current) {
                assert!(after >= before, "a cell lost certainty");
            }
            previous = current;
        }
        assert_eq!(solver.grid().cell(0, 0), Cell::WestEnd);
        assert_eq!(solver.grid().cell(1, 0), Cell::HorizontalMiddle);
        assert_eq!(solver.grid().cell(2, 0), Cell::EastEnd);
        assert!(solver.solve().is_none());
    }
}
