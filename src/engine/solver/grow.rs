use super::{Rule, Solution};
use crate::base::grid::{Cell, Grid};
use log::trace;

/// Extends resolved shapes one cell along their ship's axis: an end grows
/// away from its tip, a middle grows to its first unknown axis neighbor.
/// The grown cell is only provisionally oriented; identification settles its
/// exact role later.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowBoats;

impl Rule for GrowBoats {
    fn apply(&self, grid: &mut Grid) -> Option<Solution> {
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let cell = grid.cell(column, row);
                let growths: &[(isize, isize, Cell)] = match cell {
                    Cell::NorthEnd => &[(0, 1, Cell::UnknownVerticalBoatPart)],
                    Cell::SouthEnd => &[(0, -1, Cell::UnknownVerticalBoatPart)],
                    Cell::WestEnd => &[(1, 0, Cell::UnknownHorizontalBoatPart)],
                    Cell::EastEnd => &[(-1, 0, Cell::UnknownHorizontalBoatPart)],
                    Cell::VerticalMiddle => &[
                        (0, -1, Cell::UnknownVerticalBoatPart),
                        (0, 1, Cell::UnknownVerticalBoatPart),
                    ],
                    Cell::HorizontalMiddle => &[
                        (-1, 0, Cell::UnknownHorizontalBoatPart),
                        (1, 0, Cell::UnknownHorizontalBoatPart),
                    ],
                    _ => continue,
                };

                for &(dx, dy, part) in growths {
                    if let Some((nc, nr)) = grid.offset_position(column, row, dx, dy)
                        && grid.cell(nc, nr) == Cell::Unknown
                    {
                        grid.set_cell(nc, nr, part);
                        let description = format!(
                            "The {} at column {column}, row {row} continues onto column {nc}, row {nr}",
                            cell.description(),
                        );
                        trace!("GrowBoats: {description}");
                        return Some(Solution::cluster(description, Some((column, row)), [(nc, nr)]));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        crate::base::parse::decode(text).unwrap()
    }

    #[test]
    fn north_end_grows_south() {
        let mut grid = grid(" 2\n1N\n1.");
        let solution = GrowBoats.apply(&mut grid).unwrap();
        assert_eq!(grid.cell(0, 1), Cell::UnknownVerticalBoatPart);
        assert_eq!(solution.cell_of_interest, Some((0, 0)));
    }

    #[test]
    fn east_end_grows_west() {
        let mut grid = grid(" 11\n2.E");
        GrowBoats.apply(&mut grid).unwrap();
        assert_eq!(grid.cell(0, 0), Cell::UnknownHorizontalBoatPart);
    }

    #[test]
    fn vertical_middle_grows_north_before_south() {
        let mut grid = grid(" 3\n1.\n1.\n1.");
        grid.set_cell(0, 1, Cell::VerticalMiddle);
        GrowBoats.apply(&mut grid).unwrap();
        assert_eq!(grid.cell(0, 0), Cell::UnknownVerticalBoatPart);
        assert_eq!(grid.cell(0, 2), Cell::Unknown);
    }

    #[test]
    fn middle_grows_the_other_way_when_one_side_is_taken() {
        let mut grid = grid(" 3\n1N\n1.\n1.");
        grid.set_cell(0, 1, Cell::VerticalMiddle);
        let solution = GrowBoats.apply(&mut grid).unwrap();
        assert_eq!(solution.cell_of_interest, Some((0, 1)));
        assert_eq!(grid.cell(0, 2), Cell::UnknownVerticalBoatPart);
    }

    #[test]
    fn resolved_neighbors_block_growth() {
        let mut grid = grid(" 2\n1N\n1S");
        assert!(GrowBoats.apply(&mut grid).is_none());
    }

    #[test]
    fn round_ships_never_grow() {
        let mut grid = grid(" 010\n0...\n1.R.\n0...");
        assert!(GrowBoats.apply(&mut grid).is_none());
    }
}
