use crate::{
    base::grid::{Cell, Grid},
    engine::solver::Solution,
};

/// Receives the refreshed grid and each deduction as solving progresses.
pub trait SolveObserver {
    fn observe(&mut self, grid: &Grid, solution: &Solution);
}

/// Renders the grid with its target counts: column targets across the top,
/// each row prefixed by its own target.
pub fn draw(grid: &Grid) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for column in 0..grid.columns() {
        out.push_str(&grid.column_count(column).to_string());
    }
    out.push('\n');

    for row in 0..grid.rows() {
        out.push_str(&grid.row_count(row).to_string());
        out.push(' ');
        for column in 0..grid.columns() {
            out.push(glyph(grid.cell(column, row)));
        }
        out.push('\n');
    }

    out
}

/// Display glyphs; lowercase marks the provisional states.
fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Unknown => '.',
        Cell::Water => '~',
        Cell::NorthEnd => 'N',
        Cell::SouthEnd => 'S',
        Cell::WestEnd => 'W',
        Cell::EastEnd => 'E',
        Cell::VerticalMiddle => 'V',
        Cell::HorizontalMiddle => 'H',
        Cell::Round => 'R',
        Cell::UnknownBoatPart => '?',
        Cell::UnknownVerticalBoatPart => 'v',
        Cell::UnknownHorizontalBoatPart => 'h',
    }
}

/// Prints each deduction, and the refreshed grid when configured, to stdout.
pub struct TextObserver {
    show_grid: bool,
    step: usize,
}

impl TextObserver {
    pub fn new(show_grid: bool) -> Self {
        Self { show_grid, step: 0 }
    }
}

impl SolveObserver for TextObserver {
    fn observe(&mut self, grid: &Grid, solution: &Solution) {
        self.step += 1;
        println!("{:>3}. {}", self.step, solution.description);
        if self.show_grid {
            println!("{}", draw(grid));
        }
    }
}
