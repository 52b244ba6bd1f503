//! The puzzle text format.
//!
//! An optional first line lists the ship inventory as `<quantity>x<length>`
//! tokens. The next line carries one filler character followed by one digit
//! per column target count. Every following line is a row: its target digit,
//! then one cell code per column.

use super::{
    Vec2D,
    grid::{Cell, Grid, ShipClass, ShipInventory},
};
use log::error;
use phf::{Map, phf_map};
use std::{fs::read_to_string, path::PathBuf};

static CELL_CODES: Map<char, Cell> = phf_map! {
    'M' => Cell::Water,
    'S' => Cell::SouthEnd,
    'N' => Cell::NorthEnd,
    'W' => Cell::WestEnd,
    'E' => Cell::EastEnd,
    'R' => Cell::Round,
    '?' => Cell::UnknownBoatPart,
};

/// Parses a puzzle from its text form.
///
/// Malformed input is logged and reported as `None`; any character outside
/// the cell vocabulary reads as [`Cell::Unknown`].
pub fn decode(text: &str) -> Option<Grid> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        error!("Puzzle input has no lines");
        return None;
    }

    let (inventory, header_index) = if looks_like_inventory(lines[0]) {
        (Some(parse_inventory(lines[0])?), 1)
    } else {
        (None, 0)
    };

    let Some(header) = lines.get(header_index) else {
        error!("Puzzle input has no column count line");
        return None;
    };
    let Some(column_counts) = header
        .chars()
        .skip(1)
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<Vec<usize>>>()
    else {
        error!("Column counts must be decimal digits: {header:?}");
        return None;
    };
    let width = column_counts.len();
    if width == 0 {
        error!("Puzzle input has no columns");
        return None;
    }

    let body = &lines[header_index + 1..];
    if body.is_empty() {
        error!("Puzzle input has no rows");
        return None;
    }

    let mut row_counts = Vec::with_capacity(body.len());
    let mut cells = Vec2D::new(width, body.len());
    for (row, line) in body.iter().enumerate() {
        let mut chars = line.chars();
        let Some(count) = chars.next().and_then(|c| c.to_digit(10)) else {
            error!("Row {row} does not start with its target count digit: {line:?}");
            return None;
        };
        row_counts.push(count as usize);

        let mut columns = 0;
        for c in chars {
            if columns >= width {
                break;
            }
            cells[(columns, row)] = CELL_CODES.get(&c).copied().unwrap_or(Cell::Unknown);
            columns += 1;
        }
        if columns != width || line.chars().count() != width + 1 {
            error!("Row {row} has inconsistent width: {line:?}");
            return None;
        }
    }

    Some(Grid::new(column_counts, row_counts, cells, inventory))
}

/// Writes a grid back into the text form read by [`decode`].
///
/// Middles use the drawer's `V`/`H` glyphs; the provisional markers all
/// collapse to `?`, the strongest statement the format can make about them.
pub fn encode(grid: &Grid) -> String {
    let mut out = String::new();

    if let Some(inventory) = grid.inventory() {
        for (i, class) in inventory.classes().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{}x{}", class.quantity, class.length));
        }
        out.push('\n');
    }

    out.push(' ');
    for column in 0..grid.columns() {
        out.push(char::from_digit(grid.column_count(column) as u32, 10).unwrap());
    }
    for row in 0..grid.rows() {
        out.push('\n');
        out.push(char::from_digit(grid.row_count(row) as u32, 10).unwrap());
        for column in 0..grid.columns() {
            out.push(code(grid.cell(column, row)));
        }
    }

    out
}

fn code(cell: Cell) -> char {
    match cell {
        Cell::Unknown => '.',
        Cell::Water => 'M',
        Cell::SouthEnd => 'S',
        Cell::NorthEnd => 'N',
        Cell::WestEnd => 'W',
        Cell::EastEnd => 'E',
        Cell::VerticalMiddle => 'V',
        Cell::HorizontalMiddle => 'H',
        Cell::Round => 'R',
        Cell::UnknownBoatPart | Cell::UnknownVerticalBoatPart | Cell::UnknownHorizontalBoatPart => '?',
    }
}

fn looks_like_inventory(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return false;
    }
    tokens.all(|token| {
        token
            .split_once('x')
            .is_some_and(|(quantity, length)| quantity.parse::<usize>().is_ok() && length.parse::<usize>().is_ok())
    })
}

fn parse_inventory(line: &str) -> Option<ShipInventory> {
    let mut classes = Vec::new();
    for token in line.split_whitespace() {
        let Some((quantity, length)) = token.split_once('x') else {
            error!("Bad ship inventory token: {token:?}");
            return None;
        };
        let quantity = quantity
            .parse()
            .inspect_err(|e| error!("Bad ship quantity in {token:?}: {e}"))
            .ok()?;
        let length = length
            .parse()
            .inspect_err(|e| error!("Bad ship length in {token:?}: {e}"))
            .ok()?;
        classes.push(ShipClass { length, quantity });
    }
    Some(ShipInventory::new(classes))
}

/// Produces the initial grid the solver runs on.
///
/// The engine performs no I/O of its own; implementations of this trait are
/// its sole input boundary.
pub trait PuzzleSource {
    fn load(&self) -> crate::error::Result<Grid>;
}

/// Loads puzzles from files in the text format.
#[derive(Clone, Debug)]
pub struct FilePuzzleSource {
    path: PathBuf,
}

impl FilePuzzleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PuzzleSource for FilePuzzleSource {
    fn load(&self) -> crate::error::Result<Grid> {
        let text = read_to_string(&self.path)?;
        decode(&text).ok_or_else(|| crate::error::Error::InvalidPuzzle(self.path.to_string_lossy().into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_counts_and_cells() {
        let grid = decode(" 111\n2N.M\n1S?R").unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.column_count(0), 1);
        assert_eq!(grid.row_count(0), 2);
        assert_eq!(grid.row_count(1), 1);
        assert_eq!(grid.cell(0, 0), Cell::NorthEnd);
        assert_eq!(grid.cell(1, 0), Cell::Unknown);
        assert_eq!(grid.cell(2, 0), Cell::Water);
        assert_eq!(grid.cell(0, 1), Cell::SouthEnd);
        assert_eq!(grid.cell(1, 1), Cell::UnknownBoatPart);
        assert_eq!(grid.cell(2, 1), Cell::Round);
        assert!(grid.inventory().is_none());
    }

    #[test]
    fn decode_reads_the_inventory_line() {
        let grid = decode("2x1 1x3\n 121\n1...\n2...\n1...").unwrap();
        let classes: Vec<_> = grid.inventory().unwrap().classes().collect();
        assert_eq!(
            classes,
            [
                ShipClass { length: 3, quantity: 1 },
                ShipClass { length: 1, quantity: 2 },
            ]
        );
    }

    #[test]
    fn decode_rejects_inconsistent_line_widths() {
        assert!(decode(" 11\n1..\n1.").is_none());
        assert!(decode(" 11\n1...\n1..").is_none());
    }

    #[test]
    fn decode_rejects_non_digit_counts() {
        assert!(decode(" 1a\n1..\n1..").is_none());
        assert!(decode(" 11\nx..\n1..").is_none());
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert!(decode("").is_none());
        assert!(decode("1x4").is_none());
    }

    #[test]
    fn unlisted_characters_read_as_unknown() {
        let grid = decode(" 11\n1 *\n0..").unwrap();
        assert_eq!(grid.cell(0, 0), Cell::Unknown);
        assert_eq!(grid.cell(1, 0), Cell::Unknown);
    }

    #[test]
    fn encode_round_trips_the_vocabulary() {
        let text = "1x2 1x1\n 211\n2NW?\n2SER\n0MM.";
        let grid = decode(text).unwrap();
        assert_eq!(encode(&grid), text);
    }
}
