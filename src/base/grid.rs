use super::Vec2D;

/// The state of one grid square.
///
/// `UnknownBoatPart` and the two oriented variants are solver-internal
/// scratch states: a cell known to hold a ship whose exact role has not been
/// pinned down yet. They never appear in puzzle input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Unknown,
    Water,
    NorthEnd,
    SouthEnd,
    WestEnd,
    EastEnd,
    VerticalMiddle,
    HorizontalMiddle,
    Round,
    UnknownBoatPart,
    UnknownVerticalBoatPart,
    UnknownHorizontalBoatPart,
}

impl Cell {
    /// Any cell known to hold part of a ship, provisional or not.
    pub fn is_ship(self) -> bool {
        !matches!(self, Cell::Unknown | Cell::Water)
    }

    /// A fully resolved ship cell: an end, a middle, or a round ship.
    pub fn is_definite(self) -> bool {
        matches!(
            self,
            Cell::NorthEnd
                | Cell::SouthEnd
                | Cell::WestEnd
                | Cell::EastEnd
                | Cell::VerticalMiddle
                | Cell::HorizontalMiddle
                | Cell::Round
        )
    }

    /// Part of a vertically oriented ship.
    pub fn is_vertical_part(self) -> bool {
        matches!(
            self,
            Cell::NorthEnd | Cell::SouthEnd | Cell::VerticalMiddle | Cell::UnknownVerticalBoatPart
        )
    }

    /// Part of a horizontally oriented ship.
    pub fn is_horizontal_part(self) -> bool {
        matches!(
            self,
            Cell::WestEnd | Cell::EastEnd | Cell::HorizontalMiddle | Cell::UnknownHorizontalBoatPart
        )
    }

    /// Human-readable name used in deduction descriptions.
    pub fn description(self) -> &'static str {
        match self {
            Cell::Unknown => "unknown cell",
            Cell::Water => "water",
            Cell::NorthEnd => "north end",
            Cell::SouthEnd => "south end",
            Cell::WestEnd => "west end",
            Cell::EastEnd => "east end",
            Cell::VerticalMiddle => "vertical middle",
            Cell::HorizontalMiddle => "horizontal middle",
            Cell::Round => "round ship",
            Cell::UnknownBoatPart => "unidentified ship part",
            Cell::UnknownVerticalBoatPart => "vertical ship part",
            Cell::UnknownHorizontalBoatPart => "horizontal ship part",
        }
    }
}

/// How many ships of one length the puzzle contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipClass {
    pub length: usize,
    pub quantity: usize,
}

/// The fleet the puzzle must place, kept sorted by descending length so the
/// insertion rule always tries the largest ships first.
#[derive(Clone, Debug, Default)]
pub struct ShipInventory {
    classes: Vec<ShipClass>,
}

impl ShipInventory {
    pub fn new(mut classes: Vec<ShipClass>) -> Self {
        classes.sort_by(|a, b| b.length.cmp(&a.length));
        Self { classes }
    }

    /// Ship classes in descending length order.
    pub fn classes(&self) -> impl Iterator<Item = ShipClass> + '_ {
        self.classes.iter().copied()
    }

    pub fn quantity_of(&self, length: usize) -> usize {
        self.classes
            .iter()
            .filter(|class| class.length == length)
            .map(|class| class.quantity)
            .sum()
    }
}

/// The puzzle state: the cell array plus the per-column and per-row target
/// counts fixed at load time, and the optional ship inventory.
///
/// The grid performs no consistency checking of its own; the deduction rules
/// are responsible for respecting the puzzle invariants. Out-of-bounds
/// access through the non-`Option` accessors is a caller bug and panics.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec2D<Cell>,
    column_counts: Vec<usize>,
    row_counts: Vec<usize>,
    inventory: Option<ShipInventory>,
}

impl Grid {
    pub fn new(
        column_counts: Vec<usize>,
        row_counts: Vec<usize>,
        cells: Vec2D<Cell>,
        inventory: Option<ShipInventory>,
    ) -> Self {
        assert_eq!(cells.dims().0, column_counts.len(), "one target count per column");
        assert_eq!(cells.dims().1, row_counts.len(), "one target count per row");
        Self {
            cells,
            column_counts,
            row_counts,
            inventory,
        }
    }

    pub fn columns(&self) -> usize {
        self.cells.dims().0
    }

    pub fn rows(&self) -> usize {
        self.cells.dims().1
    }

    /// Required number of ship cells in `column`.
    pub fn column_count(&self, column: usize) -> usize {
        self.column_counts[column]
    }

    /// Required number of ship cells in `row`.
    pub fn row_count(&self, row: usize) -> usize {
        self.row_counts[row]
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[(column, row)]
    }

    pub fn set_cell(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[(column, row)] = cell;
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(column, row).copied()
    }

    /// The cell `(dx, dy)` away from `(column, row)`, or `None` past an edge.
    pub fn offset(&self, column: usize, row: usize, dx: isize, dy: isize) -> Option<Cell> {
        let (column, row) = self.offset_position(column, row, dx, dy)?;
        Some(self.cells[(column, row)])
    }

    /// The coordinates `(dx, dy)` away from `(column, row)`, if inside the grid.
    pub fn offset_position(&self, column: usize, row: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let column = column.checked_add_signed(dx)?;
        let row = row.checked_add_signed(dy)?;
        (column < self.columns() && row < self.rows()).then_some((column, row))
    }

    pub fn inventory(&self) -> Option<&ShipInventory> {
        self.inventory.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        // 2x2, one round ship in the top-left corner
        let mut cells = Vec2D::new(2, 2);
        cells[(0, 0)] = Cell::Round;
        Grid::new(vec![1, 0], vec![1, 0], cells, None)
    }

    #[test]
    fn accessors() {
        let grid = grid();
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.column_count(0), 1);
        assert_eq!(grid.row_count(1), 0);
        assert_eq!(grid.cell(0, 0), Cell::Round);
        assert_eq!(grid.cell(1, 1), Cell::Unknown);
    }

    #[test]
    fn offset_stops_at_the_edges() {
        let grid = grid();
        assert_eq!(grid.offset(0, 0, 1, 1), Some(Cell::Unknown));
        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(1, 1, 0, 1), None);
        assert_eq!(grid.offset_position(1, 1, -1, -1), Some((0, 0)));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_cell_access_panics() {
        grid().cell(2, 0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_count_access_panics() {
        grid().column_count(2);
    }

    #[test]
    fn inventory_orders_classes_by_descending_length() {
        let inventory = ShipInventory::new(vec![
            ShipClass { length: 1, quantity: 4 },
            ShipClass { length: 4, quantity: 1 },
            ShipClass { length: 2, quantity: 3 },
        ]);
        let lengths: Vec<_> = inventory.classes().map(|class| class.length).collect();
        assert_eq!(lengths, [4, 2, 1]);
        assert_eq!(inventory.quantity_of(2), 3);
        assert_eq!(inventory.quantity_of(3), 0);
    }
}
