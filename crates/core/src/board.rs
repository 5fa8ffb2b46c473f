//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell is either empty or holds a colored
//! tile. A tile may additionally be locked and/or carry one power-up.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..9 (top to bottom), col ranges 0..9 (left to right).
//!
//! Lock and power-up flags live on the tile itself, so they travel with it
//! through gravity, compaction and level-up row shifts. Every method that can
//! empty a cell also drops its flags, which keeps the invariant that flags only
//! ever describe occupied cells.

use crate::types::{ColorId, Coord, PowerUpKind, CELL_COUNT, COLS, ROWS};

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub color: Option<ColorId>,
    pub locked: bool,
    pub power_up: Option<PowerUpKind>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        color: None,
        locked: false,
        power_up: None,
    };

    /// A plain tile with no flags.
    pub const fn tile(color: ColorId) -> Self {
        Cell {
            color: Some(color),
            locked: false,
            power_up: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.color.is_some()
    }

    /// Drop flags from an empty cell.
    fn normalized(self) -> Self {
        if self.color.is_none() {
            Cell::EMPTY
        } else {
            self
        }
    }
}

/// The game board - 10 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; CELL_COUNT],
        }
    }

    /// Build a board from a picture, one string per row, top row first.
    ///
    /// `R G B Y M C` are tiles, their lowercase forms are locked tiles, `.` is
    /// empty. Missing rows or columns are left empty; returns `None` on an
    /// unknown character or an oversized picture.
    ///
    /// ```
    /// use blockblast_core::Board;
    /// use blockblast_types::{ColorId, Coord};
    ///
    /// let board = Board::parse(&["Rr", ".B"]).unwrap();
    /// assert_eq!(board.color_at(Coord::new(0, 0)), Some(ColorId::Red));
    /// assert!(board.is_locked(Coord::new(0, 1)));
    /// assert!(board.is_empty_at(Coord::new(1, 0)));
    /// ```
    pub fn parse(rows: &[&str]) -> Option<Self> {
        if rows.len() > ROWS {
            return None;
        }
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() > COLS {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = color_from_char(ch.to_ascii_uppercase())?;
                let coord = Coord::new(r as u8, c as u8);
                board.set_tile(
                    coord,
                    Cell {
                        color: Some(color),
                        locked: ch.is_ascii_lowercase(),
                        power_up: None,
                    },
                );
            }
        }
        Some(board)
    }

    /// A board where every cell holds a plain tile of `color`.
    pub fn filled(color: ColorId) -> Self {
        Self {
            cells: [Cell::tile(color); CELL_COUNT],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(coord: Coord) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.index())
        } else {
            None
        }
    }

    /// Get cell at `coord`. Returns None if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        Self::index(coord).map(|idx| self.cells[idx])
    }

    /// Color at `coord`, `None` for empty or out of bounds.
    pub fn color_at(&self, coord: Coord) -> Option<ColorId> {
        self.get(coord).and_then(|cell| cell.color)
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(cell) if cell.is_occupied())
    }

    /// True for an in-bounds empty cell.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(cell) if cell.is_empty())
    }

    pub fn is_locked(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(cell) if cell.locked)
    }

    pub fn power_up_at(&self, coord: Coord) -> Option<PowerUpKind> {
        self.get(coord).and_then(|cell| cell.power_up)
    }

    /// Replace a whole cell. Flags on an empty cell are dropped.
    /// Returns false if out of bounds.
    pub fn set_tile(&mut self, coord: Coord, cell: Cell) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                self.cells[idx] = cell.normalized();
                true
            }
            None => false,
        }
    }

    /// Set only the color. Setting `None` empties the cell and drops its flags.
    pub fn set_color(&mut self, coord: Coord, color: Option<ColorId>) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                let cell = Cell {
                    color,
                    ..self.cells[idx]
                };
                self.cells[idx] = cell.normalized();
                true
            }
            None => false,
        }
    }

    /// Lock or unlock an occupied tile. Returns false for empty or out-of-bounds cells.
    pub fn set_locked(&mut self, coord: Coord, locked: bool) -> bool {
        match Self::index(coord) {
            Some(idx) if self.cells[idx].is_occupied() => {
                self.cells[idx].locked = locked;
                true
            }
            _ => false,
        }
    }

    /// Place or remove a power-up on an occupied tile.
    /// Returns false for empty or out-of-bounds cells.
    pub fn set_power_up(&mut self, coord: Coord, power_up: Option<PowerUpKind>) -> bool {
        match Self::index(coord) {
            Some(idx) if self.cells[idx].is_occupied() => {
                self.cells[idx].power_up = power_up;
                true
            }
            _ => false,
        }
    }

    /// Empty a cell, returning what was there if it was occupied.
    pub fn clear_cell(&mut self, coord: Coord) -> Option<Cell> {
        let idx = Self::index(coord)?;
        let prev = self.cells[idx];
        self.cells[idx] = Cell::EMPTY;
        prev.is_occupied().then_some(prev)
    }

    /// Strip the lock from a tile. Returns true if it was locked.
    pub fn unlock(&mut self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) if self.cells[idx].locked => {
                self.cells[idx].locked = false;
                true
            }
            _ => false,
        }
    }

    /// Remove and return the power-up on a tile.
    pub fn take_power_up(&mut self, coord: Coord) -> Option<PowerUpKind> {
        let idx = Self::index(coord)?;
        self.cells[idx].power_up.take()
    }

    /// Exchange the colors of two cells. Lock and power-up flags stay where they are.
    ///
    /// Both cells must be occupied; returns false otherwise.
    pub fn swap_colors(&mut self, a: Coord, b: Coord) -> bool {
        let (Some(ia), Some(ib)) = (Self::index(a), Self::index(b)) else {
            return false;
        };
        if self.cells[ia].is_empty() || self.cells[ib].is_empty() {
            return false;
        }
        let color_a = self.cells[ia].color;
        self.cells[ia].color = self.cells[ib].color;
        self.cells[ib].color = color_a;
        true
    }

    /// Copy of one column, top to bottom.
    pub fn column(&self, col: usize) -> [Cell; ROWS] {
        debug_assert!(col < COLS);
        std::array::from_fn(|row| self.cells[row * COLS + col])
    }

    /// Overwrite one column, top to bottom.
    pub fn set_column(&mut self, col: usize, cells: &[Cell; ROWS]) {
        debug_assert!(col < COLS);
        for (row, cell) in cells.iter().enumerate() {
            self.cells[row * COLS + col] = cell.normalized();
        }
    }

    /// True if any cell in the column is occupied.
    pub fn column_occupied(&self, col: usize) -> bool {
        (0..ROWS).any(|row| self.cells[row * COLS + col].is_occupied())
    }

    /// Slice of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * COLS;
        &self.cells[start..start + COLS]
    }

    /// Move every row down by one. The bottom row is discarded, the top row
    /// is left empty for the caller to refill.
    pub fn shift_rows_down(&mut self) {
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..(ROWS - 1) * COLS, COLS);
        self.cells[..COLS].fill(Cell::EMPTY);
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Coordinates of every locked tile, row-major.
    pub fn locked_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.locked)
            .map(|(coord, _)| coord)
    }

    /// Every power-up on the board with its position, row-major.
    pub fn power_ups(&self) -> impl Iterator<Item = (Coord, PowerUpKind)> + '_ {
        self.iter()
            .filter_map(|(coord, cell)| cell.power_up.map(|kind| (coord, kind)))
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Coord::from_index(idx), *cell))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Render as picture rows, the inverse of [`Board::parse`] (flags other than
    /// `locked` are not shown).
    pub fn to_picture(&self) -> Vec<String> {
        (0..ROWS)
            .map(|row| {
                self.row(row)
                    .iter()
                    .map(|cell| match cell.color {
                        None => '.',
                        Some(color) if cell.locked => color_char(color).to_ascii_lowercase(),
                        Some(color) => color_char(color),
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn color_from_char(ch: char) -> Option<ColorId> {
    match ch {
        'R' => Some(ColorId::Red),
        'G' => Some(ColorId::Green),
        'B' => Some(ColorId::Blue),
        'Y' => Some(ColorId::Yellow),
        'M' => Some(ColorId::Magenta),
        'C' => Some(ColorId::Cyan),
        _ => None,
    }
}

fn color_char(color: ColorId) -> char {
    match color {
        ColorId::Red => 'R',
        ColorId::Green => 'G',
        ColorId::Blue => 'B',
        ColorId::Yellow => 'Y',
        ColorId::Magenta => 'M',
        ColorId::Cyan => 'C',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(Coord::new(0, 0)), Some(0));
        assert_eq!(Board::index(Coord::new(0, 9)), Some(9));
        assert_eq!(Board::index(Coord::new(1, 0)), Some(10));
        assert_eq!(Board::index(Coord::new(9, 9)), Some(99));
        assert_eq!(Board::index(Coord::new(10, 0)), None);
        assert_eq!(Board::index(Coord::new(0, 10)), None);
    }

    #[test]
    fn test_clearing_drops_flags() {
        let mut board = Board::filled(ColorId::Red);
        let at = Coord::new(4, 4);
        assert!(board.set_locked(at, true));
        assert!(board.set_power_up(at, Some(PowerUpKind::Bomb)));

        let prev = board.clear_cell(at).unwrap();
        assert!(prev.locked);
        assert_eq!(prev.power_up, Some(PowerUpKind::Bomb));
        assert_eq!(board.get(at), Some(Cell::EMPTY));

        // Flags cannot be attached to an empty cell.
        assert!(!board.set_locked(at, true));
        assert!(!board.set_power_up(at, Some(PowerUpKind::Swap)));
        assert_eq!(board.get(at), Some(Cell::EMPTY));
    }

    #[test]
    fn test_set_color_none_purges() {
        let mut board = Board::filled(ColorId::Blue);
        let at = Coord::new(0, 0);
        board.set_locked(at, true);
        board.set_power_up(at, Some(PowerUpKind::Swap));
        board.set_color(at, None);
        assert_eq!(board.get(at), Some(Cell::EMPTY));
    }

    #[test]
    fn test_swap_colors_keeps_flags_in_place() {
        let mut board = Board::parse(&["RG"]).unwrap();
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        board.set_locked(a, true);
        board.set_power_up(b, Some(PowerUpKind::ExtraMoves));

        assert!(board.swap_colors(a, b));
        assert_eq!(board.color_at(a), Some(ColorId::Green));
        assert_eq!(board.color_at(b), Some(ColorId::Red));
        assert!(board.is_locked(a));
        assert_eq!(board.power_up_at(b), Some(PowerUpKind::ExtraMoves));
    }

    #[test]
    fn test_swap_rejects_empty() {
        let mut board = Board::parse(&["R."]).unwrap();
        assert!(!board.swap_colors(Coord::new(0, 0), Coord::new(0, 1)));
        assert_eq!(board.color_at(Coord::new(0, 0)), Some(ColorId::Red));
    }

    #[test]
    fn test_shift_rows_down() {
        let mut board = Board::parse(&["RRRRRRRRRR", "GGGGGGGGGG"]).unwrap();
        board.set_locked(Coord::new(0, 3), true);
        board.shift_rows_down();

        assert!(board.row(0).iter().all(|c| c.is_empty()));
        assert!(board.row(1).iter().all(|c| c.color == Some(ColorId::Red)));
        assert!(board.row(2).iter().all(|c| c.color == Some(ColorId::Green)));
        assert!(board.is_locked(Coord::new(1, 3)));
    }

    #[test]
    fn test_parse_roundtrip() {
        let picture = ["RGB", ".y.", "", "C"];
        let board = Board::parse(&picture).unwrap();
        let out = board.to_picture();
        assert_eq!(out[0], "RGB.......");
        assert_eq!(out[1], ".y........");
        assert_eq!(out[2], "..........");
        assert_eq!(out[3], "C.........");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Board::parse(&["X"]).is_none());
        assert!(Board::parse(&["RRRRRRRRRRR"]).is_none());
        assert!(Board::parse(&[""; 11]).is_none());
    }
}
