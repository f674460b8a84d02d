//! Board storage and the single stone-placement path

use super::{BoardError, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board. Cells only ever go from empty to occupied; the whole grid
/// is cleared at once by [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Stone>; BOARD_SIZE]; BOARD_SIZE],
    /// Occupied cell count, kept in step with `cells`
    stones: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            stones: 0,
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if the cell at raw coordinates is on the board and empty
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        Pos::try_new(row, col).is_some_and(|pos| self.get(pos).is_none())
    }

    /// Place a stone.
    ///
    /// Fails with [`BoardError::InvalidPosition`] for coordinates outside
    /// `[0, BOARD_SIZE)` and [`BoardError::CellOccupied`] when the cell
    /// already holds a stone. The board is untouched on failure.
    pub fn place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, BoardError> {
        let pos = Pos::try_new(row, col).ok_or(BoardError::InvalidPosition { row, col })?;
        let cell = &mut self.cells[pos.row as usize][pos.col as usize];
        if cell.is_some() {
            return Err(BoardError::CellOccupied(pos));
        }
        *cell = Some(stone);
        self.stones += 1;
        Ok(pos)
    }

    /// All unoccupied positions, in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    /// Occupied positions together with their stones
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter_map(|pos| self.get(pos).map(|stone| (pos, stone)))
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
