//! Fixed-size Tetris board

use std::fmt;

use super::piece::PieceKind;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// 10x20 grid of cells, each empty or tagged with the piece kind that
/// occupies it. The tag is carried for rendering upstream; the physics
/// only cares about occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrisBoard {
    cells: [[Option<PieceKind>; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl TetrisBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Parse a board from 20 rows of 10 characters: '.' for empty,
    /// anything else for an occupied cell. Occupied cells parse with an
    /// arbitrary tag since the tag has no effect on physics or scoring.
    ///
    /// # Errors
    ///
    /// Returns an error when the row or column count is wrong.
    pub fn from_rows(s: &str) -> Result<Self, crate::Error> {
        let rows: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != BOARD_HEIGHT {
            return Err(crate::Error::InvalidTetrisBoard {
                message: format!("expected {BOARD_HEIGHT} rows, got {}", rows.len()),
            });
        }

        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.trim().chars().collect();
            if chars.len() != BOARD_WIDTH {
                return Err(crate::Error::InvalidTetrisBoard {
                    message: format!(
                        "row {r} has {} cells, expected {BOARD_WIDTH}",
                        chars.len()
                    ),
                });
            }
            for (c, &ch) in chars.iter().enumerate() {
                if ch != '.' {
                    board.cells[r][c] = Some(PieceKind::O);
                }
            }
        }
        Ok(board)
    }

    /// Cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<PieceKind> {
        self.cells[row][col]
    }

    /// Whether the cell at (row, col) is occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_some()
    }

    /// Stamp a cell with a piece tag
    pub fn set(&mut self, row: usize, col: usize, kind: PieceKind) {
        self.cells[row][col] = Some(kind);
    }

    /// Clear every fully-occupied row, shifting the rows above down and
    /// inserting empty rows at the top. Returns the number of cleared rows.
    ///
    /// Scans bottom-up and re-checks the same index after a shift, as the
    /// original does.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT;
        while row > 0 {
            let r = row - 1;
            if self.cells[r].iter().all(|c| c.is_some()) {
                // Shift everything above down by one, empty row on top
                for shift in (1..=r).rev() {
                    self.cells[shift] = self.cells[shift - 1];
                }
                self.cells[0] = [None; BOARD_WIDTH];
                cleared += 1;
                // Re-check the same row index after the shift
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Count of occupied cells (handy for conservation checks in tests)
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_some())
            .count()
    }
}

impl Default for TetrisBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TetrisBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", if cell.is_some() { '#' } else { '.' })?;
            }
            if r < BOARD_HEIGHT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
