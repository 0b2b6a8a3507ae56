//! Placement enumeration and heuristic move selection
//!
//! For every rotation and starting column the engine simulates a vertical
//! drop, applies either the standard rigid landing or the magic T dissolve
//! rule, clears full rows, scores the resulting board, and keeps the best
//! placement. The dissolve rule is a deliberate deviation from standard
//! Tetris physics and is preserved exactly: a rigid-body engine would
//! score placements differently and recommend different moves.

use super::{
    board::{BOARD_HEIGHT, BOARD_WIDTH, TetrisBoard},
    features,
    piece::PieceKind,
};

/// Scoring weights applied to the settled board
const WEIGHT_LINES: i32 = 100;
const WEIGHT_HOLES: i32 = -50;
const WEIGHT_BUMPINESS: i32 = -10;
const WEIGHT_WELLS: i32 = -20;
const WEIGHT_HEIGHT: i32 = -5;

/// A fully-simulated placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Board after landing and line clearing
    pub board: TetrisBoard,
    pub lines_cleared: usize,
    /// Anchor column the piece was dropped in
    pub column: usize,
    /// Rotation index (0-3)
    pub rotation: usize,
}

/// The placement engine. The single piece of state is the magic T toggle:
/// when enabled (the default), the T piece dissolves on landing.
#[derive(Debug, Clone)]
pub struct TetrisAi {
    magic_t: bool,
}

impl TetrisAi {
    /// Create an engine with the magic T rule enabled
    pub fn new() -> Self {
        Self { magic_t: true }
    }

    /// Create an engine with an explicit magic T setting
    pub fn with_magic_t(magic_t: bool) -> Self {
        Self { magic_t }
    }

    /// Flip the magic T rule, returning the new setting
    pub fn toggle_magic_t(&mut self) -> bool {
        self.magic_t = !self.magic_t;
        self.magic_t
    }

    pub fn magic_t_enabled(&self) -> bool {
        self.magic_t
    }

    /// Score a settled board
    pub fn evaluate(&self, board: &TetrisBoard, lines_cleared: usize) -> i32 {
        let f = features::extract(board);
        lines_cleared as i32 * WEIGHT_LINES
            + f.holes as i32 * WEIGHT_HOLES
            + f.bumpiness as i32 * WEIGHT_BUMPINESS
            + f.wells as i32 * WEIGHT_WELLS
            + f.max_height as i32 * WEIGHT_HEIGHT
    }

    /// Enumerate every legal placement for a piece.
    ///
    /// Scan order is rotation (outer) then column (inner); the greedy
    /// selection in [`suggest_best_move`](Self::suggest_best_move) relies
    /// on this order for its first-found tie-break.
    pub fn all_placements(&self, board: &TetrisBoard, kind: PieceKind) -> Vec<Placement> {
        let mut placements = Vec::new();
        for rotation in 0..4 {
            for column in 0..BOARD_WIDTH {
                if let Some(placement) = self.simulate_drop(board, kind, rotation, column) {
                    placements.push(placement);
                }
            }
        }
        placements
    }

    /// Simulate dropping a piece in a given rotation and anchor column.
    ///
    /// Returns `None` when the combination is laterally out of bounds or
    /// the piece cannot even spawn without overlap.
    pub fn simulate_drop(
        &self,
        board: &TetrisBoard,
        kind: PieceKind,
        rotation: usize,
        column: usize,
    ) -> Option<Placement> {
        let offsets = *kind.rotations().get(rotation)?;

        // Lateral pre-check: reject before simulating if any cell would
        // sit outside [0, width) at this anchor column.
        let mut cols = Vec::with_capacity(offsets.len());
        for &(_, dc) in offsets {
            let col = column as i32 + dc as i32;
            if !(0..BOARD_WIDTH as i32).contains(&col) {
                return None;
            }
            cols.push(col as usize);
        }

        // Spawn at the topmost anchor row that keeps every cell on the board
        let min_dr = offsets.iter().map(|&(dr, _)| dr as i32).min()?;
        let max_dr = offsets.iter().map(|&(dr, _)| dr as i32).max()?;
        let mut anchor = (-min_dr).max(0);
        if anchor + max_dr >= BOARD_HEIGHT as i32 {
            return None;
        }

        // A spawn overlapping occupied cells means no placement here
        if self.collides(board, offsets, &cols, anchor) {
            return None;
        }

        // Descend one row at a time until a cell would leave the board or
        // land on an occupied cell
        while anchor + max_dr + 1 < BOARD_HEIGHT as i32
            && !self.collides(board, offsets, &cols, anchor + 1)
        {
            anchor += 1;
        }

        let mut next = board.clone();
        if self.magic_t && kind == PieceKind::T {
            self.land_dissolving(&mut next, offsets, &cols, anchor, kind);
        } else {
            for (i, &(dr, _)) in offsets.iter().enumerate() {
                next.set((anchor + dr as i32) as usize, cols[i], kind);
            }
        }

        let lines_cleared = next.clear_full_rows();
        Some(Placement {
            board: next,
            lines_cleared,
            column,
            rotation,
        })
    }

    fn collides(
        &self,
        board: &TetrisBoard,
        offsets: &[(i8, i8)],
        cols: &[usize],
        anchor: i32,
    ) -> bool {
        offsets.iter().enumerate().any(|(i, &(dr, _))| {
            let row = anchor + dr as i32;
            row < 0 || row >= BOARD_HEIGHT as i32 || board.is_occupied(row as usize, cols[i])
        })
    }

    /// Magic T landing: each cell falls independently from its landing row,
    /// filling every cell along its vertical path until it reaches the
    /// floor or an occupied cell. Cells are processed in table order, so a
    /// cell placed earlier in the same landing blocks the ones after it.
    fn land_dissolving(
        &self,
        board: &mut TetrisBoard,
        offsets: &[(i8, i8)],
        cols: &[usize],
        anchor: i32,
        kind: PieceKind,
    ) {
        for (i, &(dr, _)) in offsets.iter().enumerate() {
            let col = cols[i];
            let mut row = (anchor + dr as i32) as usize;
            board.set(row, col, kind);
            while row + 1 < BOARD_HEIGHT && !board.is_occupied(row + 1, col) {
                row += 1;
                board.set(row, col, kind);
            }
        }
    }

    /// Pick the best placement for a piece, or `None` when no legal
    /// placement exists (game over upstream).
    ///
    /// The placement with the strictly greatest score wins; the first one
    /// found in scan order keeps ties.
    pub fn suggest_best_move(&self, board: &TetrisBoard, kind: PieceKind) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        let mut best_score = i32::MIN;

        for placement in self.all_placements(board, kind) {
            let score = self.evaluate(&placement.board, placement.lines_cleared);
            if score > best_score {
                best_score = score;
                best = Some(placement);
            }
        }

        best
    }
}

impl Default for TetrisAi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_on_empty_board_rests_on_floor() {
        let ai = TetrisAi::new();
        let placement = ai
            .simulate_drop(&TetrisBoard::new(), PieceKind::O, 0, 4)
            .unwrap();
        // O occupies a 2x2 square on the bottom two rows
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 1, 4));
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 1, 5));
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 2, 4));
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 2, 5));
        assert_eq!(placement.board.occupied_count(), 4);
    }

    #[test]
    fn test_lateral_pre_check_rejects_out_of_bounds() {
        let ai = TetrisAi::new();
        // O rotation 0 extends one column right of the anchor
        assert!(
            ai.simulate_drop(&TetrisBoard::new(), PieceKind::O, 0, BOARD_WIDTH - 1)
                .is_none()
        );
        // I rotation 1 extends two columns right and one left
        assert!(
            ai.simulate_drop(&TetrisBoard::new(), PieceKind::I, 1, 0)
                .is_none()
        );
    }

    #[test]
    fn test_no_placement_on_full_board() {
        let mut board = TetrisBoard::new();
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                if col != 0 {
                    board.set(row, col, PieceKind::O);
                }
            }
        }
        // Only column 0 is free; a 2-wide O cannot fit anywhere
        let ai = TetrisAi::new();
        assert!(ai.suggest_best_move(&board, PieceKind::O).is_none());
    }

    #[test]
    fn test_piece_rests_on_stack() {
        // Bottom row occupied except column 0 so the row never clears
        let mut board = TetrisBoard::new();
        for col in 1..BOARD_WIDTH {
            board.set(BOARD_HEIGHT - 1, col, PieceKind::L);
        }

        let ai = TetrisAi::new();
        let placement = ai.simulate_drop(&board, PieceKind::O, 0, 4).unwrap();
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 2, 4));
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 3, 4));
    }

    #[test]
    fn test_line_clear_counted() {
        let mut board = TetrisBoard::new();
        // Bottom row filled except columns 4 and 5
        for col in 0..BOARD_WIDTH {
            if col != 4 && col != 5 {
                board.set(BOARD_HEIGHT - 1, col, PieceKind::L);
            }
        }

        let ai = TetrisAi::new();
        let placement = ai.simulate_drop(&board, PieceKind::O, 0, 4).unwrap();
        assert_eq!(placement.lines_cleared, 1);
        // The O's top half remains after the clear shifted it down
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 1, 4));
        assert!(placement.board.is_occupied(BOARD_HEIGHT - 1, 5));
        assert_eq!(placement.board.occupied_count(), 2);
    }

    #[test]
    fn test_dissolve_fills_column_gaps() {
        // A 3-high pillar under the T's left cell: rigid landing leaves air
        // under the overhanging cells, dissolving fills straight down.
        let mut board = TetrisBoard::new();
        for row in (BOARD_HEIGHT - 3)..BOARD_HEIGHT {
            board.set(row, 3, PieceKind::L);
        }

        let rigid = TetrisAi::with_magic_t(false);
        let dissolving = TetrisAi::with_magic_t(true);

        let rigid_result = rigid.simulate_drop(&board, PieceKind::T, 0, 4).unwrap();
        let dissolved_result = dissolving.simulate_drop(&board, PieceKind::T, 0, 4).unwrap();

        assert_ne!(
            rigid_result.board, dissolved_result.board,
            "dissolve must change the landing on an uneven surface"
        );
        // Dissolved cells sand down: more cells than the rigid 5 when the
        // path below the landing row is open
        assert!(dissolved_result.board.occupied_count() >= rigid_result.board.occupied_count());
    }

    #[test]
    fn test_dissolve_only_applies_to_t() {
        let mut board = TetrisBoard::new();
        for row in (BOARD_HEIGHT - 3)..BOARD_HEIGHT {
            board.set(row, 3, PieceKind::L);
        }

        let rigid = TetrisAi::with_magic_t(false);
        let magic = TetrisAi::with_magic_t(true);
        let a = rigid.simulate_drop(&board, PieceKind::S, 0, 4).unwrap();
        let b = magic.simulate_drop(&board, PieceKind::S, 0, 4).unwrap();
        assert_eq!(a.board, b.board, "non-T pieces always land rigidly");
    }

    #[test]
    fn test_suggest_best_move_prefers_flat_placement() {
        let ai = TetrisAi::new();
        let placement = ai
            .suggest_best_move(&TetrisBoard::new(), PieceKind::I)
            .unwrap();
        // Horizontal I (rotation 1) keeps max height at 1; vertical I
        // would stand 4 tall and score worse
        assert_eq!(placement.rotation, 1);
    }

    #[test]
    fn test_toggle_magic_t() {
        let mut ai = TetrisAi::new();
        assert!(ai.magic_t_enabled());
        assert!(!ai.toggle_magic_t());
        assert!(ai.toggle_magic_t());
    }
}
