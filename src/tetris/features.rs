//! Board feature extraction for placement scoring

use super::board::{BOARD_HEIGHT, BOARD_WIDTH, TetrisBoard};

/// Aggregate features of a settled board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFeatures {
    /// Empty cells with an occupied cell somewhere above in the same column
    pub holes: u32,
    /// Sum of absolute height differences between adjacent columns
    pub bumpiness: u32,
    /// Height deficits of interior columns that are local minima relative
    /// to both neighbors, both sides summed. Edge columns are never wells,
    /// matching the original.
    pub wells: u32,
    /// Tallest column height
    pub max_height: u32,
}

/// Height of each column: 20 minus the topmost occupied row, 0 when empty
pub fn column_heights(board: &TetrisBoard) -> [u32; BOARD_WIDTH] {
    let mut heights = [0u32; BOARD_WIDTH];
    for (col, height) in heights.iter_mut().enumerate() {
        for row in 0..BOARD_HEIGHT {
            if board.is_occupied(row, col) {
                *height = (BOARD_HEIGHT - row) as u32;
                break;
            }
        }
    }
    heights
}

/// Extract all scoring features from a board
pub fn extract(board: &TetrisBoard) -> BoardFeatures {
    let heights = column_heights(board);

    let mut holes = 0;
    for col in 0..BOARD_WIDTH {
        let mut found_block = false;
        for row in 0..BOARD_HEIGHT {
            if board.is_occupied(row, col) {
                found_block = true;
            } else if found_block {
                holes += 1;
            }
        }
    }

    let mut bumpiness = 0;
    for i in 0..BOARD_WIDTH - 1 {
        bumpiness += heights[i].abs_diff(heights[i + 1]);
    }

    let mut wells = 0;
    for col in 1..BOARD_WIDTH - 1 {
        if heights[col] < heights[col - 1] && heights[col] < heights[col + 1] {
            wells += heights[col - 1] - heights[col];
            wells += heights[col + 1] - heights[col];
        }
    }

    BoardFeatures {
        holes,
        bumpiness,
        wells,
        max_height: heights.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetris::piece::PieceKind;

    fn fill_column(board: &mut TetrisBoard, col: usize, height: usize) {
        for row in (BOARD_HEIGHT - height)..BOARD_HEIGHT {
            board.set(row, col, PieceKind::O);
        }
    }

    #[test]
    fn test_empty_board_features() {
        let features = extract(&TetrisBoard::new());
        assert_eq!(
            features,
            BoardFeatures {
                holes: 0,
                bumpiness: 0,
                wells: 0,
                max_height: 0,
            }
        );
    }

    #[test]
    fn test_hole_counting() {
        let mut board = TetrisBoard::new();
        // Column 3: occupied at the top of a 3-high stack, gaps underneath
        board.set(BOARD_HEIGHT - 3, 3, PieceKind::L);
        let features = extract(&board);
        assert_eq!(features.holes, 2);
        assert_eq!(features.max_height, 3);
    }

    #[test]
    fn test_bumpiness() {
        let mut board = TetrisBoard::new();
        fill_column(&mut board, 0, 3);
        fill_column(&mut board, 1, 1);
        // Heights: [3, 1, 0, 0, ...] -> |3-1| + |1-0| = 3
        assert_eq!(extract(&board).bumpiness, 3);
    }

    #[test]
    fn test_well_depth_sums_both_sides() {
        let mut board = TetrisBoard::new();
        fill_column(&mut board, 1, 4);
        fill_column(&mut board, 3, 3);
        // Column 2 is a local minimum: (4-0) + (3-0) = 7
        assert_eq!(extract(&board).wells, 7);
    }

    #[test]
    fn test_edge_columns_are_not_wells() {
        let mut board = TetrisBoard::new();
        fill_column(&mut board, 1, 5);
        // Column 0 is lower than column 1 but has no left neighbor
        let features = extract(&board);
        assert_eq!(features.wells, 0);
    }
}
