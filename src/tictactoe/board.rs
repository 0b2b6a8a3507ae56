//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` for efficiency since it's only 10 bytes
/// (9 bytes for cells + 1 byte for player enum). The player to move is
/// always derivable from the piece counts (X opens); it is stored so that
/// search code never has to re-count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters; whitespace is filtered
    /// out. The player to move is inferred from the piece counts (X opens).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The count of non-whitespace characters is not exactly 9
    /// - Any character is not a valid cell representation
    /// - The piece counts violate turn order (difference outside {0, 1})
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let to_move = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        Ok(BoardState { cells, to_move })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Make a move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for positions outside 0-8
    /// and [`crate::Error::InvalidMove`] for occupied cells. Selecting an
    /// occupied cell is a caller contract violation, not a search concern.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.empty_positions().is_empty()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
    }

    #[test]
    fn test_make_move() {
        let board = BoardState::new();

        let result = board.make_move(4);
        assert!(result.is_ok());
        let new_board = result.unwrap();
        assert_eq!(new_board.cells[4], Cell::X);
        assert_eq!(new_board.to_move, Player::O);

        // Move on occupied cell
        let result2 = new_board.make_move(4);
        assert!(result2.is_err());
        assert!(result2.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_legal_moves() {
        let mut board = BoardState::new();
        assert_eq!(board.legal_moves().len(), 9);

        board = board.make_move(0).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&0));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = BoardState::new();
        // X wins on top row
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(3).unwrap(); // O
        board = board.make_move(1).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(2).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let mut board = BoardState::new();
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(4).unwrap(); // X
        board = board.make_move(2).unwrap(); // O
        board = board.make_move(8).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = BoardState::new();
        // Classic draw game
        for pos in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            board = board.make_move(pos).unwrap();
        }

        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        // to_move is inferred from piece counts
        assert_eq!(board.to_move, Player::O);

        assert!(BoardState::from_string("XO").is_err());
        assert!(BoardState::from_string("XOZ......").is_err());
        assert!(BoardState::from_string("XXX......").is_err());
    }

    #[test]
    fn test_from_string_accepts_dash_for_empty() {
        let board = BoardState::from_string("X-O------").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::Empty);
        assert_eq!(board.cells[2], Cell::O);
        assert_eq!(board.to_move, Player::X);
    }

    #[test]
    fn test_from_string_rejects_oversized_input() {
        // A ten-character typo must error, not be silently truncated
        let err = BoardState::from_string("XOX.......").unwrap_err();
        match err {
            crate::Error::InvalidBoardLength { expected, got, .. } => {
                assert_eq!(expected, 9);
                assert_eq!(got, 10);
            }
            other => panic!("expected InvalidBoardLength, got {other}"),
        }
    }

    #[test]
    fn test_player_alternation() {
        let mut board = BoardState::new();
        assert_eq!(board.to_move, Player::X);

        board = board.make_move(0).unwrap();
        assert_eq!(board.to_move, Player::O);

        board = board.make_move(1).unwrap();
        assert_eq!(board.to_move, Player::X);
    }

    #[test]
    fn test_display() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }
}
