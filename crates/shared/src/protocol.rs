use serde::{Deserialize, Serialize};

use crate::domain::{Cell, Coord, Disc, Winner, BOARD_SIZE};

pub type Board = [[Cell; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub black: u32,
    pub white: u32,
}

/// Authoritative game state as returned by every game endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub board: Board,
    pub valid_moves: Vec<Coord>,
    pub scores: Scores,
    pub current_turn: Disc,
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<Winner>,
}

impl GameStateView {
    /// The position served for a freshly started game: four center discs, black to move.
    pub fn opening() -> Self {
        let mut board = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        board[3][3] = Cell::Occupied(Disc::White);
        board[4][4] = Cell::Occupied(Disc::White);
        board[3][4] = Cell::Occupied(Disc::Black);
        board[4][3] = Cell::Occupied(Disc::Black);
        Self {
            board,
            valid_moves: vec![
                Coord { row: 2, col: 3 },
                Coord { row: 3, col: 2 },
                Coord { row: 4, col: 5 },
                Coord { row: 5, col: 4 },
            ],
            scores: Scores { black: 2, white: 2 },
            current_turn: Disc::Black,
            game_over: false,
            winner: None,
        }
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.board[usize::from(coord.row)][usize::from(coord.col)]
    }

    /// Outcome to announce, if the game has finished. A finished game without a
    /// reported winner is announced as a tie.
    pub fn outcome(&self) -> Option<Winner> {
        self.game_over.then(|| self.winner.unwrap_or(Winner::Tie))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: u8,
    pub col: u8,
}

impl From<Coord> for MoveRequest {
    fn from(value: Coord) -> Self {
        Self {
            row: value.row,
            col: value.col,
        }
    }
}

/// Body of a rejected request. The server may omit `detail` entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
