use serde::{Deserialize, Serialize};

use crate::error::WireError;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Disc {
    Black,
    White,
}

impl Disc {
    pub fn label(self) -> &'static str {
        match self {
            Disc::Black => "Black",
            Disc::White => "White",
        }
    }
}

impl TryFrom<u8> for Disc {
    type Error = WireError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Disc::Black),
            2 => Ok(Disc::White),
            other => Err(WireError::InvalidDisc(other)),
        }
    }
}

impl From<Disc> for u8 {
    fn from(value: Disc) -> Self {
        match value {
            Disc::Black => 1,
            Disc::White => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Disc),
}

impl Cell {
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(disc) => Some(disc),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl TryFrom<u8> for Cell {
    type Error = WireError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code == 0 {
            return Ok(Cell::Empty);
        }
        Disc::try_from(code)
            .map(Cell::Occupied)
            .map_err(|_| WireError::InvalidCell(code))
    }
}

impl From<Cell> for u8 {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => 0,
            Cell::Occupied(disc) => disc.into(),
        }
    }
}

/// Outcome of a finished game. Only meaningful once the server reports `game_over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    pub fn announcement(self) -> &'static str {
        match self {
            Winner::Black => "Black Wins!",
            Winner::White => "White Wins!",
            Winner::Tie => "It's a Tie!",
        }
    }
}

impl TryFrom<u8> for Winner {
    type Error = WireError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Winner::Tie),
            1 => Ok(Winner::Black),
            2 => Ok(Winner::White),
            other => Err(WireError::InvalidWinner(other)),
        }
    }
}

impl From<Winner> for u8 {
    fn from(value: Winner) -> Self {
        match value {
            Winner::Tie => 0,
            Winner::Black => 1,
            Winner::White => 2,
        }
    }
}

/// Zero-based board coordinate, encoded on the wire as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Result<Self, WireError> {
        let coord = Self { row, col };
        if !coord.is_on_board() {
            return Err(WireError::CoordOutOfRange { row, col });
        }
        Ok(coord)
    }

    /// Every coordinate of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }

    pub fn is_on_board(self) -> bool {
        usize::from(self.row) < BOARD_SIZE && usize::from(self.col) < BOARD_SIZE
    }

    pub fn index(self) -> usize {
        usize::from(self.row) * BOARD_SIZE + usize::from(self.col)
    }
}

impl TryFrom<[u8; 2]> for Coord {
    type Error = WireError;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for [u8; 2] {
    fn from(value: Coord) -> Self {
        [value.row, value.col]
    }
}
