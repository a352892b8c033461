//! Pure projection of a [`GameStateView`] into a target-independent view description.

use std::{collections::HashSet, fmt};

use shared::{
    domain::{Coord, Disc, Winner, BOARD_SIZE},
    protocol::GameStateView,
};

/// What activating a cell does. Only legal, empty cells carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    SubmitMove(Coord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    pub disc: Option<Disc>,
    pub action: Option<CellAction>,
}

impl CellView {
    pub fn is_clickable(&self) -> bool {
        self.action.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreView {
    pub black: u32,
    pub white: u32,
    pub black_active: bool,
    pub white_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    CurrentTurn(Disc),
    GameOver(Winner),
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::CurrentTurn(disc) => write!(f, "Current Turn: {}", disc.label()),
            Banner::GameOver(winner) => write!(f, "GAME OVER: {}", winner.announcement()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: Vec<CellView>,
    pub scores: ScoreView,
    pub banner: Banner,
}

impl BoardView {
    /// All 64 cells in row-major order.
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(BOARD_SIZE)
    }

    pub fn cell(&self, coord: Coord) -> &CellView {
        &self.cells[coord.index()]
    }

    /// `None` for inert cells and for coordinates off the board.
    pub fn action_at(&self, coord: Coord) -> Option<CellAction> {
        if !coord.is_on_board() {
            return None;
        }
        self.cell(coord).action
    }

    pub fn clickable(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_clickable())
            .map(|cell| cell.coord)
    }
}

/// Rebuilds the whole view from `state`; nothing is carried over from earlier renders.
pub fn render(state: &GameStateView) -> BoardView {
    let outcome = state.outcome();
    let legal: HashSet<Coord> = if outcome.is_some() {
        HashSet::new()
    } else {
        state.valid_moves.iter().copied().collect()
    };

    let cells = Coord::all()
        .map(|coord| {
            let cell = state.cell(coord);
            let disc = cell.disc();
            let action = (cell.is_empty() && legal.contains(&coord))
                .then_some(CellAction::SubmitMove(coord));
            CellView {
                coord,
                disc,
                action,
            }
        })
        .collect();

    let (banner, active) = match outcome {
        Some(winner) => (Banner::GameOver(winner), None),
        None => (
            Banner::CurrentTurn(state.current_turn),
            Some(state.current_turn),
        ),
    };

    BoardView {
        cells,
        scores: ScoreView {
            black: state.scores.black,
            white: state.scores.white,
            black_active: active == Some(Disc::Black),
            white_active: active == Some(Disc::White),
        },
        banner,
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
