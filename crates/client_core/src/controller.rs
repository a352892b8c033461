//! The view controller: owns the displayed state, drives requests, publishes view updates.

use std::sync::Arc;

use shared::{
    domain::Coord,
    protocol::{GameStateView, MoveRequest},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    api::{GameApi, HttpGameApi},
    error::ApiFailure,
    render::{render, BoardView, CellAction},
    status::{Severity, StatusLine, StatusMessage},
};

pub const FETCH_STATE_ERROR: &str = "Error fetching game state";
pub const RESET_GAME_ERROR: &str = "Error resetting game";
const MOVE_ERROR_PREFIX: &str = "Error making move";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub view: Option<BoardView>,
    pub message: Option<StatusMessage>,
}

#[derive(Debug, Clone)]
pub enum ViewEvent {
    Updated(ViewSnapshot),
}

#[derive(Default)]
struct ViewState {
    current: Option<GameStateView>,
    view: Option<BoardView>,
    status: StatusLine,
}

impl ViewState {
    fn apply(&mut self, state: GameStateView) {
        let view = render(&state);
        self.status.hide();
        if let Some(outcome) = state.outcome() {
            self.status.show(outcome.announcement(), Severity::Info);
        }
        self.view = Some(view);
        self.current = Some(state);
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            view: self.view.clone(),
            message: self.status.current().cloned(),
        }
    }
}

pub struct ViewController {
    api: Arc<dyn GameApi>,
    inner: Mutex<ViewState>,
    events: broadcast::Sender<ViewEvent>,
}

impl ViewController {
    pub fn new(api: Arc<dyn GameApi>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            api,
            inner: Mutex::new(ViewState::default()),
            events,
        })
    }

    pub fn connect(server_url: Url) -> Arc<Self> {
        Self::new(Arc::new(HttpGameApi::new(server_url)))
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.inner.lock().await.snapshot()
    }

    /// The state behind the current render, if any request has succeeded yet.
    pub async fn current_state(&self) -> Option<GameStateView> {
        self.inner.lock().await.current.clone()
    }

    pub async fn fetch_state(&self) {
        match self.api.fetch_state().await {
            Ok(state) => self.apply_state(state, false).await,
            Err(err) => {
                warn!(error = %err, "failed to fetch game state");
                self.show_message(FETCH_STATE_ERROR, Severity::Error).await;
            }
        }
    }

    /// Sends the move as-is; the server decides whether it is legal.
    pub async fn submit_move(&self, row: u8, col: u8) {
        match self.api.submit_move(MoveRequest { row, col }).await {
            Ok(state) => self.apply_state(state, false).await,
            Err(err) => {
                warn!(row, col, error = %err, "move rejected");
                self.show_message(move_failure_message(&err), Severity::Error)
                    .await;
            }
        }
    }

    /// Runs whatever action the currently rendered cell at `coord` is bound to.
    /// Returns `false` without touching the network when the cell is inert.
    pub async fn activate(&self, coord: Coord) -> bool {
        let action = {
            let guard = self.inner.lock().await;
            guard.view.as_ref().and_then(|view| view.action_at(coord))
        };

        match action {
            Some(CellAction::SubmitMove(target)) => {
                self.submit_move(target.row, target.col).await;
                true
            }
            None => {
                debug!(row = coord.row, col = coord.col, "ignoring inert cell");
                false
            }
        }
    }

    pub async fn reset_game(&self) {
        match self.api.new_game().await {
            Ok(state) => self.apply_state(state, true).await,
            Err(err) => {
                warn!(error = %err, "failed to start a new game");
                self.show_message(RESET_GAME_ERROR, Severity::Error).await;
            }
        }
    }

    pub async fn show_message(&self, text: impl Into<String>, severity: Severity) {
        let mut guard = self.inner.lock().await;
        guard.status.show(text, severity);
        self.publish(&guard);
    }

    pub async fn hide_message(&self) {
        let mut guard = self.inner.lock().await;
        guard.status.hide();
        self.publish(&guard);
    }

    async fn apply_state(&self, state: GameStateView, clear_message: bool) {
        info!(
            turn = state.current_turn.label(),
            black = state.scores.black,
            white = state.scores.white,
            game_over = state.game_over,
            "applying game state"
        );
        let mut guard = self.inner.lock().await;
        guard.apply(state);
        if clear_message {
            guard.status.hide();
        }
        self.publish(&guard);
    }

    /// Called with the state lock held so subscribers see updates in the order they were applied.
    fn publish(&self, state: &ViewState) {
        // No subscribers is fine: snapshot() still serves the latest view.
        let _ = self.events.send(ViewEvent::Updated(state.snapshot()));
    }
}

fn move_failure_message(err: &ApiFailure) -> String {
    match err {
        ApiFailure::Status { message, .. } => message.clone(),
        other => format!("{MOVE_ERROR_PREFIX}: {other}"),
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
