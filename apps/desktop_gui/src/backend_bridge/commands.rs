//! Backend commands queued from UI to backend worker.

use shared::domain::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    Refresh,
    Activate { coord: Coord },
    Reset,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Refresh => "refresh",
            BackendCommand::Activate { .. } => "activate",
            BackendCommand::Reset => "reset",
        }
    }
}
