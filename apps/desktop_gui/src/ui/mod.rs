//! UI layer: app shell, board widget and colors.

pub mod app;
pub mod board;
pub mod theme;

pub use app::OthelloApp;
