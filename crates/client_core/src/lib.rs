//! Client side of the Othello game: HTTP transport, view rendering and the view controller.
//!
//! The server owns every game rule. This crate only fetches state, renders it into a
//! [`BoardView`], and forwards activations of legal cells as move requests.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod status;

pub use api::{extract_error_message, GameApi, HttpGameApi};
pub use config::{load_settings, parse_server_url, ClientSettings};
pub use controller::{ViewController, ViewEvent, ViewSnapshot};
pub use error::ApiFailure;
pub use render::{render, Banner, BoardView, CellAction, CellView, ScoreView};
pub use status::{Severity, StatusLine, StatusMessage};
