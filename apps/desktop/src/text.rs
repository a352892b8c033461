//! Plain-text rendering target for [`ViewSnapshot`]s.

use std::fmt::Write as _;

use client_core::{CellView, Severity, ViewSnapshot};
use shared::domain::{Disc, BOARD_SIZE};

const NO_VIEW: &str = "No game state loaded yet.";

fn cell_glyph(cell: &CellView) -> char {
    match (cell.disc, cell.is_clickable()) {
        (Some(Disc::Black), _) => 'B',
        (Some(Disc::White), _) => 'W',
        (None, true) => '*',
        (None, false) => '.',
    }
}

fn active_marker(active: bool) -> &'static str {
    if active {
        "> "
    } else {
        "  "
    }
}

pub fn render_text(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();

    match &snapshot.view {
        Some(view) => {
            out.push_str("  ");
            let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
            out.push_str(&header.join(" "));
            out.push('\n');

            for (row, cells) in view.rows().enumerate() {
                let glyphs: Vec<String> = cells
                    .iter()
                    .map(|cell| cell_glyph(cell).to_string())
                    .collect();
                let _ = writeln!(out, "{row} {}", glyphs.join(" "));
            }

            let scores = &view.scores;
            let _ = writeln!(
                out,
                "{}Black: {}   {}White: {}",
                active_marker(scores.black_active),
                scores.black,
                active_marker(scores.white_active),
                scores.white
            );
            let _ = writeln!(out, "{}", view.banner);
        }
        None => {
            out.push_str(NO_VIEW);
            out.push('\n');
        }
    }

    if let Some(message) = &snapshot.message {
        match message.severity {
            Severity::Error => {
                let _ = writeln!(out, "error: {}", message.text);
            }
            Severity::Info => {
                let _ = writeln!(out, "{}", message.text);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{render, StatusMessage};
    use shared::{domain::Winner, protocol::GameStateView};

    #[test]
    fn renders_opening_board_with_legal_markers() {
        let snapshot = ViewSnapshot {
            view: Some(render(&GameStateView::opening())),
            message: None,
        };

        let expected = "\
  0 1 2 3 4 5 6 7
0 . . . . . . . .
1 . . . . . . . .
2 . . . * . . . .
3 . . * W B . . .
4 . . . B W * . .
5 . . . . * . . .
6 . . . . . . . .
7 . . . . . . . .
> Black: 2     White: 2
Current Turn: Black
";
        assert_eq!(render_text(&snapshot), expected);
    }

    #[test]
    fn error_message_is_prefixed() {
        let snapshot = ViewSnapshot {
            view: None,
            message: Some(StatusMessage::error("Error fetching game state")),
        };
        assert_eq!(
            render_text(&snapshot),
            "No game state loaded yet.\nerror: Error fetching game state\n"
        );
    }

    #[test]
    fn finished_game_has_no_markers_or_highlights() {
        let mut state = GameStateView::opening();
        state.game_over = true;
        state.winner = Some(Winner::White);
        let snapshot = ViewSnapshot {
            view: Some(render(&state)),
            message: Some(StatusMessage::info("White Wins!")),
        };

        let text = render_text(&snapshot);
        assert!(!text.contains('*'));
        assert!(!text.contains('>'));
        assert!(text.contains("  Black: 2     White: 2\n"));
        assert!(text.contains("GAME OVER: White Wins!\n"));
        assert!(text.ends_with("White Wins!\n"));
    }
}
