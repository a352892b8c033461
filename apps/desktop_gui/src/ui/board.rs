//! Board painter. Only cells bound to an action react to clicks.

use client_core::{BoardView, CellAction};
use egui::{vec2, CornerRadius, Pos2, Rect, Sense, Stroke, StrokeKind, Ui};
use shared::domain::{Coord, BOARD_SIZE};

use crate::ui::theme;

const MIN_BOARD_SIDE: f32 = 240.0;

fn cell_side(board: Rect) -> f32 {
    board.width() / BOARD_SIZE as f32
}

pub fn cell_rect(board: Rect, coord: Coord) -> Rect {
    let side = cell_side(board);
    let min = board.min + vec2(f32::from(coord.col) * side, f32::from(coord.row) * side);
    Rect::from_min_size(min, vec2(side, side))
}

/// Maps a pointer position inside the board to the cell under it.
pub fn cell_at(board: Rect, pos: Pos2) -> Option<Coord> {
    if !board.contains(pos) {
        return None;
    }
    let side = cell_side(board);
    let last = (BOARD_SIZE - 1) as f32;
    let col = ((pos.x - board.left()) / side).floor().clamp(0.0, last) as u8;
    let row = ((pos.y - board.top()) / side).floor().clamp(0.0, last) as u8;
    Coord::new(row, col).ok()
}

/// Paints `view` and returns the target of a click on a legal cell, if one happened this frame.
pub fn board_widget(ui: &mut Ui, view: &BoardView) -> Option<Coord> {
    let side = ui
        .available_width()
        .min(ui.available_height())
        .max(MIN_BOARD_SIDE);
    let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::click());
    let painter = ui.painter_at(rect);
    let hovered = response.hover_pos().and_then(|pos| cell_at(rect, pos));

    painter.rect_filled(rect, CornerRadius::same(4), theme::BOARD_GREEN);

    let radius = cell_side(rect) * 0.4;
    for cell in view.cells() {
        let bounds = cell_rect(rect, cell.coord);
        painter.rect_stroke(
            bounds,
            CornerRadius::ZERO,
            Stroke::new(1.0, theme::GRID_LINE),
            StrokeKind::Inside,
        );

        if let Some(disc) = cell.disc {
            painter.circle_filled(bounds.center(), radius, theme::disc_color(disc));
        } else if cell.is_clickable() {
            if hovered == Some(cell.coord) {
                painter.rect_filled(
                    bounds.shrink(1.0),
                    CornerRadius::ZERO,
                    theme::LEGAL_MARK.gamma_multiply(0.35),
                );
            }
            painter.circle_stroke(
                bounds.center(),
                radius * 0.35,
                Stroke::new(2.0, theme::LEGAL_MARK),
            );
        }
    }

    if !response.clicked() {
        return None;
    }
    let coord = cell_at(rect, response.interact_pointer_pos()?)?;
    match view.action_at(coord)? {
        CellAction::SubmitMove(target) => Some(target),
    }
}
