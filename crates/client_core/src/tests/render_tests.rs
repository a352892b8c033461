use super::*;
use shared::{
    domain::Cell,
    protocol::{GameStateView, Scores},
};

fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col).expect("coord")
}

fn empty_board_state() -> GameStateView {
    GameStateView {
        board: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        valid_moves: vec![coord(2, 3), coord(3, 2)],
        scores: Scores { black: 2, white: 2 },
        current_turn: Disc::Black,
        game_over: false,
        winner: None,
    }
}

fn finished(winner: Option<Winner>) -> GameStateView {
    let mut state = GameStateView::opening();
    state.game_over = true;
    state.winner = winner;
    state.scores = Scores {
        black: 32,
        white: 32,
    };
    state
}

#[test]
fn rendering_same_state_twice_is_identical() {
    let state = GameStateView::opening();
    assert_eq!(render(&state), render(&state));

    let over = finished(Some(Winner::White));
    assert_eq!(render(&over), render(&over));
}

#[test]
fn opening_scenario_marks_only_listed_cells_clickable() {
    let view = render(&empty_board_state());

    let clickable: Vec<Coord> = view.clickable().collect();
    assert_eq!(clickable, vec![coord(2, 3), coord(3, 2)]);
    assert_eq!(
        view.action_at(coord(2, 3)),
        Some(CellAction::SubmitMove(coord(2, 3)))
    );
    assert_eq!(view.action_at(coord(0, 0)), None);
    assert_eq!(view.banner.to_string(), "Current Turn: Black");
}

#[test]
fn disc_rendered_iff_cell_is_occupied() {
    let state = GameStateView::opening();
    let view = render(&state);

    assert_eq!(view.cells().len(), BOARD_SIZE * BOARD_SIZE);
    for cell in view.cells() {
        assert_eq!(cell.disc, state.cell(cell.coord).disc());
    }
    assert_eq!(view.cell(coord(3, 3)).disc, Some(Disc::White));
    assert_eq!(view.cell(coord(3, 4)).disc, Some(Disc::Black));
}

#[test]
fn occupied_cell_listed_as_valid_move_stays_inert() {
    let mut state = GameStateView::opening();
    state.valid_moves.push(coord(3, 3));
    let view = render(&state);

    assert_eq!(view.cell(coord(3, 3)).disc, Some(Disc::White));
    assert!(!view.cell(coord(3, 3)).is_clickable());
}

#[test]
fn clickable_iff_empty_and_legal() {
    let state = GameStateView::opening();
    let view = render(&state);

    for cell in view.cells() {
        let expected =
            state.cell(cell.coord).is_empty() && state.valid_moves.contains(&cell.coord);
        assert_eq!(cell.is_clickable(), expected, "cell {:?}", cell.coord);
    }
}

#[test]
fn nothing_is_clickable_once_game_is_over() {
    let view = render(&finished(Some(Winner::Black)));
    assert_eq!(view.clickable().count(), 0);
}

#[test]
fn scores_are_copied_verbatim() {
    let mut state = GameStateView::opening();
    // Deliberately inconsistent with the board; the view must not recount.
    state.scores = Scores {
        black: 17,
        white: 40,
    };
    let view = render(&state);
    assert_eq!(view.scores.black, 17);
    assert_eq!(view.scores.white, 40);
}

#[test]
fn active_card_follows_current_turn() {
    let mut state = GameStateView::opening();
    let view = render(&state);
    assert!(view.scores.black_active);
    assert!(!view.scores.white_active);

    state.current_turn = Disc::White;
    let view = render(&state);
    assert!(!view.scores.black_active);
    assert!(view.scores.white_active);
    assert_eq!(view.banner.to_string(), "Current Turn: White");
}

#[test]
fn tie_banner_clears_both_highlights() {
    let view = render(&finished(Some(Winner::Tie)));
    assert_eq!(view.banner, Banner::GameOver(Winner::Tie));
    assert!(view.banner.to_string().contains("It's a Tie!"));
    assert!(!view.scores.black_active);
    assert!(!view.scores.white_active);
}

#[test]
fn decisive_banners_name_the_winner() {
    assert_eq!(
        render(&finished(Some(Winner::Black))).banner.to_string(),
        "GAME OVER: Black Wins!"
    );
    assert_eq!(
        render(&finished(Some(Winner::White))).banner.to_string(),
        "GAME OVER: White Wins!"
    );
    assert_eq!(
        render(&finished(None)).banner.to_string(),
        "GAME OVER: It's a Tie!"
    );
}

#[test]
fn rows_are_row_major() {
    let view = render(&GameStateView::opening());
    let rows: Vec<&[CellView]> = view.rows().collect();
    assert_eq!(rows.len(), BOARD_SIZE);
    assert_eq!(rows[4][3].coord, coord(4, 3));
    assert_eq!(rows[4][3].disc, Some(Disc::Black));
}

#[test]
fn off_board_coordinates_have_no_action() {
    let view = render(&GameStateView::opening());
    assert_eq!(view.action_at(Coord { row: 0, col: 11 }), None);
    assert_eq!(view.action_at(Coord { row: 8, col: 0 }), None);
}
