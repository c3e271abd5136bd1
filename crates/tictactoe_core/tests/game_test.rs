//! Whole-game scenarios for the state machine.

use tictactoe_core::{Game, Outcome, Player, Position, Square};

fn play(game: &mut Game, indices: &[usize]) {
    for &idx in indices {
        let pos = Position::from_index(idx).expect("index in range");
        game.apply_move(pos);
    }
}

#[test]
fn test_new_game_starts_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(Position::ALL.iter().all(|&pos| game.board().is_empty(pos)));
    assert_eq!(game.status_text(), "Next: X");
}

#[test]
fn test_move_places_mark_and_flips_turn() {
    let mut game = Game::new();
    game.apply_move(Position::Center);

    assert_eq!(
        game.board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.status_text(), "Next: O");

    // Every other cell is untouched.
    let touched = Position::ALL
        .iter()
        .filter(|&&pos| !game.board().is_empty(pos))
        .count();
    assert_eq!(touched, 1);
}

#[test]
fn test_move_on_occupied_square_is_noop() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft); // X
    let before = game.clone();

    // Same cell again: dropped, board and turn unchanged.
    game.apply_move(Position::TopLeft);
    assert_eq!(game, before);
    assert_eq!(
        game.board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_top_row_win_scenario() {
    // X:0, O:3, X:1, O:4, X:2 - X completes the top row.
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let outcome = game.outcome();
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(
        outcome.line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(game.status_text(), "Winner: X");
}

#[test]
fn test_move_after_win_is_noop() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]); // X wins
    let before = game.clone();

    game.apply_move(Position::BottomRight);
    assert_eq!(game, before);
}

#[test]
fn test_draw_scenario() {
    // X:0, O:1, X:2, O:4, X:3, O:5, X:7, O:6, X:8 - full board, no triple.
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.status_text(), "Draw");
    assert!(game.board().is_full());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]); // X wins

    game.reset();
    assert_eq!(game, Game::new());

    // Resetting an in-progress game works the same way.
    game.apply_move(Position::Center);
    game.reset();
    assert_eq!(game, Game::new());
}

#[test]
fn test_disabled_flags() {
    let mut game = Game::new();
    assert!(Position::ALL.iter().all(|&pos| !game.is_cell_disabled(pos)));

    game.apply_move(Position::Center);
    assert!(game.is_cell_disabled(Position::Center));
    assert!(!game.is_cell_disabled(Position::TopLeft));

    // Game over disables everything, including empty cells.
    game.reset();
    play(&mut game, &[0, 3, 1, 4, 2]); // X wins
    assert!(Position::ALL.iter().all(|&pos| game.is_cell_disabled(pos)));

    game.reset();
    assert!(Position::ALL.iter().all(|&pos| !game.is_cell_disabled(pos)));
}

#[test]
fn test_turn_does_not_advance_on_ignored_move() {
    let mut game = Game::new();
    game.apply_move(Position::Center); // X
    assert_eq!(game.to_move(), Player::O);

    game.apply_move(Position::Center); // ignored
    assert_eq!(game.to_move(), Player::O);

    game.apply_move(Position::TopLeft); // O
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_winning_line_accessor() {
    let mut game = Game::new();
    assert_eq!(game.winning_line(), None);

    // X takes the left column: X:0, O:1, X:3, O:2, X:6.
    play(&mut game, &[0, 1, 3, 2, 6]);
    assert_eq!(
        game.winning_line(),
        Some([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft
        ])
    );
}
