//! Integration tests - full game scenarios driven through `tick`

use blocktris::core::{
    level_for_score, line_clear_points, Board, GameController, PieceSource, RenderState,
};
use blocktris::types::{
    Direction, EdgeEvent, EdgeEvents, GameConfig, HeldDirections, Rgb, RunState, ShapeKind,
    DEFAULT_PALETTE,
};

const GRAY: Rgb = Rgb::new(90, 90, 90);

fn idle() -> HeldDirections {
    HeldDirections::empty()
}

fn no_edges() -> EdgeEvents {
    EdgeEvents::none()
}

fn o_source() -> PieceSource {
    PieceSource::cycle(&[ShapeKind::O], &DEFAULT_PALETTE)
}

#[test]
fn test_row_scoring_scales_with_level() {
    assert_eq!(line_clear_points(1, 1), 10);
    assert_eq!(line_clear_points(2, 3), 60);
    assert_eq!(line_clear_points(0, 5), 0);
}

#[test]
fn test_level_thresholds() {
    assert_eq!(level_for_score(0), 1);
    assert_eq!(level_for_score(99), 1);
    assert_eq!(level_for_score(100), 2);
    assert_eq!(level_for_score(250), 3);
}

#[test]
fn test_piece_falls_to_floor_then_locks_and_respawns() {
    let config = GameConfig::default();
    let mut game = GameController::with_source(config, o_source());

    // First tick anchors the gravity clock.
    let state = game.tick(0, idle(), no_edges());
    assert_eq!(state.active.as_ref().map(|a| a.cells[0]), Some((5, 0)));

    // Each tick just over the 1000ms interval drops one row.
    for k in 1..=18u64 {
        game.tick(1001 * k, idle(), no_edges());
        assert_eq!(game.active().y, k as i16);
    }
    assert_eq!(game.pieces(), 0);
    assert_eq!(game.board().filled_count(), 0);

    // The bottom row is 19, so the next step down collides and locks.
    let state = game.tick(1001 * 19, idle(), no_edges());
    assert_eq!(game.pieces(), 1);
    assert_eq!(state.state, RunState::Running);
    for (x, y) in [(5, 18), (6, 18), (5, 19), (6, 19)] {
        assert_eq!(state.cell(x, y), Some(DEFAULT_PALETTE[0]));
    }
    assert_eq!(game.board().filled_count(), 4);

    // Fresh piece at top-center
    assert_eq!((game.active().x, game.active().y), (5, 0));
}

#[test]
fn test_gravity_not_due_at_exact_interval() {
    let mut game = GameController::with_source(GameConfig::default(), o_source());
    game.tick(0, idle(), no_edges());
    game.tick(1000, idle(), no_edges());
    assert_eq!(game.active().y, 0);
    game.tick(1001, idle(), no_edges());
    assert_eq!(game.active().y, 1);
}

#[test]
fn test_blocked_spawn_is_game_over_and_freezes_grid() {
    let config = GameConfig::default();
    let mut board = Board::from_config(&config);
    for x in 0..config.cols as i16 {
        board.set(x, 0, Some(GRAY));
    }

    let mut game = GameController::with_board(config, board, o_source());
    let first = game.tick(0, idle(), no_edges());
    assert_eq!(first.state, RunState::GameOver);
    assert!(first.game_over());

    let everything: HeldDirections = Direction::ALL.into_iter().collect();
    let edges: EdgeEvents = [EdgeEvent::Pause].into_iter().collect();
    for now in [16, 5_000, 60_000] {
        let later = game.tick(now, everything, edges);
        assert_eq!(later.state, RunState::GameOver);
        assert_eq!(later.grid, first.grid);
        assert_eq!(later.active, first.active);
    }
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = GameController::with_source(GameConfig::default(), o_source());
    let mut state = RenderState::default();
    let mut now = 0;
    game.tick_into(now, idle(), no_edges(), &mut state);

    // O pieces stack in one column pair; ten of them fill all 20 rows.
    while state.state == RunState::Running {
        now += 1001;
        game.tick_into(now, idle(), no_edges(), &mut state);
        assert!(now < 1001 * 400, "game never ended");
    }

    assert_eq!(state.state, RunState::GameOver);
    assert_eq!(game.pieces(), 10);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_clearing_rows_updates_score_lines_and_level() {
    let config = GameConfig::default();
    // Bottom 4 rows full except where two stacked O pieces land.
    let mut game = GameController::with_board(config, shaft_board(&config, 16), o_source());
    let mut now = 0;
    game.tick(now, idle(), no_edges());
    while game.pieces() < 2 {
        now += 1001;
        game.tick(now, idle(), no_edges());
    }

    // First O clears rows 18-19 at level 1 (+20); the second clears the rest (+20).
    assert_eq!(game.lines(), 4);
    assert_eq!(game.score(), 40);
    assert_eq!(game.level(), 1);
    assert_eq!(game.board().filled_count(), 0);
}

/// Board whose rows `top..rows` are full except for the two columns an O
/// piece spawns over, so every locked O clears exactly two rows.
fn shaft_board(config: &GameConfig, top: i16) -> Board {
    let mut board = Board::from_config(config);
    for y in top..config.rows as i16 {
        for x in 0..config.cols as i16 {
            if x != 5 && x != 6 {
                board.set(x, y, Some(GRAY));
            }
        }
    }
    board
}

/// Tick until the active piece locks; returns the time of the locking tick.
fn drop_until_lock(game: &mut GameController, mut now: u64) -> u64 {
    let down: HeldDirections = [Direction::Down].into_iter().collect();
    let pieces = game.pieces();
    while game.pieces() == pieces {
        now += 1001;
        game.tick(now, down, no_edges());
        assert_eq!(game.state(), RunState::Running);
    }
    now
}

#[test]
fn test_level_up_shortens_gravity() {
    let config = GameConfig::default();
    let mut game = GameController::with_board(config, shaft_board(&config, 2), o_source());
    assert_eq!(game.gravity_interval_ms(), 1000);

    let mut now = 0;
    game.tick(now, idle(), no_edges());
    while game.score() < 100 {
        now = drop_until_lock(&mut game, now);
    }

    // Five two-row clears at level 1
    assert_eq!(game.pieces(), 5);
    assert_eq!(game.score(), 100);
    assert_eq!(game.level(), 2);
    assert_eq!(game.gravity_interval_ms(), 500);
}

#[test]
fn test_two_row_clear_scores_at_current_level() {
    let config = GameConfig::default();
    let mut game = GameController::with_board(config, shaft_board(&config, 2), o_source());

    let mut now = 0;
    game.tick(now, idle(), no_edges());

    // Nine pieces clear all eighteen rows; each scores with the level it locked at.
    let mut levels = Vec::new();
    for _ in 0..9 {
        let level = game.level();
        let score = game.score();
        let lines = game.lines();

        now = drop_until_lock(&mut game, now);

        assert_eq!(game.lines() - lines, 2);
        assert_eq!(game.score() - score, 20 * level);
        levels.push(level);
    }

    assert_eq!(levels, vec![1, 1, 1, 1, 1, 2, 2, 2, 3]);
    // The last lock: two rows at level 3
    assert_eq!(game.score(), 5 * 20 + 3 * 40 + 60);
    assert_eq!(game.score(), 280);
    assert_eq!(game.level(), 3);
    assert_eq!(game.gravity_interval_ms(), 333);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut game = GameController::new(GameConfig::default(), seed);
        let mut kinds = Vec::new();
        let mut now = 0;
        let down: HeldDirections = [Direction::Down].into_iter().collect();
        while kinds.len() < 8 && game.state() == RunState::Running {
            kinds.push(game.active().kind);
            let pieces = game.pieces();
            while game.pieces() == pieces && game.state() == RunState::Running {
                now += 1001;
                game.tick(now, down, no_edges());
            }
        }
        kinds
    };

    assert_eq!(run(42), run(42));
}
