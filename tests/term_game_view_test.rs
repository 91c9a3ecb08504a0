//! Rendering tests - controller snapshots through GameView and the diff renderer

use blocktris::core::{GameController, PieceSource};
use blocktris::input::HeldKeys;
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocktris::types::{
    EdgeEvent, EdgeEvents, GameConfig, HeldDirections, ShapeKind, DEFAULT_PALETTE,
};

use crossterm::event::{KeyCode, KeyEvent};

fn o_game() -> GameController {
    GameController::with_source(
        GameConfig::default(),
        PieceSource::cycle(&[ShapeKind::O], &DEFAULT_PALETTE),
    )
}

#[test]
fn test_active_piece_is_drawn_in_well() {
    let game = o_game();
    let view = GameView::default();
    let state = game.snapshot();
    let (w, h) = view.frame_size(state.rows, state.cols);
    let fb = view.render(&state, Viewport::new(w, h));

    // O spawns at column 5, row 0; each board cell is 2 terminal columns wide.
    for (cx, cy) in [(5u16, 0u16), (6, 0), (5, 1), (6, 1)] {
        let cell = fb.get(1 + cx * 2, 1 + cy).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, DEFAULT_PALETTE[0]);
    }
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn test_side_panel_shows_score() {
    let game = o_game();
    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(60, 24));
    let text = fb.to_text();
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("PIECE"));
}

#[test]
fn test_overlays_follow_run_state() {
    let mut game = o_game();
    let view = GameView::default();
    let viewport = Viewport::new(60, 24);

    let pause: EdgeEvents = [EdgeEvent::Pause].into_iter().collect();
    let paused = game.tick(0, HeldDirections::empty(), pause);
    assert!(view.render(&paused, viewport).to_text().contains("PAUSED"));

    let quit: EdgeEvents = [EdgeEvent::Quit].into_iter().collect();
    let over = game.tick(16, HeldDirections::empty(), quit);
    let text = view.render(&over, viewport).to_text();
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn test_keys_to_frame_pipeline() {
    let mut game = o_game();
    let mut keys = HeldKeys::new();
    let view = GameView::default();
    let viewport = Viewport::new(40, 24);
    let mut fb = FrameBuffer::new(0, 0);
    let mut renderer = TerminalRenderer::with_writer(Vec::new());

    let x0 = game.active().x;
    keys.handle_key(KeyEvent::from(KeyCode::Left), 0);
    let state = game.tick(0, keys.held(0), keys.take_edges());
    assert_eq!(game.active().x, x0 - 1);

    view.render_into(&state, viewport, &mut fb);
    renderer.present(&fb).unwrap();
    let first = renderer.writer().len();

    // Nothing changed: the second frame adds no cell output.
    let state = game.tick(1, HeldDirections::empty(), EdgeEvents::none());
    view.render_into(&state, viewport, &mut fb);
    renderer.present(&fb).unwrap();
    assert_eq!(renderer.writer().len(), first);
}
