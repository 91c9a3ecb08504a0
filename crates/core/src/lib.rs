//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state machine, and timing. It has
//! **no dependencies** on terminals, windows, or I/O, so it can be driven by any
//! frontend (or headless from tests and benches).
//!
//! # Module Structure
//!
//! - [`piece`]: shape templates and the falling piece (rotate / translate)
//! - [`board`]: the settled-block grid, collision test, commit, and line clear
//! - [`clock`]: held-key auto-repeat and gravity timing
//! - [`scoring`]: line-clear points, level, and gravity speed
//! - [`rng`]: seeded template/color selection
//! - [`controller`]: the RUNNING / PAUSED / GAME_OVER state machine
//! - [`snapshot`]: the per-frame state handed to renderers
//!
//! # Game Rules
//!
//! - Seven templates (I, T, L, J, O, S, Z), each spawned with a random palette color
//! - Rotation is clockwise only; a rotation that would collide is undone (no wall kicks)
//! - Soft drop moves down every frame it is held but never locks the piece
//! - Gravity locks the piece when it cannot fall; each cleared row scores `10 * level`
//! - `level = 1 + score / 100`, gravity interval is `base_fall_ms / level`
//!
//! # Example
//!
//! ```
//! use blocktris_core::GameController;
//! use blocktris_types::{Direction, EdgeEvents, GameConfig, HeldDirections, RunState};
//!
//! let mut game = GameController::new(GameConfig::default(), 12345);
//!
//! let mut held = HeldDirections::empty();
//! held.insert(Direction::Down);
//!
//! let frame = game.tick(0, held, EdgeEvents::none());
//! assert_eq!(frame.state, RunState::Running);
//! assert_eq!(frame.score, 0);
//! ```
//!
//! # Timing
//!
//! The controller never reads a clock. Call
//! [`GameController::tick`](controller::GameController::tick) once per frame with a
//! monotonic millisecond timestamp.

pub mod board;
pub mod clock;
pub mod controller;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{AutoRepeat, GravityClock};
pub use controller::GameController;
pub use piece::{Piece, Shape};
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{gravity_interval_ms, level_for_score, line_clear_points};
pub use snapshot::{ActiveSnapshot, RenderState};
