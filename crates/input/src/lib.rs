//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the controller's inputs: held directions
//! (left/right/down/rotate) and one-shot edge events (pause/quit). It works with
//! terminals that report key releases and with those that only repeat presses.

pub mod handler;
pub mod map;

pub use blocktris_types as types;

pub use handler::{HeldKeys, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_key, should_quit, KeyBinding};
