//! Terminal "game renderer" module.
//!
//! This is the render collaborator for the core: it turns a
//! [`core::RenderState`] into a framebuffer and flushes that to the terminal.
//! It intentionally avoids widget/layout libraries and renders into a simple
//! framebuffer with precise control over aspect ratio (2 chars wide per cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
