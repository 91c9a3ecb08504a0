//! Terminal Blocktris runner (default binary).
//!
//! Frame loop: poll crossterm input until the next frame deadline, then advance
//! the controller once and present the rendered frame. The renderer diffs
//! against the previous frame so only changed cells reach the terminal.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;

use blocktris::core::{GameController, RenderState};
use blocktris::input::HeldKeys;
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocktris::types::{EdgeEvent, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate().context("invalid BLOCKTRIS_* configuration")?;

    init_logging()?;
    let seed = seed_from_env();
    info!(seed, rows = config.rows, cols = config.cols, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the file named by `BLOCKTRIS_LOG_PATH`; stay silent otherwise since
/// stdout belongs to the game.
fn init_logging() -> Result<()> {
    let Some(path) = env::var("BLOCKTRIS_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("create log file {path}"))?;
    let filter = tracing_subscriber::EnvFilter::try_from_env("BLOCKTRIS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn seed_from_env() -> u32 {
    env::var("BLOCKTRIS_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<()> {
    let mut keys = if term.enable_key_release_events()? {
        HeldKeys::new().with_release_timeout_ms(None)
    } else {
        HeldKeys::new()
    };

    let mut game = GameController::new(config, seed);
    let view = GameView::default();
    let mut state = RenderState::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let frame = Duration::from_millis(config.frame_ms());
    let mut deadline = Instant::now();

    loop {
        let now = now_ms();
        let edges = keys.take_edges();
        game.tick_into(now, keys.held(now), edges, &mut state);

        // A quit ends the session at once; a blocked spawn leaves the final
        // frame up until the player quits.
        if edges.contains(EdgeEvent::Quit) {
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        deadline += frame;
        let start = Instant::now();
        if deadline < start {
            // Fell behind (suspended, slow terminal); do not try to catch up.
            deadline = start;
        }

        while event::poll(deadline.saturating_duration_since(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    keys.handle_key(key, now_ms());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}
