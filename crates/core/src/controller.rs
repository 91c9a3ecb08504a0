//! Game controller - the top-level state machine
//!
//! This module ties together the board, the falling piece, the clocks, and
//! scoring. The caller drives it with one [`GameController::tick`] per frame,
//! passing a monotonic timestamp, the currently held directions, and any edge
//! events (pause/quit) collected since the previous frame.
//!
//! Every move or rotation is applied optimistically and reverted if it collides,
//! so nothing in here can fail. The only terminal condition is
//! [`RunState::GameOver`], which is reported, not raised.

use tracing::{debug, info};

use crate::board::Board;
use crate::clock::{AutoRepeat, GravityClock};
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring::{level_for_score, line_clear_points};
use crate::snapshot::{ActiveSnapshot, RenderState};
use crate::types::{Direction, EdgeEvent, EdgeEvents, GameConfig, HeldDirections, RunState};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    active: Piece,
    source: PieceSource,
    repeat: AutoRepeat,
    gravity: GravityClock,
    held: HeldDirections,
    state: RunState,
    paused_at: Option<u64>,
    score: u32,
    level: u32,
    lines: u32,
    pieces: u32,
}

impl GameController {
    /// Start a game with random pieces drawn from `seed`
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_source(config, PieceSource::random(seed, config.palette))
    }

    /// Start a game on an empty board with a custom piece source
    pub fn with_source(config: GameConfig, source: PieceSource) -> Self {
        Self::with_board(config, Board::from_config(&config), source)
    }

    /// Start a game on a pre-filled board.
    ///
    /// If the first piece already collides, the game starts in `GameOver`.
    pub fn with_board(config: GameConfig, board: Board, mut source: PieceSource) -> Self {
        let (kind, color) = source.draw();
        let active = Piece::spawn(kind, color, board.cols());

        let mut game = Self {
            config,
            board,
            active,
            source,
            repeat: AutoRepeat::from_config(&config),
            gravity: GravityClock::from_config(&config),
            held: HeldDirections::empty(),
            state: RunState::Running,
            paused_at: None,
            score: 0,
            level: 1,
            lines: 0,
            pieces: 0,
        };

        if game.board.check_collision(&game.active) {
            game.end("blocked at spawn");
        } else {
            debug!(kind = ?kind, x = game.active.x, "piece spawned");
        }
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (puzzles, tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn gravity_interval_ms(&self) -> u64 {
        self.gravity.interval_ms()
    }

    /// Advance one frame and return the state to render.
    pub fn tick(&mut self, now: u64, held: HeldDirections, edges: EdgeEvents) -> RenderState {
        let mut out = RenderState::default();
        self.tick_into(now, held, edges, &mut out);
        out
    }

    /// Advance one frame, writing the renderable state into `out`.
    ///
    /// Reuses `out`'s grid allocation across frames.
    pub fn tick_into(
        &mut self,
        now: u64,
        held: HeldDirections,
        edges: EdgeEvents,
        out: &mut RenderState,
    ) {
        self.step(now, held, edges);
        self.snapshot_into(out);
    }

    fn step(&mut self, now: u64, held: HeldDirections, edges: EdgeEvents) {
        if self.state == RunState::GameOver {
            return;
        }

        if edges.contains(EdgeEvent::Quit) {
            self.end("quit");
            return;
        }
        if edges.contains(EdgeEvent::Pause) {
            self.toggle_pause(now, held);
        }

        // Released keys forget their fire time even while paused.
        self.repeat.sync(held);
        self.held = held;

        if self.state == RunState::Paused {
            return;
        }

        if held.contains(Direction::Down) && self.repeat.should_repeat(Direction::Down, now) {
            // Soft drop only blocks on contact; locking is left to gravity.
            self.try_move(0, 1);
        }
        if held.contains(Direction::Left) && self.repeat.should_repeat(Direction::Left, now) {
            self.try_move(-1, 0);
        }
        if held.contains(Direction::Right) && self.repeat.should_repeat(Direction::Right, now) {
            self.try_move(1, 0);
        }
        if held.contains(Direction::Rotate) && self.repeat.should_repeat(Direction::Rotate, now) {
            self.try_rotate();
        }

        if self.gravity.is_due(now) {
            self.apply_gravity(now);
        }
    }

    fn toggle_pause(&mut self, now: u64, held: HeldDirections) {
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                self.paused_at = Some(now);
                info!(now, "paused");
            }
            RunState::Paused => {
                let paused_for = self
                    .paused_at
                    .take()
                    .map_or(0, |at| now.saturating_sub(at));
                self.gravity.shift(paused_for);
                self.repeat.rearm(held, now);
                self.state = RunState::Running;
                info!(now, paused_for, "resumed");
            }
            RunState::GameOver => {}
        }
    }

    /// Move the active piece; reverts and returns false on collision.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        self.active.translate(dx, dy);
        if self.board.check_collision(&self.active) {
            self.active.translate(-dx, -dy);
            return false;
        }
        true
    }

    /// Rotate the active piece clockwise; on collision it is rotated three more
    /// times back to where it started and false is returned.
    pub fn try_rotate(&mut self) -> bool {
        self.active.rotate();
        if self.board.check_collision(&self.active) {
            for _ in 0..3 {
                self.active.rotate();
            }
            return false;
        }
        true
    }

    fn apply_gravity(&mut self, now: u64) {
        self.gravity.reset(now);
        if !self.try_move(0, 1) {
            self.lock_active();
        }
    }

    /// Commit the active piece, clear rows, score, and spawn the next piece.
    fn lock_active(&mut self) {
        self.board.commit(&self.active);
        self.pieces = self.pieces.saturating_add(1);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let points = line_clear_points(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared as u32);

            let level = level_for_score(self.score);
            if level != self.level {
                info!(level, score = self.score, "level up");
                self.level = level;
                self.gravity.set_level(level);
            }
            debug!(rows = cleared, points, score = self.score, "rows cleared");
        }

        debug!(
            kind = ?self.active.kind,
            x = self.active.x,
            y = self.active.y,
            pieces = self.pieces,
            "piece locked"
        );

        self.spawn();
    }

    fn spawn(&mut self) {
        let (kind, color) = self.source.draw();
        self.active = Piece::spawn(kind, color, self.board.cols());
        if self.board.check_collision(&self.active) {
            self.end("blocked at spawn");
            return;
        }
        debug!(kind = ?kind, x = self.active.x, "piece spawned");
    }

    fn end(&mut self, reason: &'static str) {
        self.state = RunState::GameOver;
        info!(
            reason,
            score = self.score,
            level = self.level,
            lines = self.lines,
            "game over"
        );
    }

    /// Write the renderable state into `out`.
    pub fn snapshot_into(&self, out: &mut RenderState) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(&self.active));
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.state = self.state;
    }

    pub fn snapshot(&self) -> RenderState {
        let mut out = RenderState::default();
        self.snapshot_into(&mut out);
        out
    }
}
