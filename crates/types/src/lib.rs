//! Shared types module - configuration, colors, shape kinds, and input sets
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the core engine, the input layer, and the renderer.
//!
//! # Default Dimensions
//!
//! The classic playfield is 13 columns by 20 rows. New pieces spawn centered
//! horizontally on row 0.
//!
//! # Timing Defaults
//!
//! All timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `MOVE_DELAY_MS` | 50 | Repeat interval for held left/right |
//! | `ROTATE_DELAY_MS` | 150 | Repeat interval for held rotate |
//! | `DEFAULT_FPS` | 60 | Frame rate the binary drives `tick` at |
//!
//! Gravity speeds up with level: `interval = BASE_FALL_MS / level`.
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{Direction, GameConfig, HeldDirections, ShapeKind};
//!
//! let config = GameConfig::default();
//! assert_eq!((config.rows, config.cols), (20, 13));
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let mut held = HeldDirections::empty();
//! held.insert(Direction::Left);
//! assert!(held.contains(Direction::Left));
//! assert!(!held.contains(Direction::Rotate));
//! ```

use std::fmt;

/// Default board height in cells
pub const DEFAULT_ROWS: u8 = 20;

/// Default board width in cells
pub const DEFAULT_COLS: u8 = 13;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u64 = 1000;

/// Repeat interval for held horizontal movement
pub const MOVE_DELAY_MS: u64 = 50;

/// Repeat interval for held rotation
pub const ROTATE_DELAY_MS: u64 = 150;

/// Frames per second the terminal runner targets
pub const DEFAULT_FPS: u32 = 60;

/// Points awarded per cleared row, multiplied by the current level
pub const POINTS_PER_ROW: u32 = 10;

/// Score needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 100;

/// Largest shape bounding box side (the I piece is 1x4)
pub const MAX_SHAPE_DIM: usize = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Block colors a spawned piece is painted with
pub const DEFAULT_PALETTE: [Rgb; 4] = [
    Rgb::new(253, 200, 0),
    Rgb::new(1, 158, 77),
    Rgb::new(249, 124, 30),
    Rgb::new(126, 192, 235),
];

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Settled block painted with the given color
pub type Cell = Option<Rgb>;

/// The seven shape templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    L,
    J,
    O,
    S,
    Z,
}

impl ShapeKind {
    /// All templates in spawn-table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse from a single letter (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter used by the side panel
    pub fn letter(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// A logical direction that can be held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Rotate,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Rotate,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Rotate => 3,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Set of currently held directions (bit set, `Copy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeldDirections(u8);

impl HeldDirections {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl FromIterator<Direction> for HeldDirections {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::empty();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

/// One-shot events delivered on the tick they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEvent {
    /// Toggle between running and paused
    Pause,
    /// End the session
    Quit,
}

impl EdgeEvent {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            EdgeEvent::Pause => 1,
            EdgeEvent::Quit => 2,
        }
    }
}

/// Set of edge events collected since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeEvents(u8);

impl EdgeEvents {
    pub const fn none() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, event: EdgeEvent) {
        self.0 |= event.bit();
    }

    pub fn contains(&self, event: EdgeEvent) -> bool {
        self.0 & event.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Drop everything collected so far (called once the events were ticked).
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl FromIterator<EdgeEvent> for EdgeEvents {
    fn from_iter<T: IntoIterator<Item = EdgeEvent>>(iter: T) -> Self {
        let mut set = Self::none();
        for event in iter {
            set.insert(event);
        }
        set
    }
}

/// Top-level controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    /// Terminal: once entered, `tick` is a no-op
    GameOver,
}

/// Immutable game configuration shared by every component.
///
/// Built once (usually with [`GameConfig::from_env`]) and passed by value to
/// each constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub base_fall_ms: u64,
    pub move_delay_ms: u64,
    pub rotate_delay_ms: u64,
    pub fps: u32,
    pub palette: &'static [Rgb],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            base_fall_ms: BASE_FALL_MS,
            move_delay_ms: MOVE_DELAY_MS,
            rotate_delay_ms: ROTATE_DELAY_MS,
            fps: DEFAULT_FPS,
            palette: &DEFAULT_PALETTE,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults for
    /// anything missing or unparseable.
    ///
    /// - `BLOCKTRIS_ROWS`, `BLOCKTRIS_COLS`
    /// - `BLOCKTRIS_BASE_FALL_MS`, `BLOCKTRIS_MOVE_DELAY_MS`, `BLOCKTRIS_ROTATE_DELAY_MS`
    /// - `BLOCKTRIS_FPS`
    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str, fallback: T) -> T {
            env::var(key)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(fallback)
        }

        let defaults = Self::default();
        Self {
            rows: parsed("BLOCKTRIS_ROWS", defaults.rows),
            cols: parsed("BLOCKTRIS_COLS", defaults.cols),
            base_fall_ms: parsed("BLOCKTRIS_BASE_FALL_MS", defaults.base_fall_ms),
            move_delay_ms: parsed("BLOCKTRIS_MOVE_DELAY_MS", defaults.move_delay_ms),
            rotate_delay_ms: parsed("BLOCKTRIS_ROTATE_DELAY_MS", defaults.rotate_delay_ms),
            fps: parsed("BLOCKTRIS_FPS", defaults.fps),
            palette: defaults.palette,
        }
    }

    /// Milliseconds between frames at the configured FPS.
    pub fn frame_ms(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }

    /// Check that the configuration can host a game.
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if (self.rows as usize) < MAX_SHAPE_DIM {
            return Err(ConfigIssue::TooFewRows(self.rows));
        }
        if (self.cols as usize) < MAX_SHAPE_DIM {
            return Err(ConfigIssue::TooFewCols(self.cols));
        }
        if self.base_fall_ms == 0 {
            return Err(ConfigIssue::ZeroFallTime);
        }
        if self.fps == 0 || self.fps > 1000 {
            return Err(ConfigIssue::BadFps(self.fps));
        }
        if self.palette.is_empty() {
            return Err(ConfigIssue::EmptyPalette);
        }
        Ok(())
    }
}

/// Reason a [`GameConfig`] was rejected by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    TooFewRows(u8),
    TooFewCols(u8),
    ZeroFallTime,
    BadFps(u32),
    EmptyPalette,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::TooFewRows(n) => {
                write!(f, "board needs at least {MAX_SHAPE_DIM} rows, got {n}")
            }
            ConfigIssue::TooFewCols(n) => {
                write!(f, "board needs at least {MAX_SHAPE_DIM} columns, got {n}")
            }
            ConfigIssue::ZeroFallTime => write!(f, "base fall time must be non-zero"),
            ConfigIssue::BadFps(n) => write!(f, "fps must be in 1..=1000, got {n}"),
            ConfigIssue::EmptyPalette => write!(f, "palette must contain at least one color"),
        }
    }
}

impl std::error::Error for ConfigIssue {}
