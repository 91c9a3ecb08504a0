//! Scoring module - line-clear points, level, and gravity speed
//!
//! Rules:
//! - Every cleared row is worth `10 * level`, so clearing N rows in one lock
//!   adds `10 * level * N` (level is the level at the moment of the lock).
//! - `level = 1 + score / 100`.
//! - Gravity interval is `base_fall_ms / level`, never below 1ms.

use crate::types::{POINTS_PER_LEVEL, POINTS_PER_ROW};

/// Points for clearing `rows` rows at `level`
pub fn line_clear_points(rows: usize, level: u32) -> u32 {
    (rows as u32)
        .saturating_mul(POINTS_PER_ROW)
        .saturating_mul(level)
}

/// Level reached at `score` (1-based)
pub fn level_for_score(score: u32) -> u32 {
    1 + score / POINTS_PER_LEVEL
}

/// Milliseconds between gravity drops at `level`
pub fn gravity_interval_ms(base_fall_ms: u64, level: u32) -> u64 {
    (base_fall_ms / u64::from(level.max(1))).max(1)
}
