//! Timing: held-key auto-repeat and gravity.
//!
//! Both clocks are driven by the caller's monotonic millisecond timestamp and
//! never sleep. Intervals use a strict comparison (`elapsed > delay`), so a held
//! key with a 50ms delay at 60 FPS re-fires every fourth frame.

use crate::scoring::gravity_interval_ms;
use crate::types::{Direction, GameConfig, HeldDirections};

/// Decides when a held direction should fire again.
#[derive(Debug, Clone)]
pub struct AutoRepeat {
    move_delay_ms: u64,
    rotate_delay_ms: u64,
    /// Last time each direction fired, indexed by [`Direction::index`]
    last_fired: [Option<u64>; 4],
}

impl AutoRepeat {
    pub fn new(move_delay_ms: u64, rotate_delay_ms: u64) -> Self {
        Self {
            move_delay_ms,
            rotate_delay_ms,
            last_fired: [None; 4],
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.move_delay_ms, config.rotate_delay_ms)
    }

    /// Repeat delay for `dir`; `None` means the direction is never gated.
    pub fn delay(&self, dir: Direction) -> Option<u64> {
        match dir {
            Direction::Left | Direction::Right => Some(self.move_delay_ms),
            Direction::Rotate => Some(self.rotate_delay_ms),
            Direction::Down => None,
        }
    }

    /// Should the held `dir` fire at `now`?
    ///
    /// A direction with no recorded fire time fires immediately. The fire time is
    /// only updated when this returns true.
    pub fn should_repeat(&mut self, dir: Direction, now: u64) -> bool {
        let delay = self.delay(dir);
        let slot = &mut self.last_fired[dir.index()];
        let due = match (*slot, delay) {
            (None, _) | (_, None) => true,
            (Some(last), Some(delay)) => now.saturating_sub(last) > delay,
        };
        if due {
            *slot = Some(now);
        }
        due
    }

    /// Forget `dir` so the next press fires immediately.
    pub fn release(&mut self, dir: Direction) {
        self.last_fired[dir.index()] = None;
    }

    /// Forget every direction not in `held`.
    pub fn sync(&mut self, held: HeldDirections) {
        for dir in Direction::ALL {
            if !held.contains(dir) {
                self.release(dir);
            }
        }
    }

    /// Treat every held direction as having just fired at `now`.
    ///
    /// Used when resuming from pause so keys held through the pause wait one
    /// full delay instead of firing in a burst.
    pub fn rearm(&mut self, held: HeldDirections, now: u64) {
        for dir in held.iter() {
            self.last_fired[dir.index()] = Some(now);
        }
    }
}

/// Gravity timer: how long the piece waits between automatic one-row drops.
#[derive(Debug, Clone)]
pub struct GravityClock {
    base_fall_ms: u64,
    interval_ms: u64,
    /// Anchored lazily on the first observed timestamp
    last_fall: Option<u64>,
}

impl GravityClock {
    pub fn new(base_fall_ms: u64) -> Self {
        Self {
            base_fall_ms,
            interval_ms: gravity_interval_ms(base_fall_ms, 1),
            last_fall: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.base_fall_ms)
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Recompute the interval for `level` (`base / level`)
    pub fn set_level(&mut self, level: u32) {
        self.interval_ms = gravity_interval_ms(self.base_fall_ms, level);
    }

    /// Has more than one interval passed since the last fall?
    ///
    /// The first call anchors the clock at `now` and returns false.
    pub fn is_due(&mut self, now: u64) -> bool {
        match self.last_fall {
            None => {
                self.last_fall = Some(now);
                false
            }
            Some(last) => now.saturating_sub(last) > self.interval_ms,
        }
    }

    /// Restart the interval at `now`
    pub fn reset(&mut self, now: u64) {
        self.last_fall = Some(now);
    }

    /// Push the last fall forward by `paused_ms` so time spent paused does not count.
    pub fn shift(&mut self, paused_ms: u64) {
        if let Some(last) = self.last_fall.as_mut() {
            *last = last.saturating_add(paused_ms);
        }
    }
}
