//! Held-key tracking for terminal environments.
//!
//! The controller wants the set of directions held *right now*. Terminals with
//! the keyboard enhancement protocol report releases; most others only send a
//! press followed by auto-repeat presses. For those, a direction counts as
//! released once no press/repeat for it arrived within the release timeout.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, KeyBinding};
use crate::types::{Direction, EdgeEvent, EdgeEvents, HeldDirections};

// Shorter than a typical terminal repeat gap would cut held keys off; longer
// would turn a quick tap into several moves.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 50;

/// Collects key events between ticks.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Last press/repeat time per direction; `None` when not held
    last_seen: [Option<u64>; 4],
    /// `None` when the terminal delivers release events
    release_timeout_ms: Option<u64>,
    edges: EdgeEvents,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_seen: [None; 4],
            release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            edges: EdgeEvents::none(),
        }
    }

    /// Use `None` when real key-release events are available.
    pub fn with_release_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Feed one terminal key event received at `now`.
    pub fn handle_key(&mut self, key: KeyEvent, now: u64) -> Option<KeyBinding> {
        let binding = map_key(key)?;
        match (binding, key.kind) {
            (KeyBinding::Hold(dir), KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.press(dir, now)
            }
            (KeyBinding::Hold(dir), KeyEventKind::Release) => self.release(dir),
            // Edge events fire on press only; held 'p' must not flicker pause.
            (KeyBinding::Edge(event), KeyEventKind::Press) => self.push_edge(event),
            (KeyBinding::Edge(_), _) => {}
        }
        Some(binding)
    }

    pub fn press(&mut self, dir: Direction, now: u64) {
        self.last_seen[dir.index()] = Some(now);
    }

    pub fn release(&mut self, dir: Direction) {
        self.last_seen[dir.index()] = None;
    }

    pub fn push_edge(&mut self, event: EdgeEvent) {
        self.edges.insert(event);
    }

    /// Directions held at `now`, auto-releasing stale ones.
    pub fn held(&mut self, now: u64) -> HeldDirections {
        let mut set = HeldDirections::empty();
        for dir in Direction::ALL {
            let slot = &mut self.last_seen[dir.index()];
            let Some(seen) = *slot else {
                continue;
            };
            if let Some(timeout) = self.release_timeout_ms {
                if now.saturating_sub(seen) > timeout {
                    *slot = None;
                    continue;
                }
            }
            set.insert(dir);
        }
        set
    }

    /// Edge events collected since the last call.
    pub fn take_edges(&mut self) -> EdgeEvents {
        std::mem::take(&mut self.edges)
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; 4];
        self.edges.clear();
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
