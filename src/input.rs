//! Keyboard state and the per-tick action snapshot
//!
//! The host delivers key-down/key-up events as strings; they are translated
//! once here so the simulation only ever sees the `Actions` bitset.

use bitflags::bitflags;

bitflags! {
    /// Actions recognized by the simulation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Actions: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP = 1 << 2;
        const RUN = 1 << 3;
    }
}

impl Actions {
    /// Map a host key identifier to an action (case-insensitive)
    pub fn from_key(key: &str) -> Option<Actions> {
        match key.to_lowercase().as_str() {
            "a" => Some(Actions::LEFT),
            "d" => Some(Actions::RIGHT),
            "w" => Some(Actions::JUMP),
            "e" => Some(Actions::RUN),
            _ => None,
        }
    }
}

/// Pressed state of the recognized keys, written by host events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: Actions,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event; unrecognized keys are ignored
    pub fn key_down(&mut self, key: &str) {
        if let Some(action) = Actions::from_key(key) {
            self.held.insert(action);
        }
    }

    /// Record a key-up event; unrecognized keys are ignored
    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = Actions::from_key(key) {
            self.held.remove(action);
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held = Actions::empty();
    }

    /// Snapshot read once at the start of each tick
    pub fn actions(&self) -> Actions {
        self.held
    }
}
