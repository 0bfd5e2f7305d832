use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// Keys the game reacts to. Everything else is dropped by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Space,
}

/// Discrete input events, queued until the next tick drains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested.
    Quit,
    /// A key went down this frame (edge, not held state).
    KeyDown(Key),
}

/// Keyboard state, fed by the frontend each frame and read by the session.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_down: HashSet<Key>,
    /// Pending discrete events in arrival order.
    events: VecDeque<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key press. Repeats while the key is already held are ignored.
    pub fn on_key_down(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.events.push_back(InputEvent::KeyDown(key));
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    /// Apply one polled frame: `pressed` went down since the last frame,
    /// `held` is down right now.
    ///
    /// A key tapped within a single frame is in `pressed` but not `held`. It
    /// still queues its `KeyDown` and does not stay held.
    pub fn sync_frame(&mut self, pressed: &[Key], held: &[Key]) {
        for &key in pressed {
            self.events.push_back(InputEvent::KeyDown(key));
        }
        self.keys_down.clear();
        self.keys_down.extend(held.iter().copied());
    }

    /// Register a window close request.
    pub fn on_quit(&mut self) {
        self.events.push_back(InputEvent::Quit);
    }

    /// Check if a key is currently held.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Take every pending event. Never blocks; returns an empty vec when idle.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}
