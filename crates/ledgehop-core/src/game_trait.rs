use serde::{Deserialize, Serialize};

use crate::input::{InputState, Key};
use crate::render::RenderSurface;

/// Core trait a Ledgehop game implements.
///
/// The session owns the lifecycle and input draining; the game only handles
/// its own simulation and drawing.
pub trait LedgehopGame {
    /// Display metadata (window caption, logs).
    fn metadata(&self) -> GameMetadata;

    /// Simulation tick rate in Hz.
    fn tick_rate(&self) -> f32 {
        60.0
    }

    /// Called once per discrete key-down event drained this tick.
    fn handle_key_down(&mut self, key: Key);

    /// Called once per tick with the current held-key state.
    fn apply_held(&mut self, input: &InputState);

    /// Advance the simulation by one tick.
    fn update(&mut self);

    /// Draw every entity in a fixed order.
    fn render(&self, surface: &mut dyn RenderSurface);
}

/// Game metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
}
