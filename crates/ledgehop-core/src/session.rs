use crate::game_trait::LedgehopGame;
use crate::input::{InputEvent, InputState};
use crate::render::RenderSurface;

/// Lifecycle of a game session. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Owns the game for the length of one run and drives it one tick at a time.
///
/// The frontend feeds `InputState`, calls [`GameSession::tick`], presents the
/// frame, then waits on its limiter. Nothing calls back into the session.
pub struct GameSession<G> {
    game: G,
    state: SessionState,
    ticks: u64,
}

impl<G: LedgehopGame> GameSession<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            state: SessionState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Completed ticks (quit ticks are not counted).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn terminate(&mut self) {
        if self.state == SessionState::Running {
            tracing::info!(ticks = self.ticks, "Session terminated");
        }
        self.state = SessionState::Terminated;
    }

    /// Run one tick: drain events, apply held keys, step the game, draw.
    ///
    /// A quit event ends the session immediately; the rest of that tick is
    /// skipped and any events queued after it are discarded. Ticking a
    /// terminated session does nothing.
    pub fn tick(&mut self, input: &mut InputState, surface: &mut dyn RenderSurface) -> SessionState {
        if self.state == SessionState::Terminated {
            return self.state;
        }

        for event in input.drain_events() {
            match event {
                InputEvent::Quit => {
                    self.terminate();
                    return self.state;
                },
                InputEvent::KeyDown(key) => self.game.handle_key_down(key),
            }
        }

        self.game.apply_held(input);
        self.game.update();

        surface.clear();
        self.game.render(surface);

        self.ticks += 1;
        self.state
    }
}
