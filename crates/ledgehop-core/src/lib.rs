pub mod color;
pub mod game_trait;
pub mod geometry;
pub mod input;
pub mod render;
pub mod session;
pub mod time;

/// Logical render-surface size and tick rate shared by the game and the client.
pub mod consts {
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;
    pub const TICK_RATE_HZ: f32 = 60.0;
    pub const WINDOW_TITLE: &str = "Platform Game";
}

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game_trait::LedgehopGame;
    use crate::geometry::Aabb;
    use crate::input::{InputState, Key};
    use crate::render::{EntityKind, RenderSurface};
    use crate::session::{GameSession, SessionState};

    /// One call made against a [`RecordingSurface`].
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum SurfaceOp {
        Clear,
        Draw(Aabb, EntityKind),
    }

    /// Headless surface that records draw calls for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<SurfaceOp>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        /// Draw calls since the most recent clear (i.e. the last frame).
        pub fn last_frame(&self) -> &[SurfaceOp] {
            let start = self
                .ops
                .iter()
                .rposition(|op| *op == SurfaceOp::Clear)
                .map_or(0, |i| i + 1);
            &self.ops[start..]
        }

        /// Kinds drawn in the last frame, in draw order.
        pub fn last_frame_kinds(&self) -> Vec<EntityKind> {
            self.last_frame()
                .iter()
                .filter_map(|op| match op {
                    SurfaceOp::Draw(_, kind) => Some(*kind),
                    SurfaceOp::Clear => None,
                })
                .collect()
        }
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(SurfaceOp::Clear);
        }

        fn draw(&mut self, bounds: Aabb, kind: EntityKind) {
            self.ops.push(SurfaceOp::Draw(bounds, kind));
        }
    }

    /// Run N session ticks with no new input, returning the final state.
    pub fn run_ticks<G: LedgehopGame>(
        session: &mut GameSession<G>,
        input: &mut InputState,
        surface: &mut RecordingSurface,
        n: usize,
    ) -> SessionState {
        for _ in 0..n {
            if session.tick(input, surface) == SessionState::Terminated {
                break;
            }
        }
        session.state()
    }

    /// Press and release a key within one frame, as a tap.
    pub fn tap(input: &mut InputState, key: Key) {
        input.on_key_down(key);
        input.on_key_up(key);
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // Every LedgehopGame implementation should pass these. Game crates call
    // them from their own test modules with a factory for a fresh game.

    /// Two fresh games fed the same script must draw identical frames.
    pub fn contract_simulation_is_deterministic<G: LedgehopGame>(
        make: impl Fn() -> G,
        script: &[Option<Key>],
    ) {
        let run = || {
            let mut session = GameSession::new(make());
            let mut input = InputState::new();
            let mut surface = RecordingSurface::new();
            for step in script {
                if let Some(key) = step {
                    tap(&mut input, *key);
                }
                session.tick(&mut input, &mut surface);
            }
            surface.ops
        };
        assert_eq!(run(), run(), "same input script must produce same frames");
    }

    /// Every tick must clear once and draw at least one entity.
    pub fn contract_every_tick_draws_a_frame<G: LedgehopGame>(game: G, ticks: usize) {
        let mut session = GameSession::new(game);
        let mut input = InputState::new();
        let mut surface = RecordingSurface::new();
        run_ticks(&mut session, &mut input, &mut surface, ticks);
        let clears = surface
            .ops
            .iter()
            .filter(|op| **op == SurfaceOp::Clear)
            .count();
        assert_eq!(clears, ticks, "one clear per tick");
        assert!(
            !surface.last_frame_kinds().is_empty(),
            "a frame must draw something"
        );
    }

    /// A quit event must end the session and stop further drawing.
    pub fn contract_quit_stops_drawing<G: LedgehopGame>(game: G) {
        let mut session = GameSession::new(game);
        let mut input = InputState::new();
        let mut surface = RecordingSurface::new();
        session.tick(&mut input, &mut surface);
        let drawn = surface.ops.len();

        input.on_quit();
        run_ticks(&mut session, &mut input, &mut surface, 5);
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(surface.ops.len(), drawn, "no drawing after quit");
    }
}
