pub mod config;
pub mod entity;
pub mod level;
pub mod physics;

use ledgehop_core::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use ledgehop_core::game_trait::{GameMetadata, LedgehopGame};
use ledgehop_core::input::{InputState, Key};
use ledgehop_core::render::{Drawable, RenderSurface, draw_all};

use config::PlatformerConfig;
use entity::Platform;
use level::build_platforms;
use physics::{Player, StepOutcome};

/// Everything that exists during one run: the platforms and the player.
#[derive(Debug, Clone)]
pub struct World {
    platforms: Vec<Platform>,
    player: Player,
}

impl World {
    pub fn new(config: &PlatformerConfig, screen_width: f32, screen_height: f32) -> Self {
        Self {
            platforms: build_platforms(screen_width, screen_height),
            player: Player::new(config.spawn_x, config.spawn_y, config.physics, screen_width),
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Run the player's physics step against the platforms.
    pub fn step(&mut self) -> StepOutcome {
        let was_grounded = self.player.on_ground;
        let outcome = self.player.update(&self.platforms);
        match outcome {
            StepOutcome::Landed if !was_grounded => {
                tracing::debug!(y = self.player.bounds.y, "Player landed");
            },
            StepOutcome::HeadBump => {
                tracing::debug!(y = self.player.bounds.y, "Player hit a ceiling");
            },
            _ => {},
        }
        outcome
    }

    /// Draw list: platforms in build order, then the player on top.
    pub fn entities(&self) -> Vec<&dyn Drawable> {
        let mut list: Vec<&dyn Drawable> = Vec::with_capacity(self.platforms.len() + 1);
        list.extend(self.platforms.iter().map(|p| p as &dyn Drawable));
        list.push(&self.player);
        list
    }
}

/// The single-screen platformer game.
pub struct Platformer {
    world: World,
    tick_rate: f32,
}

impl Platformer {
    pub fn new(config: PlatformerConfig) -> Self {
        Self {
            world: World::new(&config, SCREEN_WIDTH, SCREEN_HEIGHT),
            tick_rate: config.tick_rate_hz,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new(PlatformerConfig::default())
    }
}

impl LedgehopGame for Platformer {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: WINDOW_TITLE.to_string(),
            description: "Hop between ledges above the ground.".to_string(),
        }
    }

    fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    fn handle_key_down(&mut self, key: Key) {
        if key == Key::Space && self.world.player.jump() {
            tracing::debug!(y = self.world.player.bounds.y, "Player jumped");
        }
    }

    fn apply_held(&mut self, input: &InputState) {
        if input.is_key_down(Key::Left) {
            self.world.player.move_left();
        }
        if input.is_key_down(Key::Right) {
            self.world.player.move_right();
        }
    }

    fn update(&mut self) {
        self.world.step();
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        draw_all(surface, &self.world.entities());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgehop_core::geometry::Aabb;
    use ledgehop_core::render::EntityKind;
    use ledgehop_core::session::GameSession;
    use ledgehop_core::test_helpers::{
        RecordingSurface, SurfaceOp, contract_every_tick_draws_a_frame,
        contract_quit_stops_drawing, contract_simulation_is_deterministic, run_ticks, tap,
    };

    fn new_session() -> (GameSession<Platformer>, InputState, RecordingSurface) {
        (
            GameSession::new(Platformer::default()),
            InputState::new(),
            RecordingSurface::new(),
        )
    }

    /// Drop the spawned player until it rests on the ground.
    fn settle(
        session: &mut GameSession<Platformer>,
        input: &mut InputState,
        surface: &mut RecordingSurface,
    ) {
        for _ in 0..200 {
            session.tick(input, surface);
            if session.game().world().player().on_ground {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn metadata_names_the_window() {
        let game = Platformer::default();
        assert_eq!(game.metadata().name, "Platform Game");
        assert_eq!(game.tick_rate(), 60.0);
    }

    #[test]
    fn spawned_player_falls_to_the_first_ledge() {
        let (mut session, mut input, mut surface) = new_session();
        settle(&mut session, &mut input, &mut surface);

        // Spawn x=100 sits above the ledge at (100, 400).
        let player = session.game().world().player();
        assert_eq!(player.bounds.bottom(), 400.0);
        assert!(!player.jumping);
    }

    #[test]
    fn draw_order_is_platforms_then_player() {
        let (mut session, mut input, mut surface) = new_session();
        session.tick(&mut input, &mut surface);

        let kinds = surface.last_frame_kinds();
        assert_eq!(kinds.len(), 7);
        assert!(kinds[..6].iter().all(|k| *k == EntityKind::Platform));
        assert_eq!(kinds[6], EntityKind::Player);
        assert_eq!(surface.ops[0], SurfaceOp::Clear);
        assert_eq!(
            surface.ops[1],
            SurfaceOp::Draw(Aabb::new(0.0, 460.0, 500.0, 40.0), EntityKind::Platform)
        );
    }

    #[test]
    fn space_is_edge_triggered() {
        let (mut session, mut input, mut surface) = new_session();
        settle(&mut session, &mut input, &mut surface);

        // Hold space: one jump, then nothing more until released.
        input.on_key_down(Key::Space);
        session.tick(&mut input, &mut surface);
        let player = session.game().world().player();
        assert!(player.jumping);
        assert_eq!(player.velocity_y, -11.5);

        run_ticks(&mut session, &mut input, &mut surface, 100);
        let player = session.game().world().player();
        assert!(player.on_ground, "held space must not re-jump");
        assert!(!player.jumping);

        input.on_key_up(Key::Space);
        tap(&mut input, Key::Space);
        session.tick(&mut input, &mut surface);
        assert!(session.game().world().player().jumping);
    }

    #[test]
    fn held_arrows_move_every_tick() {
        let (mut session, mut input, mut surface) = new_session();
        let x0 = session.game().world().player().bounds.x;

        input.on_key_down(Key::Right);
        run_ticks(&mut session, &mut input, &mut surface, 4);
        assert_eq!(session.game().world().player().bounds.x, x0 + 20.0);

        input.on_key_up(Key::Right);
        input.on_key_down(Key::Left);
        run_ticks(&mut session, &mut input, &mut surface, 2);
        assert_eq!(session.game().world().player().bounds.x, x0 + 10.0);
    }

    #[test]
    fn same_frame_taps_do_not_stick() {
        let (mut session, mut input, mut surface) = new_session();
        settle(&mut session, &mut input, &mut surface);
        let x0 = session.game().world().player().bounds.x;

        // Right pressed and released inside one polled frame: no drift after.
        input.sync_frame(&[Key::Right], &[]);
        run_ticks(&mut session, &mut input, &mut surface, 5);
        assert_eq!(session.game().world().player().bounds.x, x0);

        // Space tapped the same way still jumps, and so does the next press.
        input.sync_frame(&[Key::Space], &[]);
        session.tick(&mut input, &mut surface);
        assert!(session.game().world().player().jumping);

        input.sync_frame(&[], &[]);
        run_ticks(&mut session, &mut input, &mut surface, 100);
        assert!(session.game().world().player().on_ground);

        input.sync_frame(&[Key::Space], &[Key::Space]);
        session.tick(&mut input, &mut surface);
        assert!(session.game().world().player().jumping);
    }

    #[test]
    fn opposite_arrows_cancel_out() {
        let (mut session, mut input, mut surface) = new_session();
        let x0 = session.game().world().player().bounds.x;

        input.on_key_down(Key::Left);
        input.on_key_down(Key::Right);
        run_ticks(&mut session, &mut input, &mut surface, 3);
        assert_eq!(session.game().world().player().bounds.x, x0);
    }

    #[test]
    fn world_entities_expose_current_bounds() {
        let mut game = Platformer::default();
        game.world_mut().player_mut().move_right();
        let entities = game.world().entities();
        let last = entities.last().unwrap();
        assert_eq!(last.kind(), EntityKind::Player);
        assert_eq!(last.bounds().x, 105.0);
    }

    #[test]
    fn contract_every_tick_draws() {
        contract_every_tick_draws_a_frame(Platformer::default(), 30);
    }

    #[test]
    fn contract_quit() {
        contract_quit_stops_drawing(Platformer::default());
    }

    #[test]
    fn contract_deterministic() {
        let mut script = vec![None; 40];
        script[30] = Some(Key::Space);
        script.extend([Some(Key::Space), None, None, Some(Key::Left)]);
        contract_simulation_is_deterministic(Platformer::default, &script);
    }
}
