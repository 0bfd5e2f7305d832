mod assets;
mod config;
mod error;
mod frontend;
mod theme;

use macroquad::prelude::{Conf, Texture2D, next_frame, prevent_quit};
use tracing_subscriber::EnvFilter;

use ledgehop_core::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use ledgehop_core::game_trait::LedgehopGame;
use ledgehop_core::input::InputState;
use ledgehop_core::session::{GameSession, SessionState};
use ledgehop_core::time::TickLimiter;
use ledgehop_platformer::Platformer;
use ledgehop_platformer::config::PlatformerConfig;

use config::ClientConfig;
use error::ClientError;
use frontend::{MacroquadSurface, collect_input};
use theme::Theme;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Startup resources shared by every frame.
struct GameContext {
    theme: Theme,
    player_sprite: Option<Texture2D>,
    limiter: TickLimiter,
}

impl GameContext {
    async fn load(config: &ClientConfig, tick_rate: f32) -> Result<Self, ClientError> {
        let assets_dir = assets::ensure_assets_dir(&config.assets_dir)?;
        let theme = Theme::load(config.theme_path.as_deref());
        let player_sprite = match &theme.player_sprite {
            Some(sprite) => Some(assets::load_sprite(&assets_dir, sprite).await?),
            None => None,
        };
        Ok(Self {
            theme,
            player_sprite,
            limiter: TickLimiter::new(tick_rate),
        })
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ClientError> {
    let client_config = ClientConfig::load();
    let game = Platformer::new(PlatformerConfig::load());
    let metadata = game.metadata();
    tracing::info!("Starting {}: {}", metadata.name, metadata.description);

    let mut ctx = GameContext::load(&client_config, game.tick_rate()).await?;
    let mut session = GameSession::new(game);
    let mut input = InputState::new();

    prevent_quit();
    loop {
        collect_input(&mut input);
        let state = {
            let mut surface = MacroquadSurface::new(&ctx.theme, ctx.player_sprite.as_ref());
            session.tick(&mut input, &mut surface)
        };
        if state == SessionState::Terminated {
            break;
        }
        next_frame().await;
        ctx.limiter.wait();
        tracing::trace!(rate = ctx.limiter.measured_rate(), "Frame");
    }

    tracing::info!(ticks = session.ticks(), "Exiting");
    Ok(())
}
