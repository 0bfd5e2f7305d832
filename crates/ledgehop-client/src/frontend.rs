use macroquad::prelude::{
    Color, DrawTextureParams, KeyCode, Texture2D, WHITE, clear_background, draw_rectangle,
    draw_texture_ex, get_keys_down, get_keys_pressed, is_quit_requested, vec2,
};

use ledgehop_core::color::Rgb;
use ledgehop_core::geometry::Aabb;
use ledgehop_core::input::{InputState, Key};
use ledgehop_core::render::{EntityKind, RenderSurface};

use crate::theme::Theme;

/// Map a macroquad key to a game key. Everything else is ignored.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Space => Some(Key::Space),
        _ => None,
    }
}

/// Game keys among `codes`, in iteration order.
pub fn map_keys(codes: impl IntoIterator<Item = KeyCode>) -> Vec<Key> {
    codes.into_iter().filter_map(map_key).collect()
}

/// Feed this frame's window events into the input state. Presses queue
/// events; held state comes from the current poll.
pub fn collect_input(input: &mut InputState) {
    let pressed = map_keys(get_keys_pressed());
    let held = map_keys(get_keys_down());
    input.sync_frame(&pressed, &held);
    if is_quit_requested() {
        tracing::info!("Window close requested");
        input.on_quit();
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_f32();
    Color::new(r, g, b, 1.0)
}

/// Draws into the macroquad window using the theme's colors.
pub struct MacroquadSurface<'a> {
    theme: &'a Theme,
    player_sprite: Option<&'a Texture2D>,
}

impl<'a> MacroquadSurface<'a> {
    pub fn new(theme: &'a Theme, player_sprite: Option<&'a Texture2D>) -> Self {
        Self {
            theme,
            player_sprite,
        }
    }
}

impl RenderSurface for MacroquadSurface<'_> {
    fn clear(&mut self) {
        clear_background(to_color(self.theme.background));
    }

    fn draw(&mut self, bounds: Aabb, kind: EntityKind) {
        match (kind, self.player_sprite) {
            (EntityKind::Player, Some(texture)) => {
                draw_texture_ex(
                    texture,
                    bounds.x,
                    bounds.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(bounds.width, bounds.height)),
                        ..Default::default()
                    },
                );
            },
            (EntityKind::Player, None) => draw_rectangle(
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                to_color(self.theme.player),
            ),
            (EntityKind::Platform, _) => draw_rectangle(
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                to_color(self.theme.platform),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgehop_core::input::InputEvent;

    #[test]
    fn only_arrows_and_space_are_mapped() {
        assert_eq!(map_key(KeyCode::Left), Some(Key::Left));
        assert_eq!(map_key(KeyCode::Right), Some(Key::Right));
        assert_eq!(map_key(KeyCode::Space), Some(Key::Space));
        assert_eq!(map_key(KeyCode::Up), None);
        assert_eq!(map_key(KeyCode::Escape), None);
    }

    #[test]
    fn tapped_key_fires_without_staying_held() {
        // A tap inside one frame is reported as pressed but not down.
        let pressed = map_keys([KeyCode::Space, KeyCode::A]);
        let held = map_keys([KeyCode::A]);
        assert_eq!(pressed, vec![Key::Space]);
        assert!(held.is_empty());

        let mut input = InputState::new();
        input.sync_frame(&pressed, &held);
        assert_eq!(input.drain_events(), vec![InputEvent::KeyDown(Key::Space)]);
        assert!(!input.is_key_down(Key::Space));

        input.sync_frame(&map_keys([KeyCode::Space]), &map_keys([KeyCode::Space]));
        assert_eq!(input.drain_events(), vec![InputEvent::KeyDown(Key::Space)]);
    }

    #[test]
    fn rgb_converts_to_opaque_color() {
        let c = to_color(Rgb::BLUE);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 1.0, 1.0));
    }
}
