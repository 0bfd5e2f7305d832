use crate::entity::Platform;

/// Ground slab thickness, measured up from the bottom of the screen.
pub const GROUND_HEIGHT: f32 = 40.0;

/// Ledges as `(x, y, width, height)`, listed in draw order.
pub const LEDGES: [(f32, f32, f32, f32); 5] = [
    (100.0, 400.0, 100.0, 20.0),
    (300.0, 350.0, 100.0, 20.0),
    (150.0, 300.0, 100.0, 20.0),
    (400.0, 250.0, 100.0, 20.0),
    (200.0, 200.0, 100.0, 20.0),
];

/// Build the fixed level: a full-width ground slab followed by the ledges.
///
/// Deterministic; the only inputs are the screen dimensions.
pub fn build_platforms(screen_width: f32, screen_height: f32) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(LEDGES.len() + 1);
    platforms.push(Platform::new(
        0.0,
        screen_height - GROUND_HEIGHT,
        screen_width,
        GROUND_HEIGHT,
    ));
    platforms.extend(
        LEDGES
            .iter()
            .map(|&(x, y, width, height)| Platform::new(x, y, width, height)),
    );
    platforms
}
