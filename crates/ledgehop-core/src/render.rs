use crate::geometry::Aabb;

/// What an entity is, as far as drawing is concerned. The surface picks the
/// color or sprite for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Platform,
    Player,
}

/// Anything with a box on screen.
pub trait Drawable {
    fn bounds(&self) -> Aabb;
    fn kind(&self) -> EntityKind;
}

/// Frame target implemented by the windowing frontend.
pub trait RenderSurface {
    /// Fill the whole surface with the background.
    fn clear(&mut self);

    /// Draw one entity at its current bounds.
    fn draw(&mut self, bounds: Aabb, kind: EntityKind);
}

/// Draw every entity in the given order.
pub fn draw_all(surface: &mut dyn RenderSurface, entities: &[&dyn Drawable]) {
    for entity in entities {
        surface.draw(entity.bounds(), entity.kind());
    }
}
