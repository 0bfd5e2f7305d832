use ledgehop_core::geometry::Aabb;
use ledgehop_core::render::{Drawable, EntityKind};

/// A static platform. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    bounds: Aabb,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::new(x, y, width, height),
        }
    }

    pub fn aabb(&self) -> &Aabb {
        &self.bounds
    }
}

impl Drawable for Platform {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Platform
    }
}
