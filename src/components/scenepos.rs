//! Screen-space position component.
//!
//! The schematic is laid out directly in screen pixels by the projection
//! layer, so scene entities carry a single pixel-space position. The
//! placement system rewrites these every frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position (pivot) for a scene entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScenePosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl Default for ScenePosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScenePosition {
    /// Create a ScenePosition from x and y.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Set the entire position.
    pub fn set(&mut self, x: f32, y: f32) {
        self.pos.x = x;
        self.pos.y = y;
    }
}
