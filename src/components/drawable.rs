//! Primitive-shape drawing component.
//!
//! The schematic is drawn entirely from immediate-mode primitives, so scene
//! entities carry a [`Drawable`] describing what to draw at their
//! [`ScenePosition`](super::scenepos::ScenePosition). The render system
//! sorts by [`ZIndex`](super::zindex::ZIndex) and paints these back to
//! front.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Geometric primitive, positioned relative to the entity's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Filled circle centered on the position.
    Circle { radius: f32 },
    /// Filled rectangle centered on the position.
    Rect { w: f32, h: f32 },
    /// Solid line from the position to position + (dx, dy).
    Line { dx: f32, dy: f32, thickness: f32 },
    /// Dashed line from the position to position + (dx, 0).
    DashedLine { dx: f32, dash: f32 },
    /// Small flag on a pole, planted at the position.
    Flag { height: f32 },
    /// Horizontal arrow of signed length dx, starting at the position.
    Arrow { dx: f32 },
}

/// What to draw for a scene entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct Drawable {
    pub shape: Shape,
    pub color: Color,
    /// Hidden drawables keep their entity alive but are skipped by the
    /// render pass (distance annotation below threshold, unreached event
    /// marker).
    pub visible: bool,
}

impl Drawable {
    pub fn new(shape: Shape, color: Color) -> Self {
        Drawable {
            shape,
            color,
            visible: true,
        }
    }

    pub fn hidden(shape: Shape, color: Color) -> Self {
        Drawable {
            shape,
            color,
            visible: false,
        }
    }
}
