//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The projection and
//! render systems read this to adapt the track layout to window resizes.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
