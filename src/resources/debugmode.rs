//! Debug toggle resource.
//!
//! The mere presence of this resource enables the diagnostics overlay
//! (frame rate, clock state, raw placement numbers). Remove it to disable
//! debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
