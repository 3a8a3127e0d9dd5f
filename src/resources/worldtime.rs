//! Frame time resource.
//!
//! Holds the wall-clock delta of the current frame as reported by raylib.
//! The playback clock consumes `delta` each frame; `elapsed` accumulates
//! total wall-clock time since startup for diagnostics.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Default)]
pub struct WorldTime {
    /// Wall-clock seconds since startup.
    pub elapsed: f32,
    /// Wall-clock seconds of the current frame.
    pub delta: f32,
}
