//! Playback clock tick system.
//!
//! Advances the [`Playback`](crate::resources::playback::Playback) resource
//! by the frame delta. Runs every frame regardless of the play/pause state;
//! a paused clock ignores the tick, which keeps the frame loop uniform and
//! prevents stale elapsed time from accumulating while paused.

use bevy_ecs::prelude::*;

use crate::resources::playback::Playback;
use crate::resources::worldtime::WorldTime;

/// Advance playback progress by this frame's wall-clock delta.
pub fn playback_tick_system(world_time: Res<WorldTime>, mut playback: ResMut<Playback>) {
    playback.tick(world_time.delta.max(0.0));
}
