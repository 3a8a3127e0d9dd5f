//! Kinematics model for two-entity motion problems.
//!
//! Pure functions mapping a problem's physical parameters plus an elapsed
//! time to logical 1-D track positions. Entity A starts at logical 0 and
//! entity B at `initial_distance`; see [`crate::projection`] for the mapping
//! from logical positions to screen coordinates.
//!
//! All functions here are total: any finite, validated
//! [`MovementParams`](crate::problem::MovementParams) and any real elapsed
//! time produce a finite position. Out-of-range progress values are clamped,
//! never rejected.

use crate::problem::{Direction, MovementParams};

/// Which of the two moving entities a computation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Starts at logical 0.
    A,
    /// Starts at logical `initial_distance`.
    B,
}

/// Convert normalized playback progress into simulated elapsed time.
///
/// `progress` is clamped to [0.0, 1.0] before scaling by `total_time`.
pub fn elapsed_time(progress: f32, total_time: f32) -> f32 {
    progress.clamp(0.0, 1.0) * total_time
}

/// Logical track position of one entity at `elapsed` time units.
///
/// Non-reflecting motion:
/// - `Opposite`: A moves with +speed from 0, B with -speed from the far end.
/// - `Same`: both move with +speed from their respective starts (pursuit).
///
/// Reflecting motion (`round_trip` true and `initial_distance > 0`): both
/// entities bounce between the track ends `[0, initial_distance]`, entity B
/// mirror-symmetric to entity A. A zero-length track bypasses the reflection
/// arithmetic and falls back to the straight formula.
pub fn position(role: Role, params: &MovementParams, round_trip: bool, elapsed: f32) -> f32 {
    let t = elapsed.max(0.0);
    let length = params.initial_distance;

    if round_trip && length > 0.0 {
        return match role {
            Role::A => reflect_from_origin(params.speed_a * t, length),
            Role::B => length - reflect_from_origin(params.speed_b * t, length),
        };
    }

    match (role, params.direction) {
        (Role::A, _) => params.speed_a * t,
        (Role::B, Direction::Opposite) => length - params.speed_b * t,
        (Role::B, Direction::Same) => length + params.speed_b * t,
    }
}

/// Position of a point bouncing between 0 and `length`, having traveled
/// total distance `d` from the 0 end.
///
/// Even traversal cycles move away from 0, odd cycles move back toward it.
fn reflect_from_origin(d: f32, length: f32) -> f32 {
    let cycle = (d / length).floor();
    let offset = d - cycle * length;
    if (cycle as i64) % 2 == 0 {
        offset
    } else {
        length - offset
    }
}

/// Logical position of the modeled event (meeting/catch-up) marker.
///
/// The marker sits where entity A's non-reflecting trajectory was at the
/// historical `event_time`; it is fixed there once shown, not re-derived
/// from the current frame time.
pub fn meeting_position(params: &MovementParams, event_time: f32) -> f32 {
    params.speed_a * event_time.max(0.0)
}
