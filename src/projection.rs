//! Projection from logical track positions to screen coordinates.
//!
//! [`TrackProjection`] chooses a pixel-per-unit scale so that every position
//! the entities can reach during the simulated duration fits inside the
//! canvas, then maps logical x to screen x. [`ScreenPlacement`] bundles the
//! per-frame results consumed by the render system: entity coordinates,
//! draw styles, distance annotation, event marker, and track walls.
//!
//! Placements are transient; they are recomputed every frame and never
//! stored on entities or resources.

use crate::classify::{self, VisualKind};
use crate::kinematics::{self, Role};
use crate::problem::MovementParams;

/// Safety margin keeping moving bodies clear of the canvas edge.
const SPAN_MARGIN: f32 = 1.2;

/// Nominal span substituted when the computed span degenerates to zero.
const DEFAULT_SPAN: f32 = 1.0;

/// Minimum on-screen separation (pixels) before the distance annotation
/// between the entities is worth drawing.
pub const MIN_ANNOTATION_PX: f32 = 24.0;

/// Mapping from logical track units to screen pixels for one problem.
#[derive(Debug, Clone, Copy)]
pub struct TrackProjection {
    /// Pixels per logical unit.
    pub scale: f32,
    /// Screen x of logical 0.
    pub origin_x: f32,
    /// Logical span represented by the drawable canvas width.
    pub span: f32,
}

impl TrackProjection {
    /// Fit the projection to a problem and canvas.
    ///
    /// For unbounded motion the required span is the larger of the starting
    /// separation and the combined distance both entities can cover in
    /// `total_time`, inflated by a margin. A reflecting track is bounded, so
    /// its span is exactly the track length.
    pub fn fit(params: &MovementParams, round_trip: bool, canvas_w: f32, padding: f32) -> Self {
        let span = if round_trip {
            params.initial_distance
        } else {
            params
                .initial_distance
                .max((params.speed_a + params.speed_b) * params.total_time)
                * SPAN_MARGIN
        };
        let span = if span.is_finite() && span > 0.0 {
            span
        } else {
            DEFAULT_SPAN
        };
        let drawable = (canvas_w - 2.0 * padding).max(1.0);
        TrackProjection {
            scale: drawable / span,
            origin_x: padding,
            span,
        }
    }

    /// Map a logical track position to a screen x coordinate.
    pub fn to_screen_x(&self, logical: f32) -> f32 {
        self.origin_x + logical * self.scale
    }
}

/// Dashed connector and numeric separation label between the two entities.
#[derive(Debug, Clone, Copy)]
pub struct DistanceAnnotation {
    pub from_x: f32,
    pub to_x: f32,
    /// Logical |posB - posA|, rounded to one decimal for display.
    pub separation: f32,
}

/// Per-frame screen placement of the whole motion scene.
#[derive(Debug, Clone)]
pub struct ScreenPlacement {
    pub a_x: f32,
    pub b_x: f32,
    pub a_kind: VisualKind,
    pub b_kind: VisualKind,
    /// Present when the entities are far enough apart to label legibly.
    pub annotation: Option<DistanceAnnotation>,
    /// Screen x of the meeting/catch-up marker, once elapsed time has
    /// reached the event time.
    pub event_marker_x: Option<f32>,
    /// Screen x of the track boundary walls for reflecting motion.
    pub walls: Option<(f32, f32)>,
    /// Direction of travel of each entity (+1 right, -1 left, 0 still),
    /// used to orient arrows and extended bodies.
    pub a_heading: f32,
    pub b_heading: f32,
}

/// Compute the frame's placement for a motion problem.
///
/// `elapsed` is simulated time, already derived from playback progress via
/// [`kinematics::elapsed_time`]. Style classification is cosmetic; position
/// math never depends on it.
pub fn project(
    params: &MovementParams,
    title: &str,
    question: &str,
    analysis: &str,
    elapsed: f32,
    canvas_w: f32,
    padding: f32,
) -> ScreenPlacement {
    let round_trip = classify::detect_round_trip(params, title, question, analysis);
    let proj = TrackProjection::fit(params, round_trip, canvas_w, padding);

    let pos_a = kinematics::position(Role::A, params, round_trip, elapsed);
    let pos_b = kinematics::position(Role::B, params, round_trip, elapsed);
    let a_x = proj.to_screen_x(pos_a);
    let b_x = proj.to_screen_x(pos_b);

    let annotation = {
        let px_gap = (b_x - a_x).abs();
        if px_gap > MIN_ANNOTATION_PX {
            Some(DistanceAnnotation {
                from_x: a_x.min(b_x),
                to_x: a_x.max(b_x),
                separation: ((pos_b - pos_a).abs() * 10.0).round() / 10.0,
            })
        } else {
            None
        }
    };

    let event_marker_x = params.meeting_time.and_then(|mt| {
        if elapsed >= mt {
            Some(proj.to_screen_x(kinematics::meeting_position(params, mt)))
        } else {
            None
        }
    });

    let walls = round_trip
        .then(|| (proj.to_screen_x(0.0), proj.to_screen_x(params.initial_distance)));

    ScreenPlacement {
        a_x,
        b_x,
        a_kind: classify::classify_entity(&params.object_a_name),
        b_kind: classify::classify_entity(&params.object_b_name),
        annotation,
        event_marker_x,
        walls,
        a_heading: heading(Role::A, params, round_trip, elapsed),
        b_heading: heading(Role::B, params, round_trip, elapsed),
    }
}

/// Sign of an entity's current direction of travel.
///
/// Sampled by finite difference so reflecting motion flips the heading at
/// each bounce without duplicating the reflection arithmetic.
fn heading(role: Role, params: &MovementParams, round_trip: bool, elapsed: f32) -> f32 {
    let dt = 1e-3 * params.total_time.max(1.0);
    let here = kinematics::position(role, params, round_trip, elapsed);
    let next = kinematics::position(role, params, round_trip, elapsed + dt);
    let d = next - here;
    if d.abs() < f32::EPSILON { 0.0 } else { d.signum() }
}
