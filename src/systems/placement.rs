//! Placement system.
//!
//! Each frame, feeds the playback clock's progress through the kinematics
//! model and projection layer, then writes the resulting screen placement
//! into the scene entities: agent positions and shapes, label positions and
//! contents, annotation and marker visibility. Nothing here is persisted;
//! the placement is recomputed from scratch every frame, so window resizes
//! and seeks need no special handling.

use bevy_ecs::prelude::*;

use crate::classify::VisualKind;
use crate::components::agent::Agent;
use crate::components::drawable::{Drawable, Shape};
use crate::components::dynamictext::DynamicText;
use crate::components::scenepos::ScenePosition;
use crate::components::scenerole::SceneRole;
use crate::kinematics::{self, Role};
use crate::projection;
use crate::resources::activeproblem::ActiveProblem;
use crate::resources::playback::Playback;
use crate::resources::screensize::ScreenSize;

/// Horizontal padding between the canvas edge and the track ends.
pub const CANVAS_PADDING: f32 = 50.0;
/// Vertical position of the track baseline, as a fraction of screen height.
pub const BASELINE_FRAC: f32 = 0.55;
/// On-screen length of an extended body, in pixels.
const BODY_LEN_PX: f32 = 46.0;
/// On-screen breadth of a fixed-span landmark, in pixels.
const SPAN_WIDTH_PX: f32 = 60.0;

/// Caption shown under the event marker (meeting / catch-up point).
const EVENT_CAPTION: &str = "相遇/追上点";

/// Update every scene entity from the current (problem, progress) pair.
pub fn scene_placement_system(
    active: Res<ActiveProblem>,
    playback: Res<Playback>,
    screen: Res<ScreenSize>,
    mut agents: Query<(&mut Agent, &mut ScenePosition, &mut Drawable), Without<SceneRole>>,
    mut shapes: Query<(&SceneRole, &mut ScenePosition, &mut Drawable), Without<Agent>>,
    mut texts: Query<(&SceneRole, &mut ScenePosition, &mut DynamicText), Without<Drawable>>,
) {
    let problem = active.problem();
    let Some(params) = problem.movement_params.as_ref().filter(|_| problem.has_motion_scene())
    else {
        return;
    };

    let canvas_w = screen.w as f32;
    let base_y = screen.h as f32 * BASELINE_FRAC;
    let elapsed = kinematics::elapsed_time(playback.progress(), params.total_time);
    let placement = projection::project(
        params,
        &problem.title,
        &problem.question,
        &problem.analysis,
        elapsed,
        canvas_w,
        CANVAS_PADDING,
    );

    for (mut agent, mut pos, mut drawable) in agents.iter_mut() {
        let (x, heading, kind) = match agent.role {
            Role::A => (placement.a_x, placement.a_heading, placement.a_kind),
            Role::B => (placement.b_x, placement.b_heading, placement.b_kind),
        };
        agent.heading = heading;
        pos.set(x, base_y);
        drawable.shape = agent_shape(kind);
        drawable.visible = true;
    }

    for (role, mut pos, mut drawable) in shapes.iter_mut() {
        match role {
            SceneRole::Track => {
                pos.set(CANVAS_PADDING, base_y);
                drawable.shape = Shape::Line {
                    dx: canvas_w - 2.0 * CANVAS_PADDING,
                    dy: 0.0,
                    thickness: 4.0,
                };
            }
            SceneRole::OriginTick => {
                pos.set(CANVAS_PADDING, base_y - 8.0);
                drawable.shape = Shape::Line { dx: 0.0, dy: 16.0, thickness: 2.0 };
            }
            SceneRole::WallLeft | SceneRole::WallRight => {
                drawable.visible = placement.walls.is_some();
                if let Some((left_x, right_x)) = placement.walls {
                    let x = if *role == SceneRole::WallLeft { left_x } else { right_x };
                    pos.set(x, base_y - 20.0);
                }
            }
            SceneRole::DistanceConnector => {
                drawable.visible = placement.annotation.is_some();
                if let Some(annotation) = placement.annotation {
                    pos.set(annotation.from_x, base_y - 40.0);
                    drawable.shape = Shape::DashedLine {
                        dx: annotation.to_x - annotation.from_x,
                        dash: 6.0,
                    };
                }
            }
            SceneRole::EventFlag => {
                drawable.visible = placement.event_marker_x.is_some();
                if let Some(x) = placement.event_marker_x {
                    pos.set(x, base_y);
                }
            }
            _ => {}
        }
    }

    for (role, mut pos, mut text) in texts.iter_mut() {
        match role {
            SceneRole::OriginTick => {
                pos.set(CANVAS_PADDING, base_y + 22.0);
            }
            SceneRole::NameLabelA => {
                pos.set(placement.a_x, base_y - 58.0);
            }
            SceneRole::NameLabelB => {
                pos.set(placement.b_x, base_y - 58.0);
            }
            SceneRole::SpeedLabelA => {
                pos.set(placement.a_x, base_y + 26.0);
            }
            SceneRole::SpeedLabelB => {
                pos.set(placement.b_x, base_y + 40.0);
            }
            SceneRole::DistanceLabel => {
                match placement.annotation {
                    Some(annotation) => {
                        pos.set((annotation.from_x + annotation.to_x) * 0.5, base_y - 56.0);
                        text.set_content(format!("距离: {}", annotation.separation));
                    }
                    None => text.set_content(""),
                }
            }
            SceneRole::EventLabel => {
                match placement.event_marker_x {
                    Some(x) => {
                        pos.set(x, base_y + 26.0);
                        text.set_content(EVENT_CAPTION);
                    }
                    None => text.set_content(""),
                }
            }
            _ => {}
        }
    }
}

/// Pick the drawable shape for an agent's visual kind.
///
/// The render pass orients extended bodies and heading arrows from
/// [`Agent::heading`]; the shape itself is symmetric around the computed
/// position.
fn agent_shape(kind: VisualKind) -> Shape {
    match kind {
        VisualKind::PointAgent => Shape::Circle { radius: 8.0 },
        VisualKind::ExtendedBody => Shape::Rect { w: BODY_LEN_PX, h: 16.0 },
        VisualKind::FixedSpan => Shape::Rect { w: SPAN_WIDTH_PX, h: 10.0 },
    }
}
