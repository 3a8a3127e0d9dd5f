//! Scene layout system.
//!
//! Rebuilds the schematic entity set whenever the active problem's revision
//! changes: every non-[`Persistent`] entity is despawned and, for motion
//! problems, a fresh set of scene entities is spawned. Their positions and
//! sizes are placeholders; the placement system rewrites them every frame,
//! so layout only decides *what* exists, never *where* it is.
//!
//! Geometry and work problems spawn nothing: their static panels are drawn
//! directly by the render system from the problem data.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::classify;
use crate::components::agent::Agent;
use crate::components::drawable::{Drawable, Shape};
use crate::components::dynamictext::DynamicText;
use crate::components::persistent::Persistent;
use crate::components::scenepos::ScenePosition;
use crate::components::scenerole::SceneRole;
use crate::components::zindex::ZIndex;
use crate::kinematics::Role;
use crate::resources::activeproblem::ActiveProblem;
use log::debug;

/// Agent A accent color (blue).
pub const COLOR_A: Color = Color { r: 59, g: 130, b: 246, a: 255 };
/// Agent B accent color (red).
pub const COLOR_B: Color = Color { r: 239, g: 68, b: 68, a: 255 };
/// Track and neutral chrome gray.
pub const COLOR_TRACK: Color = Color { r: 209, g: 213, b: 219, a: 255 };
/// Secondary annotation gray.
pub const COLOR_ANNOTATION: Color = Color { r: 156, g: 163, b: 175, a: 255 };
/// Event marker red.
pub const COLOR_EVENT: Color = Color { r: 220, g: 38, b: 38, a: 255 };
/// Label ink.
pub const COLOR_INK: Color = Color { r: 55, g: 65, b: 81, a: 255 };

/// Despawn the old scene and spawn entities for the incoming problem.
pub fn scene_layout_system(
    mut built_revision: Local<Option<u64>>,
    active: Res<ActiveProblem>,
    stale: Query<Entity, Without<Persistent>>,
    mut commands: Commands,
) {
    if *built_revision == Some(active.revision()) {
        return;
    }
    *built_revision = Some(active.revision());

    for entity in stale.iter() {
        commands.entity(entity).try_despawn();
    }

    let problem = active.problem();
    let Some(params) = problem.movement_params.as_ref().filter(|_| problem.has_motion_scene())
    else {
        debug!("problem '{}' has no motion scene; nothing to spawn", problem.id);
        return;
    };

    debug!("building scene for problem '{}'", problem.id);

    // Track chrome. Shapes and positions are rewritten each frame.
    commands.spawn((
        SceneRole::Track,
        ScenePosition::default(),
        Drawable::new(Shape::Line { dx: 1.0, dy: 0.0, thickness: 4.0 }, COLOR_TRACK),
        ZIndex(-3),
    ));
    commands.spawn((
        SceneRole::OriginTick,
        ScenePosition::default(),
        Drawable::new(Shape::Line { dx: 0.0, dy: 16.0, thickness: 2.0 }, COLOR_ANNOTATION),
        ZIndex(-2),
    ));
    commands.spawn((
        SceneRole::OriginTick,
        ScenePosition::default(),
        DynamicText::new("0", 12, COLOR_ANNOTATION),
        ZIndex(3),
    ));

    // Boundary walls exist for every scene but stay hidden unless the
    // problem reflects.
    for role in [SceneRole::WallLeft, SceneRole::WallRight] {
        commands.spawn((
            role,
            ScenePosition::default(),
            Drawable::hidden(Shape::Rect { w: 6.0, h: 60.0 }, COLOR_ANNOTATION),
            ZIndex(-1),
        ));
    }

    // The two moving entities and their labels.
    let kind_a = classify::classify_entity(&params.object_a_name);
    let kind_b = classify::classify_entity(&params.object_b_name);
    commands.spawn((
        Agent::new(Role::A, params.object_a_name.clone(), params.speed_a, kind_a),
        ScenePosition::default(),
        Drawable::new(Shape::Circle { radius: 8.0 }, COLOR_A),
        ZIndex(1),
    ));
    commands.spawn((
        Agent::new(Role::B, params.object_b_name.clone(), params.speed_b, kind_b),
        ScenePosition::default(),
        Drawable::new(Shape::Circle { radius: 8.0 }, COLOR_B),
        ZIndex(1),
    ));
    commands.spawn((
        SceneRole::NameLabelA,
        ScenePosition::default(),
        DynamicText::new(params.object_a_name.clone(), 16, COLOR_A),
        ZIndex(3),
    ));
    commands.spawn((
        SceneRole::NameLabelB,
        ScenePosition::default(),
        DynamicText::new(params.object_b_name.clone(), 16, COLOR_B),
        ZIndex(3),
    ));
    commands.spawn((
        SceneRole::SpeedLabelA,
        ScenePosition::default(),
        DynamicText::new(format!("v={}", params.speed_a), 12, COLOR_INK),
        ZIndex(3),
    ));
    commands.spawn((
        SceneRole::SpeedLabelB,
        ScenePosition::default(),
        DynamicText::new(format!("v={}", params.speed_b), 12, COLOR_INK),
        ZIndex(3),
    ));

    // Distance annotation between the agents.
    commands.spawn((
        SceneRole::DistanceConnector,
        ScenePosition::default(),
        Drawable::hidden(Shape::DashedLine { dx: 1.0, dash: 6.0 }, COLOR_ANNOTATION),
        ZIndex(0),
    ));
    commands.spawn((
        SceneRole::DistanceLabel,
        ScenePosition::default(),
        DynamicText::new("", 13, COLOR_INK),
        ZIndex(3),
    ));

    // Meeting/catch-up marker, revealed once the event time is reached.
    commands.spawn((
        SceneRole::EventFlag,
        ScenePosition::default(),
        Drawable::hidden(Shape::Flag { height: 42.0 }, COLOR_EVENT),
        ZIndex(2),
    ));
    commands.spawn((
        SceneRole::EventLabel,
        ScenePosition::default(),
        DynamicText::new("", 13, COLOR_EVENT),
        ZIndex(3),
    ));
}
