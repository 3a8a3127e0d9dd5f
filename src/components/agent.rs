//! Moving entity component.
//!
//! One [`Agent`] is spawned per moving entity of the active motion problem.
//! The placement system looks agents up by their kinematic role and moves
//! them; the render system draws them according to their visual kind.

use crate::classify::VisualKind;
use crate::kinematics::Role;
use bevy_ecs::prelude::Component;

/// A moving entity of the active problem.
#[derive(Component, Clone, Debug)]
pub struct Agent {
    /// Which trajectory of the kinematics model this agent follows.
    pub role: Role,
    /// Display name from the problem data.
    pub name: String,
    /// Speed in problem units, shown in the velocity label.
    pub speed: f32,
    /// Draw style chosen by the keyword classifier.
    pub kind: VisualKind,
    /// Current direction of travel: +1 right, -1 left, 0 stationary.
    pub heading: f32,
}

impl Agent {
    pub fn new(role: Role, name: impl Into<String>, speed: f32, kind: VisualKind) -> Self {
        Agent {
            role,
            name: name.into(),
            speed,
            kind,
            heading: 0.0,
        }
    }
}
