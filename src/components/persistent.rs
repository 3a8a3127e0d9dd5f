//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when the
//! active problem changes. Everything else is scene-scoped and rebuilt by
//! the layout system for the incoming problem.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive problem switches.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
