//! Scene role tags.
//!
//! The layout system spawns one entity per schematic element; the placement
//! system finds them again through this tag to rewrite positions, text, and
//! visibility every frame. Exactly one entity per role exists while a
//! motion problem is displayed.

use bevy_ecs::prelude::Component;

/// Which schematic element an entity represents.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneRole {
    /// The horizontal track baseline.
    Track,
    /// Origin tick mark at logical 0.
    OriginTick,
    /// Left boundary wall of a reflecting track.
    WallLeft,
    /// Right boundary wall of a reflecting track.
    WallRight,
    /// Name label above an agent (role A / role B).
    NameLabelA,
    NameLabelB,
    /// Velocity readout below an agent.
    SpeedLabelA,
    SpeedLabelB,
    /// Dashed connector between the two agents.
    DistanceConnector,
    /// Numeric separation readout above the connector.
    DistanceLabel,
    /// Meeting/catch-up flag.
    EventFlag,
    /// Caption under the event flag.
    EventLabel,
}
