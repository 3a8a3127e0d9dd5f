//! Problem data model.
//!
//! These types describe one quantitative-reasoning word problem as supplied
//! by the preset catalog or by the generative service. Field names on the
//! wire are camelCase (e.g. `objectAName`, `initialDistance`); see
//! [`crate::generate`] for decoding of externally produced documents.
//!
//! The playback/kinematics core consumes [`MovementParams`] values and
//! assumes they passed [`ProblemData::validate`] upstream.

use serde::{Deserialize, Serialize};

/// Category of a problem, which selects the schematic drawn for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneType {
    /// Motion problem (meeting, chasing, crossing). Animated track scene.
    #[serde(rename = "MOVEMENT")]
    Movement,
    /// Geometry problem. Static cross-section scene.
    #[serde(rename = "GEOMETRY")]
    Geometry,
    /// Work-rate and other non-drawable problems. Placeholder scene.
    #[serde(rename = "WORK")]
    Work,
}

impl SceneType {
    /// Short tag used by the catalog list and search filter.
    pub fn tag(&self) -> &'static str {
        match self {
            SceneType::Movement => "movement",
            SceneType::Geometry => "geometry",
            SceneType::Work => "work",
        }
    }
}

/// Relative direction of travel of the two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Entities start apart and move toward each other (meeting problem).
    #[serde(rename = "OPPOSITE")]
    Opposite,
    /// Both entities move the same way, one pursuing the other.
    #[serde(rename = "SAME")]
    Same,
}

/// Physical parameters of a motion problem.
///
/// Entity A starts at logical position 0, entity B at `initial_distance`,
/// on a shared 1-D track. Speeds are in distance-units per time-unit and
/// `total_time` bounds the time axis exposed to playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementParams {
    pub object_a_name: String,
    pub object_b_name: String,
    pub speed_a: f32,
    pub speed_b: f32,
    pub initial_distance: f32,
    pub direction: Direction,
    pub total_time: f32,
    /// Time at which the modeled event (meeting/catch-up) occurs. Used only
    /// to place the event marker, never for control flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_time: Option<f32>,
}

impl MovementParams {
    /// Check the numeric invariants the kinematics model relies on.
    pub fn validate(&self) -> Result<(), String> {
        if !self.speed_a.is_finite() || self.speed_a < 0.0 {
            return Err(format!("movementParams.speedA must be >= 0, got {}", self.speed_a));
        }
        if !self.speed_b.is_finite() || self.speed_b < 0.0 {
            return Err(format!("movementParams.speedB must be >= 0, got {}", self.speed_b));
        }
        if !self.initial_distance.is_finite() || self.initial_distance < 0.0 {
            return Err(format!(
                "movementParams.initialDistance must be >= 0, got {}",
                self.initial_distance
            ));
        }
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(format!(
                "movementParams.totalTime must be > 0, got {}",
                self.total_time
            ));
        }
        if let Some(mt) = self.meeting_time {
            if !mt.is_finite() || mt < 0.0 {
                return Err(format!("movementParams.meetingTime must be >= 0, got {mt}"));
            }
        }
        Ok(())
    }
}

/// Solid referenced by a geometry problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    #[serde(rename = "CUBE")]
    Cube,
    #[serde(rename = "CYLINDER")]
    Cylinder,
    #[serde(rename = "SPHERE")]
    Sphere,
}

/// Parameters for the static geometry schematic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryParams {
    pub shape: Shape,
    /// Primary dimension: edge length or radius.
    pub dimension_a: f32,
    /// Secondary dimension (height); only meaningful for cylinders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_b: Option<f32>,
    pub label: String,
    pub description: String,
}

/// One complete word problem: text content plus optional visual parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemData {
    pub id: String,
    #[serde(rename = "type")]
    pub scene_type: SceneType,
    pub title: String,
    /// Provenance tag, e.g. an exam year, or "imported".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub question: String,
    pub analysis: String,
    pub solution_steps: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_params: Option<MovementParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_params: Option<GeometryParams>,
}

impl ProblemData {
    /// Validate the conditional-field rules and numeric invariants.
    ///
    /// A `Movement` problem must carry `movement_params`; a `Geometry`
    /// problem must carry `geometry_params`. `Work` problems need neither.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("problem id must not be empty".to_string());
        }
        if self.title.is_empty() {
            return Err(format!("problem '{}': title must not be empty", self.id));
        }
        match self.scene_type {
            SceneType::Movement => {
                let params = self
                    .movement_params
                    .as_ref()
                    .ok_or_else(|| format!("problem '{}': movementParams required for type MOVEMENT", self.id))?;
                params.validate().map_err(|e| format!("problem '{}': {e}", self.id))
            }
            SceneType::Geometry => {
                if self.geometry_params.is_none() {
                    return Err(format!(
                        "problem '{}': geometryParams required for type GEOMETRY",
                        self.id
                    ));
                }
                Ok(())
            }
            SceneType::Work => Ok(()),
        }
    }

    /// Whether this problem has an animated schematic (transport controls).
    pub fn has_motion_scene(&self) -> bool {
        self.scene_type == SceneType::Movement && self.movement_params.is_some()
    }
}
