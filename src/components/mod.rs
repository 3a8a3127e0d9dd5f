//! ECS components for scene entities.
//!
//! This module groups all component types that can be attached to entities
//! in the schematic scene. Components define data such as position, draw
//! style, text content, and render order.
//!
//! Submodules overview:
//! - [`agent`] – a moving entity of the active motion problem
//! - [`drawable`] – primitive shape + color painted by the render system
//! - [`dynamictext`] – text label rendered at the entity position
//! - [`persistent`] – marker for entities that survive problem switches
//! - [`scenepos`] – screen-space position (pivot) for an entity
//! - [`scenerole`] – which schematic element an entity represents
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod agent;
pub mod drawable;
pub mod dynamictext;
pub mod persistent;
pub mod scenepos;
pub mod scenerole;
pub mod zindex;
