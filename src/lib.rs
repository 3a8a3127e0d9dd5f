//! Motionboard library.
//!
//! This module exposes the application's ECS components, resources, systems,
//! and events for use in integration tests and as a reusable library.

pub mod classify;
pub mod components;
pub mod events;
pub mod game;
pub mod generate;
pub mod kinematics;
pub mod problem;
pub mod projection;
pub mod resources;
pub mod systems;
