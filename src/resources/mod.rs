//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the active problem, the playback
//! clock, timing, configuration, and the problem catalog. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `activeproblem` – the problem on screen, with an identity revision
//! - `appconfig` – window and playback settings from config.ini
//! - `catalog` – ordered preset problems with id lookup and search
//! - `debugmode` – presence toggles optional debug overlays
//! - `playback` – the seekable, rate-adjustable animation clock
//! - `screensize` – current framebuffer dimensions in pixels
//! - `worldtime` – wall-clock frame timing
pub mod activeproblem;
pub mod appconfig;
pub mod catalog;
pub mod debugmode;
pub mod playback;
pub mod screensize;
pub mod worldtime;
