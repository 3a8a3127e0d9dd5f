//! Event types and observers used by the application.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`problemchange`] – active problem switched; resets the playback clock
//! - [`transport`] – play/pause/seek/rate commands applied to the clock
//!
//! See each submodule for concrete event data and semantics.
pub mod problemchange;
pub mod transport;
