//! Problem change event and observer.
//!
//! Systems that switch the displayed problem update
//! [`ActiveProblem`](crate::resources::activeproblem::ActiveProblem) and
//! trigger a [`ProblemChangedEvent`]. The observer here resets the playback
//! clock unconditionally, even mid-playback, so every problem starts from
//! `progress = 0`, paused. The layout system rebuilds the scene separately
//! by watching the active problem's revision counter.

use crate::resources::activeproblem::ActiveProblem;
use crate::resources::playback::Playback;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

/// Event fired whenever the active problem identity changes, regardless of
/// whether the change came from keyboard navigation or an import resolving.
#[derive(Event, Debug, Clone, Copy)]
pub struct ProblemChangedEvent {}

/// Observer that resets the playback clock for the incoming problem.
pub fn observe_problem_change(
    _trigger: On<ProblemChangedEvent>,
    active: Option<Res<ActiveProblem>>,
    mut playback: Option<ResMut<Playback>>,
) {
    debug!("ProblemChangedEvent triggered");
    if let Some(playback) = playback.as_deref_mut() {
        playback.reset();
    }
    if let Some(active) = active.as_deref() {
        info!(
            "switched to problem '{}' ({})",
            active.problem().id,
            active.problem().title
        );
    }
}
