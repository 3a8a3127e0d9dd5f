//! Transport command event and observer.
//!
//! The input system translates key presses into [`TransportEvent`]s; the
//! observer applies them to the [`Playback`] clock. Keeping the commands on
//! the event bus decouples key bindings from clock semantics and gives
//! integration tests a way to drive the transport without a window.

use crate::resources::playback::Playback;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// One transport action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportCommand {
    /// Toggle play/pause.
    Toggle,
    /// Jump to an absolute progress value (clamped by the clock).
    Seek(f32),
    /// Scrub relative to the current position.
    SeekBy(f32),
    /// Select a specific rate multiplier.
    SetRate(f32),
    /// Step to the next allowed rate multiplier.
    CycleRate,
    /// Back to progress 0, paused.
    Reset,
}

/// Event wrapping a single transport command.
#[derive(Event, Debug, Clone, Copy)]
pub struct TransportEvent {
    pub command: TransportCommand,
}

/// Observer applying transport commands to the playback clock.
pub fn observe_transport(
    trigger: On<TransportEvent>,
    mut playback: Option<ResMut<Playback>>,
) {
    let Some(playback) = playback.as_deref_mut() else {
        return;
    };
    let command = trigger.event().command;
    debug!("transport command: {:?}", command);
    match command {
        TransportCommand::Toggle => playback.toggle(),
        TransportCommand::Seek(p) => playback.seek(p),
        TransportCommand::SeekBy(dp) => {
            let target = playback.progress() + dp;
            playback.seek(target);
        }
        TransportCommand::SetRate(r) => playback.set_rate(r),
        TransportCommand::CycleRate => playback.cycle_rate(),
        TransportCommand::Reset => playback.reset(),
    }
}
