//! Input system.
//!
//! Polls raylib for the transport and navigation keys each frame and
//! translates presses into [`TransportEvent`]s or problem switches:
//!
//! - SPACE – play/pause, LEFT/RIGHT – scrub, HOME – jump to start,
//!   R – reset, TAB – cycle rate, 1..4 – select rate directly
//! - N / P – next / previous problem in the catalog
//! - F11 – toggle the debug overlay

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::problemchange::ProblemChangedEvent;
use crate::events::transport::{TransportCommand, TransportEvent};
use crate::resources::activeproblem::ActiveProblem;
use crate::resources::catalog::ProblemCatalog;
use crate::resources::debugmode::DebugMode;
use crate::resources::playback::RATE_STEPS;

/// Scrub step per arrow-key press, in progress units.
const SEEK_STEP: f32 = 0.05;

/// Poll raylib for key presses and emit the matching commands.
pub fn update_input_state(
    rl: NonSendMut<raylib::RaylibHandle>,
    catalog: Res<ProblemCatalog>,
    mut active: ResMut<ActiveProblem>,
    debug_mode: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    let pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    // Transport keys only make sense for problems with a motion scene, but
    // emitting them for static scenes is harmless: the clock just runs
    // against a scene that ignores it.
    if pressed(KeyboardKey::KEY_SPACE) {
        commands.trigger(TransportEvent {
            command: TransportCommand::Toggle,
        });
    }
    if pressed(KeyboardKey::KEY_LEFT) {
        commands.trigger(TransportEvent {
            command: TransportCommand::SeekBy(-SEEK_STEP),
        });
    }
    if pressed(KeyboardKey::KEY_RIGHT) {
        commands.trigger(TransportEvent {
            command: TransportCommand::SeekBy(SEEK_STEP),
        });
    }
    if pressed(KeyboardKey::KEY_HOME) {
        commands.trigger(TransportEvent {
            command: TransportCommand::Seek(0.0),
        });
    }
    if pressed(KeyboardKey::KEY_R) {
        commands.trigger(TransportEvent {
            command: TransportCommand::Reset,
        });
    }
    if pressed(KeyboardKey::KEY_TAB) {
        commands.trigger(TransportEvent {
            command: TransportCommand::CycleRate,
        });
    }
    for (i, key) in [
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
    ]
    .into_iter()
    .enumerate()
    {
        if pressed(key) {
            commands.trigger(TransportEvent {
                command: TransportCommand::SetRate(RATE_STEPS[i]),
            });
        }
    }

    // Catalog navigation.
    let step = if pressed(KeyboardKey::KEY_N) {
        Some(catalog.next_index(active.catalog_index))
    } else if pressed(KeyboardKey::KEY_P) {
        Some(catalog.prev_index(active.catalog_index))
    } else {
        None
    };
    if let Some(index) = step {
        if let Some(problem) = catalog.get(index) {
            active.set(problem.clone(), index);
            commands.trigger(ProblemChangedEvent {});
        }
    }

    if pressed(KeyboardKey::KEY_F11) {
        if debug_mode.is_some() {
            commands.remove_resource::<DebugMode>();
        } else {
            commands.insert_resource(DebugMode {});
        }
    }
}
