//! Event and observer to toggle the debug overlays at runtime.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource. The render system checks for it every frame, so the overlays
//! appear or disappear on the next frame without any other change.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Request to flip the debug overlays. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Inserts [`DebugMode`] when it is missing and removes it otherwise.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug overlays disabled");
    } else {
        commands.insert_resource(DebugMode {});
        info!("Debug overlays enabled");
    }
}
