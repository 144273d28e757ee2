//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlays: collision
//! rectangles under the map and the diagnostic text rows on top. Remove it
//! to disable them. Both states run the same render code.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws debug overlays.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
