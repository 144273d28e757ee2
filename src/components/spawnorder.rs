//! Spawn order component.
//!
//! ECS queries do not iterate in insertion order, so entities whose draw
//! order matters carry a [`SpawnOrder`]. The render system sorts by it to
//! draw each collection in the order it was built.

use bevy_ecs::prelude::Component;

/// Monotonic sequence number assigned at spawn time. Lower draws first.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);
