//! Static level geometry.
//!
//! Terrain and platform rectangles only show up on screen as debug
//! overlays; the map image is what the player normally sees.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::rect::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionKind {
    /// Solid from every side.
    Terrain,
    /// Solid from above only.
    Platform,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CollisionRect {
    pub kind: CollisionKind,
    pub rect: Rect,
}

impl CollisionRect {
    pub fn terrain(rect: Rect) -> Self {
        CollisionRect {
            kind: CollisionKind::Terrain,
            rect,
        }
    }

    pub fn platform(rect: Rect) -> Self {
        CollisionRect {
            kind: CollisionKind::Platform,
            rect,
        }
    }
}
