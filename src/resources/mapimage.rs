//! Map image resource.
//!
//! The world-sized background image drawn behind every entity. Its origin
//! is the world origin, so the camera scrolls it opposite to its own motion.

use bevy_ecs::prelude::Resource;
use image::RgbaImage;

#[derive(Resource, Clone, Debug)]
pub struct MapImage(pub RgbaImage);
