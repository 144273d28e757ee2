//! Scrollcam library.
//!
//! The rendering layer of a side-scrolling action game: a [`Camera`] that
//! composites world-space game state into a pixel buffer, and an
//! [`AnimationDictionary`] that resolves animation names for sprites.
//! Components, resources, systems and events are exposed for the driver
//! binary and for integration tests.
//!
//! [`Camera`]: resources::camera::Camera
//! [`AnimationDictionary`]: resources::animationdict::AnimationDictionary

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
