//! Engine systems.
//!
//! This module groups the ECS systems that run once per frame around the
//! compositor.
//!
//! Submodules overview
//! - [`animation`] – advance sprite playback steps
//! - [`camerafollow`] – center the camera view on the player
//! - [`render`] – extract the frame from the world and composite it
//! - [`time`] – update simulation time and the frame counter

pub mod animation;
pub mod camerafollow;
pub mod render;
pub mod time;
