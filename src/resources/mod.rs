//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! read by the render path: the camera and its surface, the animation
//! registry, configuration, timing and display sizes. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animation` – immutable frame imagery and timing shared by sprites
//! - `animationdict` – registry resolving animation names to handles
//! - `camera` – viewport, world bounds, frame buffer and the frame compositor
//! - `canvas` – drawing target trait the camera composites through
//! - `color` – packed RGBA color
//! - `debugmode` – presence toggles the debug overlays
//! - `font` – built-in bitmap font for diagnostic text
//! - `gameconfig` – INI-backed renderer configuration
//! - `mapimage` – world-sized background image
//! - `pixelbuffer` – software RGBA surface implementing `Canvas`
//! - `screensize` – render resolution in pixels
//! - `videofilter` – per-pixel filter applied to finished frames
//! - `windowsize` – presentation window size and display scale
//! - `worldtime` – simulation time and frame counter
pub mod animation;
pub mod animationdict;
pub mod camera;
pub mod canvas;
pub mod color;
pub mod debugmode;
pub mod font;
pub mod gameconfig;
pub mod mapimage;
pub mod pixelbuffer;
pub mod screensize;
pub mod videofilter;
pub mod windowsize;
pub mod worldtime;
