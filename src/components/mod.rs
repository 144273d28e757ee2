//! ECS components for entities.
//!
//! This module groups the component types that describe the game state the
//! renderer reads each frame. Gameplay systems own and mutate them; the
//! render system only reads.
//!
//! Submodules overview:
//! - [`collisionrect`] – terrain and platform rectangles (debug overlay)
//! - [`enemy`] – enemy rectangle, optional sprite, alive and flash state
//! - [`player`] – player body, weapon, sprite and flash state
//! - [`rect`] – world-space and buffer-space rectangles
//! - [`spawnorder`] – sequence number that keeps collections in spawn order
//! - [`sprite`] – rectangle plus animation handle and playback step
//! - [`target`] – shootable target with an optional sprite

pub mod collisionrect;
pub mod enemy;
pub mod player;
pub mod rect;
pub mod spawnorder;
pub mod sprite;
pub mod target;
