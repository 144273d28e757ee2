//! Engine events and their observers.
//!
//! - [`switchdebug`] – toggle the debug overlays at runtime

pub mod switchdebug;
