//! # AFTERGLOW
//!
//! Headless host for the pointer-trail effects. A real page feeds
//! `afterglow_fx` with mouse events and `requestAnimationFrame`; this crate
//! feeds it a scripted sweep and a tight frame loop, so the trail can be
//! profiled and inspected from a terminal.
//!
//! ## Modules
//!
//! - `replay`: Scripted sessions and their reports

pub mod replay;

// Re-export the effects library
pub use afterglow_fx as fx;

pub use replay::{run, sweep_position, ReplayOptions, ReplayReport};
