//! Shared utilities.

/// Per-tick delta time and smoothed frame rate.
pub mod frame_timing;

pub use frame_timing::FrameClock;
