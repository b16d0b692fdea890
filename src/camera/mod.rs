//! Camera system for 3D scene viewing.
//!
//! Provides a perspective camera with pointer-ray construction and an
//! orbit controller with damped rotation and panning.

/// Orbit controller managing rotation, pan and zoom.
pub mod controller;
/// Core camera struct and projection helpers.
pub mod core;

pub use self::controller::OrbitController;
pub use self::core::Camera;
