//! Core engine types for the ocean scene.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Transform and instance data
//! - Frame timing
//! - RGB color with linear interpolation and HSL conversion

pub mod color;
pub mod time;
pub mod transform;

pub use color::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
