//! Light sources the engine drives directly.

use engine_core::Rgb;
use glam::Vec3;

/// A point light with distance falloff.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    /// Maximum reach of the light in world units.
    pub range: f32,
    /// Falloff exponent. Higher values localize the glow.
    pub decay: f32,
}

impl PointLight {
    pub fn new(color: Rgb, intensity: f32, range: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            color,
            intensity,
            range,
            decay: 2.0,
        }
    }
}
