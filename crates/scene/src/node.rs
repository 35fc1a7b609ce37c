//! Scene nodes: transform plus material state.

use engine_core::{Rgb, Transform};
use glam::Vec3;

/// Material state the engine writes every frame. Color and emissive are
/// independent: a node can be black-bodied with a bright emissive glow.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub opacity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: engine_core::color::WHITE,
            emissive: engine_core::color::BLACK,
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }
}

impl Material {
    /// Emissive-only material: black body so only the glow reads.
    pub fn emissive(color: Rgb, intensity: f32) -> Self {
        Self {
            color: engine_core::color::BLACK,
            emissive: color,
            emissive_intensity: intensity,
            ..Default::default()
        }
    }
}

/// One addressable object in the scene.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub transform: Transform,
    pub material: Material,
    pub visible: bool,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            material: Material::default(),
            visible: true,
        }
    }
}

impl SceneNode {
    /// Create a node at the given position with a default material.
    pub fn at(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            ..Default::default()
        }
    }

    /// Create a node at the given position with the given material.
    pub fn with_material(position: Vec3, material: Material) -> Self {
        Self {
            transform: Transform::from_position(position),
            material,
            visible: true,
        }
    }
}
