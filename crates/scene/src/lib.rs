//! Scene object library: the mutable surface the animation engine drives.
//!
//! The engine never touches geometry or GPU state. It reads and writes the
//! small numeric interface exposed here: node transforms, material color /
//! emissive / opacity, light intensity and falloff, batched instance
//! transforms, the scene environment (background, fog, lights, bloom), and
//! a camera that turns pointer coordinates into world-space rays.

pub mod camera;
pub mod environment;
pub mod instancing;
pub mod light;
pub mod node;

pub use camera::{Camera, Ray};
pub use environment::{BloomPass, Environment, RenderCaps};
pub use instancing::InstancedBatch;
pub use light::PointLight;
pub use node::{Material, SceneNode};

use thiserror::Error;

/// Errors raised while setting up optional scene capabilities.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unsupported capability: {0}")]
    Unsupported(&'static str),
}

/// Display driver boundary: called once per frame after every animator has
/// run. The engine is agnostic to what presentation means beyond "now".
pub trait Present {
    fn present(&mut self, env: &Environment);
}

/// A presenter that discards frames. Used in tests and headless runs.
#[derive(Debug, Default)]
pub struct NullPresent;

impl Present for NullPresent {
    fn present(&mut self, _env: &Environment) {}
}
