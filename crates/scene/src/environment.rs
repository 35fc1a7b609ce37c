//! Scene-wide environment state and optional post-processing.

use engine_core::Rgb;

use crate::SceneError;

/// Background, fog, global lighting, and bloom targets for one frame.
/// The engine overwrites every field from the visual parameter bundle;
/// nothing here accumulates across frames.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub background: Rgb,
    pub fog_color: Rgb,
    /// Exponential fog density.
    pub fog_density: f32,
    pub ambient_intensity: f32,
    pub sun_intensity: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            background: engine_core::color::BLACK,
            fog_color: engine_core::color::BLACK,
            fog_density: 0.0,
            ambient_intensity: 0.0,
            sun_intensity: 0.0,
        }
    }
}

/// Reported capabilities of the presentation backend.
#[derive(Debug, Clone, Copy)]
pub struct RenderCaps {
    /// Whether HDR render targets are available (required for bloom).
    pub hdr_targets: bool,
    pub max_texture_size: u32,
}

impl Default for RenderCaps {
    fn default() -> Self {
        Self {
            hdr_targets: true,
            max_texture_size: 8192,
        }
    }
}

/// Bloom post-processing pass. Construction is fallible: an unsupported
/// backend degrades to presenting without bloom rather than halting the
/// frame loop.
#[derive(Debug, Clone, Copy)]
pub struct BloomPass {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl BloomPass {
    pub fn new(caps: &RenderCaps) -> Result<Self, SceneError> {
        if !caps.hdr_targets {
            return Err(SceneError::Unsupported("bloom requires HDR render targets"));
        }
        if caps.max_texture_size < 1024 {
            return Err(SceneError::Unsupported("bloom requires 1024px render targets"));
        }
        Ok(Self {
            strength: 1.2,
            radius: 0.6,
            threshold: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_unavailable_without_hdr() {
        let caps = RenderCaps {
            hdr_targets: false,
            ..Default::default()
        };
        assert!(BloomPass::new(&caps).is_err());
    }

    #[test]
    fn bloom_available_on_default_caps() {
        assert!(BloomPass::new(&RenderCaps::default()).is_ok());
    }
}
