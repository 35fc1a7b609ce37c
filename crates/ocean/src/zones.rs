//! Depth zones and the visual parameter bundle.
//!
//! The zone table is descriptive metadata (used for logging crossings);
//! the actual color blend is one global two-stop gradient from surface
//! navy to abyssal black.

use engine_core::color::{Rgb, BLACK};

use crate::config::ZoneTuning;
use crate::depth::DepthState;

/// A named depth interval with descriptive base color and fog density.
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub name: &'static str,
    /// Inclusive start of the interval.
    pub start: f32,
    /// Exclusive end of the interval (the last zone includes 1.0).
    pub end: f32,
    pub base_color: u32,
    pub fog_density: f32,
}

/// The four zones partition [0, 1] with no gaps or overlaps.
pub const ZONES: [Zone; 4] = [
    Zone { name: "Surface", start: 0.0, end: 0.2, base_color: 0x002233, fog_density: 0.0006 },
    Zone { name: "Twilight", start: 0.2, end: 0.5, base_color: 0x000508, fog_density: 0.001 },
    Zone { name: "Midnight", start: 0.5, end: 0.75, base_color: 0x00050a, fog_density: 0.002 },
    Zone { name: "Abyss", start: 0.75, end: 1.0, base_color: 0x000000, fog_density: 0.004 },
];

/// Look up the zone containing `depth`.
pub fn zone_at(depth: f32) -> &'static Zone {
    let depth = depth.clamp(0.0, 1.0);
    ZONES
        .iter()
        .find(|z| depth >= z.start && depth < z.end)
        .unwrap_or(&ZONES[ZONES.len() - 1])
}

/// Continuous visual parameters for one frame. Every field is a pure
/// function of [`DepthState`]; nothing accumulates across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    pub background: Rgb,
    pub fog_color: Rgb,
    pub fog_density: f32,
    pub ambient_intensity: f32,
    pub sun_intensity: f32,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    /// Angler fish reveal, 0 above the ramp and 1 below it.
    pub angler_alpha: f32,
    /// Anchor reveal, ramping in earlier than the angler.
    pub anchor_alpha: f32,
    /// Shared plankton glow; grows with depth to compensate for lost sun.
    pub bio_boost: f32,
    /// Jellyfish glow multiplier, linear in depth.
    pub glow_scale: f32,
}

impl VisualParams {
    /// Derive the bundle for one frame.
    pub fn derive(state: &DepthState, tuning: &ZoneTuning) -> Self {
        let depth = state.depth.clamp(0.0, 1.0);

        let surface = Rgb::from_hex(tuning.surface_color);
        let background = surface.lerp(BLACK, depth);

        // Sunlight dies out before full depth; glow curves replace it.
        let dim = (1.0 - depth * tuning.light_atten).max(0.0);

        // Cubic ease-in keeps the mid-section moody and the abyss radiant.
        let bloom_curve = depth * depth * depth;

        Self {
            background,
            fog_color: background,
            fog_density: tuning.fog_base + depth * tuning.fog_gain,
            ambient_intensity: tuning.ambient_base * dim,
            sun_intensity: tuning.sun_base * dim,
            bloom_strength: tuning.bloom_base_strength + bloom_curve * tuning.bloom_strength_gain,
            bloom_radius: tuning.bloom_base_radius + bloom_curve * tuning.bloom_radius_gain,
            angler_alpha: reveal(depth, tuning.angler_reveal_start, tuning.angler_reveal_span),
            anchor_alpha: reveal(depth, tuning.anchor_reveal_start, tuning.anchor_reveal_span),
            bio_boost: tuning.bio_floor + depth * depth * tuning.bio_gain,
            glow_scale: 1.0 + depth * tuning.glow_scale_gain,
        }
    }
}

/// Ramp from 0 to 1 over [start, start + span], clamped at both ends.
fn reveal(depth: f32, start: f32, span: f32) -> f32 {
    ((depth - start) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoneTuning;

    fn at(depth: f32) -> VisualParams {
        VisualParams::derive(&DepthState { depth, elapsed: 3.0 }, &ZoneTuning::default())
    }

    #[test]
    fn zones_partition_unit_interval() {
        let mut cursor = 0.0;
        for zone in &ZONES {
            assert_eq!(zone.start, cursor, "gap or overlap before {}", zone.name);
            assert!(zone.end > zone.start);
            cursor = zone.end;
        }
        assert_eq!(cursor, 1.0);
        assert_eq!(zone_at(0.0).name, "Surface");
        assert_eq!(zone_at(0.3).name, "Twilight");
        assert_eq!(zone_at(1.0).name, "Abyss");
    }

    #[test]
    fn identical_state_yields_identical_params() {
        let state = DepthState { depth: 0.437, elapsed: 12.5 };
        let tuning = ZoneTuning::default();
        let a = VisualParams::derive(&state, &tuning);
        let b = VisualParams::derive(&state, &tuning);
        assert_eq!(a, b);
    }

    #[test]
    fn surface_scenario() {
        let p = at(0.0);
        assert_eq!(p.background, Rgb::from_hex(0x002233));
        assert_eq!(p.angler_alpha, 0.0);
        assert_eq!(p.anchor_alpha, 0.0);
        assert!((p.bloom_strength - 0.1).abs() < 1e-6);
        assert!((p.sun_intensity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn abyss_scenario() {
        let p = at(1.0);
        assert_eq!(p.background, BLACK);
        assert_eq!(p.angler_alpha, 1.0);
        assert_eq!(p.anchor_alpha, 1.0);
        assert!((p.bloom_strength - 2.5).abs() < 1e-6);
        assert_eq!(p.sun_intensity, 0.0);
        assert_eq!(p.ambient_intensity, 0.0);
    }

    #[test]
    fn reveal_boundaries_are_exact() {
        assert_eq!(at(0.8).angler_alpha, 0.0);
        assert_eq!(at(0.95).angler_alpha, 1.0);
        assert_eq!(at(0.6).anchor_alpha, 0.0);
        assert_eq!(at(0.8).anchor_alpha, 1.0);
        let mid = at(0.875).angler_alpha;
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn curves_are_monotonic_in_depth() {
        let mut last = at(0.0);
        for i in 1..=100 {
            let p = at(i as f32 / 100.0);
            assert!(p.angler_alpha >= last.angler_alpha);
            assert!(p.anchor_alpha >= last.anchor_alpha);
            assert!(p.bloom_strength >= last.bloom_strength);
            assert!(p.bio_boost >= last.bio_boost);
            assert!(p.glow_scale >= last.glow_scale);
            assert!(p.fog_density >= last.fog_density);
            assert!(p.sun_intensity <= last.sun_intensity);
            last = p;
        }
    }

    #[test]
    fn lights_extinguish_past_attenuation_knee() {
        // With atten 1.1 the lights hit zero at depth ~0.909.
        assert!(at(0.5).sun_intensity > 0.0);
        assert_eq!(at(0.95).sun_intensity, 0.0);
        assert_eq!(at(0.95).ambient_intensity, 0.0);
    }

    #[test]
    fn bloom_stays_low_through_mid_depths() {
        let mid = at(0.5);
        assert!(mid.bloom_strength < 0.5);
        let deep = at(1.0);
        assert!(deep.bloom_strength > 2.0);
    }
}
