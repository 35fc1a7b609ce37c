//! Engine configuration: window settings and per-entity tuning records.
//! Loaded from config.ron at startup.
//!
//! Every tunable that shapes the "look" (speeds, radii, thresholds, glow
//! curves) lives here so the animator code carries the algorithm only.
//! Tuning is validated once at construction; animators trust it afterward.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Persistent engine settings. Loaded from `config.ron` in the current
/// directory; missing or invalid files fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceanConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Virtual page height in multiples of the viewport height. The wheel
    /// scrolls this page; reaching its bottom means full descent.
    #[serde(default = "default_page_screens")]
    pub page_screens: f32,
    #[serde(default)]
    pub tuning: Tuning,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_page_screens() -> f32 {
    6.0
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            page_screens: default_page_screens(),
            tuning: Tuning::default(),
        }
    }
}

impl OceanConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.page_screens >= 1.0, "page_screens must be at least 1");
        self.tuning.validate()
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}

/// All per-kind tuning records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tuning {
    #[serde(default)]
    pub zones: ZoneTuning,
    #[serde(default)]
    pub plankton: PlanktonTuning,
    #[serde(default)]
    pub bubbles: BubbleTuning,
    #[serde(default)]
    pub jellyfish: JellyfishTuning,
    #[serde(default)]
    pub angler: AnglerTuning,
    #[serde(default)]
    pub anchor: AnchorTuning,
}

impl Tuning {
    pub fn validate(&self) -> Result<()> {
        self.zones.validate()?;
        self.plankton.validate()?;
        self.bubbles.validate()?;
        self.jellyfish.validate()?;
        self.angler.validate()?;
        self.anchor.validate()
    }
}

/// Depth-to-visual-parameter curve constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneTuning {
    /// Background/fog color at the surface, 0xRRGGBB. The abyss end of the
    /// gradient is always black.
    pub surface_color: u32,
    /// Exponential fog density at depth 0.
    pub fog_base: f32,
    /// Fog density gained over the full descent.
    pub fog_gain: f32,
    /// Directional (sun) light intensity at the surface.
    pub sun_base: f32,
    /// Ambient light intensity at the surface.
    pub ambient_base: f32,
    /// Light attenuation coefficient: intensity reaches zero at depth
    /// 1/light_atten.
    pub light_atten: f32,
    pub bloom_base_strength: f32,
    pub bloom_strength_gain: f32,
    pub bloom_base_radius: f32,
    pub bloom_radius_gain: f32,
    /// Bioluminescence floor at the surface.
    pub bio_floor: f32,
    /// Quadratic bioluminescence gain toward the abyss.
    pub bio_gain: f32,
    /// Linear jellyfish glow multiplier gained over the descent.
    pub glow_scale_gain: f32,
    /// Angler reveal: alpha ramps over [start, start + span].
    pub angler_reveal_start: f32,
    pub angler_reveal_span: f32,
    /// Anchor reveal: alpha ramps over [start, start + span].
    pub anchor_reveal_start: f32,
    pub anchor_reveal_span: f32,
}

impl Default for ZoneTuning {
    fn default() -> Self {
        Self {
            surface_color: 0x002233,
            fog_base: 0.0006,
            fog_gain: 0.004,
            sun_base: 0.5,
            ambient_base: 0.1,
            light_atten: 1.1,
            bloom_base_strength: 0.1,
            bloom_strength_gain: 2.4,
            bloom_base_radius: 0.1,
            bloom_radius_gain: 0.7,
            bio_floor: 0.5,
            bio_gain: 2.0,
            glow_scale_gain: 5.0,
            angler_reveal_start: 0.8,
            angler_reveal_span: 0.15,
            anchor_reveal_start: 0.6,
            anchor_reveal_span: 0.2,
        }
    }
}

impl ZoneTuning {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.fog_base >= 0.0, "fog_base must be non-negative");
        ensure!(self.light_atten > 0.0, "light_atten must be positive");
        ensure!(self.angler_reveal_span > 0.0, "angler_reveal_span must be positive");
        ensure!(self.anchor_reveal_span > 0.0, "anchor_reveal_span must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.angler_reveal_start),
            "angler_reveal_start must be in [0, 1]"
        );
        ensure!(
            (0.0..=1.0).contains(&self.anchor_reveal_start),
            "anchor_reveal_start must be in [0, 1]"
        );
        Ok(())
    }
}

/// Instanced plankton swarm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanktonTuning {
    pub count: usize,
    /// Spawn half-extents on x/y/z.
    pub spawn_extent: [f32; 3],
    /// Instances above +bound wrap to -bound.
    pub vertical_bound: f32,
    /// Rise speed range in units/s.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Pointer repulsion radius in world units.
    pub repel_radius: f32,
    /// Repulsion speed at zero distance, units/s.
    pub repel_speed: f32,
    /// Emissive color, 0xRRGGBB.
    pub emissive_color: u32,
}

impl Default for PlanktonTuning {
    fn default() -> Self {
        Self {
            count: 1000,
            spawn_extent: [1500.0, 1000.0, 750.0],
            vertical_bound: 1000.0,
            speed_min: 30.0,
            speed_max: 90.0,
            repel_radius: 200.0,
            repel_speed: 300.0,
            emissive_color: 0x00ffff,
        }
    }
}

impl PlanktonTuning {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.count > 0, "plankton count must be positive");
        ensure!(self.vertical_bound > 0.0, "plankton vertical_bound must be positive");
        ensure!(
            self.speed_min > 0.0 && self.speed_max >= self.speed_min,
            "plankton speed range must be positive and ordered"
        );
        ensure!(self.repel_radius > 0.0, "repel_radius must be positive");
        Ok(())
    }
}

/// Passive drifting bubbles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleTuning {
    pub count: usize,
    pub spawn_extent: [f32; 3],
    pub vertical_bound: f32,
    /// Rise speed range in units/s.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Horizontal sway speed at peak, units/s.
    pub sway_amplitude: f32,
    /// Sphere radius range.
    pub radius_min: f32,
    pub radius_max: f32,
}

impl Default for BubbleTuning {
    fn default() -> Self {
        Self {
            count: 80,
            spawn_extent: [750.0, 1000.0, 400.0],
            vertical_bound: 1000.0,
            speed_min: 18.0,
            speed_max: 42.0,
            sway_amplitude: 30.0,
            radius_min: 2.0,
            radius_max: 10.0,
        }
    }
}

impl BubbleTuning {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.count > 0, "bubble count must be positive");
        ensure!(self.vertical_bound > 0.0, "bubble vertical_bound must be positive");
        ensure!(
            self.speed_min > 0.0 && self.speed_max >= self.speed_min,
            "bubble speed range must be positive and ordered"
        );
        ensure!(
            self.radius_min > 0.0 && self.radius_max >= self.radius_min,
            "bubble radius range must be positive and ordered"
        );
        Ok(())
    }
}

/// Jellyfish and their bead-chain tentacles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JellyfishTuning {
    pub count: usize,
    pub tentacles: usize,
    pub beads_per_tentacle: usize,
    pub spawn_extent: [f32; 3],
    pub vertical_bound: f32,
    /// Pulse cycle rate range in cycles/s.
    pub pulse_speed_min: f32,
    pub pulse_speed_max: f32,
    /// Fraction of each cycle during which the swim stroke rises.
    pub stroke_fraction: f32,
    /// Peak rise speed during the stroke, units/s.
    pub rise_speed: f32,
    /// Squash/stretch amplitude of the bell around the pulse.
    pub squash_gain: f32,
    /// Constant drift outside the stroke, units/s.
    pub drift_speed: f32,
    /// Pointer interaction radius in world units.
    pub interaction_radius: f32,
    /// Proximity above which the hue override kicks in.
    pub proximity_threshold: f32,
    /// Hue sweep rate in cycles/s while hovered.
    pub hue_rate: f32,
    /// Emissive intensity floor at the surface.
    pub glow_floor: f32,
    /// Linear depth-driven glow gain.
    pub abyssal_glow: f32,
    /// Glow gained at maximum pointer proximity.
    pub proximity_glow: f32,
    /// Beads glow at this fraction of the bell intensity.
    pub bead_intensity_fraction: f32,
    /// Tentacle attachment ring radius and vertical drop below the bell.
    pub tentacle_radius: f32,
    pub tentacle_drop: f32,
    /// Resting vertical gap between successive beads.
    pub bead_spacing: f32,
    /// Pulse-coupled stretch gain on the bead spacing.
    pub stretch_gain: f32,
    /// Lateral sway: per-index amplitude gain and the two sway frequencies.
    pub sway_gain: f32,
    pub sway_freq_x: f32,
    pub sway_freq_z: f32,
    /// Per-index phase offsets for the two sway axes.
    pub sway_index_phase_x: f32,
    pub sway_index_phase_z: f32,
    /// Small vertical bob on top of the stretch.
    pub bob_freq: f32,
    pub bob_amplitude: f32,
    /// Base emissive colors cycled across instances, 0xRRGGBB.
    pub base_colors: Vec<u32>,
}

impl Default for JellyfishTuning {
    fn default() -> Self {
        Self {
            count: 6,
            tentacles: 6,
            beads_per_tentacle: 10,
            spawn_extent: [600.0, 750.0, 300.0],
            vertical_bound: 1000.0,
            pulse_speed_min: 0.3,
            pulse_speed_max: 0.6,
            stroke_fraction: 0.3,
            rise_speed: 60.0,
            squash_gain: 0.1,
            drift_speed: 6.0,
            interaction_radius: 140.0,
            proximity_threshold: 0.1,
            hue_rate: 0.8,
            glow_floor: 0.5,
            abyssal_glow: 800.0,
            proximity_glow: 50.0,
            bead_intensity_fraction: 0.8,
            tentacle_radius: 22.0,
            tentacle_drop: -8.0,
            bead_spacing: 5.0,
            stretch_gain: 0.5,
            sway_gain: 1.5,
            sway_freq_x: 3.0,
            sway_freq_z: 2.5,
            sway_index_phase_x: 0.4,
            sway_index_phase_z: 0.3,
            bob_freq: 4.0,
            bob_amplitude: 1.5,
            base_colors: vec![0xff88cc, 0x88ffcc, 0x88aaff],
        }
    }
}

impl JellyfishTuning {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.count > 0, "jellyfish count must be positive");
        ensure!(self.tentacles > 0, "tentacle count must be positive");
        ensure!(self.beads_per_tentacle > 0, "bead count must be positive");
        ensure!(
            self.pulse_speed_min > 0.0 && self.pulse_speed_max >= self.pulse_speed_min,
            "pulse speed range must be positive and ordered"
        );
        ensure!(
            (0.0..1.0).contains(&self.stroke_fraction) && self.stroke_fraction > 0.0,
            "stroke_fraction must be in (0, 1)"
        );
        ensure!(self.interaction_radius > 0.0, "interaction_radius must be positive");
        ensure!(self.hue_rate > 0.0, "hue_rate must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.bead_intensity_fraction),
            "bead_intensity_fraction must be in [0, 1]"
        );
        ensure!(!self.base_colors.is_empty(), "base_colors must not be empty");
        Ok(())
    }
}

/// The abyssal angler fish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglerTuning {
    /// Patrol speed along +x, units/s.
    pub patrol_speed: f32,
    /// Patrol wraps from +bound to -bound.
    pub patrol_bound: f32,
    /// Vertical sine: base height, amplitude, and rate in rad/s.
    pub y_base: f32,
    pub y_amplitude: f32,
    pub y_rate: f32,
    /// Tail oscillation rate (rad/s) and amplitude (radians).
    pub tail_rate: f32,
    pub tail_amplitude: f32,
    /// Lure light at full reveal: intensity, reach, and falloff exponent.
    pub lure_intensity: f32,
    pub lure_range: f32,
    pub lure_decay: f32,
    /// The lure and its light are locked to this color, 0xRRGGBB.
    pub lure_color: u32,
}

impl Default for AnglerTuning {
    fn default() -> Self {
        Self {
            patrol_speed: 72.0,
            patrol_bound: 1200.0,
            y_base: -100.0,
            y_amplitude: 20.0,
            y_rate: 0.5,
            tail_rate: 4.0,
            tail_amplitude: 0.3,
            lure_intensity: 3000.0,
            lure_range: 1500.0,
            lure_decay: 20.0,
            lure_color: 0xff0000,
        }
    }
}

impl AnglerTuning {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.patrol_speed > 0.0, "patrol_speed must be positive");
        ensure!(self.patrol_bound > 0.0, "patrol_bound must be positive");
        ensure!(self.lure_range > 0.0, "lure_range must be positive");
        ensure!(self.lure_decay > 0.0, "lure_decay must be positive");
        Ok(())
    }
}

/// The sunken anchor set-piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorTuning {
    pub position: [f32; 3],
    pub scale: f32,
    /// Chain links wrapped around the shank.
    pub chain_links: usize,
}

impl Default for AnchorTuning {
    fn default() -> Self {
        Self {
            position: [400.0, -150.0, -300.0],
            scale: 1.4,
            chain_links: 20,
        }
    }
}

impl AnchorTuning {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.scale > 0.0, "anchor scale must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(OceanConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_counts_rejected() {
        let mut tuning = Tuning::default();
        tuning.plankton.count = 0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.jellyfish.beads_per_tentacle = 0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let mut tuning = Tuning::default();
        tuning.bubbles.speed_min = 50.0;
        tuning.bubbles.speed_max = 10.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn zero_reveal_span_rejected() {
        let mut tuning = Tuning::default();
        tuning.zones.angler_reveal_span = 0.0;
        assert!(tuning.validate().is_err());
    }
}
