//! Jellyfish: pulse-driven swim strokes, bead-chain tentacles with a
//! whip-like trailing sway, and pointer-reactive bioluminescence.
//!
//! The bell owns the color and glow; beads only ever mirror it at a fixed
//! fraction of its intensity.

use engine_core::color::{Rgb, WHITE};
use engine_core::Vec3;
use scene::{Material, SceneNode};

use crate::config::JellyfishTuning;
use crate::depth::DepthState;
use crate::pointer::{self, Interaction};
use crate::zones::VisualParams;

/// One bead chain. `root` is the attachment point on the bell rim, in
/// group-local coordinates; bead transforms are group-local too.
pub struct Tentacle {
    root: Vec3,
    pub beads: Vec<SceneNode>,
}

pub struct Jellyfish {
    /// Group position in world space.
    pub position: Vec3,
    pub bell: SceneNode,
    pub tentacles: Vec<Tentacle>,
    base_color: Rgb,
    /// Pulse phase offset, fixed at creation.
    phase: f32,
    /// Pulse rate in cycles/s, fixed at creation.
    speed: f32,
}

impl Jellyfish {
    /// Spawn `tuning.count` jellyfish with randomized positions and phases,
    /// cycling base colors across instances.
    pub fn spawn_all(tuning: &JellyfishTuning) -> Vec<Jellyfish> {
        (0..tuning.count).map(|i| Jellyfish::spawn(i, tuning)).collect()
    }

    fn spawn(index: usize, tuning: &JellyfishTuning) -> Self {
        let [ex, ey, ez] = tuning.spawn_extent;
        let position = Vec3::new(
            (rand::random::<f32>() - 0.5) * 2.0 * ex,
            (rand::random::<f32>() - 0.5) * 2.0 * ey,
            (rand::random::<f32>() - 0.5) * 2.0 * ez,
        );
        let base_color = Rgb::from_hex(tuning.base_colors[index % tuning.base_colors.len()]);

        let mut bell = SceneNode::default();
        bell.material = Material::emissive(base_color, tuning.glow_floor);
        bell.material.color = WHITE;
        bell.material.opacity = 0.8;

        let tentacles = (0..tuning.tentacles)
            .map(|t| {
                let angle = t as f32 / tuning.tentacles as f32 * std::f32::consts::TAU;
                let root = Vec3::new(
                    angle.cos() * tuning.tentacle_radius,
                    tuning.tentacle_drop,
                    angle.sin() * tuning.tentacle_radius,
                );
                let beads = (0..tuning.beads_per_tentacle)
                    .map(|s| {
                        let mut bead =
                            SceneNode::at(root + Vec3::new(0.0, -(s as f32) * tuning.bead_spacing, 0.0));
                        bead.material = Material::emissive(base_color, tuning.glow_floor);
                        bead.material.opacity = 0.9;
                        bead
                    })
                    .collect();
                Tentacle { root, beads }
            })
            .collect();

        Self {
            position,
            bell,
            tentacles,
            base_color,
            phase: rand::random::<f32>() * 10.0,
            speed: tuning.pulse_speed_min
                + rand::random::<f32>() * (tuning.pulse_speed_max - tuning.pulse_speed_min),
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        state: &DepthState,
        params: &VisualParams,
        interaction: &Interaction,
        tuning: &JellyfishTuning,
    ) {
        let cycle = (state.elapsed * self.speed + self.phase).fract();
        let pulse = (cycle * std::f32::consts::PI).sin();

        // Squash/stretch around the pulse.
        self.bell.transform.scale = Vec3::new(
            1.0 - pulse * tuning.squash_gain,
            1.0 + pulse * tuning.squash_gain,
            1.0 - pulse * tuning.squash_gain,
        );

        // Swim stroke: the rise happens in the first part of each cycle,
        // then the jellyfish coasts on a slow drift.
        if cycle < tuning.stroke_fraction {
            self.position.y += pulse * tuning.rise_speed * dt;
        } else {
            self.position.y += tuning.drift_speed * dt;
        }
        if self.position.y > tuning.vertical_bound {
            self.position.y = -tuning.vertical_bound;
        }

        let prox = pointer::proximity(&interaction.ray, self.position, tuning.interaction_radius);

        // Hover tints the bell with a sweeping hue; otherwise it reverts to
        // clear glass over the assigned base color.
        if prox > tuning.proximity_threshold {
            let hue = (state.elapsed * tuning.hue_rate).fract();
            let tint = Rgb::from_hsl(hue, 1.0, 0.5);
            self.bell.material.color = tint;
            self.bell.material.emissive = tint;
        } else {
            self.bell.material.color = WHITE;
            self.bell.material.emissive = self.base_color;
        }

        // Breathing glow: floor + abyssal boost + proximity boost, scaled by
        // the depth glow multiplier and the pulse.
        let breathing = 0.8 + (0.5 + pulse * 0.5) * 0.4;
        let intensity = (tuning.glow_floor
            + state.depth * tuning.abyssal_glow
            + prox * tuning.proximity_glow)
            * params.glow_scale
            * breathing;
        self.bell.material.emissive_intensity = intensity;

        self.update_tentacles(state.elapsed, pulse, intensity, tuning);
    }

    fn update_tentacles(&mut self, elapsed: f32, pulse: f32, intensity: f32, tuning: &JellyfishTuning) {
        let stretch = 1.0 + pulse * tuning.stretch_gain;
        let bell = self.bell.material;
        for tentacle in &mut self.tentacles {
            for (s, bead) in tentacle.beads.iter_mut().enumerate() {
                let idx = s as f32;
                // Sway amplitude grows down the chain, giving the trailing
                // whip motion; the two axes run at different frequencies so
                // the path never closes.
                let sway_x = (elapsed * tuning.sway_freq_x + self.phase + idx * tuning.sway_index_phase_x)
                    .sin()
                    * idx
                    * tuning.sway_gain;
                let sway_z = (elapsed * tuning.sway_freq_z + self.phase + idx * tuning.sway_index_phase_z)
                    .cos()
                    * idx
                    * tuning.sway_gain;
                let bob = (elapsed * tuning.bob_freq + idx).sin() * tuning.bob_amplitude;
                bead.transform.position = tentacle.root
                    + Vec3::new(sway_x, -idx * tuning.bead_spacing * stretch + bob, sway_z);

                // Beads mirror the bell; they never compute their own light.
                bead.material.color = bell.color;
                bead.material.emissive = bell.emissive;
                bead.material.emissive_intensity = intensity * tuning.bead_intensity_fraction;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoneTuning;
    use glam::Vec2;
    use scene::{Camera, Ray};

    fn tuning() -> JellyfishTuning {
        JellyfishTuning { count: 1, ..Default::default() }
    }

    fn params(depth: f32) -> VisualParams {
        VisualParams::derive(&DepthState { depth, elapsed: 0.0 }, &ZoneTuning::default())
    }

    fn interaction_at(point: Vec3) -> Interaction {
        // A ray aimed straight at `point` from the default camera position.
        let origin = Vec3::new(0.0, 0.0, 500.0);
        Interaction {
            ray: Ray { origin, direction: (point - origin).normalize() },
            world_point: point,
        }
    }

    fn far_interaction() -> Interaction {
        let mut camera = Camera::default();
        camera.set_aspect(1280, 720);
        let ray = camera.ray_from_ndc(Vec2::new(1.0, 1.0));
        Interaction { ray, world_point: Vec3::new(10_000.0, 10_000.0, 0.0) }
    }

    fn fixed(position: Vec3) -> Jellyfish {
        let mut jelly = Jellyfish::spawn(0, &tuning());
        jelly.position = position;
        jelly.phase = 0.0;
        jelly.speed = 0.5;
        jelly
    }

    #[test]
    fn rises_during_stroke_and_drifts_after() {
        let t = tuning();
        let mut jelly = fixed(Vec3::ZERO);

        // Mid-stroke: elapsed 0.3 at speed 0.5 puts the cycle at 0.15.
        let stroke = DepthState { depth: 0.0, elapsed: 0.3 };
        jelly.update(0.1, &stroke, &params(0.0), &far_interaction(), &t);
        let stroke_rise = jelly.position.y;
        assert!(stroke_rise > 0.0);

        // Past the stroke window: cycle 0.5, drift only.
        let mut coasting = fixed(Vec3::ZERO);
        let coast = DepthState { depth: 0.0, elapsed: 1.0 };
        coasting.update(0.1, &coast, &params(0.0), &far_interaction(), &t);
        let drift_rise = coasting.position.y;
        assert!((drift_rise - t.drift_speed * 0.1).abs() < 1e-4);
        assert!(stroke_rise > drift_rise);
    }

    #[test]
    fn wraps_at_vertical_bound() {
        let t = tuning();
        let mut jelly = fixed(Vec3::new(0.0, t.vertical_bound, 0.0));
        let state = DepthState { depth: 0.0, elapsed: 0.3 };
        jelly.update(0.1, &state, &params(0.0), &far_interaction(), &t);
        assert_eq!(jelly.position.y, -t.vertical_bound);
    }

    #[test]
    fn hover_overrides_color_and_reverts() {
        let t = tuning();
        let mut jelly = fixed(Vec3::new(0.0, 0.0, 0.0));
        let state = DepthState { depth: 0.5, elapsed: 2.0 };

        jelly.update(0.016, &state, &params(0.5), &interaction_at(jelly.position), &t);
        assert_ne!(jelly.bell.material.color, WHITE);
        assert_ne!(jelly.bell.material.emissive, jelly.base_color);

        jelly.update(0.016, &state, &params(0.5), &far_interaction(), &t);
        assert_eq!(jelly.bell.material.color, WHITE);
        assert_eq!(jelly.bell.material.emissive, jelly.base_color);
    }

    #[test]
    fn beads_mirror_bell_at_fixed_fraction() {
        let t = tuning();
        let mut jelly = fixed(Vec3::ZERO);
        let state = DepthState { depth: 0.9, elapsed: 1.7 };
        jelly.update(0.016, &state, &params(0.9), &interaction_at(jelly.position), &t);

        let bell = jelly.bell.material;
        for tentacle in &jelly.tentacles {
            for bead in &tentacle.beads {
                assert_eq!(bead.material.emissive, bell.emissive);
                assert_eq!(bead.material.color, bell.color);
                let expected = bell.emissive_intensity * t.bead_intensity_fraction;
                assert!((bead.material.emissive_intensity - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn glow_increases_with_depth() {
        let t = tuning();
        let state = |d: f32| DepthState { depth: d, elapsed: 1.0 };

        let mut shallow = fixed(Vec3::ZERO);
        shallow.update(0.016, &state(0.0), &params(0.0), &far_interaction(), &t);

        let mut deep = fixed(Vec3::ZERO);
        deep.update(0.016, &state(1.0), &params(1.0), &far_interaction(), &t);

        assert!(deep.bell.material.emissive_intensity > shallow.bell.material.emissive_intensity);
    }

    #[test]
    fn pulse_squash_keeps_volume_bounded() {
        let t = tuning();
        let mut jelly = fixed(Vec3::ZERO);
        for i in 0..60 {
            let state = DepthState { depth: 0.3, elapsed: i as f32 / 30.0 };
            jelly.update(1.0 / 30.0, &state, &params(0.3), &far_interaction(), &t);
            let scale = jelly.bell.transform.scale;
            assert!(scale.x >= 1.0 - t.squash_gain - 1e-5 && scale.x <= 1.0 + 1e-5);
            assert!(scale.y >= 1.0 - 1e-5 && scale.y <= 1.0 + t.squash_gain + 1e-5);
        }
    }
}
