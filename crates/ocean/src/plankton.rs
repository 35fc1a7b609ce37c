//! Bioluminescent plankton: an instanced swarm that rises, wraps, and
//! scatters away from the pointer. All instances share one material whose
//! glow is the global bioluminescence boost.

use engine_core::{Rgb, Transform};
use glam::{Vec2, Vec3};
use scene::{InstancedBatch, Material};

use crate::config::PlanktonTuning;
use crate::pointer::{self, Interaction};
use crate::zones::VisualParams;

/// Per-instance state. Speed is randomized at creation and never
/// reassigned.
#[derive(Debug, Clone, Copy)]
pub struct PlanktonInstance {
    pub position: Vec3,
    speed: f32,
}

pub struct PlanktonSwarm {
    instances: Vec<PlanktonInstance>,
    pub batch: InstancedBatch,
    pub material: Material,
}

impl PlanktonSwarm {
    /// Spawn `tuning.count` instances uniformly inside the spawn extents.
    pub fn spawn(tuning: &PlanktonTuning) -> Self {
        let [ex, ey, ez] = tuning.spawn_extent;
        let mut instances = Vec::with_capacity(tuning.count);
        let mut batch = InstancedBatch::new(tuning.count);
        for i in 0..tuning.count {
            let position = Vec3::new(
                (rand::random::<f32>() - 0.5) * 2.0 * ex,
                (rand::random::<f32>() - 0.5) * 2.0 * ey,
                (rand::random::<f32>() - 0.5) * 2.0 * ez,
            );
            let speed = tuning.speed_min
                + rand::random::<f32>() * (tuning.speed_max - tuning.speed_min);
            batch.set(i, &Transform::from_position(position));
            instances.push(PlanktonInstance { position, speed });
        }
        Self {
            instances,
            batch,
            material: Material::emissive(Rgb::from_hex(tuning.emissive_color), 0.5),
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        params: &VisualParams,
        interaction: &Interaction,
        tuning: &PlanktonTuning,
    ) {
        // Glow compensates for lost sunlight: brighter in the abyss.
        self.material.emissive = Rgb::from_hex(tuning.emissive_color);
        self.material.emissive_intensity = params.bio_boost;

        let point = Vec2::new(interaction.world_point.x, interaction.world_point.y);
        for (i, inst) in self.instances.iter_mut().enumerate() {
            // Repulsion first, then the rise, then the wrap check.
            let push = pointer::repulsion(
                point,
                Vec2::new(inst.position.x, inst.position.y),
                tuning.repel_radius,
                tuning.repel_speed,
            );
            inst.position.x += push.x * dt;
            inst.position.y += push.y * dt;

            inst.position.y += inst.speed * dt;
            if inst.position.y > tuning.vertical_bound {
                inst.position.y = -tuning.vertical_bound;
            }
            self.batch.set(i, &Transform::from_position(inst.position));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DepthState;
    use crate::config::ZoneTuning;
    use glam::Vec3;
    use scene::Ray;

    fn far_interaction() -> Interaction {
        Interaction {
            ray: Ray { origin: Vec3::new(0.0, 0.0, 500.0), direction: Vec3::NEG_Z },
            world_point: Vec3::new(50_000.0, 50_000.0, 0.0),
        }
    }

    fn params(depth: f32) -> VisualParams {
        VisualParams::derive(&DepthState { depth, elapsed: 0.0 }, &ZoneTuning::default())
    }

    #[test]
    fn instances_rise_and_wrap_same_frame() {
        let tuning = PlanktonTuning { count: 1, ..Default::default() };
        let mut swarm = PlanktonSwarm::spawn(&tuning);
        swarm.instances[0].position = Vec3::new(0.0, tuning.vertical_bound - 0.01, 0.0);
        swarm.instances[0].speed = tuning.speed_max;
        swarm.update(1.0, &params(0.0), &far_interaction(), &tuning);
        assert_eq!(swarm.instances[0].position.y, -tuning.vertical_bound);
    }

    #[test]
    fn pointer_far_away_leaves_horizontal_position_unchanged() {
        let tuning = PlanktonTuning { count: 1, ..Default::default() };
        let mut swarm = PlanktonSwarm::spawn(&tuning);
        swarm.instances[0].position = Vec3::new(10.0, 0.0, 5.0);
        let x_before = swarm.instances[0].position.x;
        swarm.update(0.016, &params(0.2), &far_interaction(), &tuning);
        assert_eq!(swarm.instances[0].position.x, x_before);
    }

    #[test]
    fn pointer_nearby_pushes_instance_away() {
        let tuning = PlanktonTuning { count: 1, ..Default::default() };
        let mut swarm = PlanktonSwarm::spawn(&tuning);
        swarm.instances[0].position = Vec3::new(50.0, 0.0, 0.0);
        let interaction = Interaction {
            ray: Ray { origin: Vec3::new(0.0, 0.0, 500.0), direction: Vec3::NEG_Z },
            world_point: Vec3::ZERO,
        };
        swarm.update(0.016, &params(0.2), &interaction, &tuning);
        assert!(swarm.instances[0].position.x > 50.0);
    }

    #[test]
    fn glow_follows_bio_boost() {
        let tuning = PlanktonTuning { count: 4, ..Default::default() };
        let mut swarm = PlanktonSwarm::spawn(&tuning);
        swarm.update(0.016, &params(0.0), &far_interaction(), &tuning);
        let surface_glow = swarm.material.emissive_intensity;
        swarm.update(0.016, &params(1.0), &far_interaction(), &tuning);
        assert!(swarm.material.emissive_intensity > surface_glow);
    }
}
