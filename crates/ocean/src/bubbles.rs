//! Bubbles: passive spheres that rise with a time-phased horizontal sway
//! and wrap at the vertical bound. No pointer interaction.

use engine_core::Vec3;
use scene::SceneNode;

use crate::config::BubbleTuning;

/// Per-bubble motion parameters, fixed at creation.
#[derive(Debug, Clone, Copy)]
struct BubbleMotion {
    speed: f32,
    phase: f32,
}

pub struct Bubbles {
    pub nodes: Vec<SceneNode>,
    motion: Vec<BubbleMotion>,
}

impl Bubbles {
    pub fn spawn(tuning: &BubbleTuning) -> Self {
        let [ex, ey, ez] = tuning.spawn_extent;
        let mut nodes = Vec::with_capacity(tuning.count);
        let mut motion = Vec::with_capacity(tuning.count);
        for _ in 0..tuning.count {
            let position = Vec3::new(
                (rand::random::<f32>() - 0.5) * 2.0 * ex,
                (rand::random::<f32>() - 0.5) * 2.0 * ey,
                (rand::random::<f32>() - 0.5) * 2.0 * ez,
            );
            let radius = tuning.radius_min
                + rand::random::<f32>() * (tuning.radius_max - tuning.radius_min);
            let mut node = SceneNode::at(position);
            node.transform.scale = Vec3::splat(radius);
            nodes.push(node);
            motion.push(BubbleMotion {
                speed: tuning.speed_min
                    + rand::random::<f32>() * (tuning.speed_max - tuning.speed_min),
                phase: rand::random::<f32>() * std::f32::consts::PI,
            });
        }
        Self { nodes, motion }
    }

    pub fn update(&mut self, dt: f32, elapsed: f32, tuning: &BubbleTuning) {
        for (node, motion) in self.nodes.iter_mut().zip(&self.motion) {
            let pos = &mut node.transform.position;
            pos.y += motion.speed * dt;
            pos.x += (elapsed + motion.phase).sin() * tuning.sway_amplitude * dt;
            if pos.y > tuning.vertical_bound {
                pos.y = -tuning.vertical_bound;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubbles_rise() {
        let tuning = BubbleTuning { count: 3, ..Default::default() };
        let mut bubbles = Bubbles::spawn(&tuning);
        let before: Vec<f32> = bubbles.nodes.iter().map(|n| n.transform.position.y).collect();
        bubbles.update(0.5, 1.0, &tuning);
        for (node, y0) in bubbles.nodes.iter().zip(before) {
            let y = node.transform.position.y;
            // Either rose, or wrapped to the bottom bound.
            assert!(y > y0 || y == -tuning.vertical_bound);
        }
    }

    #[test]
    fn bubble_wraps_at_bound_same_frame() {
        let tuning = BubbleTuning { count: 1, ..Default::default() };
        let mut bubbles = Bubbles::spawn(&tuning);
        bubbles.nodes[0].transform.position.y = tuning.vertical_bound;
        bubbles.update(0.1, 0.0, &tuning);
        assert_eq!(bubbles.nodes[0].transform.position.y, -tuning.vertical_bound);
    }

    #[test]
    fn sway_moves_horizontally_over_time() {
        let tuning = BubbleTuning { count: 1, ..Default::default() };
        let mut bubbles = Bubbles::spawn(&tuning);
        let x0 = bubbles.nodes[0].transform.position.x;
        // Pick an elapsed time where sin(elapsed + phase) is nonzero.
        let mut moved = false;
        for step in 0..8 {
            bubbles.update(0.1, step as f32 * 0.5, &tuning);
            if (bubbles.nodes[0].transform.position.x - x0).abs() > 1e-4 {
                moved = true;
                break;
            }
        }
        assert!(moved);
    }
}
