//! A sunken ship anchor, static in the water. Only its depth reveal
//! animates: every part fades in together as the viewer descends.

use engine_core::{Transform, Vec3};
use scene::SceneNode;

use crate::config::AnchorTuning;
use crate::zones::VisualParams;

pub struct Anchor {
    /// Group transform; parts hold group-local positions.
    pub root: Transform,
    pub parts: Vec<SceneNode>,
}

impl Anchor {
    pub fn spawn(tuning: &AnchorTuning) -> Self {
        let mut root = Transform::from_position(Vec3::from(tuning.position));
        root.scale = Vec3::splat(tuning.scale);

        let mut parts = Vec::new();

        // Shank with crown at the foot and stock across the head.
        parts.push(SceneNode::default());
        parts.push(SceneNode::at(Vec3::new(0.0, -60.0, 0.0)));
        parts.push(SceneNode::at(Vec3::new(0.0, 55.0, 0.0)));

        // Eye, shackle and mooring ring above the stock.
        parts.push(SceneNode::at(Vec3::new(0.0, 70.0, 0.0)));
        parts.push(SceneNode::at(Vec3::new(0.0, 82.0, 0.0)));
        parts.push(SceneNode::at(Vec3::new(0.0, 95.0, 0.0)));

        // Arms sweeping out from the crown, one fluke at each tip.
        for side in [-1.0f32, 1.0] {
            parts.push(SceneNode::at(Vec3::new(side * 28.0, -52.0, 0.0)));
            parts.push(SceneNode::at(Vec3::new(side * 50.0, -38.0, 0.0)));
        }

        // Chain rising from the ring in a loose spiral.
        for i in 0..tuning.chain_links {
            let t = i as f32;
            parts.push(SceneNode::at(Vec3::new(
                (t * 0.8).sin() * 12.0,
                100.0 + t * 14.0,
                (t * 0.8).cos() * 12.0,
            )));
        }

        Self { root, parts }
    }

    pub fn update(&mut self, params: &VisualParams) {
        let alpha = params.anchor_alpha;
        let visible = alpha > 0.0;
        for part in &mut self.parts {
            part.material.opacity = alpha;
            part.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoneTuning;
    use crate::depth::DepthState;
    use crate::zones::VisualParams;

    fn params(depth: f32) -> VisualParams {
        VisualParams::derive(&DepthState { depth, elapsed: 0.0 }, &ZoneTuning::default())
    }

    #[test]
    fn hidden_in_shallow_water() {
        let t = AnchorTuning::default();
        let mut anchor = Anchor::spawn(&t);
        anchor.update(&params(0.4));
        for part in &anchor.parts {
            assert_eq!(part.material.opacity, 0.0);
            assert!(!part.visible);
        }
    }

    #[test]
    fn reveal_is_uniform_across_parts() {
        let t = AnchorTuning::default();
        let mut anchor = Anchor::spawn(&t);
        // Midway through the reveal band.
        anchor.update(&params(0.7));
        let expected = (0.7 - 0.6) / 0.2;
        for part in &anchor.parts {
            assert!((part.material.opacity - expected).abs() < 1e-6);
            assert!(part.visible);
        }
    }

    #[test]
    fn spawn_counts_include_chain() {
        let t = AnchorTuning::default();
        let anchor = Anchor::spawn(&t);
        assert_eq!(anchor.parts.len(), 10 + t.chain_links);
    }

    #[test]
    fn root_takes_configured_placement() {
        let t = AnchorTuning::default();
        let anchor = Anchor::spawn(&t);
        assert_eq!(anchor.root.position, Vec3::from(t.position));
        assert_eq!(anchor.root.scale, Vec3::splat(t.scale));
    }
}
