//! The angler fish: a single predator patrolling the abyss.
//!
//! Its lure light and emissive are locked to one color and driven solely by
//! the depth reveal alpha, never by the pulse/proximity system the
//! jellyfish use. Every sub-part shares one opacity.

use engine_core::color::Rgb;
use engine_core::Vec3;
use scene::{Material, PointLight, SceneNode};

use crate::config::AnglerTuning;
use crate::zones::VisualParams;

/// Explicitly enumerated sub-parts; opacity propagation is a direct field
/// write over this list, never a runtime type check.
pub struct Angler {
    /// Group position in world space.
    pub position: Vec3,
    pub body: SceneNode,
    pub jaw: SceneNode,
    pub eyes: [SceneNode; 2],
    pub dorsal_fin: SceneNode,
    pub pectoral_fins: [SceneNode; 2],
    pub tail: SceneNode,
    pub fangs: Vec<SceneNode>,
    pub rod: SceneNode,
    pub lure: SceneNode,
    pub light: PointLight,
    lure_offset: Vec3,
}

impl Angler {
    pub fn spawn(tuning: &AnglerTuning) -> Self {
        let lure_color = Rgb::from_hex(tuning.lure_color);
        let lure_offset = Vec3::new(85.0, 20.0, 0.0);

        let mut lure = SceneNode::at(lure_offset);
        lure.material = Material::emissive(lure_color, 0.0);
        lure.material.color = lure_color;

        let mut light = PointLight::new(lure_color, 0.0, tuning.lure_range);
        light.decay = tuning.lure_decay;

        // Four upper and four lower fangs along the jaw line.
        let fangs = (0..8)
            .map(|i| {
                let (x, y, pitch) = if i < 4 { (45.0, 8.0, 14.0) } else { (40.0, -25.0, 12.0) };
                SceneNode::at(Vec3::new(x, y, (i % 4) as f32 * pitch - 1.5 * pitch))
            })
            .collect();

        Self {
            position: Vec3::new(-tuning.patrol_bound, tuning.y_base, 0.0),
            body: SceneNode::default(),
            jaw: SceneNode::at(Vec3::new(15.0, -10.0, 0.0)),
            eyes: [
                SceneNode::at(Vec3::new(35.0, 12.0, 18.0)),
                SceneNode::at(Vec3::new(35.0, 12.0, -18.0)),
            ],
            dorsal_fin: SceneNode::at(Vec3::new(-20.0, 35.0, 0.0)),
            pectoral_fins: [
                SceneNode::at(Vec3::new(0.0, -5.0, 45.0)),
                SceneNode::at(Vec3::new(0.0, -5.0, -45.0)),
            ],
            tail: SceneNode::at(Vec3::new(-70.0, 0.0, 0.0)),
            fangs,
            rod: SceneNode::at(Vec3::new(55.0, 45.0, 0.0)),
            lure,
            light,
            lure_offset,
        }
    }

    pub fn update(&mut self, dt: f32, elapsed: f32, params: &VisualParams, tuning: &AnglerTuning) {
        // Patrol: constant drift along +x, wrapping bound to bound.
        self.position.x += tuning.patrol_speed * dt;
        if self.position.x > tuning.patrol_bound {
            self.position.x = -tuning.patrol_bound;
        }
        self.position.y = tuning.y_base + (elapsed * tuning.y_rate).sin() * tuning.y_amplitude;

        // The tail beats at its own faster frequency.
        self.tail
            .transform
            .set_rotation_y((elapsed * tuning.tail_rate).sin() * tuning.tail_amplitude);

        let alpha = params.angler_alpha;
        let lure_color = Rgb::from_hex(tuning.lure_color);

        // Color lock: reveal drives intensity only, never hue.
        self.light.color = lure_color;
        self.light.intensity = tuning.lure_intensity * alpha;
        self.light.range = tuning.lure_range;
        self.light.decay = tuning.lure_decay;
        self.light.position = self.position + self.lure_offset;

        self.lure.material.color = lure_color;
        self.lure.material.emissive = lure_color;
        self.lure.material.emissive_intensity = 2.0 * alpha;

        let visible = alpha > 0.0;
        for part in self.parts_mut() {
            part.material.opacity = alpha;
            part.visible = visible;
        }
    }

    /// All mesh sub-parts, for uniform opacity/visibility writes.
    pub fn parts_mut(&mut self) -> impl Iterator<Item = &mut SceneNode> {
        std::iter::once(&mut self.body)
            .chain(std::iter::once(&mut self.jaw))
            .chain(self.eyes.iter_mut())
            .chain(std::iter::once(&mut self.dorsal_fin))
            .chain(self.pectoral_fins.iter_mut())
            .chain(std::iter::once(&mut self.tail))
            .chain(self.fangs.iter_mut())
            .chain(std::iter::once(&mut self.rod))
            .chain(std::iter::once(&mut self.lure))
    }

}
