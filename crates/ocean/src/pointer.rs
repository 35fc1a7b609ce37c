//! Pointer-to-world projection and proximity interactions.

use glam::{Vec2, Vec3};
use scene::{Camera, Ray};

/// The pointer's world-space ray and its intersection with the z = 0
/// reference plane. Recomputed from scratch every frame.
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    pub ray: Ray,
    pub world_point: Vec3,
}

/// Project centered pointer coordinates (origin at viewport center, y down)
/// through the camera onto the z = 0 plane.
pub fn project(pointer_centered: Vec2, viewport: Vec2, camera: &Camera) -> Interaction {
    let half = (viewport * 0.5).max(Vec2::splat(1.0));
    let ndc = Vec2::new(pointer_centered.x / half.x, -pointer_centered.y / half.y);
    let ray = camera.ray_from_ndc(ndc);
    let world_point = ray.intersect_plane_z(0.0).unwrap_or(Vec3::ZERO);
    Interaction { ray, world_point }
}

/// Proximity of the pointer ray to a position: 1 at zero distance, falling
/// off quadratically to 0 at `radius`, and exactly 0 beyond it.
pub fn proximity(ray: &Ray, position: Vec3, radius: f32) -> f32 {
    let dist = ray.distance_to_point(position);
    if dist >= radius {
        return 0.0;
    }
    let falloff = 1.0 - dist / radius;
    falloff * falloff
}

/// Repulsion velocity pushing `position` directly away from `point` in the
/// reference plane. Strongest at zero distance (where the direction is
/// degenerate and an arbitrary fixed axis is used), zero at and beyond
/// `radius`.
pub fn repulsion(point: Vec2, position: Vec2, radius: f32, strength: f32) -> Vec2 {
    let offset = position - point;
    let dist = offset.length();
    if dist >= radius {
        return Vec2::ZERO;
    }
    let magnitude = strength * (1.0 - dist / radius);
    if dist < 1e-4 {
        // Pointer exactly on the instance: pick a stable push direction.
        return Vec2::X * magnitude;
    }
    offset / dist * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        let mut c = Camera::default();
        c.set_aspect(1280, 720);
        c
    }

    #[test]
    fn centered_pointer_projects_to_origin() {
        let viewport = Vec2::new(1280.0, 720.0);
        let hit = project(Vec2::ZERO, viewport, &camera());
        assert!(hit.world_point.length() < 1e-2);
    }

    #[test]
    fn pointer_right_projects_right() {
        let viewport = Vec2::new(1280.0, 720.0);
        let hit = project(Vec2::new(320.0, 0.0), viewport, &camera());
        assert!(hit.world_point.x > 0.0);
        // Pointer y is down; world y is up.
        let below = project(Vec2::new(0.0, 180.0), viewport, &camera());
        assert!(below.world_point.y < 0.0);
    }

    #[test]
    fn proximity_is_one_on_the_ray_and_zero_outside() {
        let ray = Ray { origin: Vec3::new(0.0, 0.0, 500.0), direction: Vec3::NEG_Z };
        assert!((proximity(&ray, Vec3::ZERO, 140.0) - 1.0).abs() < 1e-5);
        assert_eq!(proximity(&ray, Vec3::new(141.0, 0.0, 0.0), 140.0), 0.0);
        let part = proximity(&ray, Vec3::new(70.0, 0.0, 0.0), 140.0);
        assert!((part - 0.25).abs() < 1e-4);
    }

    #[test]
    fn repulsion_points_away_and_respects_radius() {
        let push = repulsion(Vec2::ZERO, Vec2::new(100.0, 0.0), 200.0, 300.0);
        assert!(push.x > 0.0);
        assert!(push.y.abs() < 1e-6);
        assert_eq!(repulsion(Vec2::ZERO, Vec2::new(250.0, 0.0), 200.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn repulsion_guards_zero_distance() {
        let push = repulsion(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 200.0, 300.0);
        assert!(push.length() > 0.0);
        assert!(push.is_finite());
    }

    #[test]
    fn repulsion_is_stronger_when_closer() {
        let near = repulsion(Vec2::ZERO, Vec2::new(20.0, 0.0), 200.0, 300.0);
        let far = repulsion(Vec2::ZERO, Vec2::new(150.0, 0.0), 200.0, 300.0);
        assert!(near.length() > far.length());
    }
}
