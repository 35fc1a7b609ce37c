//! Fixed perspective camera and pointer ray casting.

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

/// A single perspective camera looking at a fixed target.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 500.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
            near: 1.0,
            far: 4000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl Camera {
    /// Create a camera at the given position looking at the origin.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Cast a ray through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection_matrix().inverse();
        let near = unproject(inv, ndc, -1.0);
        let far = unproject(inv, ndc, 1.0);
        Ray {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }
}

fn unproject(inv_view_proj: Mat4, ndc: Vec2, depth: f32) -> Vec3 {
    let clip = Vec4::new(ndc.x, ndc.y, depth, 1.0);
    let world = inv_view_proj * clip;
    if world.w.abs() > f32::EPSILON {
        world.xyz() / world.w
    } else {
        world.xyz()
    }
}

/// A world-space ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Intersect with the plane `z = offset`. Returns `None` when the ray
    /// is parallel to the plane or points away from it.
    pub fn intersect_plane_z(&self, offset: f32) -> Option<Vec3> {
        if self.direction.z.abs() < f32::EPSILON {
            return None;
        }
        let t = (offset - self.origin.z) / self.direction.z;
        if t < 0.0 {
            return None;
        }
        Some(self.origin + self.direction * t)
    }

    /// Shortest distance from the ray to a point. Points behind the origin
    /// measure against the origin itself.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        let to_point = point - self.origin;
        let along = to_point.dot(self.direction);
        if along < 0.0 {
            return to_point.length();
        }
        (to_point - self.direction * along).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        let mut c = Camera::default();
        c.set_aspect(1600, 900);
        c
    }

    #[test]
    fn center_ray_hits_origin_plane() {
        let ray = camera().ray_from_ndc(Vec2::ZERO);
        let hit = ray.intersect_plane_z(0.0).unwrap();
        assert!(hit.x.abs() < 1e-2);
        assert!(hit.y.abs() < 1e-2);
        assert!(hit.z.abs() < 1e-2);
    }

    #[test]
    fn offset_ray_hits_off_center() {
        let ray = camera().ray_from_ndc(Vec2::new(0.5, 0.0));
        let hit = ray.intersect_plane_z(0.0).unwrap();
        assert!(hit.x > 10.0);
        assert!(hit.y.abs() < 1e-2);
    }

    #[test]
    fn plane_behind_camera_misses() {
        let ray = camera().ray_from_ndc(Vec2::ZERO);
        // Camera sits at z=500 looking toward -z; a plane further +z is behind it.
        assert!(ray.intersect_plane_z(1000.0).is_none());
    }

    #[test]
    fn distance_to_point_on_ray_is_zero() {
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        };
        assert!(ray.distance_to_point(Vec3::new(0.0, 0.0, -100.0)) < 1e-5);
        assert!((ray.distance_to_point(Vec3::new(3.0, 4.0, -100.0)) - 5.0).abs() < 1e-4);
        // Behind the origin: distance measured to the origin.
        assert!((ray.distance_to_point(Vec3::new(0.0, 0.0, 10.0)) - 10.0).abs() < 1e-5);
    }
}
