//! Sphere primitive, stationary or moving.

use std::f32::consts::PI;
use std::sync::Arc;

use mote_math::{Aabb, Interval, Ray, Vec3};

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};

/// A sphere primitive.
///
/// The center is stored as a ray: origin at time 0, direction covering the
/// motion over the shutter interval. A stationary sphere has zero motion.
pub struct Sphere {
    center: Ray,
    radius: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Create a stationary sphere. Negative radii are clamped to zero.
    pub fn new(static_center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(static_center - rvec, static_center + rvec);

        Self {
            center: Ray::new_simple(static_center, Vec3::ZERO),
            radius,
            material,
            bbox,
        }
    }

    /// Create a sphere whose center moves linearly from `center1` (time 0)
    /// to `center2` (time 1). The bounding box covers the full time range.
    pub fn new_moving(
        center1: Vec3,
        center2: Vec3,
        radius: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let box1 = Aabb::from_points(center1 - rvec, center1 + rvec);
        let box2 = Aabb::from_points(center2 - rvec, center2 + rvec);

        Self {
            center: Ray::new_simple(center1, center2 - center1),
            radius,
            material,
            bbox: Aabb::surrounding(&box1, &box2),
        }
    }

    /// UV coordinates for a point on the unit sphere centered at the origin.
    ///
    /// u: angle around the Y axis from X=-1, in [0,1].
    /// v: angle from Y=-1 up to Y=+1, in [0,1].
    fn sphere_uv(p: Vec3) -> (f32, f32) {
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // A degenerate sphere has no surface. Without this guard a ray
        // through the exact center solves a zero discriminant and divides
        // 0/0 computing the normal.
        if self.radius <= 0.0 {
            return None;
        }

        let current_center = self.center.at(ray.time);
        let oc = current_center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root strictly inside the query interval; the open bounds
        // drop grazing roots at the interval edges.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - current_center) / self.radius;
        log::trace!("sphere hit at t={} p={:?}", root, p);

        Some(HitRecord::new(
            ray,
            root,
            p,
            outward_normal,
            Self::sphere_uv(outward_normal),
            self.material.as_ref(),
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
