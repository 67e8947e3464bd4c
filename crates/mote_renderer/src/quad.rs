//! Planar parallelogram primitive.

use std::sync::Arc;

use mote_math::{Aabb, Interval, Ray, Vec3};

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};

/// A parallelogram defined by a corner Q and two edge vectors u, v.
///
/// The plane normal, plane constant D, and the basis-solving vector
/// w = n / (n . n) are precomputed at construction.
pub struct Quad {
    q: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    normal: Vec3,
    d: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Quad {
    pub fn new(q: Vec3, u: Vec3, v: Vec3, material: Arc<dyn Material>) -> Self {
        let n = u.cross(v);
        let normal = n.normalize();
        let d = normal.dot(q);
        let w = n / n.dot(n);

        // Bounding box of all four corners
        let bbox_diagonal1 = Aabb::from_points(q, q + u + v);
        let bbox_diagonal2 = Aabb::from_points(q + u, q + v);
        let bbox = Aabb::surrounding(&bbox_diagonal1, &bbox_diagonal2);

        Self {
            q,
            u,
            v,
            w,
            normal,
            d,
            material,
            bbox,
        }
    }

    /// A point is interior iff both planar coordinates lie in [0, 1].
    fn is_interior(alpha: f32, beta: f32) -> bool {
        let unit = Interval::new(0.0, 1.0);
        unit.contains(alpha) && unit.contains(beta)
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let denom = self.normal.dot(ray.direction);

        // No hit if the ray is parallel to the plane.
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.d - self.normal.dot(ray.origin)) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        // Planar coordinates of the hit point in the (u, v) basis.
        let intersection = ray.at(t);
        let planar_hitpt = intersection - self.q;
        let alpha = self.w.dot(planar_hitpt.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar_hitpt));

        if !Self::is_interior(alpha, beta) {
            return None;
        }

        Some(HitRecord::new(
            ray,
            t,
            intersection,
            self.normal,
            (alpha, beta),
            self.material.as_ref(),
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
