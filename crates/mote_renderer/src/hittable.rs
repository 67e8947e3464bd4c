//! Hittable trait, HitRecord, and the scene aggregate.

use mote_math::{Aabb, Interval, Ray, Vec3};

use crate::Material;

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection (always points against the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// UV texture coordinates
    pub u: f32,
    pub v: f32,
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric outward normal.
    ///
    /// The stored normal always points against the incoming ray; `front_face`
    /// records which side was hit.
    pub fn new(
        ray: &Ray,
        t: f32,
        p: Vec3,
        outward_normal: Vec3,
        (u, v): (f32, f32),
        material: &'a dyn Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            material,
            u,
            v,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test a ray against this object within the given parameter interval.
    ///
    /// Returns the hit record of the closest intersection, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Get the axis-aligned bounding box of this object.
    fn bounding_box(&self) -> Aabb;
}

/// An ordered collection of hittable objects.
///
/// The closest hit wins; on an exact tie the earlier-added object does.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Add an object to the list, growing the union bounding box.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.bbox = Aabb::surrounding(&self.bbox, &object.bounding_box());
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.bbox = Aabb::EMPTY;
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut best = None;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(rec) = object.hit(ray, interval) {
                closest_so_far = rec.t;
                best = Some(rec);
            }
        }

        best
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use mote_math::Color;
    use std::sync::Arc;

    fn gray() -> Arc<Lambertian> {
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)))
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Z);
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
        assert_eq!(list.bounding_box(), Aabb::EMPTY);
    }

    #[test]
    fn test_closest_hit_wins_regardless_of_order() {
        let material = gray();
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, material.clone());
        let far = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, material.clone());

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let interval = Interval::new(0.001, f32::INFINITY);

        let mut near_first = HittableList::new();
        near_first.add(Box::new(near));
        near_first.add(Box::new(far));

        let near2 = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, material.clone());
        let far2 = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, material);
        let mut far_first = HittableList::new();
        far_first.add(Box::new(far2));
        far_first.add(Box::new(near2));

        let a = near_first.hit(&ray, interval).expect("hit");
        let b = far_first.hit(&ray, interval).expect("hit");
        assert!((a.t - 1.5).abs() < 1e-5);
        assert!((b.t - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_overlapping_spheres_return_smaller_t() {
        // Two overlapping spheres; the ray enters the nearer surface first.
        let material = gray();
        let a = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, material.clone());
        let b = Sphere::new(Vec3::new(0.0, 0.0, -3.5), 1.0, material);

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut list = HittableList::new();
        list.add(Box::new(a));
        list.add(Box::new(b));

        let rec = list.hit(&ray, Interval::new(0.001, f32::INFINITY)).expect("hit");
        assert!((rec.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounding_box_union_grows_incrementally() {
        let material = gray();
        let mut list = HittableList::new();

        list.add(Box::new(Sphere::new(Vec3::ZERO, 1.0, material.clone())));
        assert!((list.bounding_box().x.min - (-1.0)).abs() < 1e-3);

        list.add(Box::new(Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0, material)));
        let bbox = list.bounding_box();
        assert!((bbox.x.min - (-1.0)).abs() < 1e-3);
        assert!((bbox.x.max - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_hit_record_face_orientation() {
        let material = gray();
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, material);

        // From outside: front face, normal against the ray
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).expect("hit");
        assert!(rec.front_face);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!(rec.normal.dot(ray.direction) < 0.0);

        // From inside: back face, normal still against the ray
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, -2.0), -Vec3::Z);
        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).expect("hit");
        assert!(!rec.front_face);
        assert!(rec.normal.dot(ray.direction) < 0.0);
    }
}
