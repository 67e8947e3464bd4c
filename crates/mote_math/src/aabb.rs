use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box, defined by one interval per axis.
///
/// Every primitive precomputes its box; the scene aggregate maintains the
/// union of its members' boxes incrementally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    ///
    /// The points are treated as extrema, so no particular coordinate
    /// ordering is required.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));

        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method: each axis narrows the running interval; once it becomes
    /// empty there is no hit. A zero direction component divides to IEEE
    /// infinity, which handles plane-parallel rays without special cases.
    /// Grazing convention: a narrowed interval with max <= min is a miss.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let ray_orig = r.origin;
        let ray_dir = r.direction;

        for axis in 0..3 {
            let ax = self.axis_interval(axis);
            let adinv = 1.0 / ray_dir[axis];

            let mut t0 = (ax.min - ray_orig[axis]) * adinv;
            let mut t1 = (ax.max - ray_orig[axis]) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals so no axis is degenerate (zero width).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    /// An empty AABB (contains nothing).
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// A universe AABB (contains everything).
    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let a = Vec3::new(10.0, 0.0, 3.0);
        let b = Vec3::new(0.0, 10.0, 7.0);
        let aabb = Aabb::from_points(a, b);

        assert_eq!(aabb.x.min, 0.0);
        assert_eq!(aabb.x.max, 10.0);
        assert_eq!(aabb.y.min, 0.0);
        assert_eq!(aabb.y.max, 10.0);
        assert_eq!(aabb.z.min, 3.0);
        assert_eq!(aabb.z.max, 7.0);
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box2 = Aabb::from_points(Vec3::new(3.0, 3.0, 3.0), Vec3::new(10.0, 10.0, 10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.x.min, 0.0);
        assert_eq!(surrounding.x.max, 10.0);

        // Union with EMPTY is the identity
        let with_empty = Aabb::surrounding(&Aabb::EMPTY, &box1);
        assert_eq!(with_empty, box1);
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 0.0);
        assert!(aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), -Vec3::Z, 0.0);
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z, 0.0);
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Box entirely behind the query interval
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 0.0);
        assert!(!aabb.hit(&ray, Interval::new(0.0, 1.0)));
    }

    #[test]
    fn test_aabb_hit_axis_parallel_ray() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Zero direction components divide to infinity; the interval for
        // those axes stays open and the test must not panic.
        let inside = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(aabb.hit(&inside, Interval::new(0.0, 100.0)));

        let outside = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(!aabb.hit(&outside, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_aabb_grazing_convention() {
        // An unpadded box built directly from intervals keeps exact faces.
        let aabb = Aabb {
            x: Interval::new(-1.0, 1.0),
            y: Interval::new(-1.0, 1.0),
            z: Interval::new(-1.0, 1.0),
        };

        // Diagonal ray touching exactly the (1, 1, z) edge: the x and y
        // slabs narrow the interval to a single point, which is a miss.
        let graze = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 0.0), 0.0);
        assert!(!aabb.hit(&graze, Interval::new(0.0, 100.0)));

        // Aimed slightly lower, the slabs overlap and it hits.
        let inside = Ray::new(Vec3::new(2.0, -0.1, 0.0), Vec3::new(-1.0, 1.0, 0.0), 0.0);
        assert!(aabb.hit(&inside, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_aabb_degenerate_box_is_padded() {
        // A flat box (e.g. an axis-aligned quad) still has usable extent.
        let flat = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(flat.z.size() > 0.0);

        let ray = Ray::new(Vec3::new(0.5, 0.5, -1.0), Vec3::Z, 0.0);
        assert!(flat.hit(&ray, Interval::new(0.0, 100.0)));
    }
}
