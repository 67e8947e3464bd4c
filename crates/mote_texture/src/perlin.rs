//! Gradient noise for procedural textures.

use mote_math::sampling::random_unit_vector;
use mote_math::Vec3;
use rand::{Rng, RngCore};

const POINT_COUNT: usize = 256;

/// Perlin gradient noise generator.
///
/// All state (gradient table plus one permutation per axis) is generated at
/// construction from the supplied rng and is immutable afterwards, so each
/// instance evaluates deterministically and instances are independent.
pub struct Perlin {
    rand_vec: Vec<Vec3>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    /// Create a new generator seeded from the given rng.
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let rand_vec = (0..POINT_COUNT).map(|_| random_unit_vector(rng)).collect();

        Self {
            rand_vec,
            perm_x: generate_perm(rng),
            perm_y: generate_perm(rng),
            perm_z: generate_perm(rng),
        }
    }

    /// Evaluate smoothed gradient noise at a point. Output is in [-1, 1].
    pub fn noise(&self, p: Vec3) -> f32 {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i32;
        let j = p.y.floor() as i32;
        let k = p.z.floor() as i32;

        // Gradients at the 8 corners of the lattice cell, fetched by
        // hashing the corner coordinates through the permutation tables.
        let mut c = [[[Vec3::ZERO; 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, corner) in row.iter_mut().enumerate() {
                    *corner = self.rand_vec[self.perm_x[((i + di as i32) & 255) as usize]
                        ^ self.perm_y[((j + dj as i32) & 255) as usize]
                        ^ self.perm_z[((k + dk as i32) & 255) as usize]];
                }
            }
        }

        perlin_interp(&c, u, v, w)
    }

    /// Multi-octave turbulence: sums octaves of noise magnitude, halving
    /// amplitude and doubling frequency each step. Always non-negative.
    pub fn turb(&self, p: Vec3, depth: u32) -> f32 {
        let mut accum = 0.0;
        let mut temp_p = p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(temp_p).abs();
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum
    }
}

/// Random permutation of [0, 256) via Fisher-Yates.
fn generate_perm(rng: &mut dyn RngCore) -> Vec<usize> {
    let mut p: Vec<usize> = (0..POINT_COUNT).collect();
    for i in (1..POINT_COUNT).rev() {
        let target = rng.gen_range(0..=i);
        p.swap(i, target);
    }
    p
}

/// Trilinear interpolation of corner gradients with Hermite smoothing.
fn perlin_interp(c: &[[[Vec3; 2]; 2]; 2], u: f32, v: f32, w: f32) -> f32 {
    let uu = u * u * (3.0 - 2.0 * u);
    let vv = v * v * (3.0 - 2.0 * v);
    let ww = w * w * (3.0 - 2.0 * w);
    let mut accum = 0.0;

    for (i, plane) in c.iter().enumerate() {
        for (j, row) in plane.iter().enumerate() {
            for (k, corner) in row.iter().enumerate() {
                let (fi, fj, fk) = (i as f32, j as f32, k as f32);
                let weight_v = Vec3::new(u - fi, v - fj, w - fk);
                accum += (fi * uu + (1.0 - fi) * (1.0 - uu))
                    * (fj * vv + (1.0 - fj) * (1.0 - vv))
                    * (fk * ww + (1.0 - fk) * (1.0 - ww))
                    * corner.dot(weight_v);
            }
        }
    }

    accum
}
