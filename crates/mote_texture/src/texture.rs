//! Texture trait and its variants.

use std::sync::Arc;

use mote_math::{Color, Interval, Vec3};
use rand::RngCore;

use crate::{Perlin, RasterImage};

/// Maps a surface point to a color.
///
/// Pure function of the inputs: textures own no mutable state, so one
/// instance can be shared across any number of materials.
pub trait Texture: Send + Sync {
    /// Color at UV coordinates (u, v) and world point p.
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color;
}

/// Constant color everywhere.
pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn from_rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(Color::new(red, green, blue))
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.albedo
    }
}

/// 3D checker pattern alternating between two child textures.
///
/// Space is partitioned into cubic cells of the given scale; the parity of
/// the summed floored cell coordinates picks the child.
pub struct CheckerTexture {
    inv_scale: f32,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(scale: f32, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    /// Checker between two solid colors.
    pub fn from_colors(scale: f32, c1: Color, c2: Color) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(c1)),
            Arc::new(SolidColor::new(c2)),
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        let x = (self.inv_scale * p.x).floor() as i64;
        let y = (self.inv_scale * p.y).floor() as i64;
        let z = (self.inv_scale * p.z).floor() as i64;

        if (x + y + z) % 2 == 0 {
            self.even.value(u, v, p)
        } else {
            self.odd.value(u, v, p)
        }
    }
}

/// Lookup into a decoded bitmap.
pub struct ImageTexture {
    image: RasterImage,
}

impl ImageTexture {
    pub fn new(image: RasterImage) -> Self {
        Self { image }
    }

    /// Load from a file, degrading to the empty sentinel on failure.
    pub fn open(path: &str) -> Self {
        Self::new(RasterImage::open(path))
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Vec3) -> Color {
        // No texture data: solid cyan as a debugging aid.
        if self.image.height() == 0 {
            return Color::new(0.0, 1.0, 1.0);
        }

        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        let v = 1.0 - unit.clamp(v); // Flip V to image row order

        let i = (u * self.image.width() as f32) as u32;
        let j = (v * self.image.height() as f32) as u32;
        let pixel = self.image.pixel(i, j);

        let color_scale = 1.0 / 255.0;
        Color::new(
            color_scale * pixel[0] as f32,
            color_scale * pixel[1] as f32,
            color_scale * pixel[2] as f32,
        )
    }
}

/// Marbled pattern driven by Perlin turbulence.
pub struct NoiseTexture {
    noise: Perlin,
    scale: f32,
}

impl NoiseTexture {
    pub fn new(scale: f32, rng: &mut dyn RngCore) -> Self {
        Self {
            noise: Perlin::new(rng),
            scale,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _u: f32, _v: f32, p: Vec3) -> Color {
        // Sinusoidal banding of z, phase-shifted by turbulence: marble veins
        // rather than raw noise amplitude.
        Color::new(0.5, 0.5, 0.5) * (1.0 + (self.scale * p.z + 10.0 * self.noise.turb(p, 7)).sin())
    }
}
