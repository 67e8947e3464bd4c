//! mote renderer - CPU path tracing
//!
//! A Monte Carlo path tracer: rays are sampled per pixel, scattered
//! recursively off materials, and averaged into the output image.

mod camera;
mod hittable;
mod material;
mod quad;
mod renderer;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, Scatter};
pub use quad::Quad;
pub use renderer::{color_to_rgb8, ray_color, render, render_pixel, write_ppm, ImageBuffer};
pub use sphere::Sphere;

/// Re-export the math and texture types the public API is built from.
pub use mote_math::{Aabb, Color, Interval, Ray, Vec3};
pub use mote_texture::{
    CheckerTexture, ImageTexture, NoiseTexture, Perlin, RasterImage, SolidColor, Texture,
};
