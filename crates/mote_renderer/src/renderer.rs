//! Core path tracing loop and image output.
//!
//! `ray_color` is the recursive Monte Carlo estimator; `render` runs it for
//! every pixel, parallelized across scanlines with rayon.

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};

use mote_math::{Color, Interval, Ray};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::{Camera, Hittable};

/// Compute the color seen along a ray.
///
/// Recursive light transport: on a hit, the material's attenuation
/// multiplies the color gathered by the scattered ray. Depth 0 returns
/// black, bounding the recursion.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    // The 0.001 lower bound suppresses self-intersection acne at the
    // origin of secondary rays.
    match world.hit(ray, Interval::new(0.001, f32::INFINITY)) {
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1, rng)
            }
            None => Color::ZERO,
        },
        None => sky_gradient(ray),
    }
}

/// Background: white-to-sky-blue blend by the ray direction's height.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

/// Render a single pixel: average of `samples_per_pixel` jittered rays.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel() {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth(), rng);
    }

    pixel_color * camera.samples_scale()
}

/// Render the whole frame, parallelized across scanlines.
///
/// Each row gets its own entropy-seeded rng, so rows are independent and
/// write non-overlapping output regions.
pub fn render(camera: &Camera, world: &dyn Hittable) -> ImageBuffer {
    let width = camera.image_width();
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);
    let remaining = AtomicU32::new(height);

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = StdRng::from_entropy();
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, world, x as u32, y as u32, &mut rng);
            }
            let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
            log::info!("scanlines remaining: {}", left);
        });

    image
}

/// Convert a color to output bytes: channels clamped to [0, 0.999] and
/// scaled by 256, truncated.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    const INTENSITY: Interval = Interval {
        min: 0.0,
        max: 0.999,
    };

    [
        (256.0 * INTENSITY.clamp(color.x)) as u8,
        (256.0 * INTENSITY.clamp(color.y)) as u8,
        (256.0 * INTENSITY.clamp(color.z)) as u8,
    ]
}

/// Image buffer holding linear colors, row-major with the top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to packed RGB8 bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Write an image as plain-text PPM (P3): header, then one pixel per line,
/// top-to-bottom, left-to-right.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for pixel in &image.pixels {
        let rgb = color_to_rgb8(*pixel);
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Sphere};
    use mote_math::Vec3;
    use std::sync::Arc;

    #[test]
    fn test_sky_gradient_blend() {
        // Straight up is the sky blue, straight down is white
        let up = sky_gradient(&Ray::new_simple(Vec3::ZERO, Vec3::Y));
        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-5);

        let down = sky_gradient(&Ray::new_simple(Vec3::ZERO, -Vec3::Y));
        assert!((down - Color::new(1.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_ray_color_depth_zero_is_black() {
        let world = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Y);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(ray_color(&ray, &world, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_ray_color_miss_returns_gradient() {
        let world = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Y);
        let mut rng = StdRng::seed_from_u64(2);
        let color = ray_color(&ray, &world, 10, &mut rng);
        assert!((color - Color::new(0.5, 0.7, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(-1.0, 0.5, 2.0)), [0, 128, 255]);
    }

    #[test]
    fn test_write_ppm_format() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 0.0, 1.0));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 0\n0 0 255\n");
    }

    /// Scenario A: a foreground sphere over a ground sphere; the image
    /// center hits the sphere and differs from the corner background.
    #[test]
    fn test_render_center_differs_from_corners() {
        let mut world = HittableList::new();
        let red = Arc::new(Lambertian::new(Color::new(0.9, 0.1, 0.1)));
        let gray = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, red)));
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            gray,
        )));

        let mut camera = Camera::new()
            .with_image(21, 1.0)
            .with_quality(1, 1)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);
        camera.initialize();

        let image = render(&camera, &world);

        // With max depth 1, anything hit scatters once and then cuts off to
        // black, while the top corners see the background gradient.
        let center = image.get(10, 10);
        let corner = image.get(0, 0);
        assert!((center - corner).length() > 0.1);
        assert_eq!(center, Color::ZERO);
        assert!(corner.length() > 0.5);
    }

    /// Scenario B: with no objects, averaging many samples converges to the
    /// analytic background gradient at the pixel center.
    #[test]
    fn test_render_converges_to_background() {
        let world = HittableList::new();

        let mut camera = Camera::new()
            .with_image(3, 1.0)
            .with_quality(2000, 5)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(7);
        let averaged = render_pixel(&camera, &world, 1, 1, &mut rng);

        // The center pixel's rays all point near (0, 0, -1)
        let expected = sky_gradient(&Ray::new_simple(Vec3::ZERO, -Vec3::Z));
        assert!((averaged - expected).length() < 0.05);

        // One sample runs the same code path and stays in gamut
        let mut camera1 = camera.clone().with_quality(1, 5);
        camera1.initialize();
        let single = render_pixel(&camera1, &world, 1, 1, &mut rng);
        for ch in [single.x, single.y, single.z] {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
}
