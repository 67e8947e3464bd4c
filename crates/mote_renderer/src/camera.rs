//! Camera for ray generation.

use mote_math::sampling::{gen_f32, random_in_unit_disk};
use mote_math::{Ray, Vec3};
use rand::RngCore;

use crate::renderer;

/// Camera generating jittered rays into the scene.
///
/// Configure with the builder methods; `render` re-derives the viewport
/// state from the configuration every time it starts, and never mutates it
/// mid-render. Call `initialize()` yourself only when generating rays
/// directly with `get_ray`.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    image_width: u32,
    aspect_ratio: f32,
    samples_per_pixel: u32,
    max_depth: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,          // Vertical field of view in degrees
    defocus_angle: f32, // Variation angle of rays through each pixel, degrees
    focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Cached computed values (set by initialize())
    image_height: u32,
    samples_scale: f32,
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 10,
            max_depth: 50,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            // Cached values (filled in by initialize())
            image_height: 0,
            samples_scale: 0.0,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
        }
    }

    /// Set image width and aspect ratio; height is derived.
    pub fn with_image(mut self, width: u32, aspect_ratio: f32) -> Self {
        self.image_width = width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Derive the viewport state. `render` calls this itself; call it
    /// manually before generating rays directly with `get_ray`.
    pub fn initialize(&mut self) {
        self.image_height = ((self.image_width as f32 / self.aspect_ratio) as u32).max(1);
        self.samples_scale = 1.0 / self.samples_per_pixel as f32;
        self.center = self.look_from;

        // Viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Orthonormal camera basis
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        // Pixel-to-pixel delta vectors
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Location of the upper left pixel
        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Defocus disk basis vectors
        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        log::debug!(
            "camera initialized: {}x{}, {} spp, depth {}",
            self.image_width,
            self.image_height,
            self.samples_per_pixel,
            self.max_depth
        );
    }

    /// Generate a ray for pixel (i, j), jittered within the pixel and
    /// assigned a uniformly random time in [0, 1) for motion blur.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + (i as f32 + offset.x) * self.pixel_delta_u
            + (j as f32 + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        let ray_direction = pixel_sample - ray_origin;
        let ray_time = gen_f32(rng);

        Ray::new(ray_origin, ray_direction, ray_time)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Image height derived by `initialize()` (floored, minimum 1).
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The 1 / samples_per_pixel averaging factor.
    pub fn samples_scale(&self) -> f32 {
        self.samples_scale
    }

    /// Render the scene with this camera.
    ///
    /// Re-derives the viewport state from the current configuration, then
    /// runs [`renderer::render`].
    pub fn render(&mut self, world: &dyn crate::Hittable) -> renderer::ImageBuffer {
        self.initialize();
        renderer::render(self, world)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a random point in the [-0.5, 0.5] x [-0.5, 0.5] unit square.
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}
