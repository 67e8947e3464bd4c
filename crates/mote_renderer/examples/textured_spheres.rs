//! Texture showcase: checker ground, Perlin marble, image lookup, and a
//! quad backdrop.
//!
//! Pass an image path as the first argument to texture the right-hand
//! sphere; without one (or with an unreadable file) it renders solid cyan,
//! the missing-texture sentinel.

use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

use anyhow::Result;
use mote_renderer::{
    write_ppm, Camera, CheckerTexture, Color, HittableList, ImageTexture, Lambertian, Material,
    NoiseTexture, Quad, Sphere, Texture, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(7);
    let mut world = HittableList::new();

    // Checkered ground
    let checker: Arc<dyn Texture> = Arc::new(CheckerTexture::from_colors(
        0.32,
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ));
    let ground: Arc<dyn Material> = Arc::new(Lambertian::from_texture(checker));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    // Marble sphere
    let marble: Arc<dyn Texture> = Arc::new(NoiseTexture::new(4.0, &mut rng));
    let marble_mat: Arc<dyn Material> = Arc::new(Lambertian::from_texture(marble));
    world.add(Box::new(Sphere::new(Vec3::new(-2.2, 1.0, 0.0), 1.0, marble_mat)));

    // Image-textured sphere (cyan sentinel when the file is missing)
    let path = std::env::args().nth(1).unwrap_or_default();
    let image_tex: Arc<dyn Texture> = Arc::new(ImageTexture::open(&path));
    let image_mat: Arc<dyn Material> = Arc::new(Lambertian::from_texture(image_tex));
    world.add(Box::new(Sphere::new(Vec3::new(2.2, 1.0, 0.0), 1.0, image_mat)));

    // Quad backdrop
    let backdrop: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3)));
    world.add(Box::new(Quad::new(
        Vec3::new(-4.0, 0.0, -3.0),
        Vec3::new(8.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 0.0),
        backdrop,
    )));

    let mut camera = Camera::new()
        .with_image(400, 16.0 / 9.0)
        .with_quality(100, 50)
        .with_position(
            Vec3::new(0.0, 2.0, 9.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .with_lens(30.0, 0.0, 9.0);

    let image = camera.render(&world);

    let file = File::create("textured.ppm")?;
    let mut writer = BufWriter::new(file);
    write_ppm(&image, &mut writer)?;
    log::info!("wrote textured.ppm");

    Ok(())
}
