//! The classic random-spheres cover scene.
//!
//! Renders a ground sphere, a grid of small diffuse/metal/glass spheres
//! (some with motion blur), and three large feature spheres, then writes
//! the result as plain PPM.

use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

use anyhow::Result;
use mote_renderer::{
    write_ppm, Camera, Color, Dielectric, HittableList, Lambertian, Material, Metal, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<()> {
    env_logger::init();

    let world = build_scene();

    let mut camera = Camera::new()
        .with_image(400, 16.0 / 9.0)
        .with_quality(100, 50)
        .with_position(
            Vec3::new(13.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .with_lens(20.0, 0.6, 10.0);

    let start = std::time::Instant::now();
    let image = camera.render(&world);
    log::info!("rendered in {:?}", start.elapsed());

    let file = File::create("out.ppm")?;
    let mut writer = BufWriter::new(file);
    write_ppm(&image, &mut writer)?;
    log::info!("wrote out.ppm");

    Ok(())
}

fn build_scene() -> HittableList {
    let mut rng = StdRng::seed_from_u64(20260823);
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f32 = rng.gen();
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse, drifting upward over the shutter interval
                let albedo = Color::new(
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                );
                let material: Arc<dyn Material> = Arc::new(Lambertian::new(albedo));
                let center2 = center + Vec3::new(0.0, 0.5 * rng.gen::<f32>(), 0.0);
                world.add(Box::new(Sphere::new_moving(center, center2, 0.2, material)));
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = Color::new(
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                );
                let fuzz = 0.5 * rng.gen::<f32>();
                let material: Arc<dyn Material> = Arc::new(Metal::new(albedo, fuzz));
                world.add(Box::new(Sphere::new(center, 0.2, material)));
            } else {
                // Glass
                let material: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
                world.add(Box::new(Sphere::new(center, 0.2, material)));
            }
        }
    }

    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass)));

    let brown: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)));
    world.add(Box::new(Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, brown)));

    let steel: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0));
    world.add(Box::new(Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, steel)));

    log::info!("scene built: {} objects", world.len());
    world
}
