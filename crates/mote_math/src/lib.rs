// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod ray;
pub mod sampling;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;
