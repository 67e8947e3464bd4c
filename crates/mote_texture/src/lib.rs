//! Texture evaluation for the mote renderer.
//!
//! A texture maps a surface point (UV coordinates plus world position) to a
//! color. Variants: solid color, 3D checker, image lookup, and Perlin-noise
//! marble. Image decoding failures degrade to a sentinel color rather than
//! failing the render.

mod perlin;
mod raster;
mod texture;

pub use perlin::Perlin;
pub use raster::{RasterImage, TextureError, TextureResult};
pub use texture::{CheckerTexture, ImageTexture, NoiseTexture, SolidColor, Texture};
