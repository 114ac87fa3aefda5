use crate::core::types::{Colour, Point2};
use crate::texture::{PanoramaInstance, PanoramaTexture};

/// A panorama that is the same colour in every direction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolidPanorama {
    pub albedo: Colour,
}

impl From<Colour> for SolidPanorama {
    fn from(albedo: Colour) -> Self { Self { albedo } }
}

impl From<Colour> for PanoramaInstance {
    fn from(value: Colour) -> Self { SolidPanorama::from(value).into() }
}

impl Default for SolidPanorama {
    fn default() -> Self { Colour::BLACK.into() }
}

impl PanoramaTexture for SolidPanorama {
    fn sample(&self, _uv: Point2) -> Colour { self.albedo }

    fn sample_bilinear(&self, _uv: Point2) -> Colour { self.albedo }
}
