use crate::core::image::EdgeMode;
use crate::core::types::{Colour, Image, Number, Point2};
use crate::texture::{PanoramaTexture, TextureError};
use std::sync::Arc;

/// An equirectangular panorama backed by an image.
///
/// Horizontally the image wraps around (the left and right edges meet at the seam behind the viewer),
/// vertically it is clamped.
///
/// The two samplers disagree on which way `v` points:
/// * [PanoramaTexture::sample] treats `v = 0` as the *bottom* row of the image
/// * [PanoramaTexture::sample_bilinear] treats `v = 0` as the *top* row
///
/// The sky compensates for this by feeding each sampler its own `v` formula.
#[derive(Clone, Debug)]
pub struct SkymapTexture {
    image: Arc<Image>,
}

const EDGES: [EdgeMode; 2] = [EdgeMode::Wrap, EdgeMode::Clamp];

impl SkymapTexture {
    pub fn image(&self) -> &Arc<Image> { &self.image }

    fn dims(&self) -> (Number, Number) { (self.image.width() as Number, self.image.height() as Number) }
}

impl TryFrom<Image> for SkymapTexture {
    type Error = TextureError;

    fn try_from(image: Image) -> Result<Self, Self::Error> { Self::try_from(Arc::new(image)) }
}

impl TryFrom<Arc<Image>> for SkymapTexture {
    type Error = TextureError;

    fn try_from(image: Arc<Image>) -> Result<Self, Self::Error> {
        if image.is_empty() {
            return Err(TextureError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self { image })
    }
}

impl PanoramaTexture for SkymapTexture {
    fn sample(&self, uv: Point2) -> Colour {
        let (w, h) = self.dims();
        // Flip y-axis to image coords
        self.image.get_nearest(uv.x * w, (1. - uv.y) * h, EDGES)
    }

    fn sample_bilinear(&self, uv: Point2) -> Colour {
        let (w, h) = self.dims();
        self.image.get_bilinear(uv.x * w, uv.y * h, EDGES)
    }
}
