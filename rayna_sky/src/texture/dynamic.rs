use crate::core::types::{Colour, Point2};
use crate::texture::PanoramaTexture;
use std::sync::Arc;

/// Wraps any [PanoramaTexture] behind dynamic dispatch, for textures that live outside this crate
#[derive(Clone, Debug)]
pub struct DynamicPanorama {
    pub inner: Arc<dyn PanoramaTexture>,
}

impl DynamicPanorama {
    pub fn new(inner: impl PanoramaTexture + 'static) -> Self { Self { inner: Arc::new(inner) } }
}

impl PanoramaTexture for DynamicPanorama {
    fn sample(&self, uv: Point2) -> Colour { self.inner.sample(uv) }

    fn sample_bilinear(&self, uv: Point2) -> Colour { self.inner.sample_bilinear(uv) }
}
