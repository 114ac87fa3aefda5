use crate::core::types::{Colour, Vector3};
use crate::sun::Sun;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct DynamicSun {
    pub inner: Arc<dyn Sun>,
}

impl DynamicSun {
    pub fn new(inner: impl Sun + 'static) -> Self { Self { inner: Arc::new(inner) } }
}

impl Sun for DynamicSun {
    fn skylight(&self, dir: Vector3) -> Colour { self.inner.skylight(dir) }

    fn intersect(&self, dir: Vector3) -> Option<Colour> { self.inner.intersect(dir) }
}
