use crate::core::types::{Colour, Vector3};
use crate::sun::Sun;

/// No sun at all: the sky is pitch black and there is no disc to hit
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSun;

impl Sun for NoSun {
    fn skylight(&self, _dir: Vector3) -> Colour { Colour::BLACK }

    fn intersect(&self, _dir: Vector3) -> Option<Colour> { None }
}
