//! Textures that can be sampled in panoramic (equirectangular) space.
//!
//! The sky maps a ray direction onto a pair of `(u, v)` coordinates, both inside `0..=1`,
//! and leaves the wrap/clamp policy at the edges to the texture itself.

pub mod dynamic;
pub mod skymap;
pub mod solid;

use crate::core::types::{Colour, Point2};
use crate::shared::RtRequirement;
use enum_dispatch::enum_dispatch;
use thiserror::Error;

//noinspection ALL
use self::{dynamic::DynamicPanorama, skymap::SkymapTexture, solid::SolidPanorama};

/// The trait that defines what a panoramic texture can do
#[enum_dispatch]
pub trait PanoramaTexture: RtRequirement {
    /// Returns the colour of the texel nearest to `uv`
    fn sample(&self, uv: Point2) -> Colour;
    /// Returns the colour at `uv`, bilinearly interpolated between the surrounding texels
    fn sample_bilinear(&self, uv: Point2) -> Colour;
}

dyn_clone::clone_trait_object!(PanoramaTexture);

/// An optimised implementation of [PanoramaTexture], using static dispatch
#[enum_dispatch(PanoramaTexture)]
#[derive(Clone, Debug)]
pub enum PanoramaInstance {
    SkymapTexture,
    SolidPanorama,
    DynamicPanorama,
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureError {
    /// The image had a zero dimension, so there is nothing to sample
    #[error("image has no pixels (dimensions {width}x{height})")]
    EmptyImage { width: usize, height: usize },
}
