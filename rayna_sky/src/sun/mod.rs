//! The sun, and the ambient sky-light it produces.
//!
//! The sky model only ever asks two things of the sun: what ambient light arrives from a direction
//! (used when no skymap is loaded), and whether a direction looks straight at the sun disc.

pub mod dynamic;
pub mod none;
pub mod simple;

use self::{dynamic::DynamicSun, none::NoSun, simple::SimpleSun};
use crate::core::types::{Colour, Vector3};
use crate::shared::RtRequirement;
use enum_dispatch::enum_dispatch;

dyn_clone::clone_trait_object!(Sun);
#[enum_dispatch]
pub trait Sun: RtRequirement {
    /// Ambient sky-light arriving from the direction `dir`
    fn skylight(&self, dir: Vector3) -> Colour;

    /// If `dir` hits the sun disc, returns the colour of the disc as seen along that direction
    fn intersect(&self, dir: Vector3) -> Option<Colour>;
}

#[enum_dispatch(Sun)]
#[derive(Clone, Debug)]
pub enum SunInstance {
    SimpleSun,
    NoSun,
    DynamicSun,
}

impl Default for SunInstance {
    fn default() -> Self { SimpleSun::default().into() }
}
