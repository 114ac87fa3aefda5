//! Maps ray directions onto equirectangular panorama coordinates.
//!
//! A direction is first turned into a pair of angles:
//! * `theta`: the yaw around the vertical axis, offset by the sky rotation and wrapped into `[0, 2π)`
//! * `phi`: the *absolute* elevation above (or below) the horizon, in `[0, π/2]`
//!
//! Since `phi` ignores the sign of the elevation, a panorama only ever covers the upper hemisphere, and
//! directions below the horizon see it mirrored.

use crate::core::types::{Number, Point2, Vector3};
use crate::shared::{math, validate};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Squared horizontal lengths at or below this are treated as pointing straight up or down
pub const EPSILON: Number = 5e-6;

/// The angles a direction maps to on the panorama
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanoramaAngles {
    /// Yaw in `[0, 2π)`
    pub theta: Number,
    /// Absolute elevation in `[0, π/2]`
    pub phi: Number,
}

impl PanoramaAngles {
    pub fn new(dir: Vector3, rotation: Number) -> Self {
        validate::direction(dir);

        let r2 = dir.z * dir.z + dir.x * dir.x;
        let mut theta = if r2 > EPSILON { Number::asin((dir.z / r2.sqrt()).clamp(-1., 1.)) } else { 0. };
        if dir.x < 0. {
            theta = PI - theta;
        }
        let theta = math::wrap_angle(theta + rotation);
        let phi = Number::asin(dir.y.clamp(-1., 1.)).abs();
        validate::number(theta);

        Self { theta, phi }
    }

    /// Coordinates for nearest-texel sampling, where `v` grows from the horizon (`0`) up to the zenith (`1`)
    pub fn point_uv(&self) -> Point2 {
        let uv = Point2::new(self.theta / TAU, 2. * self.phi / PI);
        validate::uv(uv);
        uv
    }

    /// Coordinates for bilinear sampling, where `v` grows from the zenith (`0`) down to the horizon (`1`).
    ///
    /// The flipped `v` pairs with the flipped row order of [PanoramaTexture::sample_bilinear](crate::texture::PanoramaTexture::sample_bilinear),
    /// so both samplers agree on which texel a direction lands on.
    pub fn interpolated_uv(&self) -> Point2 {
        let uv = Point2::new(self.theta / TAU, 1. - self.phi / FRAC_PI_2);
        validate::uv(uv);
        uv
    }
}
