use crate::core::types::{Channel, Colour, Number, Vector3};
use crate::shared::math::Lerp;
use crate::sun::Sun;
use getset::CopyGetters;

/// A sun at a fixed position on the sky dome, over a sky that mixes between white and blue depending on pitch.
///
/// The sky fades to blue at the top, white at the bottom.
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct SimpleSun {
    /// Angle around the vertical axis, in radians (`0` points along `+X`, `π/2` along `+Z`)
    azimuth: Number,
    /// Angle above the horizon, in radians
    altitude: Number,
    /// Angular radius of the sun disc, in radians
    radius: Number,
    colour: Colour,
    intensity: Channel,
    zenith: Colour,
    horizon: Colour,

    /// Unit vector pointing towards the centre of the sun disc, derived from the angles above
    dir: Vector3,
    cos_radius: Number,
}

impl SimpleSun {
    pub const DEFAULT_AZIMUTH: Number = std::f64::consts::PI / 2.5;
    pub const DEFAULT_ALTITUDE: Number = std::f64::consts::PI / 3.;
    pub const DEFAULT_RADIUS: Number = 0.03;
    pub const DEFAULT_INTENSITY: Channel = 1.25;

    pub fn new(azimuth: Number, altitude: Number, radius: Number, colour: Colour, intensity: Channel) -> Self {
        let dir = Vector3::new(
            altitude.cos() * azimuth.cos(),
            altitude.sin(),
            altitude.cos() * azimuth.sin(),
        );
        Self {
            azimuth,
            altitude,
            radius,
            colour,
            intensity,
            zenith: Colour::from([0.5, 0.7, 1.]),
            horizon: Colour::WHITE,
            dir,
            cos_radius: radius.cos(),
        }
    }

    /// Replaces the two colours the sky-light blends between
    pub fn with_sky_colours(self, zenith: Colour, horizon: Colour) -> Self {
        Self { zenith, horizon, ..self }
    }
}

impl Default for SimpleSun {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_AZIMUTH,
            Self::DEFAULT_ALTITUDE,
            Self::DEFAULT_RADIUS,
            Colour::WHITE,
            Self::DEFAULT_INTENSITY,
        )
    }
}

impl Sun for SimpleSun {
    fn skylight(&self, dir: Vector3) -> Colour {
        let a = (0.5 * dir.y) + 0.5;
        Colour::lerp(self.horizon, self.zenith, a)
    }

    fn intersect(&self, dir: Vector3) -> Option<Colour> {
        (dir.dot(self.dir) >= self.cos_radius).then(|| self.colour * self.intensity)
    }
}
