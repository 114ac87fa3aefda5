//! The sky model: what colour a ray sees when it escapes the scene without hitting anything.
//!
//! There are three evaluation entry points, tuned for different classes of rays:
//! * [Sky::sky_diffuse_colour]: nearest-texel panorama, no sun disc
//! * [Sky::sky_colour_interpolated]: bilinear panorama, plus the sun disc
//! * [Sky::sky_specular_colour]: nearest-texel panorama, plus the sun disc
//!
//! Specular rays are the most numerous, so they get the cheap sampler. All three share the same
//! ground override, which always wins for directions below the horizon.

pub mod error;
pub mod mapping;
pub mod mode;
pub mod persist;
pub mod shared;

use self::error::SkymapLoadError;
use self::mapping::PanoramaAngles;
use self::mode::SkyMode;
use crate::core::targets::{SKY, SKYMAP};
use crate::core::types::{Channel, Colour, Image, Number, Rgba, Vector3};
use crate::prefs;
use crate::scene::SceneLink;
use crate::shared::validate;
use crate::texture::skymap::SkymapTexture;
use crate::texture::{PanoramaInstance, PanoramaTexture};
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Default sky light intensity
pub const DEFAULT_INTENSITY: Number = 1.;
/// Maximum sky light intensity a user should be offered. Not enforced by the sky itself
pub const MAX_INTENSITY: Number = 50.;
/// Minimum sky light intensity a user should be offered. Not enforced by the sky itself
pub const MIN_INTENSITY: Number = 0.01;

// Render threads evaluate the same sky concurrently
static_assertions::assert_impl_all!(Sky: Send, Sync, Clone);

#[derive(Clone, Debug)]
pub struct Sky {
    scene: Arc<dyn SceneLink>,
    mode: SkyMode,
    /// Yaw offset of the panorama, in radians. Wrapped when sampling, not when stored
    rotation: Number,
    mirrored: bool,
    light: Number,
    /// Linear-space colour below the horizon, when not mirrored
    ground_colour: Colour,
    skymap: Option<Arc<PanoramaInstance>>,
    /// Empty whenever `skymap` is `None`
    skymap_file_name: String,
}

// region Constructors

impl Sky {
    /// Creates a sky with default settings, except for the rotation which is read from the `skymapRotation` preference
    pub fn new(scene: Arc<dyn SceneLink>) -> Self {
        let rotation = scene
            .prefs()
            .get_or(prefs::SKYMAP_ROTATION, "0")
            .parse::<Number>()
            .unwrap_or_else(|err| {
                debug!(target: SKY, ?err, "invalid skymap rotation preference, using 0");
                0.
            });

        Self {
            scene,
            mode: SkyMode::default(),
            rotation,
            mirrored: true,
            light: DEFAULT_INTENSITY,
            ground_colour: Colour::BLUE,
            skymap: None,
            skymap_file_name: String::new(),
        }
    }

    /// Makes this sky equal to `other`, sharing its skymap texture
    pub fn set(&mut self, other: &Sky) {
        self.skymap_file_name.clone_from(&other.skymap_file_name);
        self.skymap.clone_from(&other.skymap);
        self.rotation = other.rotation;
        self.mirrored = other.mirrored;
        self.light = other.light;
        self.ground_colour = other.ground_colour;
        self.scene.refresh();
    }
}

// endregion Constructors

// region Evaluation

impl Sky {
    /// Sky colour for diffuse (ambient) rays, using the nearest panorama texel and no sun disc
    pub fn sky_diffuse_colour(&self, dir: Vector3, black_below_horizon: bool) -> Rgba {
        validate::direction(dir);

        match self.resolve_ground(dir, black_below_horizon) {
            Some(ground) => ground,
            None => self.panorama_colour(dir),
        }
    }

    /// Sky colour using the bilinearly interpolated panorama, with the sun disc added on top
    pub fn sky_colour_interpolated(&self, dir: Vector3, black_below_horizon: bool) -> Rgba {
        validate::direction(dir);

        if let Some(ground) = self.resolve_ground(dir, black_below_horizon) {
            return ground;
        }
        let sky = self.panorama_colour_interpolated(dir);
        match self.sun_disc(dir) {
            Some(sun) => (sun + sky.rgb()).opaque(),
            None => sky,
        }
    }

    /// Sky colour for specular (mirror-like) rays: the same as [Self::sky_diffuse_colour], with the sun disc added on top
    pub fn sky_specular_colour(&self, dir: Vector3, black_below_horizon: bool) -> Rgba {
        validate::direction(dir);

        if let Some(ground) = self.resolve_ground(dir, black_below_horizon) {
            return ground;
        }
        let sky = self.panorama_colour(dir);
        match self.sun_disc(dir) {
            Some(sun) => (sun + sky.rgb()).opaque(),
            None => sky,
        }
    }

    /// The flat colour seen below the horizon, if the ground hides the sky for this direction.
    ///
    /// The ground colour is final: it does not get scaled by the sky light.
    pub fn resolve_ground(&self, dir: Vector3, black_below_horizon: bool) -> Option<Rgba> {
        if dir.y >= 0. {
            None
        } else if black_below_horizon {
            Some(Colour::BLACK.opaque())
        } else if !self.mirrored {
            Some(self.ground_colour.opaque())
        } else {
            None
        }
    }

    fn sun_disc(&self, dir: Vector3) -> Option<Colour> {
        if self.scene.sun_enabled() {
            self.scene.sun().intersect(dir)
        } else {
            None
        }
    }

    fn panorama_colour(&self, dir: Vector3) -> Rgba {
        let colour = match &self.skymap {
            None => self.scene.sun().skylight(dir),
            Some(skymap) => skymap.sample(PanoramaAngles::new(dir, self.rotation).point_uv()),
        };
        self.apply_light(colour)
    }

    fn panorama_colour_interpolated(&self, dir: Vector3) -> Rgba {
        let colour = match &self.skymap {
            None => self.scene.sun().skylight(dir),
            Some(skymap) => skymap.sample_bilinear(PanoramaAngles::new(dir, self.rotation).interpolated_uv()),
        };
        self.apply_light(colour)
    }

    fn apply_light(&self, colour: Colour) -> Rgba {
        validate::colour(colour);
        (colour * self.light as Channel).opaque()
    }
}

// endregion Evaluation

// region Getters/Setters

impl Sky {
    /// The polar offset of the skymap, in radians
    pub fn rotation(&self) -> Number { self.rotation }

    /// Sets the polar offset of the skymap, in radians
    pub fn set_rotation(&mut self, rotation: Number) {
        self.rotation = rotation;
        self.scene.refresh();
    }

    /// `true` if the sky continues (mirrored) below the horizon, `false` if the ground colour is shown instead
    pub fn is_mirrored(&self) -> bool { self.mirrored }

    /// Sets sky mirroring at the horizon. Does nothing (not even a refresh) if the value is unchanged
    pub fn set_mirrored(&mut self, mirrored: bool) {
        if mirrored != self.mirrored {
            self.mirrored = mirrored;
            self.scene.refresh();
        }
    }

    /// The current ground colour, in linear space, clamped to `0..=1`.
    ///
    /// This is *not* gamma-encoded again, so it won't round-trip through [Self::set_ground_colour].
    pub fn ground_colour(&self) -> Colour { self.ground_colour.clamp(0., 1.) }

    /// Sets a new ground colour from 8-bit (gamma-encoded) channels
    pub fn set_ground_colour(&mut self, [r, g, b]: [u8; 3]) {
        let gamma = self.scene.gamma();
        let decode = |c: u8| (c as Number / 255.).powf(gamma) as Channel;
        self.ground_colour = Colour::from([decode(r), decode(g), decode(b)]);
        self.scene.refresh();
    }

    /// The sky light multiplier
    pub fn sky_light(&self) -> Number { self.light }

    /// Sets the sky light multiplier, which should be within [MIN_INTENSITY]`..=`[MAX_INTENSITY]
    pub fn set_sky_light(&mut self, light: Number) {
        self.light = light;
        self.scene.refresh();
    }

    pub fn sky_mode(&self) -> SkyMode { self.mode }

    /// Sets the sky rendering mode. This is read by the renderer, so it does not refresh the scene
    pub fn set_sky_mode(&mut self, mode: SkyMode) {
        debug!(target: SKY, ?mode, label = self::mode::label(mode), "sky mode changed");
        self.mode = mode;
    }

    pub fn skymap(&self) -> Option<&Arc<PanoramaInstance>> { self.skymap.as_ref() }

    /// The file the current skymap was loaded from, or empty if there is none
    pub fn skymap_file_name(&self) -> &str { &self.skymap_file_name }

    pub fn scene(&self) -> &Arc<dyn SceneLink> { &self.scene }
}

// endregion Getters/Setters

// region Skymap

impl Sky {
    /// Loads a panoramic skymap texture from an image file.
    ///
    /// Failures are logged and leave the current skymap in place. The scene is refreshed either way.
    pub fn load_skymap(&mut self, path: impl AsRef<Path>) -> Result<(), SkymapLoadError> {
        let res = self.load_skymap_logged(path.as_ref());
        self.scene.refresh();
        res
    }

    /// Uses an already-built panorama as the skymap, remembering `file_name` as where it came from
    pub fn set_skymap(&mut self, skymap: impl Into<PanoramaInstance>, file_name: impl Into<String>) {
        self.skymap = Some(Arc::new(skymap.into()));
        self.skymap_file_name = file_name.into();
        self.scene.refresh();
    }

    /// Unloads the skymap texture and goes back to the default sky.
    ///
    /// Renders still holding a snapshot of this sky keep the old texture alive until they finish.
    pub fn unload_skymap(&mut self) {
        self.skymap_file_name.clear();
        self.skymap = None;
        self.scene.prefs().remove(prefs::SKYMAP);
        self.scene.refresh();
    }

    /// Same as [Self::load_skymap], without the refresh
    fn load_skymap_logged(&mut self, path: &Path) -> Result<(), SkymapLoadError> {
        match Self::read_skymap(path) {
            Ok(skymap) => {
                self.skymap = Some(Arc::new(skymap.into()));
                self.skymap_file_name = path.display().to_string();
                self.scene.prefs().set(prefs::SKYMAP, path.display().to_string());
                Ok(())
            }
            Err(err) => {
                if err.is_expected() {
                    warn!(target: SKYMAP, path = %path.display(), %err, "could not load skymap");
                } else {
                    error!(target: SKYMAP, path = %path.display(), ?err, "unexpected error while loading skymap");
                }
                Err(err)
            }
        }
    }

    fn read_skymap(path: &Path) -> Result<SkymapTexture, SkymapLoadError> {
        let exists = path.try_exists().map_err(|source| SkymapLoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        if !exists {
            return Err(SkymapLoadError::NotFound { path: path.to_owned() });
        }

        info!(target: SKYMAP, path = %path.display(), "loading sky map");
        // A broken image must never take down a render in progress, even if the decoder panics
        let decoded = std::panic::catch_unwind(AssertUnwindSafe(|| image::open(path))).map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "<unknown panic payload>".to_owned());
            SkymapLoadError::Panicked {
                path: path.to_owned(),
                message,
            }
        })?;

        let path = path.to_owned();
        let image = match decoded {
            Ok(image) => Image::from(image),
            Err(source @ (image::ImageError::Decoding(_) | image::ImageError::Unsupported(_))) => {
                return Err(SkymapLoadError::Decode { path, source });
            }
            Err(image::ImageError::IoError(source)) => return Err(SkymapLoadError::Io { path, source }),
            Err(source) => return Err(SkymapLoadError::Image { path, source }),
        };
        debug!(target: SKYMAP, width = image.width(), height = image.height(), "decoded sky map");

        SkymapTexture::try_from(image).map_err(|source| SkymapLoadError::Texture { path, source })
    }
}

// endregion Skymap
