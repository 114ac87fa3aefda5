#![allow(dead_code)] // Not every test binary uses every helper

use rayna_sky::core::types::*;
use rayna_sky::prefs::Preferences;
use rayna_sky::scene::SceneState;
use rayna_sky::sky::Sky;
use rayna_sky::sun::SunInstance;
use rayna_sky::texture::skymap::SkymapTexture;
use std::f64::consts::{PI, TAU};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Installs a log subscriber that writes through the test harness, so logs show up for failing tests
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// A scene with the given sun, and fresh preferences
pub fn scene_with(sun: impl Into<SunInstance>) -> Arc<SceneState> {
    init_logging();
    Arc::new(SceneState::new(sun, Arc::new(Preferences::new())))
}

/// A scene with the default sun
pub fn scene() -> Arc<SceneState> { scene_with(SunInstance::default()) }

/// Creates a sky attached to `scene`
pub fn sky(scene: &Arc<SceneState>) -> Sky { Sky::new(scene.clone()) }

/// Unit vector from a yaw (`0` along `+X`, `π/2` along `+Z`) and an elevation above the horizon
pub fn dir_from_angles(theta: Number, elevation: Number) -> Vector3 {
    Vector3::new(
        elevation.cos() * theta.cos(),
        elevation.sin(),
        elevation.cos() * theta.sin(),
    )
}

/// A spread of directions covering the whole sphere, including the poles and the horizon
pub fn sphere_directions() -> Vec<Vector3> {
    const YAWS: usize = 16;
    const PITCHES: [Number; 9] = [-0.5, -0.35, -0.2, -0.05, 0., 0.05, 0.2, 0.35, 0.5];

    let mut dirs = vec![Vector3::new(0., 1., 0.), Vector3::new(0., -1., 0.)];
    for i in 0..YAWS {
        let theta = TAU * i as Number / YAWS as Number;
        for pitch in PITCHES {
            dirs.push(dir_from_angles(theta, pitch * PI));
        }
    }
    dirs
}

/// Directions strictly below the horizon
pub fn lower_directions() -> Vec<Vector3> { sphere_directions().into_iter().filter(|d| d.y < 0.).collect() }

/// Directions on or above the horizon
pub fn upper_directions() -> Vec<Vector3> { sphere_directions().into_iter().filter(|d| d.y >= 0.).collect() }

/// An image where every pixel has a unique colour, so it's clear which texel got sampled
pub fn texel_id_image(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, |x, y| texel_id(x, y, width, height))
}

/// A skymap texture built from [texel_id_image]
pub fn skymap(width: usize, height: usize) -> SkymapTexture {
    SkymapTexture::try_from(texel_id_image(width, height)).expect("image should not be empty")
}

pub fn texel_id(x: usize, y: usize, width: usize, height: usize) -> Colour {
    Colour::from([
        (x as Channel + 1.) / width as Channel,
        (y as Channel + 1.) / height as Channel,
        0.25,
    ])
}

/// Writes a small RGB png into `dir`, returning its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save(&path)
        .expect("failed writing test png");
    path
}
