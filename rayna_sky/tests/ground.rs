use rayna_sky::core::types::*;
use rayna_sky::sky::mode::SkyMode;
use rayna_sky::sky::Sky;
use rayna_sky::sun::simple::SimpleSun;
use std::f64::consts::PI;
use strum::IntoEnumIterator;

mod common;

/// Every way of asking the sky for a colour, so the ground rules can be checked against all of them
fn entry_points(sky: &Sky, dir: Vector3, black_below_horizon: bool) -> [Rgba; 3] {
    [
        sky.sky_diffuse_colour(dir, black_below_horizon),
        sky.sky_colour_interpolated(dir, black_below_horizon),
        sky.sky_specular_colour(dir, black_below_horizon),
    ]
}

/// A sun sitting below the horizon, so that downward rays can hit it
fn sunken_sun() -> SimpleSun { SimpleSun::new(0., -PI / 2., 0.5, Colour::WHITE, 10.) }

#[test]
fn black_below_horizon_wins_everywhere() {
    let scene = common::scene_with(sunken_sun());
    let mut sky = common::sky(&scene);
    sky.set_sky_light(3.);

    let black = Colour::BLACK.opaque();
    let check = |sky: &Sky| {
        for dir in common::lower_directions() {
            for colour in entry_points(sky, dir, true) {
                assert_eq!(colour, black, "dir: {dir:?}");
            }
        }
    };

    for mode in SkyMode::iter() {
        sky.set_sky_mode(mode);
        for rotation in [-3., 0., 1.2, 40.] {
            sky.set_rotation(rotation);
            for mirrored in [true, false] {
                sky.set_mirrored(mirrored);
                sky.unload_skymap();
                check(&sky);
                sky.set_skymap(common::skymap(8, 4), "ids.png");
                check(&sky);
            }
        }
    }
}

#[test]
fn ground_colour_is_not_scaled_by_light() {
    let scene = common::scene_with(sunken_sun());
    let mut sky = common::sky(&scene);
    sky.set_mirrored(false);
    sky.set_sky_light(7.5);
    sky.set_ground_colour([255, 51, 0]);

    let expected = sky.ground_colour().opaque();

    for dir in common::lower_directions() {
        for colour in entry_points(&sky, dir, false) {
            assert_eq!(colour, expected, "dir: {dir:?}");
        }
    }

    sky.set_skymap(Colour::from([0.3, 0.3, 0.3]), "grey");
    for dir in common::lower_directions() {
        for colour in entry_points(&sky, dir, false) {
            assert_eq!(colour, expected, "dir: {dir:?}");
        }
    }
}

#[test]
fn mirrored_sky_continues_below_horizon() {
    let scene = common::scene();
    scene.set_sun_enabled(false);
    let mut sky = common::sky(&scene);
    sky.set_skymap(common::skymap(16, 8), "ids.png");
    assert!(sky.is_mirrored());

    for dir in common::lower_directions() {
        let reflected = Vector3::new(dir.x, -dir.y, dir.z);
        assert_eq!(
            sky.sky_diffuse_colour(dir, false),
            sky.sky_diffuse_colour(reflected, false),
            "dir: {dir:?}"
        );
        assert!(sky.resolve_ground(dir, false).is_none());
    }
}

#[test]
fn horizon_and_above_never_see_ground() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);
    sky.set_mirrored(false);

    for dir in common::upper_directions() {
        assert!(sky.resolve_ground(dir, true).is_none(), "dir: {dir:?}");
        assert!(sky.resolve_ground(dir, false).is_none(), "dir: {dir:?}");
    }
}
