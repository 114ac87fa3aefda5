use approx::assert_relative_eq;
use rayna_sky::core::types::*;
use rayna_sky::sky::error::DocumentError;
use rayna_sky::sky::persist::{self, SkyDocument};
use rayna_sky::sky::DEFAULT_INTENSITY;
use serde_json::json;

mod common;

fn doc(value: serde_json::Value) -> SkyDocument {
    SkyDocument::from_json_str(&value.to_string()).expect("test document should be a json object")
}

#[test]
fn round_trip_without_skymap() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);
    sky.set_rotation(1.75);
    sky.set_mirrored(false);
    sky.set_sky_light(4.5);
    sky.set_ground_colour([200, 100, 50]);

    let mut saved = SkyDocument::new();
    sky.save(&mut saved);
    assert!(!saved.contains(persist::SKYMAP_FILE_NAME));

    let mut loaded = common::sky(&scene);
    let before = scene.revision();
    loaded.load(&saved);
    assert_eq!(scene.revision(), before + 1);

    assert_eq!(loaded.rotation(), 1.75);
    assert!(!loaded.is_mirrored());
    assert_eq!(loaded.sky_light(), 4.5);
    assert_relative_eq!(loaded.ground_colour(), sky.ground_colour());
    assert!(loaded.skymap().is_none());
}

#[test]
fn round_trip_with_skymap() {
    let scene = common::scene();
    let dir = tempfile::tempdir().expect("failed creating temp dir");
    let path = common::write_png(dir.path(), "sky.png", 4, 2, [0, 255, 0]);

    let mut sky = common::sky(&scene);
    sky.load_skymap(&path).expect("skymap should load");

    let mut saved = SkyDocument::new();
    sky.save(&mut saved);
    assert_eq!(
        saved.get(persist::SKYMAP_FILE_NAME).and_then(|v| v.as_str()),
        Some(sky.skymap_file_name())
    );

    // Goes through text as well, like a scene file would
    let text = saved.to_json_string().expect("document should serialise");
    let reparsed = SkyDocument::from_json_str(&text).expect("document should parse");
    assert_eq!(reparsed, saved);

    let mut loaded = common::sky(&scene);
    loaded.load(&reparsed);
    assert!(loaded.skymap().is_some());
    assert_eq!(loaded.skymap_file_name(), sky.skymap_file_name());
    assert_relative_eq!(
        loaded.sky_diffuse_colour(Vector3::new(0., 1., 0.), false),
        Rgba::from([0., 1., 0., 1.]),
        epsilon = 1e-6
    );
}

#[test]
fn empty_document_resets_to_defaults() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);
    sky.set_rotation(0.5);
    sky.set_mirrored(false);
    sky.set_sky_light(9.);
    sky.set_ground_colour([255, 255, 255]);

    sky.load(&SkyDocument::new());

    // Absent rotation and ground colour are left alone, the others go back to their defaults
    assert_eq!(sky.rotation(), 0.5);
    assert!(sky.is_mirrored());
    assert_eq!(sky.sky_light(), DEFAULT_INTENSITY);
    assert_eq!(sky.ground_colour(), Colour::WHITE);
}

#[test]
fn malformed_fields_fall_back() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);
    sky.set_rotation(0.5);

    sky.load(&doc(json!({
        (persist::SKYMAP_FILE_NAME): 12,
        (persist::SKY_YAW): "north",
        (persist::SKY_MIRRORED): "yes",
        (persist::SKY_LIGHT): [1, 2],
        (persist::GROUND_COLOUR): "green",
    })));

    assert!(sky.skymap().is_none());
    assert_eq!(sky.rotation(), 0.5);
    assert!(sky.is_mirrored());
    assert_eq!(sky.sky_light(), DEFAULT_INTENSITY);
    assert_eq!(sky.ground_colour(), Colour::BLUE);
}

#[test]
fn mirroring_accepts_numbers() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);

    sky.load(&doc(json!({ (persist::SKY_MIRRORED): 0 })));
    assert!(!sky.is_mirrored());

    sky.load(&doc(json!({ (persist::SKY_MIRRORED): 1 })));
    assert!(sky.is_mirrored());
}

#[test]
fn partial_ground_colour_fills_with_white() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);

    sky.load(&doc(json!({ (persist::GROUND_COLOUR): { "green": 0.25 } })));
    assert_eq!(sky.ground_colour(), Colour::from([1., 0.25, 1.]));
}

#[test]
fn out_of_range_ground_colour_is_clamped_on_read() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);

    sky.load(&doc(json!({ (persist::GROUND_COLOUR): { "red": 3.0, "green": -1.0, "blue": 0.5 } })));
    assert_eq!(sky.ground_colour(), Colour::from([1., 0., 0.5]));

    // The stored value is kept as-is, only the getter clamps
    let mut saved = SkyDocument::new();
    sky.save(&mut saved);
    assert_eq!(
        saved.get(persist::GROUND_COLOUR),
        Some(&json!({ "red": 3.0, "green": -1.0, "blue": 0.5 }))
    );
}

#[test]
fn missing_skymap_does_not_stop_load() {
    let scene = common::scene();
    let mut sky = common::sky(&scene);

    let before = scene.revision();
    sky.load(&doc(json!({
        (persist::SKYMAP_FILE_NAME): "/no/such/skymap.hdr",
        (persist::SKY_YAW): 2.0,
        (persist::SKY_LIGHT): 0.25,
    })));

    assert_eq!(scene.revision(), before + 1);
    assert!(sky.skymap().is_none());
    assert_eq!(sky.skymap_file_name(), "");
    assert_eq!(sky.rotation(), 2.);
    assert_eq!(sky.sky_light(), 0.25);
}

#[test]
fn save_keeps_unrelated_keys() {
    let scene = common::scene();
    let sky = common::sky(&scene);

    let mut saved = doc(json!({ "sprayCount": 3 }));
    sky.save(&mut saved);
    assert_eq!(saved.get("sprayCount"), Some(&json!(3)));
    assert_eq!(saved.get(persist::SKY_MIRRORED), Some(&json!(true)));
    assert_eq!(saved.get(persist::SKY_YAW), Some(&json!(0.0)));
}

#[test]
fn documents_must_be_objects() {
    let err = SkyDocument::from_json_str("[1, 2, 3]").expect_err("arrays are not documents");
    assert!(matches!(err, DocumentError::NotAnObject { found: "an array" }), "{err:?}");

    let err = SkyDocument::from_json_str("{ broken").expect_err("invalid json");
    assert!(matches!(err, DocumentError::Json { .. }), "{err:?}");
}
