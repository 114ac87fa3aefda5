//! The sky term of a ray tracer: the colour seen by rays that escape the scene.
//!
//! Start with [sky::Sky], which is created against a [scene::SceneLink] and evaluated per-ray.
//! Share it between render threads with [sky::shared::SharedSky].

pub mod core;
pub mod prefs;
pub mod scene;
pub mod shared;
pub mod sky;
pub mod sun;
pub mod texture;
