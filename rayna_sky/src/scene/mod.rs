//! The slice of the renderer's scene that the sky talks to.

use crate::core::targets::SCENE;
use crate::core::types::Number;
use crate::prefs::Preferences;
use crate::sun::{Sun, SunInstance};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Gamma exponent used to decode 8-bit colours into linear space
pub const DEFAULT_GAMMA: Number = 2.2;

/// Everything the sky needs from the scene that owns it
pub trait SceneLink: Debug + Send + Sync {
    /// Invalidates any cached render state, so the next frame picks up the new sky.
    ///
    /// Fire-and-forget, must not block.
    fn refresh(&self);

    /// Whether the sun disc should be composited into sky colours
    fn sun_enabled(&self) -> bool;

    fn sun(&self) -> &dyn Sun;

    /// Gamma exponent used when decoding colours picked by the user
    fn gamma(&self) -> Number { DEFAULT_GAMMA }

    fn prefs(&self) -> &Preferences;
}

/// A plain [SceneLink] that counts refreshes in a revision number.
///
/// Renderers compare [SceneState::revision] against the revision their cached frame was started at,
/// and restart when it moved.
#[derive(Debug)]
pub struct SceneState {
    sun: SunInstance,
    sun_enabled: AtomicBool,
    gamma: Number,
    revision: AtomicU64,
    prefs: Arc<Preferences>,
}

impl SceneState {
    pub fn new(sun: impl Into<SunInstance>, prefs: Arc<Preferences>) -> Self {
        Self {
            sun: sun.into(),
            sun_enabled: AtomicBool::new(true),
            gamma: DEFAULT_GAMMA,
            revision: AtomicU64::new(0),
            prefs,
        }
    }

    pub fn with_gamma(self, gamma: Number) -> Self { Self { gamma, ..self } }

    /// How many times the scene has been refreshed
    pub fn revision(&self) -> u64 { self.revision.load(Ordering::Acquire) }

    pub fn set_sun_enabled(&self, enabled: bool) {
        if self.sun_enabled.swap(enabled, Ordering::AcqRel) != enabled {
            self.refresh();
        }
    }
}

impl Default for SceneState {
    fn default() -> Self { Self::new(SunInstance::default(), Arc::default()) }
}

impl SceneLink for SceneState {
    fn refresh(&self) {
        let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
        trace!(target: SCENE, revision, "scene refreshed");
    }

    fn sun_enabled(&self) -> bool { self.sun_enabled.load(Ordering::Acquire) }

    fn sun(&self) -> &dyn Sun { &self.sun }

    fn gamma(&self) -> Number { self.gamma }

    fn prefs(&self) -> &Preferences { &self.prefs }
}
