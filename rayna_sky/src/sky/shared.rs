//! Sharing one sky between many render threads and a single control thread.

use crate::sky::Sky;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// A sky that can be read from any number of threads while it is being changed.
///
/// Readers take a [snapshot](Self::snapshot) and evaluate against that, without holding any lock.
/// Changes go through [update](Self::update), which works on a private copy of the sky and only
/// publishes it once the change is complete, so snapshots taken in the meantime keep seeing (and keep
/// alive) the exact sky they started with.
#[derive(Debug)]
pub struct SharedSky {
    current: RwLock<Arc<Sky>>,
    /// Serialises updates, so two control threads can't lose each other's changes
    writer: Mutex<()>,
}

static_assertions::assert_impl_all!(SharedSky: Send, Sync);

impl SharedSky {
    pub fn new(sky: Sky) -> Self {
        Self {
            current: RwLock::new(Arc::new(sky)),
            writer: Mutex::new(()),
        }
    }

    /// The sky as it is right now.
    ///
    /// Never waits on an update in progress, only on the pointer swap that publishes it.
    pub fn snapshot(&self) -> Arc<Sky> { Arc::clone(&self.current.read()) }

    /// Changes the sky.
    ///
    /// `op` runs without blocking readers, even when it is slow (like loading a skymap). Once the new sky
    /// is published the scene is refreshed again, so a render that restarts on that refresh is guaranteed
    /// to pick up the new sky.
    pub fn update<R>(&self, op: impl FnOnce(&mut Sky) -> R) -> R {
        let _writer = self.writer.lock();

        let mut next = self.snapshot();
        let res = op(Arc::make_mut(&mut next));

        let scene = Arc::clone(next.scene());
        let previous = std::mem::replace(&mut *self.current.write(), next);
        scene.refresh();
        // Drop the old sky (and maybe its skymap) outside the lock
        drop(previous);
        res
    }
}

impl From<Sky> for SharedSky {
    fn from(sky: Sky) -> Self { Self::new(sky) }
}
