//! # Screen-Scoped Task Tracking
//!
//! Every in-flight fetch is spawned through [`ScreenTasks`], keyed by the
//! screen that initiated it. When navigation leaves a screen its tasks are
//! aborted, so a slow response can never write into a screen the user has
//! already left and no request outlives its initiator.

use crate::app::state::Screen;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

#[derive(Default)]
pub struct ScreenTasks {
    handles: Mutex<HashMap<Screen, Vec<JoinHandle<()>>>>,
}

impl ScreenTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task on behalf of `screen`, registering its handle for abort.
    pub fn spawn_for<F>(&self, screen: Screen, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(fut);
        let mut handles = self.handles.lock();
        let entry = handles.entry(screen).or_default();
        // Drop completed handles so the list doesn't grow unbounded
        entry.retain(|h| !h.is_finished());
        entry.push(handle);
    }

    /// Abort every task still in flight for `screen`.
    pub fn abort_for(&self, screen: Screen) {
        if let Some(handles) = self.handles.lock().remove(&screen) {
            let aborted = handles.iter().filter(|h| !h.is_finished()).count();
            for handle in handles {
                handle.abort();
            }
            if aborted > 0 {
                tracing::debug!(screen = ?screen, aborted = aborted, "Aborted in-flight tasks on leave");
            }
        }
    }

    /// Abort everything (app shutdown).
    pub fn abort_all(&self) {
        let all: Vec<_> = self.handles.lock().drain().collect();
        for (_, handles) in all {
            for handle in handles {
                handle.abort();
            }
        }
    }
}
