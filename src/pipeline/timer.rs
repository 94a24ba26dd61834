//! One-shot deferred tasks with cancellation.
//!
//! Each pending analysis owns a `DeferredTask`. Handles are kept in a
//! `TimerSet` keyed by document id so a session teardown can revoke every
//! outstanding transition. Dropping a `TimerSet` cancels whatever is left.

use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A callback that runs once after a delay, unless cancelled first.
#[derive(Debug)]
pub struct DeferredTask {
    handle: JoinHandle<()>,
}

impl DeferredTask {
    /// Spawn on the given runtime. `action` runs after `delay`.
    pub fn spawn_on<F>(runtime: &Handle, delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        Self { handle }
    }

    /// Revoke the task. No effect if it already ran.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

/// Pending deferred tasks keyed by document id.
#[derive(Debug, Default)]
pub struct TimerSet {
    tasks: HashMap<Uuid, DeferredTask>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Uuid, task: DeferredTask) {
        if let Some(previous) = self.tasks.insert(id, task) {
            previous.cancel();
        }
    }

    /// Forget a task that has fired. The handle is dropped without aborting.
    pub fn release(&mut self, id: &Uuid) -> bool {
        self.tasks.remove(id).is_some()
    }

    /// Cancel everything. Returns how many tasks were still pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        for (_, task) in self.tasks.drain() {
            task.cancel();
        }
        count
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        let cancelled = self.cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "Cancelled pending timers on teardown");
        }
    }
}
