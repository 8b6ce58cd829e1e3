//! Bounded worker pool for running search branches concurrently
//!
//! The dispatcher never queues work. [`Dispatcher::submit`] either starts a
//! worker for the branch immediately and takes ownership of it, or hands the
//! branch straight back so the caller can run it synchronously. No branch is
//! ever dropped, including when the operating system refuses a new thread.
//!
//! Quiescence is tracked with one global count of outstanding workers. A
//! worker forking further branches increments that count before it finishes
//! itself, so the count reaches zero only once every worker at every depth
//! has returned. [`Dispatcher::drain`] blocks on that condition and then joins
//! every worker thread.

use std::fmt::Debug;
use std::mem;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::{io, result};

use crate::io::configuration::WORKER_NAME_PREFIX;
use crate::io::error::{PackError, Result};

/// Counters describing how branches were dispatched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Branches handed to a worker thread
    pub accepted: usize,
    /// Branches handed back to the caller
    pub rejected: usize,
    /// Highest number of simultaneously running workers
    pub peak_active: usize,
}

#[derive(Debug, Default)]
struct PoolState {
    active: usize,
    failed: usize,
    stats: DispatchStats,
    handles: Vec<JoinHandle<()>>,
}

impl PoolState {
    /// Join workers that have already exited so handles do not pile up
    fn reap_finished(&mut self) {
        let (finished, running): (Vec<_>, Vec<_>) = mem::take(&mut self.handles)
            .into_iter()
            .partition(JoinHandle::is_finished);
        self.handles = running;
        self.failed += finished
            .into_iter()
            .map(JoinHandle::join)
            .filter(result::Result::is_err)
            .count();
    }
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<PoolState>,
    quiescent: Condvar,
}

impl Shared {
    // Poisoning only means a worker panicked; the counters stay consistent.
    fn lock(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Decrements the outstanding count when a worker exits, even by unwinding
struct ActiveGuard {
    shared: Arc<Shared>,
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        let mut state = self.shared.lock();
        state.active -= 1;
        if state.active == 0 {
            self.shared.quiescent.notify_all();
        }
    }
}

/// Body executed by a worker thread
pub type WorkerBody = Box<dyn FnOnce() + Send + 'static>;

/// Starts the operating-system threads behind a [`Dispatcher`]
pub trait ThreadSpawner: Debug + Send + Sync {
    /// Start a thread called `name` running `body`
    ///
    /// # Errors
    ///
    /// Returns the error reported when the thread cannot be started; `body`
    /// must then not have run.
    fn spawn(&self, name: String, body: WorkerBody) -> io::Result<JoinHandle<()>>;
}

/// Spawns named threads with [`thread::Builder`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ThreadSpawner for SystemSpawner {
    fn spawn(&self, name: String, body: WorkerBody) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name(name).spawn(body)
    }
}

/// Bounded pool of branch workers with quiescence detection
#[derive(Debug, Clone)]
pub struct Dispatcher {
    limit: usize,
    shared: Arc<Shared>,
    spawner: Arc<dyn ThreadSpawner>,
}

impl Dispatcher {
    /// Create a dispatcher running at most `limit` workers at once
    ///
    /// A limit of zero disables concurrency: every submission is rejected.
    pub fn new(limit: usize) -> Self {
        Self::with_spawner(limit, Arc::new(SystemSpawner))
    }

    /// Create a dispatcher starting its workers through `spawner`
    pub fn with_spawner(limit: usize, spawner: Arc<dyn ThreadSpawner>) -> Self {
        Self {
            limit,
            shared: Arc::new(Shared::default()),
            spawner,
        }
    }

    /// Maximum number of simultaneously running workers
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Whether submissions can ever be accepted
    pub const fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    /// Number of workers currently outstanding
    pub fn active(&self) -> usize {
        self.shared.lock().active
    }

    /// Whether a submission made now would likely be accepted
    ///
    /// Only a hint for skipping needless board clones; [`Dispatcher::submit`]
    /// makes the binding decision.
    pub fn has_capacity(&self) -> bool {
        self.is_enabled() && self.shared.lock().active < self.limit
    }

    /// Counters collected so far
    pub fn stats(&self) -> DispatchStats {
        self.shared.lock().stats
    }

    /// Try to run `job(work)` on a new worker thread
    ///
    /// On acceptance ownership of `work` moves to the worker and `Ok(())` is
    /// returned. When the pool is saturated, or a thread cannot be started,
    /// `work` comes back untouched in `Err` and the caller must run it itself.
    ///
    /// # Errors
    ///
    /// Returns the unexecuted `work` when the submission is rejected
    pub fn submit<T, F>(&self, work: T, job: F) -> result::Result<(), T>
    where
        T: Send + 'static,
        F: FnOnce(T) + Send + 'static,
    {
        let mut state = self.shared.lock();
        if state.active >= self.limit {
            state.stats.rejected += 1;
            return Err(work);
        }
        state.reap_finished();

        // The worker receives its branch only after the spawn succeeded, so a
        // failed spawn leaves `work` with us.
        let (sender, receiver) = mpsc::sync_channel::<T>(1);
        let shared = Arc::clone(&self.shared);
        let ordinal = state.stats.accepted;
        let spawned = self.spawner.spawn(
            format!("{WORKER_NAME_PREFIX}-{ordinal}"),
            Box::new(move || {
                let _guard = ActiveGuard { shared };
                if let Ok(work) = receiver.recv() {
                    log::trace!("worker {ordinal} started");
                    job(work);
                    log::trace!("worker {ordinal} finished");
                }
            }),
        );

        match spawned {
            Ok(handle) => {
                state.active += 1;
                state.stats.accepted += 1;
                state.stats.peak_active = state.stats.peak_active.max(state.active);
                state.handles.push(handle);
            }
            Err(error) => {
                log::warn!("unable to start worker, continuing synchronously: {error}");
                state.stats.rejected += 1;
                return Err(work);
            }
        }
        drop(state);

        sender.send(work).map_err(|mpsc::SendError(work)| work)
    }

    /// Block until no worker is outstanding anywhere, then join them all
    ///
    /// # Errors
    ///
    /// Returns [`PackError::WorkerFailure`] if any worker panicked
    pub fn drain(&self) -> Result<DispatchStats> {
        let state = self.shared.lock();
        let mut state = self
            .shared
            .quiescent
            .wait_while(state, |state| state.active > 0)
            .unwrap_or_else(PoisonError::into_inner);

        let handles = mem::take(&mut state.handles);
        let mut failed = mem::take(&mut state.failed);
        let stats = state.stats;
        drop(state);

        failed += handles
            .into_iter()
            .map(JoinHandle::join)
            .filter(result::Result::is_err)
            .count();

        log::info!(
            "dispatcher drained: {} accepted, {} rejected, peak {} of {} workers",
            stats.accepted,
            stats.rejected,
            stats.peak_active,
            self.limit
        );

        if failed > 0 {
            return Err(PackError::WorkerFailure { failed });
        }
        Ok(stats)
    }
}
