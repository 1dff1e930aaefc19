//! Cancellable fetch cycles over a watched `FetchState`
//!
//! Each `begin` supersedes the previous cycle: its request is aborted and, should
//! it still resolve, the generation check drops the result. Consumers observe
//! the state through a `tokio::sync::watch` receiver, which needs no runtime
//! and works the same in the browser and in tests.

use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};
use popcorn_common::{CycleId, CycleTracker, FetchState};
use tokio::sync::watch;
use tracing::{debug, warn};

/// How a cycle ended, from the controller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Data was published
    Succeeded,
    /// An error message was published
    Failed,
    /// Superseded or cancelled; nothing was published
    Cancelled,
}

struct Inflight {
    cycle: CycleId,
    abort: AbortHandle,
}

#[derive(Default)]
struct Slot {
    tracker: CycleTracker,
    inflight: Option<Inflight>,
}

/// Owns one `FetchState<T>` and the cycle currently feeding it.
pub struct FetchController<T> {
    label: &'static str,
    slot: Arc<Mutex<Slot>>,
    state: Arc<watch::Sender<FetchState<T>>>,
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            slot: self.slot.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + Default + 'static> FetchController<T> {
    pub fn new(label: &'static str) -> Self {
        let (state, _) = watch::channel(FetchState::idle());
        Self {
            label,
            slot: Arc::new(Mutex::new(Slot::default())),
            state: Arc::new(state),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Whether a cycle is outstanding.
    pub fn is_active(&self) -> bool {
        self.slot().tracker.is_active()
    }

    /// Start a new cycle driven by `request`.
    ///
    /// The previous cycle is cancelled and the state switches to loading before
    /// this returns. The returned future performs the request and publishes its
    /// result; the caller decides where it runs.
    pub fn begin<F, E>(&self, request: F) -> impl Future<Output = CycleOutcome> + 'static
    where
        F: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let cycle = {
            let mut slot = self.slot();
            if let Some(previous) = slot.inflight.take() {
                debug!(
                    "{}: cancelling cycle {} (superseded)",
                    self.label,
                    previous.cycle.generation()
                );
                previous.abort.abort();
            }
            let cycle = slot.tracker.start();
            slot.inflight = Some(Inflight { cycle, abort });
            cycle
        };
        self.state.send_replace(FetchState::loading());
        debug!("{}: cycle {} started", self.label, cycle.generation());

        let controller = self.clone();
        async move {
            match Abortable::new(request, registration).await {
                Ok(result) => controller.resolve(cycle, result),
                Err(_aborted) => {
                    debug!("{}: cycle {} aborted", controller.label, cycle.generation());
                    CycleOutcome::Cancelled
                }
            }
        }
    }

    fn resolve<E: Display>(&self, cycle: CycleId, result: Result<T, E>) -> CycleOutcome {
        let mut slot = self.slot();
        if !slot.tracker.finish(cycle) {
            debug!(
                "{}: dropping stale result of cycle {}",
                self.label,
                cycle.generation()
            );
            return CycleOutcome::Cancelled;
        }
        slot.inflight = None;

        match result {
            Ok(data) => {
                self.state.send_replace(FetchState::success(data));
                CycleOutcome::Succeeded
            }
            Err(e) => {
                warn!("{}: cycle {} failed: {}", self.label, cycle.generation(), e);
                self.state.send_replace(FetchState::failed(e.to_string()));
                CycleOutcome::Failed
            }
        }
    }

    /// Cancel the outstanding cycle without starting another. Data and error
    /// are left as they were; loading is cleared.
    pub fn cancel(&self) {
        let mut slot = self.slot();
        if let Some(inflight) = slot.inflight.take() {
            debug!(
                "{}: cancelling cycle {}",
                self.label,
                inflight.cycle.generation()
            );
            inflight.abort.abort();
        }
        slot.tracker.cancel();
        self.state.send_if_modified(|state| {
            let was_loading = state.is_loading;
            state.is_loading = false;
            was_loading
        });
    }

    /// Cancel and return to the idle state.
    pub fn reset(&self) {
        self.cancel();
        self.state.send_replace(FetchState::idle());
    }
}
