/// Observable state of a query- or id-driven fetch.
///
/// A cancelled cycle never shows up here: the consumer keeps seeing whatever
/// the next cycle publishes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState<T> {
    pub data: T,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T: Default> FetchState<T> {
    /// Nothing requested yet.
    pub fn idle() -> Self {
        Self {
            data: T::default(),
            is_loading: false,
            error: None,
        }
    }

    /// A new cycle has begun. Previous data and error are dropped.
    pub fn loading() -> Self {
        Self {
            data: T::default(),
            is_loading: true,
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            data,
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: T::default(),
            is_loading: false,
            error: Some(message.into()),
        }
    }
}

/// Identifies one fetch cycle. Only the tracker that issued it can tell
/// whether it is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleId(u64);

impl CycleId {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Generation counter guarding fetch state against stale resolutions.
///
/// Every `start()` supersedes all previously issued ids. A resolution may only
/// be applied if `finish()` accepts its id.
#[derive(Debug, Default)]
pub struct CycleTracker {
    generation: u64,
    active: Option<u64>,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new cycle, superseding whatever was outstanding.
    pub fn start(&mut self) -> CycleId {
        self.generation += 1;
        self.active = Some(self.generation);
        CycleId(self.generation)
    }

    /// Whether `id` belongs to the outstanding cycle.
    pub fn is_current(&self, id: CycleId) -> bool {
        self.active == Some(id.0)
    }

    /// Close the cycle `id`. Returns false if it was superseded or cancelled,
    /// in which case its result must be discarded.
    pub fn finish(&mut self, id: CycleId) -> bool {
        if self.is_current(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Cancel the outstanding cycle, if any. Returns the cancelled id.
    pub fn cancel(&mut self) -> Option<CycleId> {
        self.active.take().map(CycleId)
    }

    /// Whether a cycle is outstanding.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
