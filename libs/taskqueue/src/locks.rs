use std::fmt;
use std::sync::Arc;

use parking_lot::RawMutex;
use parking_lot::lock_api::RawMutex as _;

/// Locking capability for one of the queue's internal lists.
///
/// Unlike a guard-based mutex API, `lock` and `unlock` are independent
/// calls: the queue pairs them itself around each list operation, and
/// [`PriorityQueue::clear`] takes both list locks up front before swapping
/// the handles out.
///
/// [`PriorityQueue::clear`]: crate::PriorityQueue::clear
pub trait RawLock: Send + Sync {
    fn lock(&self);
    fn unlock(&self);
}

/// Mutual exclusion backed by [`parking_lot::RawMutex`].
///
/// Wrap one instance in a [`LockHandle`] and hand clones of that handle to
/// both lists for a single physical lock, or use two instances to protect
/// the free and queue lists independently.
pub struct MutexLock {
    raw: RawMutex,
}

impl MutexLock {
    pub fn new() -> Self {
        Self { raw: RawMutex::INIT }
    }
}

impl Default for MutexLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for MutexLock {
    fn lock(&self) {
        self.raw.lock();
    }

    fn unlock(&self) {
        // SAFETY: the queue pairs every unlock with a lock it took itself
        // on the same handle.
        unsafe { self.raw.unlock() };
    }
}

impl fmt::Debug for MutexLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MutexLock")
    }
}

/// Locking strategy attached to one of the queue's internal lists.
///
/// The default handle is a no-op: operations still pair lock/unlock
/// calls, they just do nothing, which is the right strategy for
/// single-threaded use. Handles compare by identity, which is how the
/// queue detects that both of its lists share one physical lock.
#[derive(Clone, Default)]
pub struct LockHandle {
    strategy: Option<Arc<dyn RawLock>>,
}

impl LockHandle {
    /// No-op locking.
    pub fn none() -> Self {
        Self { strategy: None }
    }

    /// Wraps a caller-supplied locking strategy.
    pub fn new(strategy: Arc<dyn RawLock>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Fresh handle around its own [`MutexLock`].
    pub fn mutex() -> Self {
        Self::new(Arc::new(MutexLock::new()))
    }

    pub fn lock(&self) {
        if let Some(strategy) = &self.strategy {
            strategy.lock();
        }
    }

    pub fn unlock(&self) {
        if let Some(strategy) = &self.strategy {
            strategy.unlock();
        }
    }

    /// Identity comparison: both no-op, or both the same strategy object.
    pub fn same_strategy(&self, other: &Self) -> bool {
        match (&self.strategy, &other.strategy) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Locks and returns a guard that unlocks on drop.
    pub(crate) fn acquire(&self) -> LockGuard<'_> {
        self.lock();
        LockGuard { handle: self }
    }
}

impl fmt::Debug for LockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            Some(_) => f.write_str("LockHandle(strategy)"),
            None => f.write_str("LockHandle(none)"),
        }
    }
}

pub(crate) struct LockGuard<'a> {
    handle: &'a LockHandle,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.handle.unlock();
    }
}
