mod locks;
mod queue;
mod task;

// region:    --- Exports
pub use locks::{LockHandle, MutexLock, RawLock};
pub use queue::{PREALLOCATED_NODES, PriorityQueue, STORAGE_NODES};
pub use task::Task;
// endregion: --- Exports
