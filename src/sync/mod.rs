//! Blocking queue and the handles built on top of it.
pub mod queue;
pub mod handle;
mod waiter;

pub use handle::channel;

/// A point in time view of a queue's counters.
///
/// `size` and `waiting` are read under the queue lock together,
/// so they are consistent with each other: at most one of them is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Items enqueued but not yet claimed
    pub size: usize,
    /// Consumers currently parked in `dequeue`
    pub waiting: usize,
    /// Items that have completed a full enqueue / dequeue cycle
    pub visited: usize,
}
