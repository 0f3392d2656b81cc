//! Unbounded blocking FIFO queue
use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam::utils::CachePadded;
use parking_lot::Mutex;

use super::waiter::Waiter;
use super::Stats;

// -----------------------------------------------------------------------------
// 		- State -
// 		Everything guarded by the queue lock
// -----------------------------------------------------------------------------
struct State<T> {
    // Never both non-empty: an incoming item goes straight
    // to the oldest waiter if there is one.
    items: VecDeque<T>,
    waiters: VecDeque<Arc<Waiter<T>>>,
}

impl<T> State<T> {
    fn with_capacity(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap),
            waiters: VecDeque::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// 		- Queue -
// -----------------------------------------------------------------------------
/// An unbounded, thread safe FIFO queue with blocking and non-blocking removal.
///
/// A consumer calling [`dequeue`] on an empty queue is parked until an item
/// arrives. Parked consumers are served strictly in the order they arrived:
/// the next [`enqueue`] hands its item directly to the oldest one and wakes
/// only that consumer.
///
/// Share the queue between threads with an `Arc`, or use [`channel`] to get
/// a producer / consumer pair.
///
/// ```
/// use handoff::Queue;
///
/// let queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
///
/// assert_eq!(queue.dequeue(), 'a');
/// assert_eq!(queue.try_dequeue(), Some('b'));
/// assert_eq!(queue.try_dequeue(), None);
/// assert_eq!(queue.size(), 0);
/// assert_eq!(queue.visited(), 2);
/// ```
///
/// [`dequeue`]: struct.Queue.html#method.dequeue
/// [`enqueue`]: struct.Queue.html#method.enqueue
/// [`channel`]: ../handle/fn.channel.html
pub struct Queue<T> {
    state: Mutex<State<T>>,
    // Read without taking `state`
    visited: CachePadded<AtomicUsize>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `cap` items before
    /// the item list has to reallocate.
    ///
    /// The queue is still unbounded, `cap` is only a hint.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            state: Mutex::new(State::with_capacity(cap)),
            visited: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Add an item to the back of the queue.
    ///
    /// If consumers are parked the item is handed to the one that
    /// has been waiting the longest, and only that consumer is woken.
    /// Never blocks beyond acquiring the lock.
    pub fn enqueue(&self, item: T) {
        let mut state = self.state.lock();
        match state.waiters.pop_front() {
            Some(waiter) => {
                trace!("hand-off to parked consumer, {} still waiting", state.waiters.len());
                waiter.fill(item);
            }
            None => state.items.push_back(item),
        }
    }

    /// Remove the item at the front of the queue, blocking until
    /// one is available.
    ///
    /// There is no timeout: a consumer parked on an empty queue stays parked
    /// until a future `enqueue` hands it an item.
    pub fn dequeue(&self) -> T {
        let mut state = self.state.lock();
        if let Some(item) = self.take_front(&mut state) {
            return item;
        }

        let waiter = Waiter::new();
        state.waiters.push_back(waiter.clone());
        trace!("consumer parked, {} waiting", state.waiters.len());

        let item = waiter.park(&mut state);
        self.visited.fetch_add(1, Ordering::Relaxed);
        trace!("parked consumer woken");
        item
    }

    /// Remove the item at the front of the queue if there is one.
    ///
    /// Returns `None` straight away on an empty queue without
    /// registering the caller as a waiter.
    pub fn try_dequeue(&self) -> Option<T> {
        let mut state = self.state.lock();
        self.take_front(&mut state)
    }

    fn take_front(&self, state: &mut State<T>) -> Option<T> {
        let item = state.items.pop_front()?;
        self.visited.fetch_add(1, Ordering::Relaxed);
        Some(item)
    }

    /// Number of items currently in the queue.
    pub fn size(&self) -> usize {
        self.state.lock().items.len()
    }

    /// `true` if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of consumers currently parked in [`dequeue`].
    ///
    /// A consumer stops counting as waiting the moment an item is
    /// handed to it, even if it has not been scheduled yet.
    ///
    /// [`dequeue`]: struct.Queue.html#method.dequeue
    pub fn waiting(&self) -> usize {
        self.state.lock().waiters.len()
    }

    /// Total number of items that have been removed from the queue,
    /// through any of the removal methods.
    ///
    /// Does not take the queue lock, so monitoring never has to wait
    /// for producers or consumers.
    pub fn visited(&self) -> usize {
        self.visited.load(Ordering::Relaxed)
    }

    /// Snapshot of all three counters.
    pub fn stats(&self) -> Stats {
        let state = self.state.lock();
        Stats {
            size: state.items.len(),
            waiting: state.waiters.len(),
            visited: self.visited(),
        }
    }

    /// Release every queued item and reset the counters,
    /// leaving the queue as if it was just created.
    ///
    /// The queue never owned what the items refer to, so the items
    /// are handed back to the caller in FIFO order.
    ///
    /// Taking `&mut self` means no consumer can be parked
    /// in `dequeue` while the queue is destroyed.
    pub fn destroy(&mut self) -> Vec<T> {
        let state = self.state.get_mut();
        debug_assert!(state.waiters.is_empty(), "destroyed with parked consumers");
        state.waiters.clear();
        let items = state.items.drain(..).collect::<Vec<_>>();
        self.visited.store(0, Ordering::Relaxed);
        debug!("queue destroyed, returning {} items", items.len());
        items
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("Queue")
            .field("size", &stats.size)
            .field("waiting", &stats.waiting)
            .field("visited", &stats.visited)
            .finish()
    }
}
