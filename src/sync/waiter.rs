//! A consumer parked on an empty queue.
use std::sync::Arc;

use parking_lot::{Condvar, Mutex, MutexGuard};

// -----------------------------------------------------------------------------
//              - Waiter -
// -----------------------------------------------------------------------------
/// One blocked consumer.
///
/// Every waiter owns its own `Condvar`, so a producer wakes exactly the
/// consumer it handed an item to. The slot is only ever touched while the
/// queue lock is held, which makes the inner mutex uncontended.
pub(crate) struct Waiter<T> {
    signal: Condvar,
    slot: Mutex<Option<T>>,
}

impl<T> Waiter<T> {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            signal: Condvar::new(),
            slot: Mutex::new(None),
        })
    }

    /// Deposit an item and wake the waiter.
    /// Must be called with the queue lock held, after the waiter was unlinked.
    pub(crate) fn fill(&self, item: T) {
        let mut slot = self.slot.lock();
        debug_assert!(slot.is_none(), "waiter filled twice");
        *slot = Some(item);
        self.signal.notify_one();
    }

    /// Block until [`fill`] has been called, releasing `guard` while asleep.
    ///
    /// A wakeup that finds the slot empty goes straight back to sleep.
    ///
    /// [`fill`]: #method.fill
    pub(crate) fn park<S>(&self, guard: &mut MutexGuard<'_, S>) -> T {
        loop {
            let received = self.slot.lock().take();
            if let Some(item) = received {
                return item;
            }
            self.signal.wait(guard);
        }
    }
}
