//! Producer / consumer handles over a shared [`Queue`]
//!
//! [`Queue`]: ../queue/struct.Queue.html
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::errors::{Error, Result};

use super::queue::Queue;

/// Create a producer and a consumer sharing a new, empty queue.
///
/// Both ends can be cloned and sent to other threads;
/// every clone talks to the same queue.
///
/// ```
/// # use std::thread;
/// use handoff::channel;
///
/// let (tx, rx) = channel();
///
/// let handle = thread::spawn(move || {
///     rx.iter().take(3).collect::<Vec<u32>>()
/// });
///
/// tx.send(1);
/// tx.send(2);
/// tx.send(3);
///
/// assert_eq!(handle.join().unwrap(), vec![1, 2, 3]);
/// ```
pub fn channel<T>() -> (Producer<T>, Consumer<T>) {
    let queue = Arc::new(Queue::new());
    (Producer::from(queue.clone()), Consumer::from(queue))
}

// -----------------------------------------------------------------------------
//              - Producer -
// -----------------------------------------------------------------------------
/// The sending half of a [`channel`].
///
/// [`channel`]: fn.channel.html
pub struct Producer<T> {
    queue: Arc<Queue<T>>,
}

impl<T> Producer<T> {
    /// Push a value onto the queue, waking the longest
    /// waiting consumer if there is one.
    pub fn send(&self, val: T) {
        self.queue.enqueue(val);
    }

    /// The underlying queue
    pub fn queue(&self) -> &Arc<Queue<T>> {
        &self.queue
    }

    /// Number of items in the queue
    pub fn size(&self) -> usize {
        self.queue.size()
    }

    /// Number of parked consumers
    pub fn waiting(&self) -> usize {
        self.queue.waiting()
    }

    /// Number of items received so far
    pub fn visited(&self) -> usize {
        self.queue.visited()
    }
}

impl<T> From<Arc<Queue<T>>> for Producer<T> {
    fn from(queue: Arc<Queue<T>>) -> Self {
        Self { queue }
    }
}

impl<T> Clone for Producer<T> {
    fn clone(&self) -> Self {
        Producer::from(self.queue.clone())
    }
}

impl<T> Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Producer").field("queue", &self.queue).finish()
    }
}

// -----------------------------------------------------------------------------
//              - Consumer -
// -----------------------------------------------------------------------------
/// The receiving half of a [`channel`].
///
/// [`channel`]: fn.channel.html
pub struct Consumer<T> {
    queue: Arc<Queue<T>>,
}

impl<T> Consumer<T> {
    /// Receive a value, blocking until one is available.
    pub fn recv(&self) -> T {
        self.queue.dequeue()
    }

    /// Receive a value if one is queued.
    ///
    /// Returns [`Error::Empty`] without blocking otherwise.
    ///
    /// [`Error::Empty`]: ../../errors/enum.Error.html#variant.Empty
    pub fn try_recv(&self) -> Result<T> {
        self.queue.try_dequeue().ok_or(Error::Empty)
    }

    /// A blocking iterator. It never ends: every call to `next`
    /// waits for the next value.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { consumer: self }
    }

    /// An iterator over the values queued right now.
    /// Ends as soon as the queue is empty.
    pub fn try_iter(&self) -> TryIter<'_, T> {
        TryIter { consumer: self }
    }

    /// The underlying queue
    pub fn queue(&self) -> &Arc<Queue<T>> {
        &self.queue
    }

    /// Number of items in the queue
    pub fn size(&self) -> usize {
        self.queue.size()
    }

    /// Number of parked consumers
    pub fn waiting(&self) -> usize {
        self.queue.waiting()
    }

    /// Number of items received so far
    pub fn visited(&self) -> usize {
        self.queue.visited()
    }
}

impl<T> From<Arc<Queue<T>>> for Consumer<T> {
    fn from(queue: Arc<Queue<T>>) -> Self {
        Self { queue }
    }
}

impl<T> Clone for Consumer<T> {
    fn clone(&self) -> Self {
        Consumer::from(self.queue.clone())
    }
}

impl<T> Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Consumer").field("queue", &self.queue).finish()
    }
}

// -----------------------------------------------------------------------------
//              - Iterators -
// -----------------------------------------------------------------------------
/// Blocking iterator returned by [`Consumer::iter`]
///
/// [`Consumer::iter`]: struct.Consumer.html#method.iter
#[derive(Debug)]
pub struct Iter<'a, T> {
    consumer: &'a Consumer<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.consumer.recv())
    }
}

/// Non-blocking iterator returned by [`Consumer::try_iter`]
///
/// [`Consumer::try_iter`]: struct.Consumer.html#method.try_iter
#[derive(Debug)]
pub struct TryIter<'a, T> {
    consumer: &'a Consumer<T>,
}

impl<'a, T> Iterator for TryIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.consumer.try_recv().ok()
    }
}

/// Owning blocking iterator
#[derive(Debug)]
pub struct IntoIter<T> {
    consumer: Consumer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.consumer.recv())
    }
}

impl<T> IntoIterator for Consumer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { consumer: self }
    }
}

impl<'a, T> IntoIterator for &'a Consumer<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_recv_on_empty() {
        let (_tx, rx) = channel::<u32>();
        assert_eq!(rx.try_recv(), Err(Error::Empty));
        assert_eq!(rx.waiting(), 0);
    }

    #[test]
    fn try_iter_drains_current_items() {
        let (tx, rx) = channel();
        tx.send(1);
        tx.send(2);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rx.try_iter().next(), None);
        assert_eq!(tx.visited(), 2);
    }

    #[test]
    fn clones_share_one_queue() {
        let (tx, rx) = channel();
        let tx2 = tx.clone();
        let rx2 = rx.clone();

        tx.send("a");
        tx2.send("b");
        assert_eq!(rx2.size(), 2);
        assert_eq!(rx.recv(), "a");
        assert_eq!(rx2.recv(), "b");
        assert!(Arc::ptr_eq(tx.queue(), rx2.queue()));
    }

    #[test]
    fn into_iter_takes_values_in_order() {
        let (tx, rx) = channel();
        for c in "abc".chars() {
            tx.send(c);
        }
        assert_eq!(rx.into_iter().take(3).collect::<String>(), "abc");
    }
}
