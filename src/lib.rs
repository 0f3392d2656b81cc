#![deny(missing_docs)]
//! # Unbounded blocking FIFO hand-off queue
//!
//! A thread safe queue where consumers that arrive before any data is
//! available are parked, and woken one at a time in the order they arrived.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use handoff::Queue;
//!
//! let queue = Arc::new(Queue::new());
//!
//! let consumer = {
//!     let queue = queue.clone();
//!     thread::spawn(move || queue.dequeue())
//! };
//!
//! queue.enqueue("hello");
//! assert_eq!(consumer.join().unwrap(), "hello");
//! assert_eq!(queue.visited(), 1);
//! ```
#[macro_use] extern crate log;

pub mod errors;
pub mod sync;

// Pub uses
pub use sync::queue::Queue;
pub use sync::handle::{channel, Consumer, Producer};
pub use sync::Stats;
