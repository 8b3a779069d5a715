//! First-in first-out queues.
//!
//! This crate provides one queue contract, the [`Queue`] trait, and two implementations of it:
//!
//! * [`ArrayQueue`], a queue backed by a single buffer. Dequeuing shifts the remaining elements,
//!   so it costs `O(n)`.
//! * [`StackQueue`], a queue backed by two stacks. Dequeuing costs amortized `O(1)`.
//!
//! Both observe the same ordering: elements are dequeued in the order they were enqueued.
//!
//! ```
//! use simple_queue::{ArrayQueue, Queue, StackQueue};
//!
//! fn drain<Q: Queue>(q: &mut Q) -> Vec<Q::Item> {
//!     let mut out = Vec::new();
//!     while let Some(x) = q.dequeue() {
//!         out.push(x);
//!     }
//!     out
//! }
//!
//! let mut a = ArrayQueue::new();
//! let mut s = StackQueue::new();
//! for i in 0..5 {
//!     a.enqueue(i);
//!     s.enqueue(i);
//! }
//!
//! assert_eq!(drain(&mut a), drain(&mut s));
//! ```
#![no_std]
#![doc(test(
    no_crate_inject,
    attr(
        deny(warnings, rust_2018_idioms, single_use_lifetimes),
        allow(dead_code, unused_assignments, unused_variables)
    )
))]
#![warn(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod queue;

#[cfg(feature = "alloc")]
mod array_queue;
#[cfg(feature = "alloc")]
mod stack_queue;
#[cfg(feature = "alloc")]
mod utils;

pub use crate::queue::Queue;

#[cfg(feature = "alloc")]
pub use crate::{array_queue::ArrayQueue, stack_queue::StackQueue};
