//! Introductory containers.
//!
//! * Stacks
//!   * [`stack::Stack`], a last-in first-out container backed by a single buffer.
//! * Queues
//!   * [`queue::Queue`], the first-in first-out contract.
//!   * [`queue::ArrayQueue`], a queue backed by a single buffer.
//!   * [`queue::StackQueue`], a queue backed by two stacks with amortized `O(1)` dequeue.
//!
//! None of the containers are synchronized: every mutating operation takes `&mut self`.
//! Operations on an empty container return `None`.
#![no_std]
#![doc(test(
    no_crate_inject,
    attr(
        deny(warnings, rust_2018_idioms, single_use_lifetimes),
        allow(dead_code, unused_assignments, unused_variables)
    )
))]
#![warn(missing_docs)]

#[doc(inline)]
pub use simple_queue as queue;

#[doc(inline)]
pub use simple_stack as stack;
