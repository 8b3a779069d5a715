use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::utils;
use crate::Queue;

/// A queue backed by a single buffer.
///
/// The front of the queue is the first element of the buffer and the back is the last one.
/// Enqueuing appends to the buffer. Dequeuing removes the first element and shifts everything
/// after it one slot forward, so it costs `O(n)`. Use [`StackQueue`] when that matters.
///
/// [`StackQueue`]: super::StackQueue
///
/// # Examples
///
/// ```
/// use simple_queue::{ArrayQueue, Queue};
///
/// let mut q = ArrayQueue::new();
///
/// q.enqueue('a');
/// q.enqueue('b');
/// assert_eq!(q.dequeue(), Some('a'));
/// assert_eq!(q.peek(), Some(&'b'));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayQueue<T> {
    /// The buffer holding elements, front first.
    storage: Vec<T>,
}

impl<T> ArrayQueue<T> {
    /// Creates a new empty queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_queue::{ArrayQueue, Queue};
    ///
    /// let q = ArrayQueue::<i32>::new();
    /// assert!(q.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates a queue holding `elements`, with the first element at the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_queue::{ArrayQueue, Queue};
    ///
    /// let mut q = ArrayQueue::from_vec(vec![1, 2, 3]);
    /// assert_eq!(q.dequeue(), Some(1));
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self { storage: elements }
    }
}

impl<T: fmt::Display> ArrayQueue<T> {
    /// Renders the elements front to back, joined with `", "`. Meant for diagnostics only.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_queue::{ArrayQueue, Queue};
    ///
    /// let mut q = ArrayQueue::new();
    /// q.enqueue("a");
    /// q.enqueue("b");
    /// q.enqueue("c");
    /// assert_eq!(q.describe(), "a, b, c");
    ///
    /// q.dequeue();
    /// q.dequeue();
    /// assert_eq!(q.describe(), "c");
    /// ```
    pub fn describe(&self) -> String {
        utils::join(&self.storage)
    }
}

impl<T> Queue for ArrayQueue<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    fn enqueue(&mut self, value: T) {
        self.storage.push(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            None
        } else {
            Some(self.storage.remove(0))
        }
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayQueue<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}
