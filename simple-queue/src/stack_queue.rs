use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::{Chain, Rev};
use core::mem;
use core::slice;

use crate::utils;
use crate::Queue;

/// A queue backed by two stacks.
///
/// Enqueued elements are pushed onto the `incoming` stack. Dequeued elements are popped from the
/// `outgoing` stack, whose top is the front of the queue. Only when `outgoing` runs empty does a
/// dequeue reverse the whole of `incoming` into it.
///
/// Every element crosses from `incoming` to `outgoing` once during its lifetime in the queue, so
/// a sequence of `n` operations moves at most `n` elements in total and dequeuing costs amortized
/// `O(1)`, even though a single dequeue may take `O(n)`.
///
/// At any time, `outgoing` read from top to bottom followed by `incoming` read from bottom to top
/// is the queue content from front to back.
///
/// ```text
///  outgoing            incoming
///  bottom    top       bottom    top
///  [ c, b, a ]         [ d, e, f ]
///
///  front -> a, b, c, d, e, f <- back
/// ```
///
/// # Examples
///
/// ```
/// use simple_queue::{Queue, StackQueue};
///
/// let mut q = StackQueue::new();
///
/// q.enqueue(1);
/// q.enqueue(2);
/// q.enqueue(3);
/// assert_eq!(q.dequeue(), Some(1));
/// assert_eq!(q.peek(), Some(&2));
/// ```
#[derive(Clone)]
pub struct StackQueue<T> {
    /// Newly enqueued elements, the newest on top.
    incoming: Vec<T>,

    /// Elements ready to be dequeued, the front of the queue on top.
    outgoing: Vec<T>,
}

impl<T> StackQueue<T> {
    /// Creates a new empty queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_queue::{Queue, StackQueue};
    ///
    /// let q = StackQueue::<i32>::new();
    /// assert!(q.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Creates a queue holding `elements`, with the first element at the front.
    ///
    /// The vector becomes the `incoming` stack as is; the first dequeue reverses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_queue::{Queue, StackQueue};
    ///
    /// let mut q = StackQueue::from_vec(vec![1, 2, 3]);
    /// assert_eq!(q.peek(), Some(&1));
    /// assert_eq!(q.dequeue(), Some(1));
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self {
            incoming: elements,
            outgoing: Vec::new(),
        }
    }

    /// Moves every element of `incoming` onto `outgoing`, oldest on top.
    ///
    /// Must only be called while `outgoing` is empty.
    fn reload(&mut self) {
        debug_assert!(self.outgoing.is_empty());

        // With `outgoing` empty, swapping the buffers and reversing in place is the same as
        // popping every element of `incoming` onto `outgoing`, and keeps both allocations.
        mem::swap(&mut self.incoming, &mut self.outgoing);
        self.outgoing.reverse();
    }

    /// Elements from front to back.
    fn front_to_back(&self) -> Chain<Rev<slice::Iter<'_, T>>, slice::Iter<'_, T>> {
        self.outgoing.iter().rev().chain(self.incoming.iter())
    }
}

impl<T: fmt::Display> StackQueue<T> {
    /// Renders the elements front to back, joined with `", "`. Meant for diagnostics only.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_queue::{Queue, StackQueue};
    ///
    /// let mut q = StackQueue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// q.dequeue();
    /// q.enqueue(3);
    /// assert_eq!(q.describe(), "2, 3");
    /// ```
    pub fn describe(&self) -> String {
        utils::join(self.front_to_back())
    }
}

impl<T> Queue for StackQueue<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    fn peek(&self) -> Option<&T> {
        match self.outgoing.last() {
            Some(value) => Some(value),
            // Not reloaded yet: the oldest element sits at the bottom of `incoming`.
            None => self.incoming.first(),
        }
    }

    fn enqueue(&mut self, value: T) {
        self.incoming.push(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.outgoing.is_empty() {
            self.reload();
        }
        self.outgoing.pop()
    }
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for StackQueue<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for StackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Two queues are equal when they hold equal elements in the same front-to-back order, no matter
/// how those elements are split between the two stacks.
impl<T: PartialEq> PartialEq for StackQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.front_to_back().eq(other.front_to_back())
    }
}

impl<T: Eq> Eq for StackQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for StackQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.front_to_back()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::StackQueue;
    use crate::Queue;

    /// Checks the layout invariant against the expected front-to-back content.
    fn assert_layout(q: &StackQueue<u32>, expected: &[u32]) {
        let mut content: Vec<u32> = q.outgoing.iter().rev().copied().collect();
        content.extend(q.incoming.iter().copied());
        assert_eq!(content, expected);
        assert_eq!(q.is_empty(), expected.is_empty());
        assert_eq!(q.peek(), expected.first());
    }

    #[test]
    fn layout_invariant() {
        let mut q = StackQueue::new();
        let mut model = Vec::new();
        let mut next = 0;

        // A fixed script mixing long and short runs, so that reloads happen both with a few and
        // with many elements waiting in `incoming`.
        for &(enqueues, dequeues) in &[(3, 1), (0, 1), (4, 0), (0, 3), (1, 1), (10, 12), (5, 2)] {
            for _ in 0..enqueues {
                q.enqueue(next);
                model.push(next);
                next += 1;
                assert_layout(&q, &model);
            }
            for _ in 0..dequeues {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(q.dequeue(), expected);
                assert_layout(&q, &model);
            }
        }
    }

    #[test]
    fn reload_only_when_outgoing_empty() {
        let mut q = StackQueue::new();
        q.enqueue(1);
        q.enqueue(2);

        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.outgoing, [2]);
        assert!(q.incoming.is_empty());

        q.enqueue(3);
        assert_eq!(q.dequeue(), Some(2));
        // `3` stays in `incoming` until `outgoing` runs empty.
        assert!(q.outgoing.is_empty());
        assert_eq!(q.incoming, [3]);

        assert_eq!(q.dequeue(), Some(3));
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }
}
