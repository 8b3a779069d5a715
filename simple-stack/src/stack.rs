use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

/// An unbounded stack.
///
/// Elements are kept in a single buffer in insertion order. The last element of the buffer is
/// the top of the stack: [`push`] appends to it and [`pop`] removes from it.
///
/// Two stacks are equal when their buffers hold equal elements in the same order.
///
/// [`push`]: Stack::push
/// [`pop`]: Stack::pop
///
/// # Examples
///
/// ```
/// use simple_stack::Stack;
///
/// let mut s = Stack::new();
///
/// s.push('a');
/// s.push('b');
/// assert_eq!(s.pop(), Some('b'));
/// assert_eq!(s.peek(), Some(&'a'));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    /// The buffer holding elements, bottom first.
    storage: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let s = Stack::<i32>::new();
    /// assert!(s.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates a stack holding `elements`.
    ///
    /// The vector order is kept as the stack order, so its last element becomes the top.
    /// The vector's buffer is reused without copying.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let s = Stack::from_vec(vec![1, 2, 3]);
    /// assert_eq!(s.peek(), Some(&3));
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self { storage: elements }
    }

    /// Pushes an element on top of the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let mut s = Stack::new();
    ///
    /// s.push(10);
    /// s.push(20);
    /// assert_eq!(s.len(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Removes the top element from the stack and returns it.
    ///
    /// If the stack is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let mut s = Stack::new();
    /// s.push(10);
    /// s.push(20);
    ///
    /// assert_eq!(s.pop(), Some(20));
    /// assert_eq!(s.pop(), Some(10));
    /// assert_eq!(s.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// If the stack is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let mut s = Stack::new();
    /// assert_eq!(s.peek(), None);
    ///
    /// s.push("a");
    /// assert_eq!(s.peek(), Some(&"a"));
    /// assert_eq!(s.len(), 1);
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Returns `true` if the stack is empty.
    ///
    /// This holds exactly when [`peek`](Stack::peek) returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let mut s = Stack::new();
    ///
    /// assert!(s.is_empty());
    /// s.push(1);
    /// assert!(!s.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Renders the elements joined with `", "`.
    ///
    /// Elements appear in storage order, bottom first, which is the reverse of the order
    /// [`pop`](Stack::pop) would return them in. Meant for diagnostics only.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let mut s = Stack::new();
    /// s.push("a");
    /// s.push("b");
    /// s.push("c");
    /// s.pop();
    ///
    /// assert_eq!(s.describe(), "a, b");
    /// ```
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (i, value) in self.storage.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{}", value);
        }
        out
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}
