/// A first-in first-out container.
///
/// Implementors differ only in cost: every implementation must dequeue elements in exactly the
/// order they were enqueued, and must report absence with `None` rather than panicking.
///
/// The trait is object safe, so queues of different kinds can be stored together as
/// `Box<dyn Queue<Item = T>>`.
///
/// # Examples
///
/// ```
/// use simple_queue::{ArrayQueue, Queue, StackQueue};
///
/// let mut queues: Vec<Box<dyn Queue<Item = char>>> = vec![
///     Box::new(ArrayQueue::<char>::new()),
///     Box::new(StackQueue::<char>::new()),
/// ];
///
/// for q in queues.iter_mut() {
///     q.enqueue('a');
///     q.enqueue('b');
///     assert_eq!(q.dequeue(), Some('a'));
///     assert_eq!(q.peek(), Some(&'b'));
/// }
/// ```
pub trait Queue {
    /// The type of the queued elements.
    type Item;

    /// Returns `true` if the queue holds no elements.
    ///
    /// This holds exactly when [`peek`](Queue::peek) returns `None`.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns a reference to the front element without removing it.
    ///
    /// If the queue is empty, `None` is returned.
    fn peek(&self) -> Option<&Self::Item>;

    /// Adds an element to the back of the queue.
    fn enqueue(&mut self, value: Self::Item);

    /// Removes the front element and returns it.
    ///
    /// If the queue is empty, `None` is returned.
    fn dequeue(&mut self) -> Option<Self::Item>;
}
