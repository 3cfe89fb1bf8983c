use std::collections::VecDeque;

/// A generic FIFO container.
///
/// Accumulates the parser's postfix output in arrival order; the evaluator
/// then drains it front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Returns a reference to the front element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn peek_returns_front() {
        let mut queue = Queue::new();
        queue.enqueue("x");
        queue.enqueue("y");

        assert_eq!(queue.peek(), Some(&"x"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn dequeue_on_empty_is_none() {
        let mut queue: Queue<u8> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn collects_from_iterator() {
        let queue: Queue<i32> = (0..3).collect();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&0));
    }
}
