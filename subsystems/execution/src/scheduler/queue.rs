//! # Scheduler Run Queues
//!
//! Run queues hold registry indices, never references into the registry.

use super::traits::RunQueue;
use alloc::collections::VecDeque;

/// Simple FIFO run queue
#[derive(Debug, Clone, Default)]
pub struct FifoQueue {
    queue: VecDeque<usize>,
}

impl FifoQueue {
    /// Create a new FIFO queue
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Create a queue sized for `capacity` processes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl RunQueue for FifoQueue {
    fn enqueue(&mut self, index: usize) {
        self.queue.push_back(index);
    }

    fn dequeue(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = FifoQueue::new();
        q.enqueue(2);
        q.enqueue(0);
        q.enqueue(1);

        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(2));

        // Requeued entries go to the tail
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(0));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }
}
