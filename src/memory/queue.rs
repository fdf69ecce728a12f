//! Circular queue implementation
//!
//! [`CircularQueue`] is a fixed-capacity FIFO over a ring of slots. The ring is
//! addressed by explicit `front`/`rear` indices that wrap modulo the capacity:
//!
//! ```text
//! enqueue: rear = (rear + 1) % capacity; slots[rear] = item
//! dequeue: item = slots[front]; front = (front + 1) % capacity
//! ```
//!
//! `rear` starts one slot behind `front` so the first enqueue lands on slot 0.
//! Enqueueing into a full queue drops the item and leaves the queue unchanged;
//! callers that care check [`CircularQueue::is_full`] first or inspect the
//! returned flag.

use super::{allocate_slots, AllocationError};

/// Fixed-capacity circular FIFO
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Allocate a queue with exactly `capacity` slots
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut slots = allocate_slots("queue", capacity)?;
        slots.resize_with(capacity, || None);
        Ok(CircularQueue {
            slots: slots.into_boxed_slice(),
            front: 0,
            rear: capacity - 1,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Store `item` at the rear. Returns `false` (and drops the item) when full.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.rear = (self.rear + 1) % self.capacity();
        self.slots[self.rear] = Some(item);
        self.len += 1;
        true
    }

    /// Remove the front item, or `None` without touching state when empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        item
    }

    /// Peek at the front item
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Mutable access to the front slot, for in-place exchanges
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_mut()
    }

    /// Iterate the logical contents front to rear without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % capacity].as_ref())
    }

    /// Ring position of the front slot (meaningful only when non-empty)
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Ring position of the rear slot (meaningful only when non-empty)
    pub fn rear_index(&self) -> usize {
        self.rear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = CircularQueue::with_capacity(3).unwrap();
        assert!(queue.enqueue(1));
        assert!(queue.enqueue(2));
        assert!(queue.enqueue(3));

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_first_enqueue_lands_on_slot_zero() {
        let mut queue = CircularQueue::with_capacity(5).unwrap();
        assert_eq!(queue.rear_index(), 4);
        queue.enqueue('a');
        assert_eq!(queue.front_index(), 0);
        assert_eq!(queue.rear_index(), 0);
    }

    #[test]
    fn test_enqueue_on_full_is_noop() {
        let mut queue = CircularQueue::with_capacity(2).unwrap();
        queue.enqueue(10);
        queue.enqueue(20);
        assert!(queue.is_full());

        assert!(!queue.enqueue(30));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn test_dequeue_on_empty_leaves_state() {
        let mut queue: CircularQueue<i32> = CircularQueue::with_capacity(3).unwrap();
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.front_index(), 0);
        assert_eq!(queue.rear_index(), 2);
    }

    #[test]
    fn test_wraparound_keeps_logical_order() {
        let mut queue = CircularQueue::with_capacity(3).unwrap();
        for round in 0..10 {
            queue.enqueue(round);
            queue.enqueue(round + 100);
            assert!(queue.len() <= queue.capacity());
            assert_eq!(queue.dequeue(), Some(round));
            assert_eq!(queue.front(), Some(&(round + 100)));
            assert_eq!(queue.dequeue(), Some(round + 100));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_iter_is_non_destructive() {
        let mut queue = CircularQueue::with_capacity(4).unwrap();
        queue.enqueue("x");
        queue.enqueue("y");
        queue.dequeue();
        queue.enqueue("z");
        queue.enqueue("w");
        queue.enqueue("v");

        let seen: Vec<_> = queue.iter().copied().collect();
        assert_eq!(seen, vec!["y", "z", "w", "v"]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_front_mut_replaces_in_place() {
        let mut queue = CircularQueue::with_capacity(3).unwrap();
        queue.enqueue(1);
        queue.enqueue(2);
        if let Some(front) = queue.front_mut() {
            *front = 9;
        }
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![9, 2]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<CircularQueue<u8>, _> = CircularQueue::with_capacity(0);
        assert!(matches!(
            result,
            Err(AllocationError::ZeroCapacity { container: "queue" })
        ));
    }
}
