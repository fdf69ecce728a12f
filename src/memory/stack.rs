//! Bounded stack implementation
//!
//! [`BoundedStack`] is a fixed-capacity LIFO. Its buffer is reserved once at
//! construction and pushes past the capacity are dropped, so the buffer never
//! reallocates. The reserve stack and the undo stack are both instances of it.

use super::{allocate_slots, AllocationError};

/// Fixed-capacity LIFO
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Allocate a stack with room for exactly `capacity` items
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        Ok(BoundedStack {
            items: allocate_slots("stack", capacity)?,
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Index of the top slot, `None` when empty
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// Place `item` on top. Returns `false` (and drops the item) when full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the top item, or `None` without touching state when empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable access to the top slot, for in-place exchanges
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Iterate top to bottom without consuming
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = BoundedStack::with_capacity(3).unwrap();
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert!(stack.push(3));

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_on_full_is_noop() {
        let mut stack = BoundedStack::with_capacity(2).unwrap();
        stack.push('a');
        stack.push('b');
        assert!(stack.is_full());

        assert!(!stack.push('c'));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&'b'));
    }

    #[test]
    fn test_pop_on_empty_leaves_state() {
        let mut stack: BoundedStack<i32> = BoundedStack::with_capacity(2).unwrap();
        assert_eq!(stack.top_index(), None);
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 2);
    }

    #[test]
    fn test_top_index_tracks_pushes() {
        let mut stack = BoundedStack::with_capacity(4).unwrap();
        stack.push(7);
        assert_eq!(stack.top_index(), Some(0));
        stack.push(8);
        assert_eq!(stack.top_index(), Some(1));
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack = BoundedStack::with_capacity(3).unwrap();
        stack.push("bottom");
        stack.push("middle");
        stack.push("top");
        let seen: Vec<_> = stack.iter().copied().collect();
        assert_eq!(seen, vec!["top", "middle", "bottom"]);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<BoundedStack<u8>, _> = BoundedStack::with_capacity(0);
        assert!(matches!(
            result,
            Err(AllocationError::ZeroCapacity { container: "stack" })
        ));
    }
}
