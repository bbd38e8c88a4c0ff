//! # Waiting Queue
//!
//! Bounded FIFO of customers waiting for the chair.
//!
//! Insertion order is arrival order is service order. The bound is enforced
//! by the type itself: once every seat is taken, `push_back` refuses without
//! mutating anything.

use std::collections::VecDeque;

use crate::CustomerId;

/// Bounded FIFO of waiting customers.
///
/// # Thread Safety
///
/// Not thread-safe on its own. The monitor wraps it in a mutex; nothing
/// else may hold one.
#[derive(Debug)]
pub struct WaitingQueue {
    /// Seated customers, front = next to be served.
    seats: VecDeque<CustomerId>,
    /// Total number of seats. Zero is legal: every push is refused.
    capacity: usize,
}

impl WaitingQueue {
    /// Creates a queue with `capacity` seats.
    ///
    /// All seat storage is allocated upfront.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            seats: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the total number of seats.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of customers currently waiting.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Checks whether the waiting room is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Checks whether every seat is taken.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.seats.len() >= self.capacity
    }

    /// Seats a customer at the back of the queue.
    ///
    /// Returns `false` without mutating when the room is full.
    pub fn push_back(&mut self, customer: CustomerId) -> bool {
        if self.is_full() {
            return false;
        }
        self.seats.push_back(customer);
        true
    }

    /// Takes the customer who has been waiting longest.
    pub fn pop_front(&mut self) -> Option<CustomerId> {
        self.seats.pop_front()
    }

    /// Checks whether the customer currently holds a seat.
    #[must_use]
    pub fn contains(&self, customer: CustomerId) -> bool {
        self.seats.contains(&customer)
    }

    /// Returns the seated ids in service order.
    #[must_use]
    pub fn ids(&self) -> Vec<CustomerId> {
        self.seats.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = WaitingQueue::new(3);
        assert!(queue.push_back(CustomerId::new(1)));
        assert!(queue.push_back(CustomerId::new(2)));
        assert!(queue.push_back(CustomerId::new(3)));

        assert_eq!(queue.pop_front(), Some(CustomerId::new(1)));
        assert_eq!(queue.pop_front(), Some(CustomerId::new(2)));
        assert_eq!(queue.pop_front(), Some(CustomerId::new(3)));
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn test_full_queue_refuses_without_mutation() {
        let mut queue = WaitingQueue::new(2);
        assert!(queue.push_back(CustomerId::new(1)));
        assert!(queue.push_back(CustomerId::new(2)));

        assert!(!queue.push_back(CustomerId::new(3)));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.ids(), vec![CustomerId::new(1), CustomerId::new(2)]);
    }

    #[test]
    fn test_zero_capacity_refuses_everything() {
        let mut queue = WaitingQueue::new(0);
        assert!(queue.is_full());
        assert!(!queue.push_back(CustomerId::new(1)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut queue = WaitingQueue::new(2);
        assert!(queue.push_back(CustomerId::new(7)));
        assert!(queue.contains(CustomerId::new(7)));
        assert!(!queue.contains(CustomerId::new(8)));

        queue.pop_front();
        assert!(!queue.contains(CustomerId::new(7)));
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut queue = WaitingQueue::new(4);
        for raw in 0..100 {
            queue.push_back(CustomerId::new(raw));
            assert!(queue.len() <= queue.capacity());
        }
    }
}
