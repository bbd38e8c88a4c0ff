//! # Service Slot
//!
//! The barber's chair: who is being served right now, if anyone.
//!
//! Availability is derived from occupancy rather than stored as a second
//! flag, so "current customer defined iff barber busy" holds by
//! construction and cannot drift.

use crate::CustomerId;

/// The barber's chair.
///
/// # Thread Safety
///
/// Not thread-safe on its own. The monitor wraps it in a mutex; only the
/// barber side mutates it, customers only observe it.
#[derive(Debug, Default)]
pub struct ServiceSlot {
    /// Customer in the chair. `None` means the barber is available.
    current: Option<CustomerId>,
}

impl ServiceSlot {
    /// Creates an empty chair with an available barber.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the customer currently in the chair, if any.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Option<CustomerId> {
        self.current
    }

    /// Checks whether the barber is available (chair empty).
    #[inline]
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.current.is_none()
    }

    /// Seats `customer` in the chair, marking the barber busy.
    ///
    /// The chair must be empty: a second occupant would mean two
    /// overlapping services.
    pub fn occupy(&mut self, customer: CustomerId) {
        debug_assert!(self.current.is_none(), "chair already occupied");
        self.current = Some(customer);
    }

    /// Empties the chair, marking the barber available.
    ///
    /// Returns the customer whose service just completed.
    pub fn clear(&mut self) -> Option<CustomerId> {
        self.current.take()
    }
}
