//! # Barbershop Core
//!
//! The synchronization core of the sleeping-barber simulation:
//! - One barber serves customers drawn from a bounded waiting queue
//! - Customers arrive concurrently and either wait, get served, or leave
//! - Everything shared sits behind a single monitor
//!
//! ## Architecture Rules
//!
//! 1. **One lock** - queue, chair and shutdown flag share one mutex
//! 2. **No bypass paths** - [`ShopMonitor`] is the only mutation surface
//! 3. **Barber owns the handoff** - only the barber side writes the chair
//!
//! ## Example
//!
//! ```rust,ignore
//! use barbershop_core::{Admission, CustomerId, ShopMonitor};
//!
//! let monitor = ShopMonitor::new(3);
//! let admission = monitor.try_enqueue(CustomerId::new(1))?;
//! assert_eq!(admission, Admission::Accepted);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

use std::fmt;

pub mod error;
pub mod monitor;
pub mod queue;
pub mod slot;

pub use error::{ShopError, ShopResult};
pub use monitor::{Admission, ShopMonitor, ShopSnapshot};
pub use queue::WaitingQueue;
pub use slot::ServiceSlot;

/// Unique identifier for a customer.
///
/// Ids are unique while the customer is pending: a given id appears in at
/// most one of the waiting queue and the chair, never both. Reuse is only
/// legal once the previous visit has fully completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    /// Creates a customer id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
