//! # Shop Monitor
//!
//! The only mutation path to the shared shop state.
//!
//! ## Architecture
//!
//! ```text
//!                     ┌──────────────────────────────┐
//!                     │         ShopMonitor          │
//!                     │                              │
//!                     │  ┌────────────────────────┐  │
//!                     │  │ Mutex<ShopState>       │  │
//!                     │  │  • WaitingQueue        │  │
//!                     │  │  • ServiceSlot         │  │
//!                     │  │  • closing flag        │  │
//!                     │  └────────────────────────┘  │
//!                     │                              │
//!                     │  barber_wakeup  (Condvar)    │
//!                     │  turn_ready     (Condvar)    │
//!                     │  service_done   (Condvar)    │
//!                     └──────────────────────────────┘
//!                          │            │
//!             ┌────────────┘            └────────────┐
//!             ▼                                      ▼
//!     ┌──────────────┐                       ┌──────────────┐
//!     │  BarberLoop  │                       │  Customers   │
//!     │ select_next  │                       │ try_enqueue  │
//!     │ finish       │                       │ await_turn   │
//!     └──────────────┘                       └──────────────┘
//! ```
//!
//! ## The Protocol
//!
//! Every capacity check, availability check and handoff happens *inside*
//! the one lock. That closes the check-then-act races of the naive design
//! where queue length or the busy flag is tested before exclusivity is
//! held: two arrivals racing for the last seat can never both win, and the
//! chair is written by exactly one party (the barber).
//!
//! Condition waits release the lock while blocked and re-test their
//! predicate in a loop after every wakeup, so spurious wakeups are
//! harmless and wakeups are never lost.
//!
//! The haircut itself runs *outside* the lock - arrivals are admitted or
//! turned away while the barber is mid-cut.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::error::{ShopError, ShopResult};
use crate::queue::WaitingQueue;
use crate::slot::ServiceSlot;
use crate::CustomerId;

/// Outcome of an admission attempt.
///
/// `Rejected` is a normal result of a full waiting room, never a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The customer took a seat in the waiting room.
    Accepted,
    /// Every seat was taken; the customer left without blocking.
    Rejected,
}

/// Consistent view of the shop at one instant.
///
/// Taken under the lock, so the invariants (queue within capacity, no id
/// in both queue and chair, availability = chair empty) hold in every
/// snapshot an observer can obtain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopSnapshot {
    /// Waiting customers in service order.
    pub waiting: Vec<CustomerId>,
    /// Customer in the chair, if any.
    pub current: Option<CustomerId>,
    /// Whether the barber is available.
    pub barber_available: bool,
}

/// Everything guarded by the one lock.
struct ShopState {
    /// The bounded waiting room.
    queue: WaitingQueue,
    /// The barber's chair.
    slot: ServiceSlot,
    /// Customers whose haircut finished but who have not yet observed it.
    /// Entries are short-lived: `await_service_complete` retires them.
    /// Covers the window where the barber finishes before a freshly
    /// selected customer has re-acquired the lock.
    completed: HashSet<CustomerId>,
    /// Cooperative shutdown flag, checked at every wait point.
    closing: bool,
}

/// The monitor guarding the waiting queue and the service slot.
///
/// One exclusive lock plus three condition variables:
///
/// - `barber_wakeup` - the barber sleeps here while the room is empty
/// - `turn_ready` - a customer sleeps here until the chair is theirs
/// - `service_done` - the customer in the chair sleeps here until done
pub struct ShopMonitor {
    state: Mutex<ShopState>,
    barber_wakeup: Condvar,
    turn_ready: Condvar,
    service_done: Condvar,
}

impl ShopMonitor {
    /// Creates a monitor for a waiting room with `capacity` seats.
    ///
    /// Capacity is immutable afterwards. Zero is legal: every arrival is
    /// rejected and the barber sleeps forever.
    #[must_use]
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ShopState {
                queue: WaitingQueue::new(capacity),
                slot: ServiceSlot::new(),
                completed: HashSet::new(),
                closing: false,
            }),
            barber_wakeup: Condvar::new(),
            turn_ready: Condvar::new(),
            service_done: Condvar::new(),
        })
    }

    /// Returns the seat capacity of the waiting room.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.lock().queue.capacity()
    }

    /// Attempts to seat a customer in the waiting room.
    ///
    /// The capacity check and the insertion are one atomic step: two
    /// concurrent arrivals at the last free seat can never both be
    /// accepted. A full room yields `Ok(Rejected)` without any mutation.
    ///
    /// # Errors
    ///
    /// - [`ShopError::Closed`] once the shop is shutting down
    /// - [`ShopError::AlreadyPresent`] if the id is already waiting or in
    ///   the chair
    pub fn try_enqueue(&self, customer: CustomerId) -> ShopResult<Admission> {
        let mut state = self.state.lock();
        if state.closing {
            return Err(ShopError::Closed);
        }
        if state.queue.contains(customer) || state.slot.current() == Some(customer) {
            return Err(ShopError::AlreadyPresent(customer));
        }
        if state.queue.is_full() {
            return Ok(Admission::Rejected);
        }

        let seated = state.queue.push_back(customer);
        debug_assert!(seated, "non-full queue refused a customer");
        self.barber_wakeup.notify_one();
        Ok(Admission::Accepted)
    }

    /// Blocks until the chair belongs to `customer`.
    ///
    /// Standard monitor wait: the lock is released while blocked and
    /// re-acquired to re-test the predicate after every wakeup. Returns
    /// immediately if the haircut already completed (the barber can be
    /// faster than a freshly woken customer thread).
    ///
    /// # Errors
    ///
    /// [`ShopError::Closed`] if the shop closes before the turn comes.
    pub fn await_turn(&self, customer: CustomerId) -> ShopResult<()> {
        let mut state = self.state.lock();
        while state.slot.current() != Some(customer) && !state.completed.contains(&customer) {
            if state.closing {
                return Err(ShopError::Closed);
            }
            self.turn_ready.wait(&mut state);
        }
        Ok(())
    }

    /// Blocks until the barber has finished cutting `customer`'s hair.
    ///
    /// Must be called after [`Self::await_turn`] resolved for the same id.
    ///
    /// # Errors
    ///
    /// [`ShopError::Closed`] if the shop closes mid-service.
    pub fn await_service_complete(&self, customer: CustomerId) -> ShopResult<()> {
        let mut state = self.state.lock();
        while state.slot.current() == Some(customer) && !state.completed.contains(&customer) {
            if state.closing {
                return Err(ShopError::Closed);
            }
            self.service_done.wait(&mut state);
        }
        state.completed.remove(&customer);
        Ok(())
    }

    /// Barber side: takes the next customer from the front of the queue.
    ///
    /// On success the chair is occupied, the barber is busy, and every
    /// customer waiting for their turn is woken to re-check whose turn it
    /// is. Returns `None` when the room is empty (the barber should then
    /// block in [`Self::wait_for_arrival`]) or the shop is closing.
    pub fn select_next(&self) -> Option<CustomerId> {
        let mut state = self.state.lock();
        if state.closing {
            return None;
        }
        let customer = state.queue.pop_front()?;
        state.slot.occupy(customer);
        self.turn_ready.notify_all();
        Some(customer)
    }

    /// Barber side: blocks until a customer arrives or the shop closes.
    ///
    /// Returns `true` when the queue is non-empty, `false` on shutdown
    /// (the terminal transition for the barber loop).
    pub fn wait_for_arrival(&self) -> bool {
        let mut state = self.state.lock();
        loop {
            if state.closing {
                return false;
            }
            if !state.queue.is_empty() {
                return true;
            }
            self.barber_wakeup.wait(&mut state);
        }
    }

    /// Barber side: records that the haircut in progress is finished.
    ///
    /// Empties the chair (the barber is available again) and wakes the
    /// served customer. Waiters on `turn_ready` are woken too, covering a
    /// customer that never observed its own turn before it ended.
    pub fn finish_service(&self) {
        let mut state = self.state.lock();
        if let Some(customer) = state.slot.clear() {
            state.completed.insert(customer);
        }
        self.service_done.notify_all();
        self.turn_ready.notify_all();
    }

    /// Requests cooperative shutdown.
    ///
    /// Sets the closing flag under the lock and wakes every blocked
    /// party: the barber unwinds out of its loop, waiting customers
    /// return [`ShopError::Closed`]. Customers still in the queue are
    /// abandoned, not served. A customer in the chair when this lands may
    /// observe `Closed` even though the cut completes; close after the
    /// arrival generator has been joined to avoid that.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closing = true;
        self.barber_wakeup.notify_all();
        self.turn_ready.notify_all();
        self.service_done.notify_all();
    }

    /// Checks whether shutdown has been requested.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closing
    }

    /// Takes a consistent snapshot of the shop for observers and tests.
    #[must_use]
    pub fn snapshot(&self) -> ShopSnapshot {
        let state = self.state.lock();
        ShopSnapshot {
            waiting: state.queue.ids(),
            current: state.slot.current(),
            barber_available: state.slot.is_available(),
        }
    }
}
