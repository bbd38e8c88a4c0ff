//! # Shop Event System
//!
//! The observer seam between the synchronization core and the outside
//! world. The core never prints; it emits events, and whoever holds a
//! receiver decides what to do with them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │  BarberLoop │─────>│   Event     │─────>│  Observer   │
//! └─────────────┘      │   Channel   │      │  (logger,   │
//! ┌─────────────┐      │  (bounded)  │      │   stats,    │
//! │  Customers  │─────>│             │      │   tests)    │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! Events are emitted in causal order: each emitter sends in the order of
//! its own state transitions, and the core emitters use the blocking send
//! so nothing is dropped.

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};

use barbershop_core::CustomerId;

/// Events that flow from the shop to its observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopEvent {
    /// The barber found the waiting room empty and went to sleep.
    BarberIdle,

    /// The barber took a customer from the front of the queue and started
    /// cutting.
    BarberServing {
        /// Customer now in the chair.
        customer: CustomerId,
    },

    /// The barber finished a haircut; the chair is free again.
    BarberDone {
        /// Customer whose haircut just completed.
        customer: CustomerId,
    },

    /// A customer was admitted and took a seat in the waiting room.
    CustomerQueued {
        /// Customer who sat down.
        customer: CustomerId,
    },

    /// A customer found every seat taken and left immediately.
    CustomerRejected {
        /// Customer who was turned away.
        customer: CustomerId,
    },

    /// A customer's visit completed end to end.
    CustomerServed {
        /// Customer who walked out with a haircut.
        customer: CustomerId,
    },
}

/// Event bus for shop observers.
///
/// Bounded capacity, allocated once - no channel growth while the
/// simulation runs.
pub struct EventBus {
    /// Sender end - held by event producers.
    sender: Sender<ShopEvent>,
    /// Receiver end - held by event consumers.
    receiver: Receiver<ShopEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight before senders block.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle (clone for multiple consumers).
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a paired sender and receiver in one call.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for emitting shop events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<ShopEvent>,
}

impl EventSender {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the channel is full or the receivers are gone;
    /// the event is dropped. For observers that prefer drop-over-stall.
    #[inline]
    pub fn send(&self, event: ShopEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }

    /// Sends an event (blocking).
    ///
    /// The shop's own emitters use this so the observer stream stays
    /// lossless and causally ordered. Returns `false` only when every
    /// receiver has been dropped.
    #[inline]
    pub fn send_blocking(&self, event: ShopEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Handle for receiving shop events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<ShopEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking).
    ///
    /// Returns a vector of events, empty if none are pending.
    #[inline]
    #[must_use]
    pub fn drain(&self) -> Vec<ShopEvent> {
        let mut events = Vec::with_capacity(64);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives one event (non-blocking).
    ///
    /// Returns `None` if no events are pending.
    #[inline]
    pub fn try_recv(&self) -> Option<ShopEvent> {
        self.receiver.try_recv().ok()
    }

    /// Receives one event, blocking until one arrives.
    ///
    /// Returns `None` once every sender has been dropped - the natural
    /// end-of-stream for a logger thread.
    #[inline]
    pub fn recv(&self) -> Option<ShopEvent> {
        self.receiver.recv().ok()
    }

    /// Receives one event, blocking up to `timeout`.
    ///
    /// Returns `None` on timeout or disconnection.
    #[inline]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ShopEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}
