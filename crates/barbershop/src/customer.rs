//! # Customer Protocol
//!
//! The client-side entry point, invoked once per arrival.
//!
//! A customer never touches the queue or the chair directly and never
//! writes the handoff - it asks for a seat, waits for its turn, waits for
//! the cut to finish, and reports how the visit went.

use barbershop_core::{Admission, CustomerId, ShopMonitor, ShopResult};

use crate::events::{EventSender, ShopEvent};

/// Final outcome of a customer's visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The customer was served to completion.
    Served,
    /// Every seat was taken; the customer left without blocking.
    Rejected,
}

/// Runs the full protocol for one arrival.
///
/// 1. Ask for a seat. A full room is a normal `Rejected` outcome and
///    returns immediately - no blocking.
/// 2. Once seated, block until the barber calls this customer to the
///    chair, then block until the haircut completes.
///
/// # Errors
///
/// [`barbershop_core::ShopError::Closed`] if the shop shuts down while
/// this customer is queued or in the chair;
/// [`barbershop_core::ShopError::AlreadyPresent`] if the id is still
/// pending from an earlier call.
pub fn request(
    monitor: &ShopMonitor,
    events: &EventSender,
    customer: CustomerId,
) -> ShopResult<VisitOutcome> {
    match monitor.try_enqueue(customer)? {
        Admission::Rejected => {
            tracing::debug!(%customer, "waiting room full, leaving");
            events.send_blocking(ShopEvent::CustomerRejected { customer });
            Ok(VisitOutcome::Rejected)
        }
        Admission::Accepted => {
            events.send_blocking(ShopEvent::CustomerQueued { customer });
            monitor.await_turn(customer)?;
            monitor.await_service_complete(customer)?;
            events.send_blocking(ShopEvent::CustomerServed { customer });
            Ok(VisitOutcome::Served)
        }
    }
}
