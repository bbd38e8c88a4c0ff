//! # Barber Loop
//!
//! The single server of the shop, driven entirely through the monitor.
//!
//! ## State Machine
//!
//! ```text
//!            select_next() → Some(id)
//!        ┌──────────────────────────────┐
//!        │                              ▼
//!   ┌─────────┐                    ┌─────────┐
//!   │  Idle   │                    │ Serving │
//!   └─────────┘                    └─────────┘
//!        ▲                              │
//!        └──────────────────────────────┘
//!             finish_service()
//!
//!   Idle + empty queue   → block in wait_for_arrival()
//!   Idle + shutdown      → terminal (the loop returns)
//! ```
//!
//! The haircut itself (the sleep) runs outside the lock so arrivals keep
//! being admitted or turned away mid-cut.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use barbershop_core::ShopMonitor;

use crate::events::{EventSender, ShopEvent};
use crate::timing::HaircutTimer;

/// States of the barber's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarberState {
    /// Waiting room empty; the barber sleeps until woken by an arrival.
    Idle,
    /// A haircut is in progress.
    Serving,
}

/// The barber: serves customers from the front of the queue, one at a
/// time, until the shop closes.
pub struct BarberLoop<T: HaircutTimer> {
    monitor: Arc<ShopMonitor>,
    events: EventSender,
    timer: T,
}

impl<T: HaircutTimer + 'static> BarberLoop<T> {
    /// Creates the barber for a shop.
    #[must_use]
    pub fn new(monitor: Arc<ShopMonitor>, events: EventSender, timer: T) -> Self {
        Self {
            monitor,
            events,
            timer,
        }
    }

    /// Runs the barber until shutdown.
    ///
    /// Never touches the queue or the chair directly - every transition
    /// goes through the monitor. Returns once `close()` has been observed
    /// at a wait point.
    pub fn run(mut self) {
        loop {
            match self.monitor.select_next() {
                Some(customer) => {
                    tracing::debug!(state = ?BarberState::Serving, %customer, "cutting hair");
                    self.events.send_blocking(ShopEvent::BarberServing { customer });

                    // The cut happens with the lock released.
                    let duration = self.timer.haircut_duration();
                    thread::sleep(duration);

                    self.monitor.finish_service();
                    self.events.send_blocking(ShopEvent::BarberDone { customer });
                }
                None => {
                    if self.monitor.is_closed() {
                        tracing::debug!("shop closed, barber going home");
                        break;
                    }
                    tracing::debug!(state = ?BarberState::Idle, "waiting room empty, sleeping");
                    self.events.send_blocking(ShopEvent::BarberIdle);
                    if !self.monitor.wait_for_arrival() {
                        tracing::debug!("shop closed, barber going home");
                        break;
                    }
                }
            }
        }
    }

    /// Spawns the barber on its own named thread.
    ///
    /// # Errors
    ///
    /// Propagates the `io::Error` if the host cannot spawn a thread; that
    /// is a fatal resource-exhaustion condition, not something the shop
    /// recovers from.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("barber".into())
            .spawn(move || self.run())
    }
}
