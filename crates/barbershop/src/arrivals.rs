//! # Arrival Generator
//!
//! Spawns one concurrent customer per arrival, on a configurable cadence.
//!
//! The original design detached its customer threads and could never be
//! torn down deterministically. Here every arrival is supervised: the
//! generator hands back the join handles so the caller can collect each
//! visit's outcome and shut the shop down cleanly afterwards.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use barbershop_core::{CustomerId, ShopMonitor, ShopResult};

use crate::customer::{self, VisitOutcome};
use crate::events::EventSender;

/// Handle to one in-flight customer visit.
pub type VisitHandle = JoinHandle<ShopResult<VisitOutcome>>;

/// Spawns customers into the shop at a fixed interval.
///
/// Ids are handed out monotonically starting at 1 and never reused, so
/// the uniqueness constraint on pending customers holds by construction.
pub struct ArrivalGenerator {
    monitor: Arc<ShopMonitor>,
    events: EventSender,
    interval: Duration,
    next_id: u64,
}

impl ArrivalGenerator {
    /// Creates a generator for a shop.
    ///
    /// # Arguments
    ///
    /// * `interval` - Pause between consecutive arrivals. `Duration::ZERO`
    ///   floods the shop as fast as threads spawn.
    #[must_use]
    pub fn new(monitor: Arc<ShopMonitor>, events: EventSender, interval: Duration) -> Self {
        Self {
            monitor,
            events,
            interval,
            next_id: 1,
        }
    }

    /// Submits `count` arrivals, sleeping the interval between them.
    ///
    /// Returns one handle per customer, in arrival order. Calling `run`
    /// again continues the id sequence.
    ///
    /// # Errors
    ///
    /// Propagates the `io::Error` if a customer thread cannot be spawned;
    /// host resource exhaustion is fatal for the simulation.
    pub fn run(&mut self, count: usize) -> io::Result<Vec<VisitHandle>> {
        let mut visits = Vec::with_capacity(count);
        for n in 0..count {
            let customer = CustomerId::new(self.next_id);
            self.next_id += 1;

            tracing::trace!(%customer, "customer arriving");
            let monitor = Arc::clone(&self.monitor);
            let events = self.events.clone();
            let handle = thread::Builder::new()
                .name(format!("customer-{customer}"))
                .spawn(move || customer::request(&monitor, &events, customer))?;
            visits.push(handle);

            if n + 1 < count {
                thread::sleep(self.interval);
            }
        }
        Ok(visits)
    }
}
