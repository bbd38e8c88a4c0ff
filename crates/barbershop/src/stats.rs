//! # Run Statistics
//!
//! Running totals for one simulation, fed from the event stream. The
//! monitor knows nothing about these; they are pure observation.

use crate::events::ShopEvent;

/// Accumulated counts for a simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShopStats {
    /// Customers whose visit completed end to end.
    pub served: u64,
    /// Customers turned away at the door.
    pub rejected: u64,
    /// Haircuts the barber completed.
    pub haircuts: u64,
    /// Times the barber found the room empty and went to sleep.
    pub naps: u64,
}

impl ShopStats {
    /// Records one event.
    pub fn record(&mut self, event: ShopEvent) {
        match event {
            ShopEvent::CustomerServed { .. } => self.served += 1,
            ShopEvent::CustomerRejected { .. } => self.rejected += 1,
            ShopEvent::BarberDone { .. } => self.haircuts += 1,
            ShopEvent::BarberIdle => self.naps += 1,
            ShopEvent::BarberServing { .. } | ShopEvent::CustomerQueued { .. } => {}
        }
    }

    /// Total arrivals that reached a final outcome.
    #[must_use]
    pub const fn arrivals(&self) -> u64 {
        self.served + self.rejected
    }

    /// Prints a summary of the run.
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════╗");
        println!("║                 SIMULATION SUMMARY                   ║");
        println!("╚══════════════════════════════════════════════════════╝");
        println!();
        println!("┌─ CUSTOMERS ─────────────────────────────────────────┐");
        println!("│ Arrivals:         {}", self.arrivals());
        println!("│ Served:           {}", self.served);
        println!("│ Turned away:      {}", self.rejected);
        println!("└─────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ BARBER ────────────────────────────────────────────┐");
        println!("│ Haircuts:         {}", self.haircuts);
        println!("│ Naps:             {}", self.naps);
        println!("└─────────────────────────────────────────────────────┘");
    }
}
