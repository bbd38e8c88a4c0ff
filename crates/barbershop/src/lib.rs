//! # BARBERSHOP
//!
//! The sleeping-barber simulation, integrating all systems.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        BARBERSHOP SIMULATION                        │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌────────────────┐        ┌────────────────┐                       │
//! │  │ ArrivalGen     │──────> │  ShopMonitor   │ <──── ┌────────────┐  │
//! │  │ (one thread    │ enqueue│  (core crate)  │ select│ BarberLoop │  │
//! │  │  per customer) │        │                │ finish│ (1 thread) │  │
//! │  └───────┬────────┘        │ • WaitingQueue │       └─────┬──────┘  │
//! │          │                 │ • ServiceSlot  │             │         │
//! │          │                 │ • 1 lock       │             │         │
//! │          │                 │ • 3 condvars   │             │         │
//! │          │                 └────────────────┘             │         │
//! │          │                                                │         │
//! │          │            ┌──────────────────────┐            │         │
//! │          └──────────> │      EventBus        │ <──────────┘         │
//! │                       │ (bounded, lossless)  │                      │
//! │                       └──────────┬───────────┘                      │
//! │                                  ▼                                  │
//! │                       observer / logger / stats                     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events`: the observer event stream
//! - `barber`: the single-server state machine
//! - `customer`: the per-arrival client protocol
//! - `arrivals`: supervised arrival generation
//! - `timing`: injectable haircut durations
//! - `config`: startup configuration
//! - `stats`: run statistics

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod arrivals;
pub mod barber;
pub mod config;
pub mod customer;
pub mod events;
pub mod stats;
pub mod timing;

// Re-export the synchronization core
pub use barbershop_core::{
    Admission, CustomerId, ServiceSlot, ShopError, ShopMonitor, ShopResult, ShopSnapshot,
    WaitingQueue,
};

// Re-export commonly used types
pub use arrivals::{ArrivalGenerator, VisitHandle};
pub use barber::{BarberLoop, BarberState};
pub use config::{ConfigError, SimConfig};
pub use customer::VisitOutcome;
pub use events::{EventBus, EventReceiver, EventSender, ShopEvent};
pub use stats::ShopStats;
pub use timing::{FixedTimer, HaircutTimer, RandomTimer};
