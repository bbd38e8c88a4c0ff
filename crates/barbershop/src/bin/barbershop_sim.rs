//! # Barbershop Simulation Binary
//!
//! Headless driver for the sleeping-barber simulation: spawns the barber,
//! feeds it arrivals, logs the event stream and prints a summary.
//!
//! ```bash
//! # Run with the built-in defaults (3 seats, 10 customers)
//! cargo run --bin barbershop_sim
//!
//! # Run with a config file
//! cargo run --bin barbershop_sim -- shop.toml
//! ```

use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use barbershop::{
    ArrivalGenerator, BarberLoop, EventBus, EventReceiver, RandomTimer, ShopEvent, ShopMonitor,
    ShopStats, SimConfig,
};

/// Formats the waiting room the way the original simulation printed it.
fn waiting_room_line(monitor: &ShopMonitor) -> String {
    let ids: Vec<String> = monitor
        .snapshot()
        .waiting
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("   Waiting room: [{}]", ids.join(" "))
}

/// Drains the event stream until every sender is gone, printing as it goes.
fn observe(monitor: &ShopMonitor, observer: &EventReceiver) -> ShopStats {
    let mut stats = ShopStats::default();
    while let Some(event) = observer.recv() {
        match event {
            ShopEvent::BarberIdle => println!("💤 Barber sleeping"),
            ShopEvent::BarberServing { customer } => {
                println!("✂️  Barber cutting the hair of customer {customer}");
                println!("{}", waiting_room_line(monitor));
            }
            ShopEvent::BarberDone { customer } => {
                println!("✔️  Barber finished customer {customer}");
            }
            ShopEvent::CustomerQueued { customer } => {
                println!("🪑 Customer {customer} takes a seat");
                println!("{}", waiting_room_line(monitor));
            }
            ShopEvent::CustomerRejected { customer } => {
                println!("🚪 Customer {customer} leaving, no seats free");
            }
            ShopEvent::CustomerServed { customer } => {
                println!("😀 Customer {customer} got a haircut");
            }
        }
        stats.record(event);
    }
    stats
}

fn main() -> ExitCode {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                     BARBERSHOP SIMULATION v0.1.0");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => {
                println!("⚙️  Config loaded from {path}");
                config
            }
            Err(error) => {
                eprintln!("✗ FATAL: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            println!("⚙️  No config file given, using defaults");
            SimConfig::default()
        }
    };
    println!("   Seats:     {}", config.seats);
    println!("   Customers: {}", config.customers);
    println!("   Arrivals:  every {} ms", config.arrival_interval_ms);
    println!(
        "   Haircuts:  {} - {} ms (seed {})",
        config.haircut_min_ms, config.haircut_max_ms, config.rng_seed
    );
    println!();

    let monitor = ShopMonitor::new(config.seats);
    let bus = EventBus::new(config.event_capacity);

    let logger = {
        let monitor = Arc::clone(&monitor);
        let observer = bus.receiver();
        match thread::Builder::new()
            .name("observer".into())
            .spawn(move || observe(&monitor, &observer))
        {
            Ok(handle) => handle,
            Err(error) => {
                eprintln!("✗ FATAL: failed to spawn observer thread: {error}");
                return ExitCode::FAILURE;
            }
        }
    };

    let (haircut_min, haircut_max) = config.haircut_range();
    let timer = RandomTimer::seeded(config.rng_seed, haircut_min, haircut_max);
    let barber = match BarberLoop::new(Arc::clone(&monitor), bus.sender(), timer).spawn() {
        Ok(handle) => handle,
        Err(error) => {
            eprintln!("✗ FATAL: failed to spawn barber thread: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut arrivals = ArrivalGenerator::new(
        Arc::clone(&monitor),
        bus.sender(),
        config.arrival_interval(),
    );
    let visits = match arrivals.run(config.customers) {
        Ok(visits) => visits,
        Err(error) => {
            eprintln!("✗ FATAL: failed to spawn customer thread: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Every arrival resolves (served or rejected) before the shop closes,
    // so nobody is abandoned mid-queue.
    for visit in visits {
        if visit.join().is_err() {
            eprintln!("✗ customer thread panicked");
        }
    }
    monitor.close();
    if barber.join().is_err() {
        eprintln!("✗ barber thread panicked");
    }

    // Drop the remaining senders so the observer sees end-of-stream.
    drop(arrivals);
    drop(bus);
    let stats = match logger.join() {
        Ok(stats) => stats,
        Err(_) => {
            eprintln!("✗ observer thread panicked");
            return ExitCode::FAILURE;
        }
    };

    println!();
    stats.print_summary();
    ExitCode::SUCCESS
}
