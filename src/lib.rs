//! Hotel Booking Simulator
//!
//! A day-by-day hotel reservation simulation that generates random booking
//! requests, allocates them against a fixed room inventory, and accumulates
//! revenue and occupancy statistics over a configurable horizon.
//!
//! # Overview
//!
//! This library models a small hotel with five room classes ordered by
//! quality. Each simulated step a random batch of reservation requests
//! arrives; every request is granted the first matching room, upgraded for
//! free minus a 30% price cut when only better rooms are free, or rejected
//! when nothing fits. Statistics track request volume, profit, and daily
//! occupancy across the run.
//!
//! ## Key Features
//!
//! - **Ranked Room Classes**: Five bookable types from SINGLE to LUX with
//!   fixed nightly prices
//! - **Exact-then-Upgrade Allocation**: Requests prefer an exact room type
//!   and fall back to discounted upgrades
//! - **Discrete Time**: Integer day/hour clock advanced by a fixed hour step
//! - **Skip-to-End**: A fast path that settles the remaining horizon in one
//!   aggregate batch
//! - **Reproducible Runs**: Optional RNG seed for deterministic output
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_booking_simulator::*;
//!
//! let config = SimulationConfig {
//!     days: 14,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut driver = SimulationDriver::new(config)?;
//! while driver.step() {}
//!
//! let stats = driver.snapshot();
//! println!("{} of {} requests booked", stats.successful_requests, stats.total_requests);
//! # Ok::<(), hotel_booking_simulator::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Room classes, configuration, and CLI arguments
//! - [`hotel`]: Rooms and the inventory allocation engine
//! - [`booking`]: Reservation requests, allocation results, and the random
//!   request generator
//! - [`simulation`]: Driver, clock, statistics, logging, and errors
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod booking;
pub mod hotel;
pub mod simulation;

pub mod types;

// Re-export the main public surface

// Core types and configuration
pub use types::{CliArgs, ConfigValidationError, RoomType, SimulationConfig};

// Inventory
pub use hotel::{Hotel, Room};

// Requests and allocation
pub use booking::{AllocationResult, Request, RequestGenerator};

// Simulation control
pub use simulation::{
    LoggingConfig, SimulationClock, SimulationDriver, SimulationError, SimulationResult,
    StatisticsAccumulator, StatisticsSnapshot,
};
