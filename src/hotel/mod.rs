//! Room inventory management
//!
//! This module owns the hotel's rooms and implements the availability/upgrade
//! matching algorithm.
//!
//! # Overview
//!
//! - **Room**: one inventory unit with a per-day occupancy bitmap and a fixed
//!   nightly price
//! - **Hotel**: the owning collection; two-pass exact/upgrade search,
//!   sequential batch allocation, and occupancy aggregation
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_booking_simulator::hotel::Hotel;
//! use hotel_booking_simulator::booking::Request;
//! use hotel_booking_simulator::types::RoomType;
//!
//! let mut hotel = Hotel::new(&[(RoomType::Single, 2), (RoomType::Lux, 1)], 14);
//! let result = hotel.allocate(&Request::new(RoomType::Single, 0, 3));
//! assert!(result.is_success());
//! assert_eq!(result.cost, 70 * 3);
//! ```

pub mod inventory;
pub mod room;

pub use inventory::Hotel;
pub use room::Room;
