//! Booking requests and allocation outcomes
//!
//! This module contains the request value type, the allocation result
//! produced by the inventory, and the random request generator.
//!
//! # Overview
//!
//! - **Request**: immutable desired type plus `[check_in, check_out)` stay
//! - **AllocationResult**: assigned room and cost, or the failure sentinel
//! - **RequestGenerator**: seeded random generation of per-step batches
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_booking_simulator::booking::{Request, RequestGenerator};
//! use hotel_booking_simulator::types::RoomType;
//!
//! let request = Request::new(RoomType::Single, 0, 3);
//! assert!(request.is_valid(14));
//! assert_eq!(request.nights(), 3);
//!
//! let mut generator = RequestGenerator::new(14, Some(42));
//! let batch = generator.generate_batch(0, 1, 5);
//! assert!(!batch.is_empty());
//! ```

pub mod allocation;
pub mod generator;
pub mod request;

pub use allocation::{AllocationResult, FAILED_COST};
pub use generator::RequestGenerator;
pub use request::Request;
