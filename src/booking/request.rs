//! Guest booking requests
//!
//! This module contains the immutable Request value describing a desired room
//! type and stay interval.

use crate::types::RoomType;
use serde::{Deserialize, Serialize};

/// An immutable guest request for a stay of `[check_in, check_out)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The room category the guest asked for
    pub desired_type: RoomType,
    /// First occupied day index (inclusive)
    pub check_in: usize,
    /// Day index the guest leaves (exclusive)
    pub check_out: usize,
}

impl Request {
    /// Create a new request
    pub fn new(desired_type: RoomType, check_in: usize, check_out: usize) -> Self {
        Self { desired_type, check_in, check_out }
    }

    /// Sentinel request emitted when the generator draws a stay outside the
    /// simulation horizon; always fails allocation as a normal business outcome
    pub fn out_of_range() -> Self {
        Self { desired_type: RoomType::NotARoom, check_in: 0, check_out: 0 }
    }

    /// A request is valid iff it names a real room type and describes a
    /// non-empty stay that fits inside the `days`-long horizon
    pub fn is_valid(&self, days: usize) -> bool {
        self.desired_type.is_room() && self.check_in < self.check_out && self.check_out <= days
    }

    /// Number of occupied nights, `check_out - check_in`
    pub fn nights(&self) -> usize {
        self.check_out - self.check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = Request::new(RoomType::Single, 2, 5);
        assert!(request.is_valid(10));
        assert_eq!(request.nights(), 3);
    }

    #[test]
    fn test_check_out_may_touch_horizon() {
        // check_out == days is allowed: the last occupied night is days - 1
        let request = Request::new(RoomType::Lux, 8, 10);
        assert!(request.is_valid(10));
        assert!(!request.is_valid(9));
    }

    #[test]
    fn test_empty_or_inverted_stay_is_invalid() {
        assert!(!Request::new(RoomType::Single, 3, 3).is_valid(10));
        assert!(!Request::new(RoomType::Single, 5, 2).is_valid(10));
    }

    #[test]
    fn test_sentinel_request_is_invalid() {
        let request = Request::out_of_range();
        assert!(!request.is_valid(10));
        assert_eq!(request.desired_type, RoomType::NotARoom);
    }
}
