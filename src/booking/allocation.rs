//! Allocation outcomes
//!
//! This module contains the AllocationResult value produced once per request
//! by the inventory.

use crate::types::RoomType;
use serde::{Deserialize, Serialize};

/// Cost recorded for a failed allocation
pub const FAILED_COST: i64 = -1;

/// The outcome of allocating one request against the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Id of the assigned room, or None when no room was available
    pub room_id: Option<usize>,
    /// Category of the assigned room; the sentinel on failure
    pub assigned_type: RoomType,
    /// Total stay cost; -1 on failure, already discounted for upgrades
    pub cost: i64,
    /// True when the guest was upgraded and the 30% discount applied
    pub discounted: bool,
}

impl AllocationResult {
    /// A successful exact-type assignment at full price
    pub fn assigned(room_id: usize, assigned_type: RoomType, cost: i64) -> Self {
        Self { room_id: Some(room_id), assigned_type, cost, discounted: false }
    }

    /// A successful upgrade assignment at the discounted price
    pub fn upgraded(room_id: usize, assigned_type: RoomType, cost: i64) -> Self {
        Self { room_id: Some(room_id), assigned_type, cost, discounted: true }
    }

    /// A failed allocation: no room, sentinel type, cost -1.
    /// This is a normal business outcome, never an error.
    pub fn failed() -> Self {
        Self { room_id: None, assigned_type: RoomType::NotARoom, cost: FAILED_COST, discounted: false }
    }

    /// Check whether a room was assigned
    pub fn is_success(&self) -> bool {
        self.room_id.is_some()
    }
}
