//! Statistics accumulation and reporting
//!
//! This module contains the running aggregates maintained across simulation
//! steps: request counts, profit, success rate, and average occupancy.

use crate::booking::AllocationResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Running aggregates over all processed steps.
///
/// Counters only ever grow; derived metrics (success rate, average
/// occupancy) are recomputed from the counters on every read so they cannot
/// drift from them.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAccumulator {
    total_requests: u64,
    successful_requests: u64,
    profit: i64,
    occupancy_sum: f64,
    occupancy_samples: u64,
}

/// Point-in-time view of the accumulated statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Mean of the per-step occupancy percentages folded in so far
    pub avg_occupancy: f64,
    /// Sum of all successful stay costs, upgrade discounts already applied
    pub profit: i64,
    /// Successful requests as a percentage of all requests
    pub success_rate: f64,
    /// All requests processed so far
    pub total_requests: u64,
    /// Requests that received a room
    pub successful_requests: u64,
    /// Requests that did not receive a room
    pub failed_requests: u64,
}

/// Round a percentage to two decimal places.
///
/// Applied to each occupancy sample before accumulation; the rounding point
/// is a fixed policy that tests reproduce exactly.
fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl StatisticsAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step's batch of results and its occupancy sample into the
    /// running aggregates.
    ///
    /// Each result's cost already reflects any upgrade discount; no discount
    /// is re-applied here. The occupancy percentage is rounded to two
    /// decimals before accumulation.
    pub fn update(
        &mut self,
        results: &[AllocationResult],
        occupancy_today: usize,
        total_rooms: usize,
    ) {
        self.record_results(results);
        self.record_occupancy_sample(occupancy_today, total_rooms);
    }

    /// Fold many skipped steps at once: one entry of `batches` and one entry
    /// of `occupancy_samples` per skipped step.
    ///
    /// Produces exactly the same aggregates as calling [`update`] once per
    /// step with the same inputs.
    ///
    /// [`update`]: StatisticsAccumulator::update
    pub fn fast_forward(
        &mut self,
        batches: &[Vec<AllocationResult>],
        occupancy_samples: &[usize],
        total_rooms: usize,
    ) {
        for batch in batches {
            self.record_results(batch);
        }
        for &occupied in occupancy_samples {
            self.record_occupancy_sample(occupied, total_rooms);
        }
    }

    fn record_results(&mut self, results: &[AllocationResult]) {
        self.total_requests += results.len() as u64;

        for result in results.iter().filter(|result| result.is_success()) {
            self.successful_requests += 1;
            self.profit += result.cost;
        }
    }

    fn record_occupancy_sample(&mut self, occupied: usize, total_rooms: usize) {
        if total_rooms == 0 {
            warn!("Dropping occupancy sample for empty inventory");
            return;
        }

        let occupancy_pct = occupied as f64 / total_rooms as f64 * 100.0;
        self.occupancy_sum += round_pct(occupancy_pct);
        self.occupancy_samples += 1;
    }

    /// Successful requests as a percentage of all requests; 0 before any
    /// request has been processed
    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.successful_requests as f64 / self.total_requests as f64 * 100.0
        }
    }

    /// Mean occupancy percentage over all folded samples; 0 before any sample
    pub fn avg_occupancy(&self) -> f64 {
        if self.occupancy_samples == 0 {
            0.0
        } else {
            self.occupancy_sum / self.occupancy_samples as f64
        }
    }

    /// Total profit accumulated so far
    pub fn profit(&self) -> i64 {
        self.profit
    }

    /// All requests processed so far
    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Requests that received a room
    pub fn successful_requests(&self) -> u64 {
        self.successful_requests
    }

    /// Requests that did not receive a room
    pub fn failed_requests(&self) -> u64 {
        self.total_requests - self.successful_requests
    }

    /// Number of occupancy samples folded so far
    pub fn occupancy_samples(&self) -> u64 {
        self.occupancy_samples
    }

    /// Current aggregate view for the presentation layer
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            avg_occupancy: self.avg_occupancy(),
            profit: self.profit,
            success_rate: self.success_rate(),
            total_requests: self.total_requests,
            successful_requests: self.successful_requests,
            failed_requests: self.failed_requests(),
        }
    }
}
