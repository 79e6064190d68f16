//! Simulation step loop
//!
//! This module contains the SimulationDriver, which orchestrates one run:
//! advance the clock, generate a request batch, allocate it against the
//! inventory, and fold the results into the statistics accumulator.

use crate::booking::{AllocationResult, Request, RequestGenerator};
use crate::hotel::Hotel;
use crate::simulation::{SimulationClock, SimulationError, SimulationResult, StatisticsAccumulator, StatisticsSnapshot};
use crate::types::{RoomType, SimulationConfig};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Drives one complete simulation run: clock, generator, inventory, and
/// statistics, advanced step by step
#[derive(Debug)]
pub struct SimulationDriver {
    /// Configuration for the run
    config: SimulationConfig,
    /// Room inventory
    hotel: Hotel,
    /// Integer day/hour clock
    clock: SimulationClock,
    /// Random request source
    generator: RequestGenerator,
    /// Running aggregates
    statistics: StatisticsAccumulator,
    /// Requests generated by the most recent step
    last_requests: Vec<Request>,
    /// Allocation results of the most recent step
    last_results: Vec<AllocationResult>,
}

impl SimulationDriver {
    /// Create a driver from a validated configuration.
    ///
    /// Constructor arguments are assumed validated by the caller; the checks
    /// here only catch programmer errors, not runtime business conditions.
    #[instrument(skip(config), fields(days = config.days, hour_per_step = config.hour_per_step))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        if config.days == 0 {
            return Err(SimulationError::configuration_error("days must be positive"));
        }
        if config.total_rooms() == 0 {
            return Err(SimulationError::configuration_error("inventory must contain rooms"));
        }

        let hotel = Hotel::new(&config.rooms_per_type(), config.days);
        let clock = SimulationClock::new(config.days, config.hour_per_step);
        let generator = RequestGenerator::new(config.days, config.seed);

        info!(
            total_rooms = hotel.total_rooms(),
            days = config.days,
            "Simulation driver initialized"
        );

        Ok(Self {
            config,
            hotel,
            clock,
            generator,
            statistics: StatisticsAccumulator::new(),
            last_requests: Vec::new(),
            last_results: Vec::new(),
        })
    }

    /// Advance the simulation by one step.
    ///
    /// Returns false once the day horizon is reached; the terminal call does
    /// not allocate. Every true-returning step generates one batch within the
    /// configured `[min, max]` bound, allocates it sequentially, and updates
    /// the statistics exactly once.
    pub fn step(&mut self) -> bool {
        if !self.clock.advance() {
            debug!("Horizon reached, simulation finished");
            return false;
        }

        let (min, max) = self.config.requests_per_step();
        self.last_requests = self.generator.generate_batch(self.clock.current_day(), min, max);
        self.last_results = self.hotel.process_requests(&self.last_requests);

        let occupied = self.hotel.occupied_count(self.clock.current_day());
        self.statistics.update(&self.last_results, occupied, self.hotel.total_rooms());

        debug!(
            day = self.clock.current_day(),
            hour = self.clock.current_hour(),
            requests = self.last_requests.len(),
            occupied,
            "Step completed"
        );
        true
    }

    /// Skip directly to the end of the horizon.
    ///
    /// Generates one aggregate batch sized proportionally to the remaining
    /// step count (`remaining x [min, max]`), allocates it under the same
    /// rules as stepping, folds the results plus one occupancy sample per
    /// skipped step into the statistics, and pins the clock to the last hour
    /// of the last day. An optimization path, not a different policy.
    pub fn goto_end(&mut self) {
        if self.clock.is_finished() {
            return;
        }

        let remaining = self.clock.remaining_steps();
        let (min, max) = self.config.requests_per_step();

        info!(remaining_steps = remaining, "Skipping to end of horizon");

        self.last_requests = self.generator.generate_batch(
            self.clock.current_day(),
            remaining * min,
            remaining * max,
        );
        self.last_results = self.hotel.process_requests(&self.last_requests);

        // One occupancy sample for each step the loop would have run
        let mut probe = self.clock.clone();
        let mut occupancy_samples = Vec::new();
        while probe.advance() {
            occupancy_samples.push(self.hotel.occupied_count(probe.current_day()));
        }

        self.statistics.fast_forward(
            std::slice::from_ref(&self.last_results),
            &occupancy_samples,
            self.hotel.total_rooms(),
        );

        self.clock.pin_to_end();
    }

    /// Current aggregate statistics
    pub fn snapshot(&self) -> StatisticsSnapshot {
        self.statistics.snapshot()
    }

    /// Human-readable log of the most recent batch, one line per real
    /// request; sentinel requests are omitted
    pub fn reservation_log(&self) -> String {
        let mut display = String::new();

        for (request, result) in self.last_requests.iter().zip(&self.last_results) {
            if !request.desired_type.is_room() {
                continue;
            }

            if result.is_success() {
                display.push_str(&format!(
                    "+/ Id : {} / Wanted : {} / Reserved : {} / In {} / Out {}",
                    result.room_id.unwrap_or_default(),
                    request.desired_type,
                    result.assigned_type,
                    request.check_in,
                    request.check_out,
                ));
                if result.discounted {
                    display.push_str(" / Discounted(70%)");
                }
                display.push('\n');
            } else {
                display.push_str(&format!(
                    "-/ Wanted : {} / In : {} / Out : {}\n",
                    request.desired_type, request.check_in, request.check_out,
                ));
            }
        }

        display
    }

    /// Per-type occupancy for the current day as `"occupied/total"` pairs
    pub fn occupancy_display(&self) -> BTreeMap<RoomType, String> {
        let day = self.clock.current_day().min(self.config.days - 1);
        let occupancy = self.hotel.occupied_count_by_type(day);

        self.hotel
            .room_counts()
            .iter()
            .map(|(&room_type, &total)| {
                let occupied = occupancy.get(&room_type).copied().unwrap_or(0);
                (room_type, format!("{}/{}", occupied, total))
            })
            .collect()
    }

    /// Current simulation time as `("<day+1>/<days>", "<hour>:00")`
    pub fn time_display(&self) -> (String, String) {
        self.clock.time_display()
    }

    /// The clock driving this run
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// The inventory owned by this run
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Requests generated by the most recent step
    pub fn last_requests(&self) -> &[Request] {
        &self.last_requests
    }

    /// Allocation results of the most recent step
    pub fn last_results(&self) -> &[AllocationResult] {
        &self.last_results
    }
}
