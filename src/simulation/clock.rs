//! Simulation time tracking
//!
//! This module contains the integer day/hour clock that drives the step loop.
//! Simulation time is a day index in `[0, days)` plus an hour in `[0, 24)`;
//! there is no calendar or timezone semantics.

use crate::types::config::limits;
use tracing::debug;

/// Integer clock advancing in fixed hour increments over the day horizon
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Simulation horizon in days
    days: usize,
    /// Hours added by one step
    hour_per_step: usize,
    /// Current day index, may equal `days` once the horizon is reached
    current_day: usize,
    /// Current hour within the day
    current_hour: usize,
}

impl SimulationClock {
    /// Create a clock at day 0, hour 0
    pub fn new(days: usize, hour_per_step: usize) -> Self {
        Self { days, hour_per_step, current_day: 0, current_hour: 0 }
    }

    /// Advance the clock by one step, rolling over to the next day at 24
    /// hours. Returns false once the day horizon is reached.
    pub fn advance(&mut self) -> bool {
        self.current_hour += self.hour_per_step;
        if self.current_hour >= limits::HOURS_PER_DAY {
            self.current_day += 1;
            self.current_hour -= limits::HOURS_PER_DAY;
            debug!(day = self.current_day, "Rolled over to next day");
        }

        self.current_day < self.days
    }

    /// Number of steps in one simulated day
    pub fn steps_per_day(&self) -> usize {
        limits::HOURS_PER_DAY / self.hour_per_step
    }

    /// Steps remaining from the current position to the end of the horizon
    pub fn remaining_steps(&self) -> usize {
        let total_steps = self.days * self.steps_per_day();
        let completed_steps =
            self.current_day * self.steps_per_day() + self.current_hour / self.hour_per_step;
        total_steps.saturating_sub(completed_steps)
    }

    /// Pin the clock to the last hour of the last day
    pub fn pin_to_end(&mut self) {
        self.current_day = self.days - 1;
        self.current_hour = limits::HOURS_PER_DAY - 1;
    }

    /// Whether the horizon has been reached
    pub fn is_finished(&self) -> bool {
        self.current_day >= self.days
    }

    /// Current day index
    pub fn current_day(&self) -> usize {
        self.current_day
    }

    /// Current hour within the day
    pub fn current_hour(&self) -> usize {
        self.current_hour
    }

    /// Human-readable time as `("<day+1>/<days>", "<hour>:00")`
    pub fn time_display(&self) -> (String, String) {
        (format!("{}/{}", self.current_day + 1, self.days), format!("{}:00", self.current_hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_rolls_over_at_24_hours() {
        let mut clock = SimulationClock::new(12, 6);

        assert!(clock.advance()); // 6:00
        assert!(clock.advance()); // 12:00
        assert!(clock.advance()); // 18:00
        assert_eq!(clock.current_day(), 0);

        assert!(clock.advance()); // rollover to day 1, 0:00
        assert_eq!(clock.current_day(), 1);
        assert_eq!(clock.current_hour(), 0);
    }

    #[test]
    fn test_advance_stops_at_horizon() {
        let mut clock = SimulationClock::new(12, 6);
        let mut steps = 0;
        while clock.advance() {
            steps += 1;
        }

        // 12 days x 4 steps/day; the terminal advance returns false
        assert_eq!(steps, 12 * 4 - 1);
        assert!(clock.is_finished());
    }

    #[test]
    fn test_remaining_steps() {
        let mut clock = SimulationClock::new(12, 6);
        assert_eq!(clock.steps_per_day(), 4);
        assert_eq!(clock.remaining_steps(), 48);

        clock.advance();
        assert_eq!(clock.remaining_steps(), 47);

        // Advance through a full day
        for _ in 0..4 {
            clock.advance();
        }
        assert_eq!(clock.remaining_steps(), 43);
    }

    #[test]
    fn test_pin_to_end() {
        let mut clock = SimulationClock::new(14, 3);
        clock.advance();
        clock.pin_to_end();

        assert_eq!(clock.current_day(), 13);
        assert_eq!(clock.current_hour(), 23);
        assert!(!clock.is_finished());
        // The next advance crosses into day 14 and ends the run
        assert!(!clock.advance());
    }

    #[test]
    fn test_time_display() {
        let mut clock = SimulationClock::new(14, 4);
        assert_eq!(clock.time_display(), ("1/14".to_string(), "0:00".to_string()));

        clock.advance();
        assert_eq!(clock.time_display(), ("1/14".to_string(), "4:00".to_string()));
    }
}
