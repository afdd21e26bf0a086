// src/simulation/config.rs

use crate::error::{Result, SimulationError};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Inputs for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub table_count: u32,
    pub units_per_table: u32,
    pub staff_side_dish: u32,
    pub staff_transport: u32,
    pub staff_rice: u32,
    pub trial_count: u32,
    pub timings: StageTimings,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            table_count: 60,
            units_per_table: 3,
            staff_side_dish: 2,
            staff_transport: 2,
            staff_rice: 3,
            trial_count: 1000,
            timings: StageTimings::default(),
        }
    }
}

impl SimulationConfig {
    /// Builds a config with the default stage timings and validates it.
    pub fn new(
        table_count: u32,
        units_per_table: u32,
        staff_side_dish: u32,
        staff_transport: u32,
        staff_rice: u32,
        trial_count: u32,
    ) -> Result<Self> {
        let config = Self {
            table_count,
            units_per_table,
            staff_side_dish,
            staff_transport,
            staff_rice,
            trial_count,
            timings: StageTimings::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_timings(mut self, timings: StageTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Trays to distribute: one per seat.
    pub fn total_units(&self) -> u64 {
        u64::from(self.table_count) * u64::from(self.units_per_table)
    }

    /// Checks that every count is strictly positive and the timings are usable.
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("table_count", self.table_count),
            ("units_per_table", self.units_per_table),
            ("staff_side_dish", self.staff_side_dish),
            ("staff_transport", self.staff_transport),
            ("staff_rice", self.staff_rice),
            ("trial_count", self.trial_count),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(SimulationError::invalid(field, "must be at least 1"));
            }
        }
        self.timings.validate()
    }
}

/// Sampling ranges for the three stages, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTimings {
    /// Time to serve one tray, used by both the side-dish and rice stages.
    pub serving_seconds: (f64, f64),
    /// Time for one transport trip.
    pub trip_seconds: (f64, f64),
    /// Trays removed per trip, inclusive.
    pub trip_units: (i64, i64),
}

impl Default for StageTimings {
    fn default() -> Self {
        Self {
            serving_seconds: (30.0, 60.0),
            trip_seconds: (20.0, 60.0),
            trip_units: (4, 7),
        }
    }
}

impl StageTimings {
    pub fn validate(&self) -> Result<()> {
        validate_seconds("timings.serving_seconds", self.serving_seconds)?;
        validate_seconds("timings.trip_seconds", self.trip_seconds)?;
        validate_trip_units("timings.trip_units", self.trip_units)
    }
}

pub(crate) fn validate_trip_units(field: &'static str, (low, high): (i64, i64)) -> Result<()> {
    if low < 1 {
        // A trip that removes nothing would never finish the transport stage.
        return Err(SimulationError::invalid(
            field,
            format!("minimum must be at least 1, got {}", low),
        ));
    }
    if low > high {
        return Err(SimulationError::invalid(
            field,
            format!("range {}..={} is empty", low, high),
        ));
    }
    Ok(())
}

pub(crate) fn validate_seconds(field: &'static str, (low, high): (f64, f64)) -> Result<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(SimulationError::invalid(field, "bounds must be finite"));
    }
    if low < 0.0 {
        return Err(SimulationError::invalid(
            field,
            format!("durations cannot be negative, got {}", low),
        ));
    }
    if low > high {
        return Err(SimulationError::invalid(
            field,
            format!("range [{}, {}] is empty", low, high),
        ));
    }
    Ok(())
}

/// Input ranges a form offers for each field.
///
/// These are caller policy; the engine accepts any positive count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBounds {
    pub table_count: RangeInclusive<u32>,
    pub units_per_table: RangeInclusive<u32>,
    pub staff: RangeInclusive<u32>,
    pub trial_count: RangeInclusive<u32>,
}

impl Default for ConfigBounds {
    fn default() -> Self {
        Self {
            table_count: 1..=200,
            units_per_table: 1..=5,
            staff: 1..=5,
            trial_count: 1..=5000,
        }
    }
}

impl ConfigBounds {
    /// The ranges of the original input form, where the trial slider starts at 100.
    pub fn form() -> Self {
        Self {
            trial_count: 100..=5000,
            ..Self::default()
        }
    }

    /// Returns a copy of `config` with every count clamped into these bounds.
    pub fn clamp(&self, config: &SimulationConfig) -> SimulationConfig {
        SimulationConfig {
            table_count: clamp_to(config.table_count, &self.table_count),
            units_per_table: clamp_to(config.units_per_table, &self.units_per_table),
            staff_side_dish: clamp_to(config.staff_side_dish, &self.staff),
            staff_transport: clamp_to(config.staff_transport, &self.staff),
            staff_rice: clamp_to(config.staff_rice, &self.staff),
            trial_count: clamp_to(config.trial_count, &self.trial_count),
            timings: config.timings.clone(),
        }
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.max(*range.start()).min(*range.end())
}
