// src/model/stage.rs

use crate::error::{RandomSourceError, Result, SimulationError};
use crate::random::RandomSource;
use crate::simulation::config::{validate_seconds, validate_trip_units};
use serde::Serialize;
use std::fmt;

/// The three service processes that run side by side.
///
/// Declaration order doubles as the tie-break order when picking a bottleneck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    SideDish,
    Transport,
    Rice,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::SideDish, Stage::Transport, Stage::Rice];

    pub fn label(self) -> &'static str {
        match self {
            Stage::SideDish => "Side dish",
            Stage::Transport => "Transport",
            Stage::Rice => "Rice",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time for a serving stage (side dish or rice).
///
/// Every tray gets one independent draw from `serving_seconds`; the summed
/// work is split evenly across `staff`. Scheduling imbalance between workers
/// is not modelled.
///
/// # Arguments
/// * `units` - Trays to serve. Zero gives zero time.
/// * `staff` - Workers on the stage, at least 1.
/// * `serving_seconds` - Closed range of per-tray serving time, non-negative.
pub fn serving_time<R>(
    units: u64,
    staff: u32,
    serving_seconds: (f64, f64),
    rng: &mut R,
) -> Result<f64>
where
    R: RandomSource + ?Sized,
{
    validate_seconds("serving_seconds", serving_seconds)?;

    let mut work = 0.0;
    for _ in 0..units {
        work += draw_real(rng, serving_seconds)?;
    }
    split_across(work, staff)
}

/// Time for the transport stage.
///
/// Trays leave in trips: each trip costs one draw from `trip_seconds` and
/// removes one draw from `trip_units`. Trips continue while trays remain.
/// The last trip may remove more trays than are left and is still charged
/// its full time. `trip_units` must start at 1 or more.
pub fn transport_time<R>(
    units: u64,
    staff: u32,
    trip_seconds: (f64, f64),
    trip_units: (i64, i64),
    rng: &mut R,
) -> Result<f64>
where
    R: RandomSource + ?Sized,
{
    let (work, _trips) = transport_work(units, trip_seconds, trip_units, rng)?;
    split_across(work, staff)
}

/// Accumulated trip time before dividing by staff, and the number of trips.
fn transport_work<R>(
    units: u64,
    trip_seconds: (f64, f64),
    trip_units: (i64, i64),
    rng: &mut R,
) -> Result<(f64, u64)>
where
    R: RandomSource + ?Sized,
{
    validate_seconds("trip_seconds", trip_seconds)?;
    validate_trip_units("trip_units", trip_units)?;

    let mut work = 0.0;
    let mut trips = 0;
    if units == 0 {
        return Ok((work, trips));
    }

    let mut remaining = i64::try_from(units)
        .map_err(|_| SimulationError::invalid("units", format!("{} is too large", units)))?;
    while remaining > 0 {
        work += draw_real(rng, trip_seconds)?;
        remaining -= draw_int(rng, trip_units)?;
        trips += 1;
    }
    Ok((work, trips))
}

fn split_across(work: f64, staff: u32) -> Result<f64> {
    if staff == 0 {
        return Err(SimulationError::invalid("staff", "must be at least 1"));
    }
    Ok(work / f64::from(staff))
}

fn draw_real<R>(rng: &mut R, (low, high): (f64, f64)) -> Result<f64>
where
    R: RandomSource + ?Sized,
{
    let value = rng.uniform_real(low, high)?;
    if !(low..=high).contains(&value) {
        return Err(RandomSourceError::OutOfRange { value, low, high }.into());
    }
    Ok(value)
}

fn draw_int<R>(rng: &mut R, (low, high): (i64, i64)) -> Result<i64>
where
    R: RandomSource + ?Sized,
{
    let value = rng.uniform_int(low, high)?;
    if !(low..=high).contains(&value) {
        return Err(RandomSourceError::OutOfRange {
            value: value as f64,
            low: low as f64,
            high: high as f64,
        }
        .into());
    }
    Ok(value)
}
