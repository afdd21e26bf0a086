// src/simulation/engine.rs

use crate::error::Result;
use crate::model::stage::{serving_time, transport_time};
use crate::model::trial::{BatchStatus, SimulationBatch, TrialResult};
use crate::random::RandomSource;
use crate::simulation::cancel::CancellationToken;
use crate::simulation::config::SimulationConfig;
use tracing::{debug, info, info_span, trace};

const MAX_PREALLOCATED_TRIALS: u32 = 65_536;

/// Runs `config.trial_count` independent trials with no observers attached.
pub fn run_simulation<R>(config: &SimulationConfig, rng: &mut R) -> Result<SimulationBatch>
where
    R: RandomSource + ?Sized,
{
    Simulation::new(config.clone()).run(rng)
}

/// Samples the three stages once and combines them into a trial.
///
/// Nothing is carried over between calls; all state comes from `config` and `rng`.
pub fn run_trial<R>(config: &SimulationConfig, rng: &mut R) -> Result<TrialResult>
where
    R: RandomSource + ?Sized,
{
    let units = config.total_units();
    let timings = &config.timings;

    let side_dish = serving_time(units, config.staff_side_dish, timings.serving_seconds, rng)?;
    let transport = transport_time(
        units,
        config.staff_transport,
        timings.trip_seconds,
        timings.trip_units,
        rng,
    )?;
    let rice = serving_time(units, config.staff_rice, timings.serving_seconds, rng)?;

    Ok(TrialResult::new(side_dish, transport, rice))
}

/// A configured simulation run with optional progress and cancellation hooks.
///
/// The config is only read; running twice with equal randomness gives equal batches.
pub struct Simulation<'a> {
    config: SimulationConfig,

    // Observers
    progress: Option<Box<dyn FnMut(f64) + 'a>>,
    cancellation: Option<CancellationToken>,
}

impl<'a> Simulation<'a> {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            progress: None,
            cancellation: None,
        }
    }

    /// Called after every finished trial with the completed fraction in `[0, 1]`.
    pub fn with_progress(mut self, observer: impl FnMut(f64) + 'a) -> Self {
        self.progress = Some(Box::new(observer));
        self
    }

    /// Checked before each trial. Once cancelled, the run stops and returns the
    /// trials finished so far as a [`BatchStatus::Cancelled`] batch.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Runs every trial in order.
    ///
    /// Fails before the first trial if the config is invalid, and aborts
    /// without a partial batch if the random source fails.
    pub fn run<R>(&mut self, rng: &mut R) -> Result<SimulationBatch>
    where
        R: RandomSource + ?Sized,
    {
        self.config.validate()?;

        let requested = self.config.trial_count;
        let span = info_span!(
            "simulation",
            total_units = self.config.total_units(),
            trials = requested
        );
        let _guard = span.enter();
        info!(
            staff_side_dish = self.config.staff_side_dish,
            staff_transport = self.config.staff_transport,
            staff_rice = self.config.staff_rice,
            "Starting simulation"
        );

        // Large trial counts grow the buffer as trials finish.
        let mut trials = Vec::with_capacity(requested.min(MAX_PREALLOCATED_TRIALS) as usize);
        let mut status = BatchStatus::Completed;

        for i in 0..requested {
            // Stop between trials, never inside one
            if self.is_cancelled() {
                debug!(completed = i, "Simulation cancelled");
                status = BatchStatus::Cancelled;
                break;
            }

            // A failed draw aborts the whole batch
            let trial = run_trial(&self.config, rng)?;
            trace!(
                trial = i,
                side_dish = trial.side_dish_time(),
                transport = trial.transport_time(),
                rice = trial.rice_time(),
                "Trial finished"
            );
            trials.push(trial);

            if let Some(progress) = self.progress.as_mut() {
                progress(f64::from(i + 1) / f64::from(requested));
            }
        }

        info!(completed = trials.len(), ?status, "Simulation finished");
        Ok(SimulationBatch::new(trials, requested, status))
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
