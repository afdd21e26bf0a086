// src/analysis/statistics.rs

//! Order-independent aggregates over a batch.

use crate::analysis::clock::CompletionClock;
use crate::model::stage::Stage;
use crate::model::trial::SimulationBatch;
use serde::Serialize;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// The stage with the highest mean.
///
/// Exact ties go to the stage declared first in [`Stage::ALL`].
pub fn bottleneck(side_dish: f64, transport: f64, rice: f64) -> Stage {
    let means = [side_dish, transport, rice];
    let mut worst = 0;
    for i in 1..means.len() {
        if means[i] > means[worst] {
            worst = i;
        }
    }
    Stage::ALL[worst]
}

/// One row of the per-stage breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageMean {
    pub stage: Stage,
    pub mean_seconds: f64,
    /// Fraction of the summed stage means, for proportional charts.
    pub share: f64,
}

/// Means across a batch and the stage that limits it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageSummary {
    pub trials: usize,
    pub mean_seconds: f64,
    pub mean_side_dish: f64,
    pub mean_transport: f64,
    pub mean_rice: f64,
    pub bottleneck: Stage,
}

impl StageSummary {
    /// Summarises a batch. Returns `None` if it holds no trials.
    pub fn from_batch(batch: &SimulationBatch) -> Option<Self> {
        let mean_seconds = mean(&batch.total_times())?;
        let mean_side_dish = mean(&batch.side_dish_times())?;
        let mean_transport = mean(&batch.transport_times())?;
        let mean_rice = mean(&batch.rice_times())?;

        Some(Self {
            trials: batch.len(),
            mean_seconds,
            mean_side_dish,
            mean_transport,
            mean_rice,
            bottleneck: bottleneck(mean_side_dish, mean_transport, mean_rice),
        })
    }

    pub fn mean_minutes(&self) -> f64 {
        self.mean_seconds / 60.0
    }

    pub fn stage_mean(&self, stage: Stage) -> f64 {
        match stage {
            Stage::SideDish => self.mean_side_dish,
            Stage::Transport => self.mean_transport,
            Stage::Rice => self.mean_rice,
        }
    }

    /// Per-stage means in declaration order, with each stage's share of their sum.
    pub fn breakdown(&self) -> [StageMean; 3] {
        let sum: f64 = Stage::ALL.iter().map(|&s| self.stage_mean(s)).sum();
        Stage::ALL.map(|stage| {
            let mean_seconds = self.stage_mean(stage);
            StageMean {
                stage,
                mean_seconds,
                share: if sum > 0.0 { mean_seconds / sum } else { 0.0 },
            }
        })
    }

    /// Clock time at which the average run finishes.
    pub fn completion_clock(&self) -> CompletionClock {
        CompletionClock::from_mean_seconds(self.mean_seconds)
    }
}
