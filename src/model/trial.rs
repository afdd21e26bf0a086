// src/model/trial.rs

use crate::model::stage::Stage;
use serde::Serialize;

/// Outcome of one trial, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialResult {
    side_dish_time: f64,
    transport_time: f64,
    rice_time: f64,
    total_time: f64,
}

impl TrialResult {
    /// The stages run concurrently, so the trial ends when the slowest one does.
    pub fn new(side_dish_time: f64, transport_time: f64, rice_time: f64) -> Self {
        Self {
            side_dish_time,
            transport_time,
            rice_time,
            total_time: side_dish_time.max(transport_time).max(rice_time),
        }
    }

    pub fn side_dish_time(&self) -> f64 {
        self.side_dish_time
    }

    pub fn transport_time(&self) -> f64 {
        self.transport_time
    }

    pub fn rice_time(&self) -> f64 {
        self.rice_time
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn stage_time(&self, stage: Stage) -> f64 {
        match stage {
            Stage::SideDish => self.side_dish_time,
            Stage::Transport => self.transport_time,
            Stage::Rice => self.rice_time,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchStatus {
    /// Every requested trial ran.
    Completed,
    /// The run was stopped early; the batch holds the trials finished before that.
    Cancelled,
}

/// All trial results from one run, in trial order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationBatch {
    trials: Vec<TrialResult>,
    requested: u32,
    status: BatchStatus,
}

impl SimulationBatch {
    pub(crate) fn new(trials: Vec<TrialResult>, requested: u32, status: BatchStatus) -> Self {
        Self {
            trials,
            requested,
            status,
        }
    }

    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    pub fn into_trials(self) -> Vec<TrialResult> {
        self.trials
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Trial count the run was asked for.
    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == BatchStatus::Completed
    }

    pub fn total_times(&self) -> Vec<f64> {
        self.trials.iter().map(TrialResult::total_time).collect()
    }

    pub fn stage_times(&self, stage: Stage) -> Vec<f64> {
        self.trials.iter().map(|t| t.stage_time(stage)).collect()
    }

    pub fn side_dish_times(&self) -> Vec<f64> {
        self.stage_times(Stage::SideDish)
    }

    pub fn transport_times(&self) -> Vec<f64> {
        self.stage_times(Stage::Transport)
    }

    pub fn rice_times(&self) -> Vec<f64> {
        self.stage_times(Stage::Rice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_the_slowest_stage() {
        assert_eq!(TrialResult::new(4050.0, 810.0, 2700.0).total_time(), 4050.0);
        assert_eq!(TrialResult::new(1.0, 3.0, 2.0).total_time(), 3.0);
        assert_eq!(TrialResult::new(1.0, 2.0, 5.5).total_time(), 5.5);
        assert_eq!(TrialResult::new(0.0, 0.0, 0.0).total_time(), 0.0);
    }

    #[test]
    fn batch_exposes_parallel_sequences() {
        let batch = SimulationBatch::new(
            vec![
                TrialResult::new(3.0, 1.0, 2.0),
                TrialResult::new(4.0, 6.0, 5.0),
            ],
            2,
            BatchStatus::Completed,
        );

        assert_eq!(batch.total_times(), vec![3.0, 6.0]);
        assert_eq!(batch.side_dish_times(), vec![3.0, 4.0]);
        assert_eq!(batch.transport_times(), vec![1.0, 6.0]);
        assert_eq!(batch.rice_times(), vec![2.0, 5.0]);
        assert!(batch.is_complete());
    }
}
