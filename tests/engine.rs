use ompreng_sim::analysis::{histogram, StageSummary, DEFAULT_BINS};
use ompreng_sim::model::{BatchStatus, Stage};
use ompreng_sim::random::{ConstantSource, RandomSource, RngSource};
use ompreng_sim::simulation::{run_simulation, SimulationConfig, StageTimings};
use ompreng_sim::{RandomSourceError, SimulationError};

/// A source that fails after a fixed number of draws, like a broken entropy device.
#[derive(Debug)]
struct FlakySource {
    inner: RngSource<rand::rngs::StdRng>,
    draws_left: usize,
}

impl FlakySource {
    fn take(&mut self) -> Result<(), RandomSourceError> {
        if self.draws_left == 0 {
            return Err(RandomSourceError::Failure("device unplugged".to_string()));
        }
        self.draws_left -= 1;
        Ok(())
    }
}

impl RandomSource for FlakySource {
    fn uniform_real(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError> {
        self.take()?;
        self.inner.uniform_real(low, high)
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64, RandomSourceError> {
        self.take()?;
        self.inner.uniform_int(low, high)
    }
}

#[test]
fn returns_one_result_per_trial() {
    for trials in [1, 2, 17, 250] {
        let config = SimulationConfig::new(10, 2, 1, 1, 1, trials).unwrap();
        let batch = run_simulation(&config, &mut RngSource::seeded(u64::from(trials))).unwrap();

        assert_eq!(batch.len(), trials as usize);
        assert_eq!(batch.status(), BatchStatus::Completed);
        assert_eq!(batch.total_times().len(), trials as usize);
        assert_eq!(batch.side_dish_times().len(), trials as usize);
        assert_eq!(batch.transport_times().len(), trials as usize);
        assert_eq!(batch.rice_times().len(), trials as usize);
    }
}

#[test]
fn total_is_exactly_the_slowest_stage() {
    let config = SimulationConfig::new(40, 4, 3, 1, 2, 500).unwrap();
    let batch = run_simulation(&config, &mut RngSource::seeded(5)).unwrap();

    for trial in batch.trials() {
        let slowest = trial
            .side_dish_time()
            .max(trial.transport_time())
            .max(trial.rice_time());
        assert_eq!(trial.total_time().to_bits(), slowest.to_bits());
        assert!(trial.side_dish_time() >= 0.0);
        assert!(trial.transport_time() >= 0.0);
        assert!(trial.rice_time() >= 0.0);
    }
}

#[test]
fn stage_times_stay_within_sampling_bounds() {
    let config = SimulationConfig::new(60, 3, 2, 2, 3, 300).unwrap();
    let batch = run_simulation(&config, &mut RngSource::seeded(9)).unwrap();

    for trial in batch.trials() {
        assert!((180.0 * 30.0 / 2.0..=180.0 * 60.0 / 2.0).contains(&trial.side_dish_time()));
        assert!((180.0 * 30.0 / 3.0..=180.0 * 60.0 / 3.0).contains(&trial.rice_time()));
        // Between ceil(180/7) and ceil(180/4) trips of 20..60 seconds, split over 2.
        assert!((26.0 * 20.0 / 2.0..=45.0 * 60.0 / 2.0).contains(&trial.transport_time()));
    }
}

#[test]
fn same_seed_gives_bit_identical_batches() {
    let config = SimulationConfig::default();
    let a = run_simulation(&config, &mut RngSource::seeded(2024)).unwrap();
    let b = run_simulation(&config, &mut RngSource::seeded(2024)).unwrap();

    let bits = |times: Vec<f64>| times.into_iter().map(f64::to_bits).collect::<Vec<_>>();
    assert_eq!(bits(a.total_times()), bits(b.total_times()));
    assert_eq!(bits(a.side_dish_times()), bits(b.side_dish_times()));
    assert_eq!(bits(a.transport_times()), bits(b.transport_times()));
    assert_eq!(bits(a.rice_times()), bits(b.rice_times()));

    let c = run_simulation(&config, &mut RngSource::seeded(2025)).unwrap();
    assert_ne!(bits(a.total_times()), bits(c.total_times()));
}

#[test]
fn worked_example_with_fixed_draws() {
    let config = SimulationConfig::new(60, 3, 2, 2, 3, 1).unwrap();
    assert_eq!(config.total_units(), 180);

    let batch = run_simulation(&config, &mut ConstantSource::new(45.0, 5)).unwrap();
    let trial = batch.trials()[0];

    assert_eq!(trial.side_dish_time(), 4050.0);
    assert_eq!(trial.transport_time(), 810.0);
    assert_eq!(trial.rice_time(), 2700.0);
    assert_eq!(trial.total_time(), 4050.0);

    let summary = StageSummary::from_batch(&batch).unwrap();
    assert_eq!(summary.bottleneck, Stage::SideDish);
    assert_eq!(summary.completion_clock().short_label(), "8:07:");
}

#[test]
fn transport_accumulates_one_draw_per_trip() {
    for (tables, per_table, batch_size) in [(60, 3, 4), (7, 1, 7), (13, 5, 6), (1, 1, 5)] {
        let config = SimulationConfig::new(tables, per_table, 1, 1, 1, 1).unwrap();
        let units = config.total_units();
        let batch = run_simulation(&config, &mut ConstantSource::new(30.0, batch_size)).unwrap();

        let trips = (units + batch_size as u64 - 1) / batch_size as u64;
        assert_eq!(batch.trials()[0].transport_time(), 30.0 * trips as f64);
    }
}

#[test]
fn custom_timings_are_used() {
    let timings = StageTimings {
        serving_seconds: (10.0, 10.0),
        trip_seconds: (5.0, 5.0),
        trip_units: (2, 2),
    };
    let config = SimulationConfig::new(2, 2, 1, 1, 4, 3)
        .unwrap()
        .with_timings(timings);

    let batch = run_simulation(&config, &mut RngSource::seeded(0)).unwrap();
    for trial in batch.trials() {
        assert_eq!(trial.side_dish_time(), 40.0);
        assert_eq!(trial.transport_time(), 10.0);
        assert_eq!(trial.rice_time(), 10.0);
    }
}

#[test]
fn source_failure_propagates() {
    let config = SimulationConfig::new(10, 3, 2, 2, 2, 50).unwrap();
    let mut rng = FlakySource {
        inner: RngSource::seeded(1),
        draws_left: 500,
    };

    let err = run_simulation(&config, &mut rng).unwrap_err();
    assert_eq!(
        err,
        SimulationError::RandomSource(RandomSourceError::Failure("device unplugged".to_string()))
    );
}

#[test]
fn default_scenario_is_limited_by_side_dish() {
    let batch = run_simulation(&SimulationConfig::default(), &mut RngSource::seeded(77)).unwrap();
    let summary = StageSummary::from_batch(&batch).unwrap();

    // Expected means: side dish 4050, rice 2700, transport ~660.
    assert_eq!(summary.bottleneck, Stage::SideDish);
    assert!((summary.mean_side_dish - 4050.0).abs() < 50.0);
    assert!((summary.mean_rice - 2700.0).abs() < 50.0);
    assert!(summary.mean_transport < summary.mean_rice);
    assert!(summary.mean_seconds >= summary.mean_side_dish);

    let bins = histogram(&batch.total_times(), DEFAULT_BINS);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 1000);
}

#[test]
fn batch_and_summary_serialize_for_presentation() {
    let config = SimulationConfig::new(60, 3, 2, 2, 3, 2).unwrap();
    let batch = run_simulation(&config, &mut ConstantSource::new(45.0, 5)).unwrap();
    let summary = StageSummary::from_batch(&batch).unwrap();

    let batch_json = serde_json::to_value(&batch).unwrap();
    assert_eq!(batch_json["status"], "Completed");
    assert_eq!(batch_json["requested"], 2);
    assert_eq!(batch_json["trials"][1]["transport_time"], 810.0);
    assert_eq!(batch_json["trials"][1]["total_time"], 4050.0);

    let summary_json = serde_json::to_value(summary).unwrap();
    assert_eq!(summary_json["bottleneck"], "SideDish");
    assert_eq!(summary_json["mean_rice"], 2700.0);

    let breakdown = serde_json::to_value(summary.breakdown()).unwrap();
    assert_eq!(breakdown[1]["stage"], "Transport");
    assert_eq!(breakdown[1]["mean_seconds"], 810.0);

    let config_json = serde_json::to_value(&config).unwrap();
    assert_eq!(config_json["timings"]["trip_units"], serde_json::json!([4, 7]));
}
