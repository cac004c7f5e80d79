//! End-to-end tests for the Monte Carlo engine.
//!
//! These tests exercise the full flow (model, engine, batch, statistics),
//! including the statistical convergence of batch means towards the discrete
//! analytic mean of the Euler recurrence.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ratesim_mc::{MonteCarloEngine, SimRng, StatisticsError};
use ratesim_models::{
    ConfigurationError, FixedDraws, Innovation, ModelParameters, ReferenceRateSource,
    ShortRateModel,
};

/// Expected per-step mean of the Euler recurrence with zero-mean shocks:
/// `m_k = mu + (r0 - mu) * (1 - theta * dt)^k`.
fn discrete_mean(params: &ModelParameters, step: usize) -> f64 {
    let decay = 1.0 - params.mean_reversion() * params.dt();
    params.long_term_mean()
        + (params.initial_rate() - params.long_term_mean()) * decay.powi(step as i32)
}

#[test]
fn golden_vasicek_scenario_through_the_engine() {
    // Fixed draw sequence from the hand-computed scenario: the engine must
    // reproduce the exact same path the model produces standalone.
    let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 5).unwrap();
    let mut draws = FixedDraws::new(vec![0.1, -0.2, 0.05, 0.3]);
    let reference = ShortRateModel::vasicek().generate_path(&params, &mut draws);

    assert_relative_eq!(reference.rates()[1], 0.03889442719099991, epsilon = 1e-12);
    assert_relative_eq!(reference.rates()[4], 0.04990881842603576, epsilon = 1e-12);

    let mut engine = MonteCarloEngine::new();
    let mut rng = SimRng::from_seed(42);
    let batch = engine
        .run(&ShortRateModel::vasicek(), &params, 3, &mut rng)
        .unwrap();

    // Engine-produced columns share shape and starting point with the
    // reference, and differ only through their draws.
    for i in 0..3 {
        let path = batch.path(i).unwrap();
        assert_eq!(path.len(), reference.len());
        assert_eq!(path.initial_rate(), reference.initial_rate());
    }
}

#[test]
fn batch_shape_holds_for_all_run_counts() {
    let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 12).unwrap();
    let mut engine = MonteCarloEngine::new();

    for m in [1usize, 2, 17, 100] {
        let mut rng = SimRng::from_seed(42);
        let batch = engine
            .run(&ShortRateModel::cir(), &params, m, &mut rng)
            .unwrap();
        assert_eq!(batch.n_steps(), 12);
        assert_eq!(batch.n_runs(), m);
        let stats = engine.statistics().unwrap();
        assert_eq!(stats.n_steps(), 12);
        assert_eq!(stats.sample_count(), m);
    }
}

#[test]
fn vasicek_batch_mean_converges_to_discrete_analytic_mean() {
    let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 13).unwrap();
    let mut engine = MonteCarloEngine::new();
    engine
        .run_parallel(&ShortRateModel::vasicek(), &params, 20_000, 42)
        .unwrap();

    let stats = engine.statistics().unwrap();
    for k in 0..params.n_steps() {
        assert_abs_diff_eq!(stats.mean()[k], discrete_mean(&params, k), epsilon = 1e-3);
    }
}

#[test]
fn cir_batch_mean_converges_to_discrete_analytic_mean() {
    // The CIR diffusion has zero conditional mean under normal innovations,
    // so the expected rate follows the same drift recurrence as Vasicek.
    let params = ModelParameters::new(1.5, 0.05, 0.05, 0.03, 1.0, 13).unwrap();
    let mut engine = MonteCarloEngine::new();
    engine
        .run_parallel(&ShortRateModel::cir(), &params, 20_000, 42)
        .unwrap();

    let stats = engine.statistics().unwrap();
    for k in 0..params.n_steps() {
        assert_abs_diff_eq!(stats.mean()[k], discrete_mean(&params, k), epsilon = 1.5e-3);
    }
}

#[test]
fn legacy_uniform_cir_innovation_biases_the_mean_upward() {
    // Uniform-[0, 1) shocks have mean 1/2, so the legacy discretisation
    // drifts above the normal-innovation batch.
    let params = ModelParameters::new(1.5, 0.05, 0.05, 0.03, 1.0, 13).unwrap();

    let mut normal_engine = MonteCarloEngine::new();
    normal_engine
        .run_parallel(&ShortRateModel::cir(), &params, 10_000, 42)
        .unwrap();
    let normal_stats = normal_engine.statistics().unwrap();

    let mut legacy_engine = MonteCarloEngine::new();
    legacy_engine
        .run_parallel(
            &ShortRateModel::cir_with_innovation(Innovation::Uniform),
            &params,
            10_000,
            42,
        )
        .unwrap();
    let legacy_stats = legacy_engine.statistics().unwrap();

    let last = params.n_steps() - 1;
    assert!(legacy_stats.mean()[last] > normal_stats.mean()[last] + 1e-3);
}

#[test]
fn anomalous_paths_are_excluded_and_reported() {
    // theta * dt = 25 makes the recurrence oscillate explosively whatever
    // the shocks; every path in the batch blows up.
    let params = ModelParameters::new(500.0, 0.05, 0.02, 0.03, 1.0, 20).unwrap();
    let mut engine = MonteCarloEngine::new();
    let mut rng = SimRng::from_seed(42);
    let batch = engine
        .run(&ShortRateModel::vasicek(), &params, 5, &mut rng)
        .unwrap();

    assert_eq!(batch.anomalous_count(), 5);
    for path in batch.paths() {
        let anomaly = path.anomaly().expect("explosive path must carry an anomaly");
        assert!(anomaly.step < path.len());
    }

    assert_eq!(
        engine.statistics(),
        Err(StatisticsError::AllPathsExcluded(5))
    );
}

#[test]
fn rejects_invalid_configuration_and_empty_batch() {
    // Negative volatility is rejected at construction.
    assert_eq!(
        ModelParameters::new(2.0, 0.05, -0.01, 0.03, 1.0, 252).unwrap_err(),
        ConfigurationError::InvalidVolatility(-0.01)
    );

    // Zero simulations are rejected before any draw is consumed.
    let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 252).unwrap();
    let mut engine = MonteCarloEngine::new();
    let mut rng = SimRng::from_seed(42);
    assert_eq!(
        engine
            .run(&ShortRateModel::vasicek(), &params, 0, &mut rng)
            .unwrap_err(),
        ConfigurationError::InvalidSimulationCount(0)
    );

    // Statistics on a freshly constructed engine fail with EmptyBatch.
    assert_eq!(
        MonteCarloEngine::new().statistics(),
        Err(StatisticsError::EmptyBatch)
    );
}

#[test]
fn percentile_bands_bracket_the_mean() {
    let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 13).unwrap();
    let mut engine = MonteCarloEngine::new();
    engine
        .run_parallel(&ShortRateModel::vasicek(), &params, 5_000, 42)
        .unwrap();

    let stats = engine
        .statistics_with_percentiles(&[0.05, 0.95])
        .unwrap();
    let p05 = stats.percentile(0.05).unwrap();
    let p95 = stats.percentile(0.95).unwrap();

    for k in 1..params.n_steps() {
        assert!(p05[k] < stats.mean()[k]);
        assert!(stats.mean()[k] < p95[k]);
        assert!(stats.min()[k] <= p05[k]);
        assert!(p95[k] <= stats.max()[k]);
    }
}

#[test]
fn simulation_seeded_from_an_external_rate_source() {
    struct ObservedRate(f64);

    impl ReferenceRateSource for ObservedRate {
        fn initial_rate(&self) -> Option<f64> {
            Some(self.0)
        }
    }

    let fallback = ModelParameters::with_defaults(2.0, 0.05, 0.02, 0.03).unwrap();
    let params = fallback.seeded_from(&ObservedRate(0.0425)).unwrap();

    let mut engine = MonteCarloEngine::new();
    let mut rng = SimRng::from_seed(42);
    let batch = engine
        .run(&ShortRateModel::vasicek(), &params, 10, &mut rng)
        .unwrap();

    for path in batch.paths() {
        assert_eq!(path.initial_rate(), 0.0425);
    }
}
