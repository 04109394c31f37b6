//! SA execution loop.

use std::time::{Duration, Instant};

use rand::seq::index;
use rand::Rng;

use super::config::{CoolingSchedule, SaConfig};
use crate::problem::{Distance, Route, RoutingInstance};
use crate::random::{create_rng, random_permutation};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Best route found.
    pub best_route: Route,
    /// Cost of the best route.
    pub best_distance: Distance,
    /// Iterations completed. Less than `max_iterations` when the
    /// temperature reached exactly zero.
    pub iterations: usize,
    /// Temperature at the last completed iteration, or zero when the
    /// zero-temperature stop triggered.
    pub final_temperature: f64,
    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,
    /// Number of accepted moves that improved on the current route.
    pub improving_moves: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
    /// Best distance after each completed iteration (non-increasing).
    pub score_history: Vec<Distance>,
}

/// Simulated Annealing runner.
pub struct SaRunner;

impl SaRunner {
    /// Executes Simulated Annealing, seeding the RNG from `config.seed`.
    pub fn run(instance: &RoutingInstance, config: &SaConfig) -> SaResult {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Executes Simulated Annealing drawing from a caller-owned generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        instance: &RoutingInstance,
        config: &SaConfig,
        rng: &mut R,
    ) -> SaResult {
        config.validate().expect("invalid SaConfig");
        let started = Instant::now();

        let mut current = random_permutation(instance.stations(), rng);
        let mut current_cost = instance.route_cost(&current);
        let mut best = current.clone();
        let mut best_distance = current_cost;

        let mut final_temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut score_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let temperature = temperature_at(config, iteration);
            final_temperature = temperature;
            // Exact-zero stop: the linear schedule crosses zero between
            // iterations otherwise, and exponential cooling never lands
            // on it.
            if temperature == 0.0 {
                break;
            }

            if current.len() < 2 {
                // No swap move exists; the trajectory cannot leave the
                // initial route.
                score_history.push(best_distance);
                continue;
            }

            let picked = index::sample(rng, current.len(), 2);
            let mut neighbor = current.clone();
            neighbor.swap(picked.index(0), picked.index(1));
            let neighbor_cost = instance.route_cost(&neighbor);
            let delta = neighbor_cost as f64 - current_cost as f64;

            // The two schedules carry different acceptance rules; the
            // uniform draw happens only for non-improving candidates.
            let accept = match config.schedule {
                CoolingSchedule::Exponential => {
                    neighbor_cost < current_cost
                        || rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                }
                CoolingSchedule::Linear => {
                    // Raw ratio, not a Boltzmann term, and not clamped.
                    neighbor_cost < current_cost
                        || rng.random_range(0.0..1.0) < delta / temperature
                }
            };

            if accept {
                if neighbor_cost < current_cost {
                    improving_moves += 1;
                }
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if neighbor_cost < best_distance {
                    best = current.clone();
                    best_distance = neighbor_cost;
                }
            }

            score_history.push(best_distance);
        }

        SaResult {
            best_route: best,
            best_distance,
            iterations: score_history.len(),
            final_temperature,
            accepted_moves,
            improving_moves,
            elapsed: started.elapsed(),
            score_history,
        }
    }
}

/// Temperature at a 0-indexed iteration under the configured schedule.
fn temperature_at(config: &SaConfig, iteration: usize) -> f64 {
    match config.schedule {
        CoolingSchedule::Exponential => {
            config.initial_temperature * (-config.cooling_rate * iteration as f64).exp()
        }
        CoolingSchedule::Linear => {
            config.initial_temperature - config.cooling_rate * iteration as f64
        }
    }
}
