//! ACO execution loop.
//!
//! Per iteration: every ant samples a uniformly random route and the best
//! route seen so far is updated immediately; then the whole pheromone grid
//! evaporates, and each ant deposits `1 / cost` at the grid cell of every
//! station it visited except the last.
//!
//! The deposit divides by the route cost. [`RoutingInstance::new`] rejects
//! the one instance shape whose routes cost zero, so the division is
//! always defined here.

use std::time::{Duration, Instant};

use rand::Rng;

use super::config::AcoConfig;
use crate::problem::{Coordinate, Distance, Route, RoutingInstance};
use crate::random::{create_rng, random_permutation};

/// Result of an Ant Colony Optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best route found.
    pub best_route: Route,
    /// Cost of the best route.
    pub best_distance: Distance,
    /// Total iterations executed.
    pub iterations: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
    /// Best distance after each iteration (non-increasing).
    pub score_history: Vec<Distance>,
}

/// Ant Colony Optimization runner.
pub struct AcoRunner;

impl AcoRunner {
    /// Executes ACO, seeding the RNG from `config.seed`.
    pub fn run(instance: &RoutingInstance, config: &AcoConfig) -> AcoResult {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Executes ACO drawing from a caller-owned generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        instance: &RoutingInstance,
        config: &AcoConfig,
        rng: &mut R,
    ) -> AcoResult {
        config.validate().expect("invalid AcoConfig");
        let started = Instant::now();

        let mut pheromone = vec![1.0f64; instance.grid_size() * instance.grid_size()];
        let mut best_route = Route::new();
        let mut best_distance = Distance::MAX;
        let mut score_history = Vec::with_capacity(config.max_iterations);

        for _ in 0..config.max_iterations {
            let mut ants: Vec<(Route, Distance)> = Vec::with_capacity(config.num_ants);
            for _ in 0..config.num_ants {
                // Construction ignores the pheromone grid by design.
                let route = random_permutation(instance.stations(), rng);
                let cost = instance.route_cost(&route);
                if cost < best_distance {
                    best_distance = cost;
                    best_route = route.clone();
                }
                ants.push((route, cost));
            }

            evaporate(&mut pheromone, config.evaporation_rate);
            for (route, cost) in &ants {
                deposit(&mut pheromone, instance, route, *cost);
            }

            score_history.push(best_distance);
        }

        AcoResult {
            best_route,
            best_distance,
            iterations: score_history.len(),
            elapsed: started.elapsed(),
            score_history,
        }
    }
}

/// Multiplicative decay of the whole grid.
fn evaporate(pheromone: &mut [f64], rate: f64) {
    for cell in pheromone {
        *cell *= rate;
    }
}

/// Deposits `1 / cost` at every visited cell except the last station's.
fn deposit(pheromone: &mut [f64], instance: &RoutingInstance, route: &[Coordinate], cost: Distance) {
    let amount = 1.0 / cost as f64;
    for station in route.iter().take(route.len().saturating_sub(1)) {
        pheromone[instance.cell_index(*station)] += amount;
    }
}
