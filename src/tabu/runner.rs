//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random permutation of the stations
//! 2. At each iteration:
//!    a. Generate the full pairwise-swap neighborhood
//!    b. Select the cheapest candidate not in the tabu list
//!    c. Move there unconditionally, even if worse than the current route
//!    d. Append the chosen route to the FIFO tabu list, update global best
//! 3. Stop after exactly `max_iterations` iterations
//!
//! Tabu membership is exact full-route equality, not a move key: two
//! candidates are the same only if their whole visiting orders match.
//! There is no aspiration criterion.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::Rng;

use super::config::TabuConfig;
use crate::problem::{Distance, Route, RoutingInstance};
use crate::random::{create_rng, random_permutation};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
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

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search, seeding the RNG from `config.seed`.
    pub fn run(instance: &RoutingInstance, config: &TabuConfig) -> TabuResult {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Executes Tabu Search drawing from a caller-owned generator, so a
    /// batch driver can thread one seeded RNG through several runs.
    ///
    /// When every candidate in the neighborhood is tabu, the search takes
    /// the cheapest candidate regardless of tabu status; skipping the
    /// iteration would stall a small neighborhood forever once the list
    /// covers it.
    pub fn run_with_rng<R: Rng + ?Sized>(
        instance: &RoutingInstance,
        config: &TabuConfig,
        rng: &mut R,
    ) -> TabuResult {
        config.validate().expect("invalid TabuConfig");
        let started = Instant::now();

        let mut current = random_permutation(instance.stations(), rng);
        let mut best = current.clone();
        let mut best_distance = instance.route_cost(&best);

        let mut tabu_list: VecDeque<Route> = VecDeque::with_capacity(config.tabu_capacity);
        let mut score_history = Vec::with_capacity(config.max_iterations);

        for _ in 0..config.max_iterations {
            // Full swap neighborhood: n*(n-1)/2 candidates.
            let mut chosen: Option<(Route, Distance)> = None;
            let mut cheapest_overall: Option<(Route, Distance)> = None;

            for j in 0..current.len() {
                for k in (j + 1)..current.len() {
                    let mut candidate = current.clone();
                    candidate.swap(j, k);
                    let cost = instance.route_cost(&candidate);

                    if cheapest_overall.as_ref().is_none_or(|(_, c)| cost < *c) {
                        cheapest_overall = Some((candidate.clone(), cost));
                    }
                    if tabu_list.contains(&candidate) {
                        continue;
                    }
                    if chosen.as_ref().is_none_or(|(_, c)| cost < *c) {
                        chosen = Some((candidate, cost));
                    }
                }
            }

            // All candidates tabu: fall back to the cheapest one.
            let Some((next, next_cost)) = chosen.or(cheapest_overall) else {
                // Fewer than two stations: the swap neighborhood is empty.
                score_history.push(best_distance);
                continue;
            };

            if next_cost < best_distance {
                best = next.clone();
                best_distance = next_cost;
            }

            current = next;
            tabu_list.push_back(current.clone());
            if tabu_list.len() > config.tabu_capacity {
                tabu_list.pop_front();
            }

            score_history.push(best_distance);
        }

        TabuResult {
            best_route: best,
            best_distance,
            iterations: score_history.len(),
            elapsed: started.elapsed(),
            score_history,
        }
    }
}
