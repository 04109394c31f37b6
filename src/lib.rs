//! Metaheuristic comparison for grid-based vehicle routing.
//!
//! A synthetic single-vehicle routing instance — a square grid, a set of
//! station coordinates, a start anchor, and an end anchor — is solved by
//! three independent metaheuristics sharing one Manhattan-distance cost
//! model:
//!
//! - **Tabu Search (TS)**: exhaustive pairwise-swap neighborhood with a
//!   short-term FIFO memory of complete routes.
//! - **Simulated Annealing (SA)**: single random-swap trajectory search
//!   with temperature-based probabilistic acceptance and a choice of
//!   exponential or linear cooling.
//! - **Ant Colony Optimization (ACO)**: population sampling per iteration
//!   with an evaporating pheromone grid maintained as a side signal.
//!
//! Each optimizer returns the best route found, its distance, elapsed
//! wall-clock time, and a per-iteration best-so-far score history for
//! convergence inspection. Runs are deterministic given a seed: every
//! runner takes an owned, seedable random generator (or builds one from
//! `config.seed`) and never touches global RNG state.
//!
//! This crate is a pedagogical comparison of local-search behavior under
//! a fixed cost metric, not a production routing solver: there are no
//! capacity constraints, time windows, multiple vehicles, or road-network
//! costs, and no optimality guarantee.

pub mod aco;
pub mod generator;
pub mod problem;
pub mod random;
pub mod sa;
pub mod tabu;
