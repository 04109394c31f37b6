//! Ant Colony Optimization (ACO).
//!
//! A population metaheuristic: each iteration a colony of ants constructs
//! candidate routes, the pheromone grid evaporates, and every ant deposits
//! pheromone proportional to its route quality on the cells it visited.
//!
//! In this design route construction does **not** consult the pheromone
//! grid — ants sample uniformly random permutations and the grid is pure
//! side bookkeeping. Classical ACO biases construction by pheromone
//! strength; this variant deliberately does not, and the behavior is kept
//! as-is. See DESIGN.md for the discussion.
//!
//! # References
//!
//! - Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System:
//!   Optimization by a Colony of Cooperating Agents", *IEEE Transactions
//!   on Systems, Man, and Cybernetics B* 26(1), 29-41.

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
