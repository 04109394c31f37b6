//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic: at each iteration a random
//! swap neighbor is proposed and accepted probabilistically, with the
//! acceptance pressure controlled by a temperature that decreases over
//! the run. The two cooling schedules here carry genuinely different
//! acceptance rules, not just different temperature curves — see
//! [`CoolingSchedule`].
//!
//! # References
//!
//! - Kirkpatrick, S., Gelatt, C. D. & Vecchi, M. P. (1983). "Optimization
//!   by Simulated Annealing", *Science* 220(4598), 671-680.
//! - Černý, V. (1985). "Thermodynamical approach to the traveling salesman
//!   problem", *Journal of Optimization Theory and Applications* 45, 41-51.

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
