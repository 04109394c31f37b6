//! SA configuration and cooling schedules.

/// Cooling schedule for temperature reduction.
///
/// The schedule selects both the temperature curve and the acceptance
/// rule. The two rules are deliberately distinct and must not be unified:
///
/// - `Exponential` uses the Metropolis criterion, accepting a worse
///   neighbor with probability `e^(-Δ/T)`.
/// - `Linear` accepts a worse neighbor with probability equal to the raw
///   ratio `Δ/T`. This is a simpler heuristic, not a Boltzmann term, and
///   the ratio is not clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Exponential decay: `T_i = T_0 * e^(-rate * i)`.
    Exponential,
    /// Linear decay: `T_i = T_0 - rate * i`.
    ///
    /// Reaches exactly zero when `T_0` is a multiple of `rate`, which
    /// terminates the run at that iteration.
    Linear,
}

/// Configuration for the Simulated Annealing algorithm.
///
/// Defaults follow the tuned reference parameters for this problem
/// family: exponential cooling from 250.0 at rate 0.001.
///
/// # Examples
///
/// ```
/// use gridroute::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_iterations(15_000)
///     .with_initial_temperature(250.0)
///     .with_cooling_rate(0.001)
///     .with_schedule(CoolingSchedule::Exponential);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of iterations. The run may stop earlier, at the
    /// iteration where the temperature reaches exactly zero.
    pub max_iterations: usize,
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,
    /// Cooling rate; its meaning depends on the schedule.
    pub cooling_rate: f64,
    /// Cooling schedule (and with it, the acceptance rule).
    pub schedule: CoolingSchedule,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            initial_temperature: 250.0,
            cooling_rate: 0.001,
            schedule: CoolingSchedule::Exponential,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 {
            return Err("cooling_rate must be positive".into());
        }
        Ok(())
    }
}
