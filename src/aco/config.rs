//! ACO configuration.

/// Configuration parameters for Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use gridroute::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_max_iterations(5000)
///     .with_num_ants(10)
///     .with_evaporation_rate(0.9);
/// assert_eq!(config.num_ants, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of iterations to run.
    pub max_iterations: usize,
    /// Number of ants constructing routes per iteration.
    pub num_ants: usize,
    /// Multiplicative decay factor applied to every pheromone cell each
    /// iteration, in `(0, 1]`.
    pub evaporation_rate: f64,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            num_ants: 10,
            evaporation_rate: 0.5,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
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
        if self.num_ants == 0 {
            return Err("num_ants must be positive".into());
        }
        if self.evaporation_rate <= 0.0 || self.evaporation_rate > 1.0 {
            return Err(format!(
                "evaporation_rate must be in (0, 1], got {}",
                self.evaporation_rate
            ));
        }
        Ok(())
    }
}
