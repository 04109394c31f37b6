//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use gridroute::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_capacity(10);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_capacity, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations to run. The search never stops early.
    pub max_iterations: usize,
    /// Capacity of the FIFO tabu list of full routes.
    pub tabu_capacity: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_capacity: 10,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.tabu_capacity == 0 {
            return Err("tabu_capacity must be positive".into());
        }
        Ok(())
    }
}
