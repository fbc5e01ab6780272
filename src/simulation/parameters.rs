//! Run-level simulation parameters.

use serde::{Deserialize, Serialize};

/// High-level parameters of one library-preparation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Length of the synthetic genome drawn for each sample
    pub genome_length: usize,
    /// Target fragment size for the shearing stage
    pub target_size: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl PrepConfig {
    /// Create a new run configuration.
    pub fn new(genome_length: usize, target_size: usize, seed: Option<u64>) -> Self {
        Self {
            genome_length,
            target_size,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_config_new() {
        let config = PrepConfig::new(1_000_000, 300, Some(42));
        assert_eq!(config.genome_length, 1_000_000);
        assert_eq!(config.target_size, 300);
        assert_eq!(config.seed, Some(42));
    }
}
