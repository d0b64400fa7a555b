//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SimError};

use super::heuristic::HeuristicWeights;

/// Default look-ahead in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched from the root (must be at least 1).
    /// Depth 1 scores each legal move by the position it produces.
    pub depth: u32,

    /// Cut off branches proven irrelevant to the decision.
    /// Disabling it gives plain minimax with identical move choices.
    pub pruning: bool,

    /// Random seed for the tie-break RNG.
    /// Same seed produces the same choices among equally-scored moves.
    pub seed: u64,

    /// Evaluator constants.
    pub weights: HeuristicWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            pruning: true,
            seed: 42,
            weights: HeuristicWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom evaluator constants.
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Reject configurations the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(SimError::InvalidDepth(self.depth));
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert!(config.pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(5)
            .with_pruning(false)
            .with_seed(123);

        assert_eq!(config.depth, 5);
        assert!(!config.pruning);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = SearchConfig::default().with_depth(0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidDepth(0)));
    }

    #[test]
    fn test_weak_win_score_rejected() {
        let config = SearchConfig::default().with_depth(1).with_weights(HeuristicWeights {
            win: 5,
            near_win: 10,
        });
        assert_eq!(config.weights.win, 5);
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
