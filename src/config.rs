//! Game configuration
//!
//! Tunable parameters for a session. Built from command-line arguments and
//! validated before the galaxy is generated.

use crate::models::constants::{GALAXY_HEIGHT, GALAXY_WIDTH, MAX_GALAXY_DIMENSION};
use crate::models::errors::{GameError, GameResult};
use crate::models::zone::ContentPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for every random decision in the session.
    pub seed: u64,
    pub content_policy: ContentPolicy,
}

impl GameConfig {
    pub const MAX_DIMENSION: usize = MAX_GALAXY_DIMENSION;

    pub fn new(seed: u64) -> Self {
        GameConfig {
            seed,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_content_policy(mut self, policy: ContentPolicy) -> Self {
        self.content_policy = policy;
        self
    }

    pub fn validate(&self) -> GameResult<()> {
        let in_range = |d: usize| (1..=Self::MAX_DIMENSION).contains(&d);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(GameError::InvalidConfig(format!(
                "galaxy size {}x{} must be between 1 and {} per side",
                self.width,
                self.height,
                Self::MAX_DIMENSION
            )));
        }
        self.content_policy.distribution()?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: GALAXY_WIDTH,
            height: GALAXY_HEIGHT,
            seed: 0,
            content_policy: ContentPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 10));
        assert_eq!(config.content_policy, ContentPolicy::new(2, 1, 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_invalid() {
        assert!(GameConfig::new(1).with_size(0, 10).validate().is_err());
        assert!(GameConfig::new(1).with_size(10, 0).validate().is_err());
    }

    #[test]
    fn oversized_galaxy_is_invalid() {
        let config = GameConfig::new(1).with_size(GameConfig::MAX_DIMENSION + 1, 2);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn empty_policy_is_invalid() {
        let config = GameConfig::new(1).with_content_policy(ContentPolicy::new(0, 0, 0));
        assert!(config.validate().is_err());
    }
}
