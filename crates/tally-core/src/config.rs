//! Run configuration: producer counts, operation quota, channel slack.

use thiserror::Error;

/// Parameters for one counter run.
///
/// Defaults to the classic demonstration shape: one incrementing and one
/// decrementing producer, 1,000,000 operations each, rendezvous hand-off.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of increment-only producer tasks.
    pub incrementers: usize,

    /// Number of decrement-only producer tasks.
    pub decrementers: usize,

    /// Operations each producer performs before finishing.
    pub ops_per_producer: u64,

    /// Request channel capacity.
    ///
    /// 1 approximates rendezvous hand-off: a producer suspends until the
    /// owner has taken its previous request. Larger values trade hand-off
    /// strictness for throughput; correctness does not depend on it.
    pub channel_capacity: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            incrementers: 1,
            decrementers: 1,
            ops_per_producer: 1_000_000,
            channel_capacity: 1,
        }
    }
}

/// Rejected configuration, reported before anything is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("channel_capacity must be at least 1")]
    ZeroCapacity,
}

impl RunConfig {
    /// Fail-fast validation.
    ///
    /// A zero-capacity channel cannot exist (the runtime would panic at
    /// construction), so it is rejected here with a named error instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Total producer tasks this config will spawn.
    pub fn producer_count(&self) -> usize {
        self.incrementers + self.decrementers
    }

    /// Final counter value this config settles at once all producers finish.
    pub fn expected_total(&self) -> i64 {
        let ops = self.ops_per_producer as i64;
        self.incrementers as i64 * ops - self.decrementers as i64 * ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_two_producer_million_op_run() {
        let config = RunConfig::default();
        assert_eq!(config.incrementers, 1);
        assert_eq!(config.decrementers, 1);
        assert_eq!(config.ops_per_producer, 1_000_000);
        assert_eq!(config.channel_capacity, 1);
        assert!(config.validate().is_ok());
        assert_eq!(config.expected_total(), 0);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = RunConfig {
            channel_capacity: 0,
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn expected_total_is_signed() {
        let config = RunConfig {
            incrementers: 1,
            decrementers: 3,
            ops_per_producer: 10,
            channel_capacity: 1,
        };
        assert_eq!(config.producer_count(), 4);
        assert_eq!(config.expected_total(), -20);
    }
}
