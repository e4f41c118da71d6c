//! Simulated request latency.
//!
//! The store mimics a remote API by sleeping before each operation
//! resolves. The per-operation delays default to the values the dashboard
//! was tuned against; tests run with [`LatencyProfile::none`].

use std::time::Duration;

/// Artificial delay applied before each store operation resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub lookup: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    /// The default simulated-network profile.
    pub fn simulated() -> Self {
        Self {
            list: Duration::from_millis(300),
            lookup: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(250),
        }
    }

    /// No artificial delay; every operation resolves immediately.
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            lookup: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}
