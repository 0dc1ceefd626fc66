//! Engine configuration.
//!
//! # Environment Variables
//!
//! - `CHROMAWARP_WORKERS` - Worker thread count (0 runs everything on the caller)
//! - `CHROMAWARP_WAIT` - Completion wait strategy, `spin` or `block`
//!
//! Values that fail to parse are ignored and the defaults apply.

use std::env;
use std::thread;

/// How the calling thread waits for workers to finish a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaitStrategy {
    /// Busy-wait on the completion counter, yielding periodically.
    #[default]
    Spin,
    /// Park on a condition variable until the last worker arrives.
    Block,
}

impl WaitStrategy {
    /// Parses `spin` or `block`, case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spin" => Some(Self::Spin),
            "block" | "blocking" => Some(Self::Block),
            _ => None,
        }
    }
}

/// Batch engine settings.
///
/// # Example
///
/// ```rust
/// use chromawarp_batch::{EngineConfig, WaitStrategy};
///
/// let config = EngineConfig::default()
///     .with_workers(3)
///     .with_wait(WaitStrategy::Block);
/// assert_eq!(config.resolved_workers(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Worker count. `None` sizes the pool to the available parallelism
    /// minus the calling thread.
    pub workers: Option<usize>,
    /// Completion wait strategy.
    pub wait: WaitStrategy,
}

impl EngineConfig {
    /// Reads overrides from the environment on top of the defaults.
    pub fn from_env() -> Self {
        Self {
            workers: env_workers(),
            wait: env_wait().unwrap_or_default(),
        }
    }

    /// Sets an explicit worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the wait strategy.
    pub fn with_wait(mut self, wait: WaitStrategy) -> Self {
        self.wait = wait;
        self
    }

    /// Worker count after applying the hardware default.
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(default_workers)
    }
}

/// Available parallelism minus one unit for the calling thread.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(0)
}

// =============================================================================
// Environment Variable Helpers
// =============================================================================

fn env_workers() -> Option<usize> {
    env::var("CHROMAWARP_WORKERS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|&n: &usize| n <= 1024)
}

fn env_wait() -> Option<WaitStrategy> {
    env::var("CHROMAWARP_WAIT")
        .ok()
        .and_then(|v| WaitStrategy::from_name(&v))
}
