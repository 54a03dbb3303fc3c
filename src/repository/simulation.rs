//! Fault & Latency Simulation
//!
//! Per-repository toggles for injected errors, artificial latency and network
//! availability. Every operation that reaches the backing store passes through
//! `Simulation::enter` before doing anything else.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{RepositoryError, Result};

// == Simulation Settings ==
/// Snapshot of the simulation toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationSettings {
    /// Fail every backing store operation with `SimulatedFault`
    pub inject_errors: bool,
    /// Delay applied before every backing store operation
    pub latency_ms: u64,
    /// Whether `search_online` takes the remote path
    pub network_available: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            inject_errors: false,
            latency_ms: 0,
            network_available: true,
        }
    }
}

// == Simulation ==
/// Runtime-adjustable fault, latency and network toggles.
#[derive(Debug)]
pub struct Simulation {
    inject_errors: AtomicBool,
    latency_ms: AtomicU64,
    network_available: AtomicBool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            inject_errors: AtomicBool::new(settings.inject_errors),
            latency_ms: AtomicU64::new(settings.latency_ms),
            network_available: AtomicBool::new(settings.network_available),
        }
    }

    pub fn set_inject_errors(&self, enabled: bool) {
        self.inject_errors.store(enabled, Ordering::SeqCst);
        info!("Error injection {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn set_latency(&self, latency: Duration) {
        let ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latency_ms.store(ms, Ordering::SeqCst);
        info!("Simulated latency set to {}ms", ms);
    }

    pub fn set_network_available(&self, available: bool) {
        self.network_available.store(available, Ordering::SeqCst);
        info!("Network {}", if available { "available" } else { "unavailable" });
    }

    pub fn network_available(&self) -> bool {
        self.network_available.load(Ordering::SeqCst)
    }

    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            inject_errors: self.inject_errors.load(Ordering::SeqCst),
            latency_ms: self.latency_ms.load(Ordering::SeqCst),
            network_available: self.network_available(),
        }
    }

    // == Enter ==
    /// Runs the fault check, then the latency delay.
    ///
    /// A fault is reported before any delay or state access, so a failed
    /// operation never leaves partial changes behind.
    pub async fn enter(&self, operation: &str) -> Result<()> {
        if self.inject_errors.load(Ordering::SeqCst) {
            warn!("Injected fault for {}", operation);
            return Err(RepositoryError::SimulatedFault(operation.to_string()));
        }

        let latency_ms = self.latency_ms.load(Ordering::SeqCst);
        if latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        }

        Ok(())
    }
}
