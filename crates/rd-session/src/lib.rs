//! Orchestration layer for the RiskDesk dashboard.
//!
//! Provides:
//! - [`RiskOrchestrator`]: the calculate-request lifecycle state machine with
//!   stale-response suppression
//! - [`HealthMonitor`]: the periodic service availability probe
//!
//! Both own their state independently; the health monitor only ever affects a
//! displayed status flag, never the calculation flow.

pub mod health;
pub mod orchestrator;

pub use health::{HealthMonitor, ServiceHealth};
pub use orchestrator::{CalculationState, RiskOrchestrator};
