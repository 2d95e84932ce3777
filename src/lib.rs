//! DCA Simulator - Deterministic monthly simulator for recurring
//! foreign-currency fund investments with dividend reinvestment
//!
//! This library provides:
//! - An exact-decimal monthly compounding engine (conversion, fees, unit
//!   purchase, dividend accrual, withholding, carryover)
//! - Per-month records and summary aggregation with series peaks
//! - CSV plan-file loading
//! - A batch scenario runner for parameter and horizon sweeps

pub mod config;
pub mod error;
pub mod rounding;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use config::SimulationConfig;
pub use error::ConfigError;
pub use scenario::ScenarioRunner;
pub use simulation::{MonthRecord, SeriesPeak, SimulationEngine, SimulationResult, SimulationSummary};
