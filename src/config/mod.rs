//! Simulation configuration and plan-file loading

mod data;
pub mod loader;

pub use data::SimulationConfig;
pub use loader::{load_plans, load_plans_from_reader};
