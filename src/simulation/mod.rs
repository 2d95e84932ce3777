//! Monthly compounding simulation engine

mod engine;
mod records;
mod state;

pub use engine::SimulationEngine;
pub use records::{MonthRecord, SeriesPeak, SimulationResult, SimulationSummary};
pub use state::SimulationState;
