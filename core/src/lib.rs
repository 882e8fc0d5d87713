//! Reading model, statistics, and telemetry core for the smart meter simulator.
//!
//! The library keeps the data model and reductions separate from the console
//! driver so the sampling loop can be exercised with scripted sources in tests.

pub mod math;
pub mod meter;
pub mod prelude;
pub mod telemetry;

pub use prelude::{MeterConfig, MeterError, MeterState, ReadingSource};
