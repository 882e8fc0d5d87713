use crate::meter::reading::Reading;
use serde::{Deserialize, Serialize};

/// Shared configuration for the meter data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterConfig {
    pub max_kwh: f64,
    pub window: usize,
}

/// Common error type for meter operations.
#[derive(thiserror::Error, Debug)]
pub enum MeterError {
    #[error("empty dataset: no readings recorded")]
    EmptyDataset,
    #[error("reading source fault: {0}")]
    Source(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type MeterResult<T> = Result<T, MeterError>;

/// Lifecycle of the sampling loop. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterState {
    Idle,
    Sampling,
    ShuttingDown,
    Terminated,
}

/// Seam for plugging consumption sources into the sampling loop, so the
/// pseudo-random generator can be swapped for a scripted one under test.
pub trait ReadingSource {
    fn next_reading(&mut self) -> MeterResult<Reading>;
}
