use serde::{Deserialize, Serialize};
use std::fmt;

/// One simulated consumption sample in kilowatt-hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub kwh: f64,
}

impl Reading {
    pub fn new(kwh: f64) -> Self {
        Self { kwh }
    }

    /// Quantizes a raw draw to two decimal places, matching the meter display.
    pub fn quantized(raw: f64) -> Self {
        Self {
            kwh: (raw * 100.0).round() / 100.0,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.kwh)
    }
}
