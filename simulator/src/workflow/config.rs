use anyhow::Context;
use metercore::prelude::MeterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for a simulation run. Defaults match the stock meter: one sample
/// every two seconds, a ten-reading display window, draws in [0, 5] kWh.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub interval_secs: u64,
    pub window: usize,
    pub max_kwh: f64,
    pub seed: Option<u64>,
    pub samples: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_secs: 2,
            window: 10,
            max_kwh: 5.0,
            seed: None,
            samples: None,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading simulation config {}", path_ref.display()))?;
        let config: SimulationConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing simulation config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        interval_secs: u64,
        window: usize,
        max_kwh: f64,
        seed: Option<u64>,
        samples: Option<usize>,
    ) -> Self {
        Self {
            interval_secs,
            window,
            max_kwh,
            seed,
            samples,
        }
    }

    pub fn to_meter_config(&self) -> MeterConfig {
        MeterConfig {
            max_kwh: self.max_kwh,
            window: self.window,
        }
    }
}
