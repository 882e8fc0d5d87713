use crate::workflow::config::SimulationConfig;
use metercore::meter::reading::Reading;
use metercore::prelude::{MeterError, MeterResult, ReadingSource};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform pseudo-random consumption source standing in for real hardware.
/// Seeded runs reproduce the same sequence of readings.
pub struct UniformSource {
    rng: StdRng,
    max_kwh: f64,
}

impl UniformSource {
    pub fn new(max_kwh: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, max_kwh }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.max_kwh, config.seed)
    }
}

impl ReadingSource for UniformSource {
    fn next_reading(&mut self) -> MeterResult<Reading> {
        let raw = self.rng.gen_range(0.0..=self.max_kwh);
        Ok(Reading::quantized(raw))
    }
}

/// Replays a fixed script of raw values, for deterministic runs.
#[allow(dead_code)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl ReadingSource for ScriptedSource {
    fn next_reading(&mut self) -> MeterResult<Reading> {
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or_else(|| MeterError::Source("script exhausted".into()))?;
        self.cursor += 1;
        Ok(Reading::quantized(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_source_stays_within_bounds() {
        let mut source = UniformSource::new(5.0, Some(7));
        for _ in 0..200 {
            let reading = source.next_reading().unwrap();
            assert!((0.0..=5.0).contains(&reading.kwh));
            let scaled = reading.kwh * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn seeded_sources_repeat_the_sequence() {
        let mut first = UniformSource::new(5.0, Some(42));
        let mut second = UniformSource::new(5.0, Some(42));
        for _ in 0..16 {
            assert_eq!(
                first.next_reading().unwrap(),
                second.next_reading().unwrap()
            );
        }
    }

    #[test]
    fn scripted_source_replays_then_faults() {
        let mut source = ScriptedSource::new(vec![1.0, 2.5]);
        assert_eq!(source.next_reading().unwrap(), Reading::new(1.0));
        assert_eq!(source.next_reading().unwrap(), Reading::new(2.5));
        assert!(matches!(
            source.next_reading(),
            Err(MeterError::Source(_))
        ));
    }
}
