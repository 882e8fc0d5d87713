use crate::meter::reading::Reading;
use crate::prelude::{MeterError, MeterResult};

/// Append-only chronological record of every reading taken during a run.
///
/// Storage is unbounded; only the console display trims to a trailing window.
#[derive(Debug, Clone)]
pub struct History {
    readings: Vec<Reading>,
    max_kwh: f64,
}

impl History {
    pub fn new(max_kwh: f64) -> Self {
        Self {
            readings: Vec::new(),
            max_kwh,
        }
    }

    /// Records one reading; values outside `[0, max_kwh]` violate the meter
    /// bounds and are rejected.
    pub fn push(&mut self, reading: Reading) -> MeterResult<()> {
        if !(0.0..=self.max_kwh).contains(&reading.kwh) {
            return Err(MeterError::Internal(format!(
                "reading {:.2} outside [0.00, {:.2}]",
                reading.kwh, self.max_kwh
            )));
        }
        self.readings.push(reading);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Trailing window of at most `window` readings, oldest first. Pure read.
    pub fn recent(&self, window: usize) -> &[Reading] {
        let start = self.readings.len().saturating_sub(window);
        &self.readings[start..]
    }

    pub fn all(&self) -> &[Reading] {
        &self.readings
    }

    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.kwh).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> History {
        let mut history = History::new(5.0);
        for i in 0..count {
            history.push(Reading::new(i as f64 * 0.125)).unwrap();
        }
        history
    }

    #[test]
    fn push_retains_every_reading() {
        let history = filled(25);
        assert_eq!(history.len(), 25);
        assert_eq!(history.all().len(), 25);
    }

    #[test]
    fn push_rejects_out_of_bounds_reading() {
        let mut history = History::new(5.0);
        assert!(history.push(Reading::new(5.01)).is_err());
        assert!(history.push(Reading::new(-0.01)).is_err());
        assert!(history.is_empty());
    }

    #[test]
    fn recent_trims_to_window_oldest_first() {
        let history = filled(12);
        let window = history.recent(10);
        assert_eq!(window.len(), 10);
        assert_eq!(window[0], Reading::new(0.25));
        assert_eq!(window[9], Reading::new(1.375));
    }

    #[test]
    fn recent_returns_everything_when_short() {
        let history = filled(3);
        assert_eq!(history.recent(10).len(), 3);
    }

    #[test]
    fn recent_is_idempotent() {
        let history = filled(12);
        assert_eq!(history.recent(10), history.recent(10));
    }
}
