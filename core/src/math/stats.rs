use crate::prelude::{MeterError, MeterResult};
use serde::{Deserialize, Serialize};

/// Mean/max/min reductions reported during final analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionSummary {
    pub average_kwh: f64,
    pub max_kwh: f64,
    pub min_kwh: f64,
}

pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(values: &[f64]) -> MeterResult<f64> {
        if values.is_empty() {
            return Err(MeterError::EmptyDataset);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Reduces the full history in one pass. Empty input is a distinct,
    /// recoverable condition rather than NaN output.
    pub fn summarize(values: &[f64]) -> MeterResult<ConsumptionSummary> {
        let average_kwh = Self::mean(values)?;
        let max_kwh = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_kwh = values.iter().copied().fold(f64::INFINITY, f64::min);
        Ok(ConsumptionSummary {
            average_kwh,
            max_kwh,
            min_kwh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn mean_of_empty_slice_is_an_error() {
        assert!(matches!(
            StatsHelper::mean(&[]),
            Err(MeterError::EmptyDataset)
        ));
    }

    #[test]
    fn summarize_empty_slice_is_an_error() {
        assert!(matches!(
            StatsHelper::summarize(&[]),
            Err(MeterError::EmptyDataset)
        ));
    }

    #[test]
    fn summarize_single_value_collapses() {
        let summary = StatsHelper::summarize(&[4.0]).unwrap();
        assert_eq!(summary.average_kwh, 4.0);
        assert_eq!(summary.max_kwh, 4.0);
        assert_eq!(summary.min_kwh, 4.0);
    }

    #[test]
    fn summarize_matches_reference_reductions() {
        let values = [1.0, 5.0, 0.0, 3.0];
        let summary = StatsHelper::summarize(&values).unwrap();
        assert!((summary.average_kwh - 2.25).abs() < TOLERANCE);
        assert!((summary.max_kwh - 5.0).abs() < TOLERANCE);
        assert!((summary.min_kwh - 0.0).abs() < TOLERANCE);
    }
}
