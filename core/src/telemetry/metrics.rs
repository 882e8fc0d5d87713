use std::sync::Mutex;

/// Counters for the run, reported once at shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub samples: usize,
    pub faults: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot {
                samples: 0,
                faults: 0,
            }),
        }
    }

    pub fn record_sample(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.samples += 1;
        }
    }

    pub fn record_fault(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.faults += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot {
                samples: 0,
                faults: 0,
            }
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_samples_and_faults() {
        let recorder = MetricsRecorder::new();
        recorder.record_sample();
        recorder.record_sample();
        recorder.record_fault();
        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.samples, 2);
        assert_eq!(snapshot.faults, 1);
    }
}
