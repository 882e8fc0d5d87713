use crate::display;
use crate::shutdown::CancelToken;
use crate::workflow::config::SimulationConfig;
use metercore::math::stats::{ConsumptionSummary, StatsHelper};
use metercore::meter::history::History;
use metercore::prelude::{MeterConfig, MeterResult, MeterState, ReadingSource};
use metercore::telemetry::{LogManager, MetricsRecorder};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// Outcome of one full run, reported after the loop exits.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub samples_taken: usize,
    pub faults: usize,
    pub summary: Option<ConsumptionSummary>,
}

/// Owns the history and drives the sample/display/analyze cycle.
pub struct Runner {
    config: SimulationConfig,
    meter: MeterConfig,
    source: Box<dyn ReadingSource>,
    history: History,
    state: MeterState,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: SimulationConfig, source: Box<dyn ReadingSource>) -> Self {
        let meter = config.to_meter_config();
        let history = History::new(meter.max_kwh);
        Self {
            config,
            meter,
            source,
            history,
            state: MeterState::Idle,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn state(&self) -> MeterState {
        self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// One sampling iteration: draw, record, report, display the window.
    fn sample_once(&mut self) -> MeterResult<()> {
        let reading = self.source.next_reading()?;
        self.history.push(reading)?;
        self.metrics.record_sample();
        display::report_reading(&reading);
        display::report_recent(self.history.recent(self.meter.window));
        Ok(())
    }

    /// Drives the loop until the token is cancelled or the sample budget runs
    /// out. Faults are reported and end the run without crashing the process.
    pub fn run(&mut self, cancel: &CancelToken) -> RunReport {
        self.state = MeterState::Sampling;
        self.logger.record("sampling loop started");
        loop {
            if cancel.is_cancelled() {
                return self.shutdown(true);
            }
            if let Err(err) = self.sample_once() {
                self.metrics.record_fault();
                self.logger
                    .record_fault(&format!("unexpected error during sampling: {}", err));
                println!("An unexpected error occurred: {}", err);
                // Only the cancellation path performs the final analysis.
                return self.shutdown(false);
            }
            if let Some(limit) = self.config.samples {
                if self.history.len() >= limit {
                    return self.shutdown(true);
                }
            }
            thread::sleep(Duration::from_secs(self.config.interval_secs));
        }
    }

    fn shutdown(&mut self, analyze: bool) -> RunReport {
        self.state = MeterState::ShuttingDown;
        let summary = if analyze {
            println!("\nStopping the Smart Meter...");
            println!("Performing final analysis before shutdown.");
            match self.analyze() {
                Ok(summary) => {
                    display::report_summary(&summary);
                    Some(summary)
                }
                Err(err) => {
                    println!("Error in data analysis: {}", err);
                    None
                }
            }
        } else {
            None
        };
        let snapshot = self.metrics.snapshot();
        self.logger.record(&format!(
            "run finished: {} samples, {} faults",
            snapshot.samples, snapshot.faults
        ));
        self.state = MeterState::Terminated;
        RunReport {
            samples_taken: snapshot.samples,
            faults: snapshot.faults,
            summary,
        }
    }

    /// Mean/max/min over the whole history.
    pub fn analyze(&self) -> MeterResult<ConsumptionSummary> {
        StatsHelper::summarize(&self.history.values())
    }
}
