pub mod stats;

pub use stats::{ConsumptionSummary, StatsHelper};
