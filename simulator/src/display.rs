use metercore::math::stats::ConsumptionSummary;
use metercore::meter::reading::Reading;

/// Formats the trailing window, oldest reading first.
pub fn render_recent(readings: &[Reading]) -> String {
    let joined = readings
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Recent consumption: [{}] kWh", joined)
}

pub fn report_reading(reading: &Reading) {
    println!("New reading: {} kWh", reading);
}

pub fn report_recent(readings: &[Reading]) {
    println!("{}", render_recent(readings));
}

pub fn report_summary(summary: &ConsumptionSummary) {
    println!("\nData Analysis:");
    println!("Average Consumption: {:.2} kWh", summary.average_kwh);
    println!("Max Consumption: {:.2} kWh", summary.max_kwh);
    println!("Min Consumption: {:.2} kWh", summary.min_kwh);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_recent_joins_two_decimal_values() {
        let readings = [Reading::new(1.0), Reading::new(2.5), Reading::new(0.07)];
        assert_eq!(
            render_recent(&readings),
            "Recent consumption: [1.00, 2.50, 0.07] kWh"
        );
    }

    #[test]
    fn render_recent_handles_empty_window() {
        assert_eq!(render_recent(&[]), "Recent consumption: [] kWh");
    }
}
