//! Workout summary and its text rendering.

use std::fmt;

use serde::Serialize;

/// Computed results of one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    /// Report label of the workout variant (e.g. `Running`).
    pub workout_name: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl ReportData {
    /// Renders the fixed one-line report, every number with three decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn report(duration: f64, distance: f64, speed: f64, calories: f64) -> ReportData {
        ReportData {
            workout_name: "Running",
            duration_hours: duration,
            distance_km: distance,
            mean_speed_kmh: speed,
            calories_kcal: calories,
        }
    }

    #[test]
    fn render_uses_fixed_template() {
        let rendered = report(1.0, 9.75, 9.75, 699.75).render();
        assert_snapshot!(
            rendered,
            @"Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn render_pads_and_rounds_to_three_decimals() {
        let rendered = report(0.5, 0.99364, 12_345.678_9, 0.0).render();
        assert_snapshot!(
            rendered,
            @"Workout type: Running; Duration: 0.500 h; Distance: 0.994 km; Avg speed: 12345.679 km/h; Calories burned: 0.000."
        );
    }

    #[test]
    fn render_keeps_three_decimals_for_large_values() {
        let rendered = report(1.0e6, 2.0e9, 1.0, 7.0).render();
        assert!(rendered.contains("Duration: 1000000.000 h"));
        assert!(rendered.contains("Distance: 2000000000.000 km"));
    }

    #[test]
    fn display_matches_render() {
        let data = report(1.25, 3.0, 2.4, 100.125);
        assert_eq!(data.to_string(), data.render());
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(report(1.0, 2.0, 2.0, 3.5)).unwrap();
        assert_eq!(json["workout_name"], "Running");
        assert_eq!(json["distance_km"], 2.0);
        assert_eq!(json["calories_kcal"], 3.5);
    }
}
