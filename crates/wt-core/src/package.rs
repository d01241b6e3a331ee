//! Sensor packages: one workout code with its positional readings.

use serde::{Deserialize, Serialize};

use crate::dispatch::{DispatchError, read_package};
use crate::training::Training;

/// One raw record from the sensor unit.
///
/// Deserializes from `{"workout_type": "RUN", "data": [15000, 1, 75]}` (the
/// key `type` is accepted too) or from the compact `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    #[serde(alias = "type")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    /// Dispatches the package to its calculator.
    pub fn read(&self) -> Result<Training, DispatchError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// The sample readings shipped with the sensor unit.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15_000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
