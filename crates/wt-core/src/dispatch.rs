//! Turns a raw sensor package into the matching workout calculator.

use thiserror::Error;

use crate::training::{Readings, Running, SportsWalking, Swimming, Training};
use crate::workout_type::{UnknownWorkoutType, WorkoutType};

/// Why a sensor package could not be turned into a workout.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// The package code is not one of the supported workout types.
    #[error("unknown workout type {code:?}: please specify a valid workout type (SWM, RUN, WLK)")]
    UnknownWorkoutType { code: String },

    /// The package carries the wrong number of readings for its type.
    #[error("{workout_type} expects {expected} values ({parameters}), got {actual}")]
    ArgumentCount {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
        parameters: String,
    },

    /// A count reading is not a whole, non-negative number.
    #[error("{workout_type} parameter {parameter} must be a whole non-negative count, got {value}")]
    InvalidArgument {
        workout_type: WorkoutType,
        parameter: &'static str,
        value: f64,
    },
}

impl DispatchError {
    /// Whether the failure came from an unrecognised workout code.
    pub const fn is_unknown_workout_type(&self) -> bool {
        matches!(self, Self::UnknownWorkoutType { .. })
    }
}

impl From<UnknownWorkoutType> for DispatchError {
    fn from(err: UnknownWorkoutType) -> Self {
        Self::UnknownWorkoutType { code: err.0 }
    }
}

/// Builds the calculator for a workout code and its positional readings.
///
/// The readings must match [`WorkoutType::parameters`] in count and order.
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, DispatchError> {
    let workout_type: WorkoutType = code.parse()?;
    let training = build(workout_type, data)?;
    tracing::debug!(%workout_type, values = data.len(), "dispatched workout package");
    Ok(training)
}

/// Builds the calculator for an already-parsed workout type.
pub fn build(workout_type: WorkoutType, data: &[f64]) -> Result<Training, DispatchError> {
    let parameters = workout_type.parameters();
    if data.len() != parameters.len() {
        return Err(DispatchError::ArgumentCount {
            workout_type,
            expected: parameters.len(),
            actual: data.len(),
            parameters: parameters.join(", "),
        });
    }

    let readings = Readings {
        action: count(workout_type, 0, data[0])?,
        duration_hours: data[1],
        weight_kg: data[2],
    };

    let training = match workout_type {
        WorkoutType::Running => Running::new(readings).into(),
        WorkoutType::SportsWalking => SportsWalking::new(readings, data[3]).into(),
        WorkoutType::Swimming => {
            Swimming::new(readings, data[3], count(workout_type, 4, data[4])?).into()
        }
    };
    Ok(training)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(workout_type: WorkoutType, index: usize, value: f64) -> Result<u32, DispatchError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)
    {
        Ok(value as u32)
    } else {
        Err(DispatchError::InvalidArgument {
            workout_type,
            parameter: workout_type.parameters()[index],
            value,
        })
    }
}
