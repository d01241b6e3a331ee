//! Core domain logic for the workout tracker.
//!
//! This crate contains:
//! - Workout type codes and their positional parameters
//! - Calculators for running, race walking and swimming
//! - Dispatch from a sensor package to the matching calculator
//! - The one-line workout report

pub mod dispatch;
pub mod package;
pub mod report;
pub mod training;
pub mod workout_type;

pub use dispatch::{DispatchError, read_package};
pub use package::{WorkoutPackage, sample_packages};
pub use report::ReportData;
pub use training::{Readings, Running, SportsWalking, Swimming, Training, Workout};
pub use workout_type::{UnknownWorkoutType, WorkoutType};
