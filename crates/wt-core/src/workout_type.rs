//! Workout type codes as the single source of truth for sensor package codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout kinds reported by the sensor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    /// Every supported workout type, in dispatch-table order.
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// The three-letter code the sensor unit sends.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Label printed in the `Workout type:` field of a report.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Positional parameters the sensor package must carry, in order.
    ///
    /// The slice length is the arity checked by the dispatcher.
    pub const fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutType {
    type Err = UnknownWorkoutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| UnknownWorkoutType(s.to_string()))
    }
}

impl Serialize for WorkoutType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unrecognised workout codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWorkoutType(pub String);

impl UnknownWorkoutType {
    /// The code that failed to parse.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownWorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown workout type: {}", self.0)
    }
}

impl std::error::Error for UnknownWorkoutType {}
