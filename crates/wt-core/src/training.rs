//! Workout calculators.
//!
//! Each variant derives distance, mean speed and spent calories from the raw
//! sensor readings of one workout:
//!
//! - `Running`: steps at 0.65 m, calories from mean speed and weight
//! - `SportsWalking`: steps at 0.65 m, calories from weight, speed and height
//! - `Swimming`: strokes at 1.38 m, speed from pool geometry

use crate::report::ReportData;
use crate::workout_type::WorkoutType;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Readings every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Steps or strokes counted by the sensor.
    pub action: u32,
    /// Must be positive; zero yields non-finite speed and calories.
    pub duration_hours: f64,
    pub weight_kg: f64,
}

/// Shared calculations over a workout's readings.
///
/// `spent_calories` has no default: every variant supplies its own formula.
pub trait Workout {
    /// Which workout type this calculator handles.
    const KIND: WorkoutType;

    /// Distance covered by one step or stroke, in metres.
    const STEP_LENGTH_M: f64 = 0.65;

    fn readings(&self) -> &Readings;

    /// Distance in kilometres.
    fn distance_km(&self) -> f64 {
        f64::from(self.readings().action) * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_hours
    }

    /// Calories spent, in kcal.
    fn spent_calories(&self) -> f64;

    fn summarize(&self) -> ReportData {
        ReportData {
            workout_name: Self::KIND.display_name(),
            duration_hours: self.readings().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// Running workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub readings: Readings,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(readings: Readings) -> Self {
        Self { readings }
    }
}

impl Workout for Running {
    const KIND: WorkoutType = WorkoutType::Running;

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn spent_calories(&self) -> f64 {
        let per_kg = Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - Self::CALORIES_MEAN_SPEED_SHIFT;
        per_kg * self.readings.weight_kg / M_IN_KM
            * (self.readings.duration_hours * MINUTES_IN_HOUR)
    }
}

/// Race walking workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub readings: Readings,
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(readings: Readings, height_cm: f64) -> Self {
        Self {
            readings,
            height_cm,
        }
    }
}

impl Workout for SportsWalking {
    const KIND: WorkoutType = WorkoutType::SportsWalking;

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.readings.weight_kg;
        let speed = self.mean_speed_kmh();
        // Floor division: the published results depend on this quantisation.
        let speed_height = (speed * speed / self.height_cm).floor();
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * (self.readings.duration_hours * MINUTES_IN_HOUR)
    }
}

/// Pool swimming workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub readings: Readings,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(readings: Readings, pool_length_m: f64, pool_laps: u32) -> Self {
        Self {
            readings,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Workout for Swimming {
    const KIND: WorkoutType = WorkoutType::Swimming;
    const STEP_LENGTH_M: f64 = 1.38;

    fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Mean speed from pool geometry; the stroke count plays no part.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.readings.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.readings.weight_kg
    }
}

/// A dispatched workout of any supported type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! forward {
    ($self:ident, $training:ident => $body:expr) => {
        match $self {
            Self::Running($training) => $body,
            Self::SportsWalking($training) => $body,
            Self::Swimming($training) => $body,
        }
    };
}

impl Training {
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => Running::KIND,
            Self::SportsWalking(_) => SportsWalking::KIND,
            Self::Swimming(_) => Swimming::KIND,
        }
    }

    pub const fn readings(&self) -> &Readings {
        match self {
            Self::Running(t) => &t.readings,
            Self::SportsWalking(t) => &t.readings,
            Self::Swimming(t) => &t.readings,
        }
    }

    pub fn distance_km(&self) -> f64 {
        forward!(self, t => t.distance_km())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        forward!(self, t => t.mean_speed_kmh())
    }

    pub fn spent_calories(&self) -> f64 {
        forward!(self, t => t.spent_calories())
    }

    pub fn summarize(&self) -> ReportData {
        forward!(self, t => t.summarize())
    }
}

impl From<Running> for Training {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for Training {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}

impl From<Swimming> for Training {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}
