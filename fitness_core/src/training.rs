//! Workout formulas.
//!
//! Each workout variant computes distance, mean speed and spent calories
//! from a shared base reading plus its own extra fields:
//! - Running: base reading only
//! - Sports walking: base reading + height
//! - Swimming: base reading + pool length and lap count (own speed formula)

use crate::{Error, InfoMessage, Result, WorkoutType};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;

/// Fields every workout carries
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Steps or strokes
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl Reading {
    /// Build a base reading, rejecting a duration that mean speed cannot divide by
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: positive_field("duration", duration)?,
            weight: finite_field("weight", weight)?,
        })
    }
}

/// Reject NaN and infinities
fn finite_field(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_field(
            name,
            format!("must be a finite number, got {}", value),
        ));
    }
    Ok(value)
}

/// Finite and strictly positive, for fields the formulas divide by
fn positive_field(name: &str, value: f64) -> Result<f64> {
    if finite_field(name, value)? <= 0.0 {
        return Err(Error::invalid_field(
            name,
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(value)
}

/// Formula set shared by all workout variants
///
/// Distance and mean speed have default implementations driven by
/// [`Training::LEN_STEP`]; spent calories must be provided by every variant.
pub trait Training {
    /// Distance covered by one action, in meters
    const LEN_STEP: f64;

    /// Workout type this formula set belongs to
    const WORKOUT_TYPE: WorkoutType;

    /// Base fields of this workout
    fn reading(&self) -> &Reading;

    /// Distance in kilometers
    fn get_distance(&self) -> f64 {
        self.reading().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.reading().duration
    }

    /// Spent energy in kcal
    fn get_spent_calories(&self) -> f64;

    /// Summarize the workout using this variant's own formulas
    fn show_training_info(&self) -> InfoMessage {
        let info = InfoMessage::new(
            Self::WORKOUT_TYPE.name(),
            self.reading().duration,
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        );
        tracing::debug!(
            "{} summary: {:.3} km, {:.3} km/h, {:.3} kcal",
            info.training_type,
            info.distance,
            info.speed,
            info.calories
        );
        info
    }
}

// ============================================================================
// Running
// ============================================================================

/// Running workout
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub reading: Reading,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            reading: Reading::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    const LEN_STEP: f64 = 0.65;
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Running;

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.reading.weight
            / M_IN_KM
            * self.reading.duration
            * MIN_IN_H
    }
}

// ============================================================================
// Sports walking
// ============================================================================

/// Sports walking workout
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub reading: Reading,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        Ok(Self {
            reading: Reading::new(action, duration, weight)?,
            height: positive_field("height", height)?,
        })
    }
}

impl Training for SportsWalking {
    const LEN_STEP: f64 = 0.65;
    const WORKOUT_TYPE: WorkoutType = WorkoutType::SportsWalking;

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn get_spent_calories(&self) -> f64 {
        let speed_ms = self.get_mean_speed() * Self::KMH_IN_MSEC;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.reading.weight
            + (speed_ms.powi(2) / (self.height / CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.reading.weight)
            * (self.reading.duration * MIN_IN_H)
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Swimming workout
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub reading: Reading,
    /// Meters
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self> {
        Ok(Self {
            reading: Reading::new(action, duration, weight)?,
            length_pool: finite_field("length_pool", length_pool)?,
            count_pool,
        })
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Swimming;

    fn reading(&self) -> &Reading {
        &self.reading
    }

    /// Pool length times laps, not strokes
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.reading.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.reading.weight
            * self.reading.duration
    }
}

// ============================================================================
// Closed set of workouts
// ============================================================================

/// Any supported workout, as produced by the package dispatcher
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
            Workout::Swimming(_) => WorkoutType::Swimming,
        }
    }

    pub fn get_distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_distance(),
            Workout::SportsWalking(w) => w.get_distance(),
            Workout::Swimming(w) => w.get_distance(),
        }
    }

    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_mean_speed(),
            Workout::SportsWalking(w) => w.get_mean_speed(),
            Workout::Swimming(w) => w.get_mean_speed(),
        }
    }

    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_spent_calories(),
            Workout::SportsWalking(w) => w.get_spent_calories(),
            Workout::Swimming(w) => w.get_spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_running_reference_values() {
        let run = Running::new(15000, 1.0, 75.0).unwrap();
        assert_close(run.get_distance(), 9.75);
        assert_close(run.get_mean_speed(), 9.75);
        assert_close(run.get_spent_calories(), 797.805);
    }

    #[test]
    fn test_running_calories_match_closed_form() {
        for (action, duration, weight) in [
            (1000, 0.25, 60.0),
            (15000, 1.0, 75.0),
            (42000, 3.5, 82.5),
            (0, 2.0, 90.0),
        ] {
            let run = Running::new(action, duration, weight).unwrap();
            let speed = action as f64 * 0.65 / 1000.0 / duration;
            let expected = (18.0 * speed + 1.79) * weight / 1000.0 * duration * 60.0;
            assert_close(run.get_spent_calories(), expected);
        }
    }

    #[test]
    fn test_walking_reference_values() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert_close(walk.get_distance(), 5.85);
        assert_close(walk.get_mean_speed(), 5.85);

        let speed_ms = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;
        assert_close(walk.get_spent_calories(), expected);
        assert!((walk.get_spent_calories() - 349.2517).abs() < 1e-3);
    }

    #[test]
    fn test_swimming_reference_values() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_close(swim.get_mean_speed(), 1.0);
        assert_close(swim.get_spent_calories(), 336.0);
        assert_close(swim.get_distance(), 0.9936);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few_strokes = Swimming::new(10, 2.0, 70.0, 50.0, 20).unwrap();
        let many_strokes = Swimming::new(10_000, 2.0, 70.0, 50.0, 20).unwrap();

        assert_close(few_strokes.get_mean_speed(), 0.5);
        assert_close(many_strokes.get_mean_speed(), 0.5);
        assert!(many_strokes.get_distance() > few_strokes.get_distance());
    }

    #[test]
    fn test_summary_uses_variant_formulas() {
        let swim = Workout::from(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap());
        let info = swim.show_training_info();

        assert_eq!(info.training_type, "Swimming");
        assert_close(info.duration, 1.0);
        assert_close(info.distance, 720.0 * 1.38 / 1000.0);
        assert_close(info.speed, 1.0);
        assert_close(info.calories, 336.0);
    }

    #[test]
    fn test_workout_dispatch_matches_variant() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        let workout = Workout::from(walk.clone());

        assert_eq!(workout.workout_type(), WorkoutType::SportsWalking);
        assert_close(workout.get_distance(), walk.get_distance());
        assert_close(workout.get_mean_speed(), walk.get_mean_speed());
        assert_close(workout.get_spent_calories(), walk.get_spent_calories());
    }

    #[test]
    fn test_zero_duration_rejected() {
        match Running::new(100, 0.0, 70.0) {
            Err(Error::InvalidField { field, .. }) => assert_eq!(field, "duration"),
            other => panic!("Expected InvalidField, got {:?}", other),
        }
        assert!(Swimming::new(100, -1.0, 70.0, 25.0, 4).is_err());
        assert!(Running::new(100, f64::NAN, 70.0).is_err());
    }

    #[test]
    fn test_zero_height_rejected() {
        match SportsWalking::new(100, 1.0, 70.0, 0.0) {
            Err(Error::InvalidField { field, .. }) => assert_eq!(field, "height"),
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    fn invalid_field_name<T: std::fmt::Debug>(result: Result<T>) -> String {
        match result {
            Err(Error::InvalidField { field, .. }) => field,
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_duration_rejected() {
        assert_eq!(invalid_field_name(Running::new(15000, f64::INFINITY, 75.0)), "duration");
        assert_eq!(
            invalid_field_name(SportsWalking::new(9000, f64::INFINITY, 75.0, 180.0)),
            "duration"
        );
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        assert_eq!(invalid_field_name(Running::new(15000, 1.0, f64::NAN)), "weight");
        assert_eq!(
            invalid_field_name(Swimming::new(720, 1.0, f64::NEG_INFINITY, 25.0, 40)),
            "weight"
        );
    }

    #[test]
    fn test_non_finite_height_rejected() {
        assert_eq!(
            invalid_field_name(SportsWalking::new(9000, 1.0, 75.0, f64::INFINITY)),
            "height"
        );
        assert_eq!(
            invalid_field_name(SportsWalking::new(9000, 1.0, 75.0, f64::NAN)),
            "height"
        );
    }

    #[test]
    fn test_non_finite_pool_length_rejected() {
        assert_eq!(
            invalid_field_name(Swimming::new(720, 1.0, 80.0, f64::INFINITY, 40)),
            "length_pool"
        );
        assert_eq!(
            invalid_field_name(Swimming::new(720, 1.0, 80.0, f64::NAN, 40)),
            "length_pool"
        );
    }

    #[test]
    fn test_non_negative_outputs() {
        let workouts: Vec<Workout> = vec![
            Running::new(0, 0.5, 0.0).unwrap().into(),
            SportsWalking::new(500, 0.5, 60.0, 170.0).unwrap().into(),
            Swimming::new(0, 0.5, 60.0, 0.0, 0).unwrap().into(),
        ];
        for workout in workouts {
            assert!(workout.get_distance() >= 0.0);
            assert!(workout.get_mean_speed() >= 0.0);
        }
    }
}
