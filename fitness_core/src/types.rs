//! Core domain types for the fitness tracker.
//!
//! This module defines the types shared across the crate:
//! - Workout-type codes and their field layouts
//! - Raw sensor packages as they arrive from a device
//! - Processing options (unknown-type policy, output format)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Types
// ============================================================================

/// Type of workout, keyed by the short code a sensor package carries
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutType {
    /// Look up a workout type by its package code
    ///
    /// Codes are matched exactly; anything outside the table is rejected.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            "SWM" => Ok(WorkoutType::Swimming),
            other => Err(Error::UnknownWorkoutType(other.to_string())),
        }
    }

    /// Package code for this workout type
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Label used in summaries
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
            WorkoutType::Swimming => "Swimming",
        }
    }

    /// Names of the positional fields a package of this type carries
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutType::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Number of positional fields a package of this type carries
    pub fn field_count(&self) -> usize {
        self.field_names().len()
    }
}

impl FromStr for WorkoutType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Sensor Packages
// ============================================================================

/// A raw sensor record: a workout-type code plus its positional fields
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

// ============================================================================
// Processing Options
// ============================================================================

/// What batch processing does with a package whose code is not in the table
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTypePolicy {
    /// Stop at the first unknown code and report it
    #[default]
    Abort,
    /// Log the package and carry on with the rest
    Skip,
}

/// How summaries are written out
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The fixed human-readable template, one line per workout
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}
