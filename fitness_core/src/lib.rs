#![forbid(unsafe_code)]

//! Core domain model and formulas for the fitness tracker.
//!
//! This crate provides:
//! - Workout variants and their distance/speed/calorie formulas
//! - Sensor package dispatch by workout-type code
//! - Summary message formatting
//! - Batch processing, configuration and logging setup

pub mod types;
pub mod error;
pub mod training;
pub mod message;
pub mod package;
pub mod engine;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use message::InfoMessage;
pub use package::{demo_packages, load_packages, read_package};
pub use engine::process_packages;
pub use config::Config;
