//! Batch processing of sensor packages.
//!
//! Packages are dispatched and summarized in order. What happens to a
//! package with an unknown workout-type code is decided by the caller's
//! [`UnknownTypePolicy`].

use crate::{read_package, Error, InfoMessage, Result, SensorPackage, UnknownTypePolicy};

/// Summarize every package, in input order
///
/// With [`UnknownTypePolicy::Skip`], unknown codes are logged and dropped.
/// Any other dispatch error (field count, invalid field) always aborts.
pub fn process_packages(
    packages: &[SensorPackage],
    policy: UnknownTypePolicy,
) -> Result<Vec<InfoMessage>> {
    let mut messages = Vec::with_capacity(packages.len());

    for (idx, package) in packages.iter().enumerate() {
        match read_package(&package.workout_type, &package.data) {
            Ok(workout) => messages.push(workout.show_training_info()),
            Err(Error::UnknownWorkoutType(code)) if policy == UnknownTypePolicy::Skip => {
                tracing::warn!(
                    "Skipping package {} with undefined training type {:?}",
                    idx + 1,
                    code
                );
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Processed {} of {} packages",
        messages.len(),
        packages.len()
    );
    Ok(messages)
}
