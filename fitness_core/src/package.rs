//! Sensor package dispatch and package sources.
//!
//! A sensor package is a workout-type code plus an ordered list of numbers.
//! The code selects a workout variant; the numbers are assigned to that
//! variant's fields positionally.

use crate::{
    Error, Result, Running, SensorPackage, SportsWalking, Swimming, Workout, WorkoutType,
};
use std::io::Read;
use std::path::Path;

/// Build the workout described by a sensor package
///
/// Field order: action, duration, weight, then `height` for `WLK` or
/// `length_pool, count_pool` for `SWM`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutType = workout_type.parse()?;

    if data.len() != kind.field_count() {
        return Err(Error::FieldCount {
            code: kind.code().to_string(),
            expected: kind.field_count(),
            actual: data.len(),
        });
    }

    let action = count_field("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match kind {
        WorkoutType::Running => Running::new(action, duration, weight)?.into(),
        WorkoutType::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        WorkoutType::Swimming => {
            let count_pool = count_field("count_pool", data[4])?;
            Swimming::new(action, duration, weight, data[3], count_pool)?.into()
        }
    };

    tracing::debug!("Read {} package with {} fields", kind.code(), data.len());
    Ok(workout)
}

/// Convert a numeric field that must hold a whole, non-negative count
fn count_field(name: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(Error::invalid_field(
            name,
            format!("expected a whole non-negative count, got {}", value),
        ));
    }
    Ok(value as u32)
}

/// The fixed demonstration packages
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load sensor packages from a CSV file
///
/// Each record is `CODE,field,field,...` with no header row. Records may
/// differ in length; lines starting with `#` are comments.
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let file = std::fs::File::open(path)?;
    let packages = parse_packages(file)?;
    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Parse sensor packages from CSV data (see [`load_packages`])
///
/// A record is skipped only when every field is empty; an empty code with
/// data is kept so dispatch can reject it.
pub fn parse_packages<R: Read>(mut reader: R) -> Result<Vec<SensorPackage>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_slice());

    let mut packages = Vec::new();
    let mut lines = LineCounter::new(&input);

    for record_result in csv_reader.records() {
        let record = record_result?;
        let line = record
            .position()
            .map(|p| lines.line_at(p.byte() as usize))
            .unwrap_or(0);

        if record.iter().all(str::is_empty) {
            continue;
        }

        let mut fields = record.iter();
        let code = fields.next().unwrap_or_default();
        if code.starts_with('#') {
            continue;
        }

        let data = fields
            .enumerate()
            .map(|(idx, raw)| {
                raw.parse::<f64>().map_err(|e| {
                    Error::invalid_field(
                        &format!("line {} field {}", line, idx + 1),
                        format!("{:?} is not a number ({})", raw, e),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(SensorPackage::new(code, data));
    }

    Ok(packages)
}

/// Maps record start offsets to 1-based physical line numbers
///
/// The csv reader reports a record's position before any blank lines it
/// skipped, so line terminators at the offset are stepped over first.
/// Offsets must be queried in non-decreasing order.
struct LineCounter<'a> {
    input: &'a [u8],
    offset: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> u64 {
        let mut offset = offset.min(self.input.len());
        while matches!(self.input.get(offset), Some(b'\r') | Some(b'\n')) {
            offset += 1;
        }
        if offset > self.offset {
            let newlines = self.input[self.offset..offset]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.line += newlines as u64;
            self.offset = offset;
        }
        self.line
    }
}
