//! Travel-time lookup table

use ndarray::Array4;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use cab_rl_core::{RLError, Result};

use crate::config::CabConfig;

/// Whole hours to drive `from -> to` when setting off at `(hour, day)`.
///
/// Indexed `[from][to][hour][day]`. The table is immutable once built and
/// cheap to clone; clones share one allocation.
#[derive(Debug, Clone)]
pub struct TravelTimeTable {
    times: Arc<Array4<u32>>,
}

impl TravelTimeTable {
    /// Wrap an existing array, checking it has shape `[m, m, t, d]`
    pub fn from_array(times: Array4<u32>, config: &CabConfig) -> Result<Self> {
        let expected = expected_shape(config);
        if times.shape() != expected {
            return Err(RLError::TravelTable(format!(
                "expected shape {:?}, got {:?}",
                expected,
                times.shape()
            )));
        }
        Ok(Self {
            times: Arc::new(times),
        })
    }

    /// Build a table by evaluating `f(from, to, hour, day)` at every cell
    pub fn from_fn<F>(config: &CabConfig, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize, usize) -> u32,
    {
        let shape = (config.locations, config.locations, config.hours, config.days);
        let times = Array4::from_shape_fn(shape, |(from, to, hour, day)| f(from, to, hour, day));
        Self {
            times: Arc::new(times),
        }
    }

    /// Parse a table from a JSON nested array `[m][m][t][d]`.
    ///
    /// Cells may be written as integers or as integral floats (`2.0`); any
    /// negative, fractional or non-numeric cell rejects the whole table.
    pub fn from_json_str(json: &str, config: &CabConfig) -> Result<Self> {
        let nested: Vec<Vec<Vec<Vec<f64>>>> = serde_json::from_str(json)?;
        let shape = expected_shape(config);
        check_len("top level", nested.len(), shape[0])?;

        let mut cells = Vec::with_capacity(shape.iter().product());
        for (from, row) in nested.iter().enumerate() {
            check_len(&format!("[{from}]"), row.len(), shape[1])?;
            for (to, hours) in row.iter().enumerate() {
                check_len(&format!("[{from}][{to}]"), hours.len(), shape[2])?;
                for (hour, days) in hours.iter().enumerate() {
                    check_len(
                        &format!("[{from}][{to}][{hour}]"),
                        days.len(),
                        shape[3],
                    )?;
                    for (day, &value) in days.iter().enumerate() {
                        let cell = to_hours(value).ok_or_else(|| {
                            RLError::TravelTable(format!(
                                "cell [{from}][{to}][{hour}][{day}] holds {value}, \
                                 expected whole non-negative hours"
                            ))
                        })?;
                        cells.push(cell);
                    }
                }
            }
        }

        let times = Array4::from_shape_vec((shape[0], shape[1], shape[2], shape[3]), cells)
            .map_err(|e| RLError::TravelTable(e.to_string()))?;
        Self::from_array(times, config)
    }

    /// Load a table from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>, config: &CabConfig) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content, config)?;
        info!(path = %path.display(), shape = ?table.shape(), "loaded travel time table");
        Ok(table)
    }

    /// Hours from `from` to `to` leaving at `(hour, day)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is outside the table.
    #[must_use]
    pub fn time(&self, from: usize, to: usize, hour: usize, day: usize) -> u32 {
        self.times[[from, to, hour, day]]
    }

    /// Table shape `[m, m, t, d]`
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.times.shape()
    }

    /// Underlying array
    #[must_use]
    pub fn as_array(&self) -> &Array4<u32> {
        &self.times
    }
}

fn expected_shape(config: &CabConfig) -> [usize; 4] {
    [config.locations, config.locations, config.hours, config.days]
}

fn check_len(at: &str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(RLError::TravelTable(format!(
            "axis at {at} has length {actual}, expected {expected}"
        )))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_hours(value: f64) -> Option<u32> {
    let integral = value.is_finite() && value.fract() == 0.0;
    (integral && value >= 0.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
}
