//! Observation decoding
//!
//! Turns stored observations into a numeric feature matrix `X` and a
//! target vector `y`:
//!
//! - row `i` of `X` is `observations[i]`
//! - column `j` of `X` is `dimensions[j]`
//! - `y[i]` is the target of `observations[i]`
//!
//! Each observation is validated against the full dimension list before
//! anything is returned. A missing key or a non-numeric value fails the
//! whole call with [`Error::MalformedObservation`].

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::experiment::{DimensionRecord, ObservationRecord};
use crate::{Error, Result};

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Empty matrix with a fixed column count.
    #[must_use]
    pub fn with_columns(cols: usize) -> Self {
        Self {
            rows: 0,
            cols,
            data: Vec::new(),
        }
    }

    /// `(rows, cols)`
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow a row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Copy out a column.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column {col} out of bounds ({} cols)", self.cols);
        self.data
            .iter()
            .skip(col)
            .step_by(self.cols)
            .copied()
            .collect()
    }

    fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.cols);
        self.data.extend_from_slice(row);
        self.rows += 1;
    }
}

/// Output of [`decode`]: the feature matrix and target vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedObservations {
    /// Feature matrix, one row per observation, one column per dimension.
    pub x: Matrix,
    /// Target values, one per observation.
    pub y: Vec<f64>,
}

impl DecodedObservations {
    /// Number of decoded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether nothing was decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Arrow view of the decoded data.
    ///
    /// One non-nullable `Float64` column per dimension (named after the
    /// dimension, in dimension order) followed by a `target` column.
    ///
    /// # Errors
    ///
    /// Returns error if `dimensions` doesn't match the matrix width, or if
    /// Arrow rejects the batch.
    pub fn to_record_batch(&self, dimensions: &[DimensionRecord]) -> Result<RecordBatch> {
        if dimensions.len() != self.x.cols() {
            return Err(Error::InvalidInput(format!(
                "{} dimensions supplied for a matrix with {} columns",
                dimensions.len(),
                self.x.cols()
            )));
        }

        let mut fields: Vec<Field> = dimensions
            .iter()
            .map(|d| Field::new(d.name(), DataType::Float64, false))
            .collect();
        fields.push(Field::new("target", DataType::Float64, false));

        let mut columns: Vec<ArrayRef> = (0..self.x.cols())
            .map(|j| Arc::new(Float64Array::from(self.x.column(j))) as ArrayRef)
            .collect();
        columns.push(Arc::new(Float64Array::from(self.y.clone())));

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
    }
}

/// Decode one encoded cell.
///
/// Accepts a JSON number or a string holding a number; the result must be
/// finite.
///
/// # Errors
///
/// Returns [`Error::MalformedObservation`] if the dimension has no value
/// or the value isn't a finite number.
pub fn decode_value(observation: &ObservationRecord, dimension: &DimensionRecord) -> Result<f64> {
    let id = observation.observation_id();
    let raw = observation
        .value(dimension.name())
        .ok_or_else(|| Error::malformed(id, format!("missing value for dimension '{}'", dimension.name())))?;

    let value = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        Error::malformed(
            id,
            format!("value {raw} for dimension '{}' is not numeric", dimension.name()),
        )
    })?;

    if !value.is_finite() {
        return Err(Error::malformed(
            id,
            format!("value {raw} for dimension '{}' is not finite", dimension.name()),
        ));
    }
    Ok(value)
}

/// Decode the feature matrix only.
///
/// Targets are not inspected, so pending observations decode as long as
/// their dimension values are present.
///
/// # Errors
///
/// Returns [`Error::MalformedObservation`] for the first bad cell.
pub fn decode_features(
    observations: &[ObservationRecord],
    dimensions: &[DimensionRecord],
) -> Result<Matrix> {
    let mut x = Matrix::with_columns(dimensions.len());
    x.data.reserve(observations.len() * dimensions.len());

    let mut row = Vec::with_capacity(dimensions.len());
    for observation in observations {
        row.clear();
        for dimension in dimensions {
            row.push(decode_value(observation, dimension)?);
        }
        x.push_row(&row);
    }
    Ok(x)
}

/// Decode observations into `(X, y)`.
///
/// # Errors
///
/// Returns [`Error::MalformedObservation`] if any observation lacks a
/// dimension value, holds a non-numeric value, or has no finite target.
///
/// # Example
///
/// ```rust
/// use trialboard::decode::decode;
/// use trialboard::experiment::{DimensionRecord, ObservationRecord};
///
/// let dims = vec![DimensionRecord::linear("x"), DimensionRecord::logarithmic("lr")];
/// let obs = vec![
///     ObservationRecord::builder(1, 1).value("x", 1.0).value("lr", "0.01").target(0.5).build(),
///     ObservationRecord::builder(2, 1).value("x", 2.0).value("lr", 0.1).target(0.7).build(),
/// ];
///
/// let decoded = decode(&obs, &dims)?;
/// assert_eq!(decoded.x.shape(), (2, 2));
/// assert_eq!(decoded.x.column(1), vec![0.01, 0.1]);
/// assert_eq!(decoded.y, vec![0.5, 0.7]);
/// # Ok::<(), trialboard::Error>(())
/// ```
pub fn decode(
    observations: &[ObservationRecord],
    dimensions: &[DimensionRecord],
) -> Result<DecodedObservations> {
    let y = observations
        .iter()
        .map(|o| match o.target() {
            Some(t) if t.is_finite() => Ok(t),
            Some(t) => Err(Error::malformed(
                o.observation_id(),
                format!("target {t} is not finite"),
            )),
            None => Err(Error::malformed(o.observation_id(), "missing target")),
        })
        .collect::<Result<Vec<f64>>>()?;

    let x = decode_features(observations, dimensions)?;

    tracing::debug!(
        rows = x.rows(),
        cols = x.cols(),
        "decoded observations"
    );

    Ok(DecodedObservations { x, y })
}
