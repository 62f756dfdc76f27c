//! Observation history export (CSV)
//!
//! Layout: `obs_id`, one column per dimension in dimension order,
//! `target`, `date`. Pending observations are exported with an empty
//! target cell.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::decode::decode_features;
use crate::experiment::{DimensionRecord, ObservationRecord};
use crate::{Error, Result};

/// Download filename for the history export.
pub const EXPORT_FILENAME: &str = "export.csv";

/// Content type of the history export.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// Timestamp format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Assemble the export as an Arrow batch.
///
/// # Errors
///
/// Returns [`Error::MalformedObservation`] if a dimension value fails to
/// decode, or an Arrow error if the batch can't be assembled (e.g. a
/// dimension named like a fixed column).
pub fn history_batch(
    observations: &[ObservationRecord],
    dimensions: &[DimensionRecord],
) -> Result<RecordBatch> {
    if let Some(dup) = dimensions
        .iter()
        .find(|d| matches!(d.name(), "obs_id" | "target" | "date"))
    {
        return Err(Error::InvalidInput(format!(
            "dimension name '{}' collides with an export column",
            dup.name()
        )));
    }

    let x = decode_features(observations, dimensions)?;

    let mut fields = Vec::with_capacity(dimensions.len() + 3);
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(dimensions.len() + 3);

    fields.push(Field::new("obs_id", DataType::UInt64, false));
    columns.push(Arc::new(UInt64Array::from_iter_values(
        observations.iter().map(ObservationRecord::observation_id),
    )));

    for (j, dimension) in dimensions.iter().enumerate() {
        fields.push(Field::new(dimension.name(), DataType::Float64, false));
        columns.push(Arc::new(Float64Array::from(x.column(j))));
    }

    fields.push(Field::new("target", DataType::Float64, true));
    columns.push(Arc::new(
        observations
            .iter()
            .map(ObservationRecord::target)
            .collect::<Float64Array>(),
    ));

    fields.push(Field::new("date", DataType::Utf8, false));
    columns.push(Arc::new(StringArray::from_iter_values(
        observations
            .iter()
            .map(|o| o.date().format(DATE_FORMAT).to_string()),
    )));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// Render the export as CSV text with a header row.
///
/// # Errors
///
/// See [`history_batch`]; also fails if the CSV writer does.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use trialboard::experiment::{DimensionRecord, ObservationRecord};
/// use trialboard::export::history_csv;
///
/// let dims = vec![DimensionRecord::linear("x")];
/// let obs = vec![ObservationRecord::builder(1, 1)
///     .value("x", 0.5)
///     .target(2.5)
///     .date(Utc.with_ymd_and_hms(2017, 8, 10, 17, 24, 5).unwrap())
///     .build()];
///
/// let csv = history_csv(&obs, &dims)?;
/// assert_eq!(csv.lines().next(), Some("obs_id,x,target,date"));
/// assert_eq!(csv.lines().nth(1), Some("1,0.5,2.5,2017-08-10 17:24:05"));
/// # Ok::<(), trialboard::Error>(())
/// ```
pub fn history_csv(
    observations: &[ObservationRecord],
    dimensions: &[DimensionRecord],
) -> Result<String> {
    let batch = history_batch(observations, dimensions)?;

    let mut writer = WriterBuilder::new().with_header(true).build(Vec::new());
    writer.write(&batch)?;
    let bytes = writer.into_inner();

    String::from_utf8(bytes).map_err(|e| Error::Other(format!("CSV output is not UTF-8: {e}")))
}
