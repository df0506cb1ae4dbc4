//! Timetable error types.
//!
//! Out-of-range indices and missing entries are kept distinct: the first is a
//! caller bug, the second a condition callers are expected to handle.

use chrono::NaiveDate;

use crate::bits::PackError;
use crate::buffer::FieldType;

/// Errors raised while decoding or querying timetable data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// An index outside `0..size` was passed to an accessor
    #[error("{kind} index {index} out of range (size {size})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        size: usize,
    },

    /// A field index that the record structure does not declare
    #[error("field {index} is not declared (structure has {count} fields)")]
    UnknownField { index: usize, count: usize },

    /// A typed read that does not match the declared field type
    #[error("field {index} is declared as {declared:?}, read as {requested:?}")]
    FieldTypeMismatch {
        index: usize,
        declared: FieldType,
        requested: FieldType,
    },

    /// A buffer whose length is not a whole number of records
    #[error("buffer of {len} bytes is not a multiple of the {record_width}-byte record")]
    MisalignedBuffer { len: usize, record_width: usize },

    /// Two parallel buffers with different record counts
    #[error("parallel buffers disagree: {expected} records vs {actual}")]
    ParallelBufferMismatch { expected: usize, actual: usize },

    /// No transfer between the two stations
    #[error("no transfer from station {from} to station {to}")]
    TransferNotFound { from: usize, to: usize },

    /// A vehicle code outside the known enumeration
    #[error("unknown vehicle code {0}")]
    UnknownVehicle(u8),

    /// No trips or connections are available for the date
    #[error("no timetable data for {0}")]
    DateNotFound(NaiveDate),

    #[error(transparent)]
    Pack(#[from] PackError),
}

/// Result alias for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Check that `index` lies in `0..size`.
pub(crate) fn check_index(kind: &'static str, index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(TimetableError::IndexOutOfRange { kind, index, size })
    }
}
