//! Errors raised when a value cannot be packed.

/// A value could not be packed into its reserved bits.
///
/// Packing never truncates silently: a word that does not round-trip would
/// corrupt every comparison made against it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// The end of a range lies before its start.
    #[error("invalid range: end {end} is before start {start}")]
    ReversedRange { start: usize, end: usize },

    /// The range is longer than the length field can hold.
    #[error("range {start}..{end} is longer than {max}")]
    RangeTooLong { start: usize, end: usize, max: usize },

    /// The range start does not fit in 24 bits.
    #[error("range start {0} does not fit in 24 bits")]
    RangeStartTooLarge(usize),

    /// A packed field is outside its permitted bounds.
    #[error("{field} value {value} outside {min}..={max}")]
    FieldOverflow {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PackError::ReversedRange { start: 5, end: 2 };
        assert_eq!(err.to_string(), "invalid range: end 2 is before start 5");

        let err = PackError::RangeTooLong {
            start: 0,
            end: 300,
            max: 255,
        };
        assert_eq!(err.to_string(), "range 0..300 is longer than 255");

        let err = PackError::FieldOverflow {
            field: "changes",
            value: 128,
            min: 0,
            max: 127,
        };
        assert_eq!(err.to_string(), "changes value 128 outside 0..=127");
    }
}
