//! Record structure declarations.

use crate::error::{Result, TimetableError};

/// Width and signedness of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    U8,
    U16,
    S32,
}

impl FieldType {
    /// Width of the field in bytes.
    pub const fn width(self) -> usize {
        match self {
            FieldType::U8 => 1,
            FieldType::U16 => 2,
            FieldType::S32 => 4,
        }
    }
}

/// A field declaration: its position in the record and its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub index: usize,
    pub ty: FieldType,
}

/// Declare a field.
pub const fn field(index: usize, ty: FieldType) -> Field {
    Field { index, ty }
}

/// The layout of one fixed-width record.
///
/// Fields are packed back to back in declaration order with no padding, so
/// the record width is the sum of the field widths.
///
/// # Examples
///
/// ```
/// use timetable_profile::buffer::{FieldType, Structure, field};
///
/// let structure = Structure::new(&[
///     field(0, FieldType::U16),
///     field(1, FieldType::U8),
///     field(2, FieldType::S32),
/// ])
/// .unwrap();
///
/// assert_eq!(structure.total_size(), 7);
/// assert_eq!(structure.offset(2, 1).unwrap(), 7 + 3);
///
/// // Indices must be consecutive, starting at 0
/// assert!(Structure::new(&[field(1, FieldType::U8)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    types: Vec<FieldType>,
    offsets: Vec<usize>,
    total_size: usize,
}

impl Structure {
    /// Build a structure from fields declared in order `0, 1, 2, ...`.
    pub fn new(fields: &[Field]) -> Result<Self> {
        let mut types = Vec::with_capacity(fields.len());
        let mut offsets = Vec::with_capacity(fields.len());
        let mut total_size = 0;

        for (position, f) in fields.iter().enumerate() {
            if f.index != position {
                return Err(TimetableError::UnknownField {
                    index: f.index,
                    count: position,
                });
            }
            types.push(f.ty);
            offsets.push(total_size);
            total_size += f.ty.width();
        }

        Ok(Self {
            types,
            offsets,
            total_size,
        })
    }

    /// Width of one record in bytes.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.types.len()
    }

    /// Declared type of a field.
    pub fn field_type(&self, field_index: usize) -> Result<FieldType> {
        self.types
            .get(field_index)
            .copied()
            .ok_or(TimetableError::UnknownField {
                index: field_index,
                count: self.types.len(),
            })
    }

    /// Byte offset of a field of a record, relative to the buffer start.
    ///
    /// The record index is not bounded here; the buffer holding the records
    /// knows their count.
    pub fn offset(&self, field_index: usize, element_index: usize) -> Result<usize> {
        let within = self
            .offsets
            .get(field_index)
            .ok_or(TimetableError::UnknownField {
                index: field_index,
                count: self.offsets.len(),
            })?;
        Ok(element_index * self.total_size + within)
    }
}
