//! Typed reads out of a buffer of fixed-width records.

use bytes::{Buf, Bytes};

use super::structure::{FieldType, Structure};
use crate::error::{Result, TimetableError, check_index};

/// A read-only byte buffer interpreted as a sequence of records.
///
/// Numeric fields are big-endian. Reads are pure functions of the buffer
/// contents and the indices, so a buffer can be shared freely between
/// threads; cloning only bumps the reference count of the bytes.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use timetable_profile::buffer::{FieldType, Structure, StructuredBuffer, field};
///
/// let structure = Structure::new(&[field(0, FieldType::U8), field(1, FieldType::U16)]).unwrap();
/// let buffer = StructuredBuffer::new(structure, Bytes::from_static(&[0xFE, 0x01, 0x02])).unwrap();
///
/// assert_eq!(buffer.size(), 1);
/// assert_eq!(buffer.get_u8(0, 0).unwrap(), 0xFE);
/// assert_eq!(buffer.get_u16(1, 0).unwrap(), 0x0102);
/// assert!(buffer.get_u8(0, 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StructuredBuffer {
    structure: Structure,
    bytes: Bytes,
    size: usize,
}

impl StructuredBuffer {
    /// Wrap `bytes` as records laid out by `structure`.
    ///
    /// The buffer must hold a whole number of records. An empty buffer is
    /// always accepted and holds no records.
    pub fn new(structure: Structure, bytes: Bytes) -> Result<Self> {
        let record_width = structure.total_size();
        let size = match record_width {
            0 if bytes.is_empty() => 0,
            0 => {
                return Err(TimetableError::MisalignedBuffer {
                    len: bytes.len(),
                    record_width,
                });
            }
            w if bytes.len() % w != 0 => {
                return Err(TimetableError::MisalignedBuffer {
                    len: bytes.len(),
                    record_width,
                });
            }
            w => bytes.len() / w,
        };

        Ok(Self {
            structure,
            bytes,
            size,
        })
    }

    /// Number of records in the buffer.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Byte offset of a field of a record, checked against the record count.
    pub fn offset(&self, field_index: usize, element_index: usize) -> Result<usize> {
        check_index("record", element_index, self.size)?;
        self.structure.offset(field_index, element_index)
    }

    /// Read an unsigned 8-bit field.
    pub fn get_u8(&self, field_index: usize, element_index: usize) -> Result<u8> {
        Ok(self.field_bytes(field_index, element_index, FieldType::U8)?.get_u8())
    }

    /// Read an unsigned 16-bit field.
    pub fn get_u16(&self, field_index: usize, element_index: usize) -> Result<u16> {
        Ok(self
            .field_bytes(field_index, element_index, FieldType::U16)?
            .get_u16())
    }

    /// Read a signed 32-bit field.
    pub fn get_s32(&self, field_index: usize, element_index: usize) -> Result<i32> {
        Ok(self
            .field_bytes(field_index, element_index, FieldType::S32)?
            .get_i32())
    }

    fn field_bytes(
        &self,
        field_index: usize,
        element_index: usize,
        requested: FieldType,
    ) -> Result<&[u8]> {
        let declared = self.structure.field_type(field_index)?;
        if declared != requested {
            return Err(TimetableError::FieldTypeMismatch {
                index: field_index,
                declared,
                requested,
            });
        }
        let start = self.offset(field_index, element_index)?;
        Ok(&self.bytes[start..start + requested.width()])
    }
}
