//! Schema-driven access to fixed-width binary records.
//!
//! A [`Structure`] declares the integer fields of one record; a
//! [`StructuredBuffer`] reads single fields of single records straight out of
//! a byte buffer, without materialising records.

mod record;
mod structure;

pub use record::StructuredBuffer;
pub use structure::{Field, FieldType, Structure, field};
