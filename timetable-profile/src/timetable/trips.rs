//! Buffered trips.

use bytes::Bytes;

use super::strings::{StringTable, resolve};
use super::traits::{Indexed, Trips};
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::Result;

const ROUTE_ID: usize = 0;
const DESTINATION_ID: usize = 1;

/// Trips of one day, decoded from records of (route id, destination).
#[derive(Debug, Clone)]
pub struct BufferedTrips {
    strings: StringTable,
    buffer: StructuredBuffer,
}

impl BufferedTrips {
    pub fn new(strings: StringTable, bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[
            field(ROUTE_ID, FieldType::U16),
            field(DESTINATION_ID, FieldType::U16),
        ])?;
        Ok(Self {
            strings,
            buffer: StructuredBuffer::new(structure, bytes)?,
        })
    }
}

impl Indexed for BufferedTrips {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl Trips for BufferedTrips {
    fn route_id(&self, id: usize) -> Result<usize> {
        Ok(usize::from(self.buffer.get_u16(ROUTE_ID, id)?))
    }

    fn destination(&self, id: usize) -> Result<&str> {
        let destination_id = self.buffer.get_u16(DESTINATION_ID, id)?;
        resolve(&self.strings, usize::from(destination_id))
    }
}
