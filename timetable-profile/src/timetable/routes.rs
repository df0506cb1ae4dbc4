//! Buffered routes.

use bytes::Bytes;

use super::strings::{StringTable, resolve};
use super::traits::{Indexed, Routes};
use super::vehicle::Vehicle;
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::Result;

const NAME_ID: usize = 0;
const KIND: usize = 1;

/// Routes decoded from records of (name, vehicle code).
#[derive(Debug, Clone)]
pub struct BufferedRoutes {
    strings: StringTable,
    buffer: StructuredBuffer,
}

impl BufferedRoutes {
    pub fn new(strings: StringTable, bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[field(NAME_ID, FieldType::U16), field(KIND, FieldType::U8)])?;
        Ok(Self {
            strings,
            buffer: StructuredBuffer::new(structure, bytes)?,
        })
    }
}

impl Indexed for BufferedRoutes {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl Routes for BufferedRoutes {
    fn vehicle(&self, id: usize) -> Result<Vehicle> {
        Vehicle::try_from(self.buffer.get_u8(KIND, id)?)
    }

    fn name(&self, id: usize) -> Result<&str> {
        let name_id = self.buffer.get_u16(NAME_ID, id)?;
        resolve(&self.strings, usize::from(name_id))
    }
}
