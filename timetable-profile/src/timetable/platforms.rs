//! Buffered platforms.

use bytes::Bytes;

use super::strings::{StringTable, resolve};
use super::traits::{Indexed, Platforms};
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::Result;

const NAME_ID: usize = 0;
const STATION_ID: usize = 1;

/// Platforms decoded from records of (name, parent station id).
#[derive(Debug, Clone)]
pub struct BufferedPlatforms {
    strings: StringTable,
    buffer: StructuredBuffer,
}

impl BufferedPlatforms {
    pub fn new(strings: StringTable, bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[
            field(NAME_ID, FieldType::U16),
            field(STATION_ID, FieldType::U16),
        ])?;
        Ok(Self {
            strings,
            buffer: StructuredBuffer::new(structure, bytes)?,
        })
    }
}

impl Indexed for BufferedPlatforms {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl Platforms for BufferedPlatforms {
    fn name(&self, id: usize) -> Result<&str> {
        let name_id = self.buffer.get_u16(NAME_ID, id)?;
        resolve(&self.strings, usize::from(name_id))
    }

    fn station_id(&self, id: usize) -> Result<usize> {
        Ok(usize::from(self.buffer.get_u16(STATION_ID, id)?))
    }
}
